//! HEADERS frame (RFC 7540 §6.2).

use crate::config::CodecConfig;
use crate::error::Error;
use crate::flags::HeadersFlags;
use crate::header::FrameHeader;
use crate::hpack::{H2Header, HpackDecoder, HpackEncoder};

use super::priority::{PriorityParams, PRIORITY_BLOCK_LEN};

/// A HEADERS frame. Carries a header-block fragment (possibly only part of
/// the logical header block, if END_HEADERS is not set and CONTINUATION
/// frames follow).
#[derive(Debug, Clone, PartialEq)]
pub struct HeadersFrame {
    pub stream_id: u32,
    pub flags: HeadersFlags,
    pub pad_length: Option<u8>,
    pub priority: Option<PriorityParams>,
    /// Decoded header fields for this fragment only. If END_HEADERS is
    /// unset, the caller must reassemble across the following CONTINUATION
    /// frames itself (the codec does not buffer across frames).
    pub headers: Vec<H2Header>,
    /// The raw HPACK-encoded fragment, kept so a caller can re-serialize
    /// without re-encoding.
    pub header_block: Vec<u8>,
}

impl HeadersFrame {
    pub fn decode(
        header: &FrameHeader,
        payload: &[u8],
        hpack: &mut HpackDecoder,
        config: &CodecConfig,
    ) -> Result<Self, Error> {
        if header.stream_id == 0 {
            return Err(Error::ProtocolError {
                reason: "HEADERS on stream 0".into(),
                header: Some(*header),
            });
        }

        let flags = HeadersFlags::from_bits_truncate(header.flags);
        let mut offset = 0usize;
        let mut end = payload.len();

        let pad_length = if flags.contains(HeadersFlags::PADDED) {
            if payload.is_empty() {
                return Err(Error::MalformedPadding {
                    pad_length: 0,
                    remaining: 0,
                });
            }
            let pad_length = payload[0] as usize;
            offset = 1;
            let remaining = payload.len() - offset;
            if pad_length > remaining {
                return Err(Error::MalformedPadding {
                    pad_length,
                    remaining,
                });
            }
            end = payload.len() - pad_length;
            Some(pad_length as u8)
        } else {
            None
        };

        let priority = if flags.contains(HeadersFlags::PRIORITY) {
            if end.saturating_sub(offset) < PRIORITY_BLOCK_LEN {
                return Err(Error::FrameSizeError(
                    "HEADERS with PRIORITY flag has insufficient payload".into(),
                ));
            }
            let params = PriorityParams::parse(&payload[offset..offset + PRIORITY_BLOCK_LEN])
                .ok_or(Error::MalformedHeader)?;
            offset += PRIORITY_BLOCK_LEN;
            Some(params)
        } else {
            None
        };

        let fragment = &payload[offset..end];
        if fragment.len() > config.max_header_block_size {
            return Err(Error::HeaderBlockTooLarge {
                size: fragment.len(),
                max: config.max_header_block_size,
            });
        }
        let headers = hpack.decode(fragment)?;

        Ok(Self {
            stream_id: header.stream_id,
            flags,
            pad_length,
            priority,
            headers,
            header_block: fragment.to_vec(),
        })
    }

    pub fn encode_payload(&self, hpack: &mut HpackEncoder) -> Vec<u8> {
        let mut out = Vec::new();
        if let Some(pad_length) = self.pad_length {
            out.push(pad_length);
        }
        if let Some(priority) = &self.priority {
            priority.serialize(&mut out);
        }
        let fragment = if self.headers.is_empty() && !self.header_block.is_empty() {
            self.header_block.clone()
        } else {
            hpack.encode(&self.headers)
        };
        out.extend_from_slice(&fragment);
        if let Some(pad_length) = self.pad_length {
            out.extend(std::iter::repeat(0u8).take(pad_length as usize));
        }
        out
    }

    pub fn wire_flags(&self) -> HeadersFlags {
        let mut flags = self.flags;
        flags.set(HeadersFlags::PADDED, self.pad_length.is_some());
        flags.set(HeadersFlags::PRIORITY, self.priority.is_some());
        flags
    }
}
