//! PUSH_PROMISE frame (RFC 7540 §6.6).

use crate::config::CodecConfig;
use crate::error::Error;
use crate::flags::PushPromiseFlags;
use crate::header::FrameHeader;
use crate::hpack::{H2Header, HpackDecoder, HpackEncoder};

const PROMISED_ID_LEN: usize = 4;

/// A PUSH_PROMISE frame: promises a new, server-initiated stream and
/// carries the header block fragment for the promised request.
#[derive(Debug, Clone, PartialEq)]
pub struct PushPromiseFrame {
    pub stream_id: u32,
    pub flags: PushPromiseFlags,
    pub pad_length: Option<u8>,
    pub promised_stream_id: u32,
    pub headers: Vec<H2Header>,
    pub header_block: Vec<u8>,
}

impl PushPromiseFrame {
    pub fn decode(
        header: &FrameHeader,
        payload: &[u8],
        hpack: &mut HpackDecoder,
        config: &CodecConfig,
    ) -> Result<Self, Error> {
        if header.stream_id == 0 {
            return Err(Error::ProtocolError {
                reason: "PUSH_PROMISE on stream 0".into(),
                header: Some(*header),
            });
        }

        let flags = PushPromiseFlags::from_bits_truncate(header.flags);
        let mut offset = 0usize;
        let mut end = payload.len();

        let pad_length = if flags.contains(PushPromiseFlags::PADDED) {
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

        if end.saturating_sub(offset) < PROMISED_ID_LEN {
            return Err(Error::FrameSizeError(
                "PUSH_PROMISE payload shorter than promised-stream-id".into(),
            ));
        }
        let raw = u32::from_be_bytes([
            payload[offset],
            payload[offset + 1],
            payload[offset + 2],
            payload[offset + 3],
        ]);
        let promised_stream_id = raw & 0x7FFF_FFFF;
        offset += PROMISED_ID_LEN;

        if promised_stream_id == 0 || promised_stream_id % 2 != 0 {
            return Err(Error::ProtocolError {
                reason: format!(
                    "PUSH_PROMISE promised_stream_id {} must be even and non-zero",
                    promised_stream_id
                ),
                header: Some(*header),
            });
        }

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
            promised_stream_id,
            headers,
            header_block: fragment.to_vec(),
        })
    }

    pub fn encode_payload(&self, hpack: &mut HpackEncoder) -> Vec<u8> {
        let mut out = Vec::new();
        if let Some(pad_length) = self.pad_length {
            out.push(pad_length);
        }
        out.extend_from_slice(&(self.promised_stream_id & 0x7FFF_FFFF).to_be_bytes());
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

    pub fn wire_flags(&self) -> PushPromiseFlags {
        let mut flags = self.flags;
        flags.set(PushPromiseFlags::PADDED, self.pad_length.is_some());
        flags
    }
}
