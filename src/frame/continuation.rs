//! CONTINUATION frame (RFC 7540 §6.10).
//!
//! Carries header-block fragment only, no padding or priority. The codec
//! decodes each CONTINUATION's fragment against the running HPACK decoder
//! state as it arrives; it does not itself remember that a HEADERS frame is
//! "in progress" on a stream. Reassembling the logical header block across
//! HEADERS + CONTINUATION* is the stream-layer collaborator's job. The codec
//! only validates this frame's own shape.

use crate::config::CodecConfig;
use crate::error::Error;
use crate::flags::ContinuationFlags;
use crate::header::FrameHeader;
use crate::hpack::{H2Header, HpackDecoder, HpackEncoder};

#[derive(Debug, Clone, PartialEq)]
pub struct ContinuationFrame {
    pub stream_id: u32,
    pub flags: ContinuationFlags,
    pub headers: Vec<H2Header>,
    pub header_block: Vec<u8>,
}

impl ContinuationFrame {
    pub fn decode(
        header: &FrameHeader,
        payload: &[u8],
        hpack: &mut HpackDecoder,
        config: &CodecConfig,
    ) -> Result<Self, Error> {
        if header.stream_id == 0 {
            return Err(Error::ProtocolError {
                reason: "CONTINUATION on stream 0".into(),
                header: Some(*header),
            });
        }
        if payload.len() > config.max_header_block_size {
            return Err(Error::HeaderBlockTooLarge {
                size: payload.len(),
                max: config.max_header_block_size,
            });
        }
        let flags = ContinuationFlags::from_bits_truncate(header.flags);
        let headers = hpack.decode(payload)?;
        Ok(Self {
            stream_id: header.stream_id,
            flags,
            headers,
            header_block: payload.to_vec(),
        })
    }

    pub fn encode_payload(&self, hpack: &mut HpackEncoder) -> Vec<u8> {
        if self.headers.is_empty() && !self.header_block.is_empty() {
            self.header_block.clone()
        } else {
            hpack.encode(&self.headers)
        }
    }
}
