//! GOAWAY frame (RFC 7540 §6.8).

use crate::error::Error;
use crate::header::FrameHeader;

const FIXED_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoAwayFrame {
    pub last_stream_id: u32,
    pub error_code: u32,
    pub additional_debug_data: Vec<u8>,
}

impl GoAwayFrame {
    pub fn decode(header: &FrameHeader, payload: &[u8]) -> Result<Self, Error> {
        if header.stream_id != 0 {
            return Err(Error::ProtocolError {
                reason: "GOAWAY on non-zero stream".into(),
                header: Some(*header),
            });
        }
        if payload.len() < FIXED_LEN {
            return Err(Error::FrameSizeError(format!(
                "GOAWAY payload length {} < {}",
                payload.len(),
                FIXED_LEN
            )));
        }
        let raw = u32::from_be_bytes([payload[0], payload[1], payload[2], payload[3]]);
        let last_stream_id = raw & 0x7FFF_FFFF;
        let error_code = u32::from_be_bytes([payload[4], payload[5], payload[6], payload[7]]);
        Ok(Self {
            last_stream_id,
            error_code,
            additional_debug_data: payload[FIXED_LEN..].to_vec(),
        })
    }

    pub fn encode_payload(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(FIXED_LEN + self.additional_debug_data.len());
        out.extend_from_slice(&(self.last_stream_id & 0x7FFF_FFFF).to_be_bytes());
        out.extend_from_slice(&self.error_code.to_be_bytes());
        out.extend_from_slice(&self.additional_debug_data);
        out
    }
}
