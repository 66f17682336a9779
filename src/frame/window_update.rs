//! WINDOW_UPDATE frame (RFC 7540 §6.9).

use crate::error::Error;
use crate::header::FrameHeader;

const PAYLOAD_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowUpdateFrame {
    pub stream_id: u32,
    pub increment: u32,
}

impl WindowUpdateFrame {
    pub fn decode(header: &FrameHeader, payload: &[u8]) -> Result<Self, Error> {
        if payload.len() != PAYLOAD_LEN {
            return Err(Error::FrameSizeError(format!(
                "WINDOW_UPDATE payload length {} != {}",
                payload.len(),
                PAYLOAD_LEN
            )));
        }
        let raw = u32::from_be_bytes([payload[0], payload[1], payload[2], payload[3]]);
        let increment = raw & 0x7FFF_FFFF;
        if increment == 0 {
            return Err(Error::ProtocolError {
                reason: "WINDOW_UPDATE increment of 0".into(),
                header: Some(*header),
            });
        }
        Ok(Self {
            stream_id: header.stream_id,
            increment,
        })
    }

    pub fn encode_payload(&self) -> Vec<u8> {
        (self.increment & 0x7FFF_FFFF).to_be_bytes().to_vec()
    }
}
