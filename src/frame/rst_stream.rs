//! RST_STREAM frame (RFC 7540 §6.4).

use crate::error::Error;
use crate::header::FrameHeader;

const PAYLOAD_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RstStreamFrame {
    pub stream_id: u32,
    pub error_code: u32,
}

impl RstStreamFrame {
    pub fn decode(header: &FrameHeader, payload: &[u8]) -> Result<Self, Error> {
        if header.stream_id == 0 {
            return Err(Error::ProtocolError {
                reason: "RST_STREAM on stream 0".into(),
                header: Some(*header),
            });
        }
        if payload.len() != PAYLOAD_LEN {
            return Err(Error::FrameSizeError(format!(
                "RST_STREAM payload length {} != {}",
                payload.len(),
                PAYLOAD_LEN
            )));
        }
        let error_code = u32::from_be_bytes([payload[0], payload[1], payload[2], payload[3]]);
        Ok(Self {
            stream_id: header.stream_id,
            error_code,
        })
    }

    pub fn encode_payload(&self) -> Vec<u8> {
        self.error_code.to_be_bytes().to_vec()
    }
}
