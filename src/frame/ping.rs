//! PING frame (RFC 7540 §6.7).

use crate::error::Error;
use crate::flags::PingFlags;
use crate::header::FrameHeader;

const PAYLOAD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PingFrame {
    pub flags: PingFlags,
    pub opaque_data: [u8; 8],
}

impl PingFrame {
    pub fn decode(header: &FrameHeader, payload: &[u8]) -> Result<Self, Error> {
        if header.stream_id != 0 {
            return Err(Error::ProtocolError {
                reason: "PING on non-zero stream".into(),
                header: Some(*header),
            });
        }
        if payload.len() != PAYLOAD_LEN {
            return Err(Error::FrameSizeError(format!(
                "PING payload length {} != {}",
                payload.len(),
                PAYLOAD_LEN
            )));
        }
        let mut opaque_data = [0u8; 8];
        opaque_data.copy_from_slice(payload);
        Ok(Self {
            flags: PingFlags::from_bits_truncate(header.flags),
            opaque_data,
        })
    }

    pub fn encode_payload(&self) -> Vec<u8> {
        self.opaque_data.to_vec()
    }

    pub fn ack(&self) -> bool {
        self.flags.contains(PingFlags::ACK)
    }
}
