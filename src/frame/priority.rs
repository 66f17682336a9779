//! PRIORITY frame (RFC 7540 §6.3) and the priority block shared with HEADERS.

use crate::error::Error;
use crate::header::FrameHeader;

/// The `exclusive:1 | stream_dependency:31, weight:8` block. Shared between
/// a standalone PRIORITY frame and a HEADERS frame sent with the PRIORITY
/// flag.
///
/// `weight` is kept as the raw 0-255 wire value; the RFC's semantic weight
/// is `raw + 1`. Converting is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityParams {
    pub exclusive: bool,
    pub stream_dependency: u32,
    pub weight: u8,
}

pub const PRIORITY_BLOCK_LEN: usize = 5;

impl PriorityParams {
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < PRIORITY_BLOCK_LEN {
            return None;
        }
        let raw = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        Some(Self {
            exclusive: raw & 0x8000_0000 != 0,
            stream_dependency: raw & 0x7FFF_FFFF,
            weight: bytes[4],
        })
    }

    pub fn serialize(&self, out: &mut Vec<u8>) {
        let mut word = self.stream_dependency & 0x7FFF_FFFF;
        if self.exclusive {
            word |= 0x8000_0000;
        }
        out.extend_from_slice(&word.to_be_bytes());
        out.push(self.weight);
    }
}

/// A standalone PRIORITY frame: exactly 5 octets, no flags defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityFrame {
    pub stream_id: u32,
    pub params: PriorityParams,
}

impl PriorityFrame {
    pub fn decode(header: &FrameHeader, payload: &[u8]) -> Result<Self, Error> {
        if header.stream_id == 0 {
            return Err(Error::ProtocolError {
                reason: "PRIORITY on stream 0".into(),
                header: Some(*header),
            });
        }
        if payload.len() != PRIORITY_BLOCK_LEN {
            return Err(Error::FrameSizeError(format!(
                "PRIORITY payload length {} != {}",
                payload.len(),
                PRIORITY_BLOCK_LEN
            )));
        }
        let params = PriorityParams::parse(payload).ok_or(Error::MalformedHeader)?;
        Ok(Self {
            stream_id: header.stream_id,
            params,
        })
    }

    pub fn encode_payload(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(PRIORITY_BLOCK_LEN);
        self.params.serialize(&mut out);
        out
    }
}
