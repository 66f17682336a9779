//! SETTINGS frame (RFC 7540 §6.5).

use crate::error::Error;
use crate::flags::SettingsFlags;
use crate::header::FrameHeader;

const ENTRY_LEN: usize = 6;

/// Well-known SETTINGS identifiers. Wire values start at 1
/// (`HEADER_TABLE_SIZE = 0x1`), *not* at the enum's ordinal, a frequent
/// source of off-by-one bugs when an implementation serializes the
/// discriminant instead of the explicit value below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum SettingsParameter {
    HeaderTableSize = 0x1,
    EnablePush = 0x2,
    MaxConcurrentStreams = 0x3,
    InitialWindowSize = 0x4,
    MaxFrameSize = 0x5,
    MaxHeaderListSize = 0x6,
}

impl SettingsParameter {
    pub fn from_wire(id: u16) -> Option<Self> {
        use SettingsParameter::*;
        Some(match id {
            0x1 => HeaderTableSize,
            0x2 => EnablePush,
            0x3 => MaxConcurrentStreams,
            0x4 => InitialWindowSize,
            0x5 => MaxFrameSize,
            0x6 => MaxHeaderListSize,
            _ => return None,
        })
    }

    pub fn wire_value(self) -> u16 {
        self as u16
    }
}

/// A SETTINGS frame. Entries are kept as raw `(identifier, value)` pairs in
/// wire order, duplicates included. Later entries override earlier ones
/// only when the caller applies them, not here. Unknown identifiers are
/// preserved rather than dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsFrame {
    pub ack: bool,
    pub params: Vec<(u16, u32)>,
}

impl SettingsFrame {
    pub fn decode(header: &FrameHeader, payload: &[u8]) -> Result<Self, Error> {
        if header.stream_id != 0 {
            return Err(Error::ProtocolError {
                reason: "SETTINGS on non-zero stream".into(),
                header: Some(*header),
            });
        }
        let flags = SettingsFlags::from_bits_truncate(header.flags);
        let ack = flags.contains(SettingsFlags::ACK);

        if ack {
            if !payload.is_empty() {
                return Err(Error::ProtocolError {
                    reason: "SETTINGS ACK with non-empty payload".into(),
                    header: Some(*header),
                });
            }
            return Ok(Self {
                ack: true,
                params: Vec::new(),
            });
        }

        if payload.len() % ENTRY_LEN != 0 {
            return Err(Error::FrameSizeError(format!(
                "SETTINGS payload length {} not a multiple of {}",
                payload.len(),
                ENTRY_LEN
            )));
        }

        let mut params = Vec::with_capacity(payload.len() / ENTRY_LEN);
        for chunk in payload.chunks_exact(ENTRY_LEN) {
            let id = u16::from_be_bytes([chunk[0], chunk[1]]);
            let value = u32::from_be_bytes([chunk[2], chunk[3], chunk[4], chunk[5]]);
            params.push((id, value));
        }

        Ok(Self { ack: false, params })
    }

    pub fn encode_payload(&self) -> Vec<u8> {
        if self.ack {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.params.len() * ENTRY_LEN);
        for (id, value) in &self.params {
            out.extend_from_slice(&id.to_be_bytes());
            out.extend_from_slice(&value.to_be_bytes());
        }
        out
    }

    pub fn wire_flags(&self) -> SettingsFlags {
        if self.ack {
            SettingsFlags::ACK
        } else {
            SettingsFlags::empty()
        }
    }
}
