//! DATA frame (RFC 7540 §6.1).

use crate::error::Error;
use crate::flags::DataFlags;
use crate::header::FrameHeader;

/// Application data for a stream, plus whatever padding the sender chose
/// to add.
///
/// Padding is transparent: a caller that only cares about `data` gets the
/// same bytes whether or not `pad_length` is set (see the codec's padding-
/// transparency property). `pad_length` and `flags` are preserved for
/// callers that re-serialize and want byte-for-byte fidelity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFrame {
    pub stream_id: u32,
    pub flags: DataFlags,
    pub pad_length: Option<u8>,
    pub data: Vec<u8>,
}

impl DataFrame {
    pub fn decode(header: &FrameHeader, payload: &[u8]) -> Result<Self, Error> {
        let flags = DataFlags::from_bits_truncate(header.flags);

        let (pad_length, data) = if flags.contains(DataFlags::PADDED) {
            if payload.is_empty() {
                return Err(Error::MalformedPadding {
                    pad_length: 0,
                    remaining: 0,
                });
            }
            let pad_length = payload[0] as usize;
            let remaining = payload.len() - 1;
            // pad_length == remaining is allowed (zero data bytes); only
            // pad_length > remaining is malformed.
            if pad_length > remaining {
                return Err(Error::MalformedPadding {
                    pad_length,
                    remaining,
                });
            }
            let data_end = payload.len() - pad_length;
            (Some(pad_length as u8), payload[1..data_end].to_vec())
        } else {
            (None, payload.to_vec())
        };

        Ok(Self {
            stream_id: header.stream_id,
            flags,
            pad_length,
            data,
        })
    }

    pub fn encode_payload(&self) -> Vec<u8> {
        let mut out = Vec::new();
        if let Some(pad_length) = self.pad_length {
            out.push(pad_length);
            out.extend_from_slice(&self.data);
            out.extend(std::iter::repeat(0u8).take(pad_length as usize));
        } else {
            out.extend_from_slice(&self.data);
        }
        out
    }

    /// Whether the PADDED flag is effectively set, derived from
    /// `pad_length` so encoders cannot desync flags from content.
    pub fn wire_flags(&self) -> DataFlags {
        let mut flags = self.flags;
        flags.set(DataFlags::PADDED, self.pad_length.is_some());
        flags
    }
}
