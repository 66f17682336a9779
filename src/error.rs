//! Error taxonomy for the frame codec.
//!
//! Every variant maps to exactly one of the error kinds in the codec's
//! design: `Truncated`/`ConnectionClosed` for short reads, `FrameSizeError`/
//! `MalformedPadding`/`MalformedHeader`/`ProtocolError` for shape violations,
//! `HpackError` for failures inside the header-compression collaborator, and
//! `UnknownType`/`TransportError` for the two non-fatal-by-default kinds.

use std::fmt;
use std::io;

use crate::header::FrameHeader;

/// Errors produced while parsing or serializing HTTP/2 frames.
///
/// Fatal variants (all but [`Error::UnknownType`]) are connection-fatal per
/// RFC 7540: the caller should tear down the connection, optionally after
/// sending a GOAWAY built from [`Error::header`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The transport was closed cleanly (0 bytes read exactly at a frame
    /// boundary). Not itself an error condition for the connection, but
    /// distinct from [`Error::Truncated`] because no partial frame exists.
    #[error("connection closed")]
    ConnectionClosed,

    /// Fewer bytes were available than required for a header or payload.
    #[error("truncated frame: expected {expected} bytes, got {got}")]
    Truncated { expected: usize, got: usize },

    /// `length` exceeded `MAX_FRAME_SIZE`, a fixed-length frame had the
    /// wrong length, or a SETTINGS payload was not a multiple of 6.
    #[error("frame size error: {0}")]
    FrameSizeError(String),

    /// `pad_length >= remaining_payload_length`.
    #[error("malformed padding: pad_length {pad_length} >= remaining {remaining}")]
    MalformedPadding { pad_length: usize, remaining: usize },

    /// The 9-octet frame header itself could not be parsed.
    #[error("malformed frame header")]
    MalformedHeader,

    /// A stream-id or flag constraint for the frame's type was violated
    /// (e.g. SETTINGS on a non-zero stream, WINDOW_UPDATE increment of 0).
    #[error("protocol error: {reason}")]
    ProtocolError { reason: String, header: Option<FrameHeader> },

    /// The header-block fragment could not be decoded by the HPACK
    /// collaborator (e.g. a dynamic-table index out of range).
    #[error("hpack error: {0}")]
    HpackError(String),

    /// The header-block fragment for this frame exceeds the configured
    /// `max_header_block_size`.
    #[error("header block too large: {size} bytes (max {max})")]
    HeaderBlockTooLarge { size: usize, max: usize },

    /// `type` was not one of the ten known values. Non-fatal: the caller may
    /// discard `length` octets from the transport and continue.
    #[error("unknown frame type {frame_type:#x}")]
    UnknownType { frame_type: u8, header: FrameHeader },

    /// Propagated from the transport collaborator.
    #[error("transport error: {0}")]
    TransportError(#[from] io::Error),
}

impl Error {
    /// The header parsed so far, if any, so the caller can build a
    /// compliant GOAWAY even after a payload-level failure.
    pub fn header(&self) -> Option<&FrameHeader> {
        match self {
            Error::ProtocolError { header, .. } => header.as_ref(),
            Error::UnknownType { header, .. } => Some(header),
            _ => None,
        }
    }

    /// Whether this error is connection-fatal per RFC 7540. Only
    /// [`Error::UnknownType`] is not.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::UnknownType { .. })
    }
}

/// Wraps an HPACK decoder/encoder error whose concrete type belongs to the
/// (opaque, black-box) HPACK collaborator.
pub fn hpack_error(e: impl fmt::Debug) -> Error {
    Error::HpackError(format!("{:?}", e))
}
