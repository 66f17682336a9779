//! The ten HTTP/2 frame payload types, as a tagged union over a shared
//! 9-octet header.
//!
//! Each submodule owns one frame type's shape validation, its own flag
//! accessor type (see [`crate::flags`]), and a pair of `decode`/
//! `encode_payload` functions. [`Frame`] dispatches to them by matching on
//! the header's type octet: no virtual dispatch, no shared mutable base
//! object.

pub mod continuation;
pub mod data;
pub mod goaway;
pub mod headers;
pub mod ping;
pub mod priority;
pub mod push_promise;
pub mod rst_stream;
pub mod settings;
pub mod window_update;

pub use continuation::ContinuationFrame;
pub use data::DataFrame;
pub use goaway::GoAwayFrame;
pub use headers::HeadersFrame;
pub use ping::PingFrame;
pub use priority::{PriorityFrame, PriorityParams};
pub use push_promise::PushPromiseFrame;
pub use rst_stream::RstStreamFrame;
pub use settings::{SettingsFrame, SettingsParameter};
pub use window_update::WindowUpdateFrame;

use crate::config::CodecConfig;
use crate::error::Error;
use crate::header::{FrameHeader, FrameType};
use crate::hpack::{HpackDecoder, HpackEncoder};

/// A fully parsed HTTP/2 frame: header fields plus a type-specific payload.
///
/// Created either by [`Frame::decode`] (owned by the caller on delivery) or
/// by the caller and passed to [`Frame::serialize`], which consumes it only
/// to produce wire bytes, it does not retain the record.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    Data(DataFrame),
    Headers(HeadersFrame),
    Priority(PriorityFrame),
    RstStream(RstStreamFrame),
    Settings(SettingsFrame),
    PushPromise(PushPromiseFrame),
    Ping(PingFrame),
    GoAway(GoAwayFrame),
    WindowUpdate(WindowUpdateFrame),
    Continuation(ContinuationFrame),
}

impl Frame {
    pub fn frame_type(&self) -> FrameType {
        match self {
            Frame::Data(_) => FrameType::Data,
            Frame::Headers(_) => FrameType::Headers,
            Frame::Priority(_) => FrameType::Priority,
            Frame::RstStream(_) => FrameType::RstStream,
            Frame::Settings(_) => FrameType::Settings,
            Frame::PushPromise(_) => FrameType::PushPromise,
            Frame::Ping(_) => FrameType::Ping,
            Frame::GoAway(_) => FrameType::GoAway,
            Frame::WindowUpdate(_) => FrameType::WindowUpdate,
            Frame::Continuation(_) => FrameType::Continuation,
        }
    }

    pub fn stream_id(&self) -> u32 {
        match self {
            Frame::Data(f) => f.stream_id,
            Frame::Headers(f) => f.stream_id,
            Frame::Priority(f) => f.stream_id,
            Frame::RstStream(f) => f.stream_id,
            Frame::Settings(_) => 0,
            Frame::PushPromise(f) => f.stream_id,
            Frame::Ping(_) => 0,
            Frame::GoAway(_) => 0,
            Frame::WindowUpdate(f) => f.stream_id,
            Frame::Continuation(f) => f.stream_id,
        }
    }

    /// Dispatches to the per-type payload decoder named by `header.kind()`.
    /// `header` has already been validated for `length <= MAX_FRAME_SIZE`
    /// by the caller (the receive path in [`crate::codec`]); callers probing
    /// payload bytes directly are responsible for that check themselves.
    pub fn decode(
        header: &FrameHeader,
        payload: &[u8],
        hpack: &mut HpackDecoder,
        config: &CodecConfig,
    ) -> Result<Frame, Error> {
        let kind = header.kind().ok_or(Error::UnknownType {
            frame_type: header.frame_type,
            header: *header,
        })?;

        Ok(match kind {
            FrameType::Data => Frame::Data(DataFrame::decode(header, payload)?),
            FrameType::Headers => {
                Frame::Headers(HeadersFrame::decode(header, payload, hpack, config)?)
            }
            FrameType::Priority => Frame::Priority(PriorityFrame::decode(header, payload)?),
            FrameType::RstStream => Frame::RstStream(RstStreamFrame::decode(header, payload)?),
            FrameType::Settings => Frame::Settings(SettingsFrame::decode(header, payload)?),
            FrameType::PushPromise => {
                Frame::PushPromise(PushPromiseFrame::decode(header, payload, hpack, config)?)
            }
            FrameType::Ping => Frame::Ping(PingFrame::decode(header, payload)?),
            FrameType::GoAway => Frame::GoAway(GoAwayFrame::decode(header, payload)?),
            FrameType::WindowUpdate => {
                Frame::WindowUpdate(WindowUpdateFrame::decode(header, payload)?)
            }
            FrameType::Continuation => {
                Frame::Continuation(ContinuationFrame::decode(header, payload, hpack, config)?)
            }
        })
    }

    /// Serializes this frame's payload, then builds the matching header with
    /// `length` recomputed from the serialized bytes (the "update_length"
    /// step) and the reserved bit defaulted to 0. Returns the complete
    /// 9-octet-header-plus-payload byte run.
    pub fn serialize(&self, hpack: &mut HpackEncoder) -> Vec<u8> {
        self.serialize_with_reserved(hpack, false)
    }

    /// As [`Frame::serialize`], but lets a caller explicitly set the
    /// reserved bit, useful only for exercising a peer's tolerance of it,
    /// per RFC 7540 §4.1.
    pub fn serialize_with_reserved(&self, hpack: &mut HpackEncoder, reserved: bool) -> Vec<u8> {
        let payload = self.encode_payload(hpack);
        let header = FrameHeader {
            length: payload.len() as u32,
            frame_type: self.frame_type().wire_value(),
            flags: self.wire_flags(),
            reserved,
            stream_id: self.stream_id(),
        };
        let mut out = Vec::with_capacity(crate::header::HEADER_LEN + payload.len());
        header.serialize(&mut out);
        out.extend_from_slice(&payload);
        out
    }

    fn encode_payload(&self, hpack: &mut HpackEncoder) -> Vec<u8> {
        match self {
            Frame::Data(f) => f.encode_payload(),
            Frame::Headers(f) => f.encode_payload(hpack),
            Frame::Priority(f) => f.encode_payload(),
            Frame::RstStream(f) => f.encode_payload(),
            Frame::Settings(f) => f.encode_payload(),
            Frame::PushPromise(f) => f.encode_payload(hpack),
            Frame::Ping(f) => f.encode_payload(),
            Frame::GoAway(f) => f.encode_payload(),
            Frame::WindowUpdate(f) => f.encode_payload(),
            Frame::Continuation(f) => f.encode_payload(hpack),
        }
    }

    fn wire_flags(&self) -> u8 {
        match self {
            Frame::Data(f) => f.wire_flags().bits(),
            Frame::Headers(f) => f.wire_flags().bits(),
            Frame::Priority(_) => 0,
            Frame::RstStream(_) => 0,
            Frame::Settings(f) => f.wire_flags().bits(),
            Frame::PushPromise(f) => f.wire_flags().bits(),
            Frame::Ping(f) => f.flags.bits(),
            Frame::GoAway(_) => 0,
            Frame::WindowUpdate(_) => 0,
            Frame::Continuation(f) => f.flags.bits(),
        }
    }
}
