//! h2-frame-codec: a sans-I/O HTTP/2 frame codec
//!
//! This crate converts a byte stream on an HTTP/2 connection into typed
//! frame records and back. It handles three tightly coupled concerns:
//!
//! 1. **Framing**: the fixed 9-octet header plus a variable payload shaped
//!    by the type byte, including per-type padding and length rules.
//! 2. **Header compression binding**: HEADERS/PUSH_PROMISE/CONTINUATION
//!    payloads carry HPACK header-block fragments that mutate a shared,
//!    per-connection-direction dynamic table; this crate threads that
//!    table through every encode/decode call rather than owning it.
//! 3. **Flag semantics**: flag bits are reused across frame types (0x1 is
//!    both `ACK` and `END_STREAM`); flag accessors are scoped per frame
//!    type to prevent misreads.
//!
//! # Features
//!
//! - **Sans-I/O core**: [`Frame::decode`]/[`Frame::serialize`] operate on
//!   in-memory byte slices; [`recv_frame`]/[`send_frame`] add a thin,
//!   synchronous transport shim on top (any `Read`/`Write`).
//! - **RFC 7540 compliant**: all ten frame types, with shape validation per
//!   §6, padding and priority handling, and an ignore-unknown-frame-type
//!   policy.
//! - **HPACK via `fluke-hpack`**: [`HpackEncoder`]/[`HpackDecoder`] wrap the
//!   dynamic table this crate treats as an opaque collaborator.
//!
//! # Quick start
//!
//! ```rust
//! use h2_frame_codec::{CodecConfig, HpackDecoder, recv_frame};
//!
//! let bytes: &[u8] = &[0, 0, 0, 4, 1, 0, 0, 0, 0]; // SETTINGS ACK
//! let mut cursor = bytes;
//! let mut hpack = HpackDecoder::new();
//! let frame = recv_frame(&mut cursor, &mut hpack, &CodecConfig::default()).unwrap();
//! println!("{:?}", frame);
//! ```
//!
//! # Architecture
//!
//! This crate is intentionally narrow. It does NOT provide:
//! - A stream state machine, flow-control accounting, or CONTINUATION
//!   reassembly across frames. Those belong to a stream-layer collaborator
//!   that sits on top.
//! - A transport or TLS/ALPN handshake. `recv_frame`/`send_frame` accept
//!   any `Read`/`Write`, nothing more.
//! - HTTP semantic validation of header names/values.

pub mod codec;
pub mod config;
pub mod error;
pub mod flags;
pub mod frame;
pub mod header;
pub mod hpack;

pub use codec::{recv_frame, send_frame, skip_frame};
pub use config::{
    CodecConfig, ABSOLUTE_MAX_FRAME_SIZE, DEFAULT_MAX_FRAME_SIZE, DEFAULT_MAX_HEADER_BLOCK_SIZE,
};
pub use error::Error;
pub use frame::{
    ContinuationFrame, DataFrame, Frame, GoAwayFrame, HeadersFrame, PingFrame, PriorityFrame,
    PriorityParams, PushPromiseFrame, RstStreamFrame, SettingsFrame, SettingsParameter,
    WindowUpdateFrame,
};
pub use header::{FrameHeader, FrameType, HEADER_LEN};
pub use hpack::{H2Header, HpackDecoder, HpackEncoder};

/// Well-known HTTP/2 error codes (RFC 7540 §7). Values outside this set are
/// valid on the wire and must be passed through untouched. Callers that
/// need to recognize one of these should match against the constants
/// directly rather than requiring an enum conversion to succeed.
pub mod error_code {
    pub const NO_ERROR: u32 = 0x0;
    pub const PROTOCOL_ERROR: u32 = 0x1;
    pub const INTERNAL_ERROR: u32 = 0x2;
    pub const FLOW_CONTROL_ERROR: u32 = 0x3;
    pub const SETTINGS_TIMEOUT: u32 = 0x4;
    pub const STREAM_CLOSED: u32 = 0x5;
    pub const FRAME_SIZE_ERROR: u32 = 0x6;
    pub const REFUSED_STREAM: u32 = 0x7;
    pub const CANCEL: u32 = 0x8;
    pub const COMPRESSION_ERROR: u32 = 0x9;
    pub const CONNECT_ERROR: u32 = 0xa;
    pub const ENHANCE_YOUR_CALM: u32 = 0xb;
    pub const INADEQUATE_SECURITY: u32 = 0xc;
    pub const HTTP_1_1_REQUIRED: u32 = 0xd;
}
