//! The receive and send paths: transport bytes in, [`Frame`] out, and back.
//!
//! The codec is stateless between calls except for its caller-supplied
//! [`CodecConfig`] and whichever HPACK table the caller threads through.
//! See the module docs on why the table is an explicit parameter rather
//! than something the codec owns.

use std::io::{Read, Write};

use log::{debug, trace, warn};

use crate::config::CodecConfig;
use crate::error::Error;
use crate::frame::Frame;
use crate::header::{FrameHeader, HEADER_LEN};
use crate::hpack::{HpackDecoder, HpackEncoder};

/// Reads into `buf` until full, a clean close, or a transport error,
/// distinguishing a close that lands exactly on a frame boundary (no bytes
/// read yet) from one that lands mid-frame (some bytes already read).
fn read_exact_classified<R: Read + ?Sized>(transport: &mut R, buf: &mut [u8]) -> Result<(), Error> {
    let mut filled = 0;
    while filled < buf.len() {
        match transport.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(if filled == 0 {
                    Error::ConnectionClosed
                } else {
                    Error::Truncated {
                        expected: buf.len(),
                        got: filled,
                    }
                });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::TransportError(e)),
        }
    }
    Ok(())
}

/// Reads and discards exactly `length` bytes, the caller's ignore-and-
/// continue policy for an [`Error::UnknownType`] frame.
pub fn skip_frame<R: Read + ?Sized>(transport: &mut R, length: u32) -> Result<(), Error> {
    let mut remaining = length as usize;
    let mut scratch = [0u8; 4096];
    while remaining > 0 {
        let take = remaining.min(scratch.len());
        read_exact_classified(transport, &mut scratch[..take])?;
        remaining -= take;
    }
    Ok(())
}

/// Reads exactly one frame from `transport`, decoding its payload against
/// `hpack` and validating it against `config`.
///
/// On [`Error::UnknownType`], no payload bytes have been consumed; the
/// caller may call [`skip_frame`] with the returned header's `length` to
/// discard it and continue, per RFC 7540's ignore-unknown-frame-types rule.
pub fn recv_frame<R: Read + ?Sized>(
    transport: &mut R,
    hpack: &mut HpackDecoder,
    config: &CodecConfig,
) -> Result<Frame, Error> {
    let mut header_bytes = [0u8; HEADER_LEN];
    read_exact_classified(transport, &mut header_bytes)?;
    let header = FrameHeader::parse(&header_bytes)?;
    trace!(
        "recv header: type={:#x} flags={:#x} stream={} length={}",
        header.frame_type, header.flags, header.stream_id, header.length
    );

    if header.kind().is_none() {
        warn!("unknown frame type {:#x}, length {}", header.frame_type, header.length);
        return Err(Error::UnknownType {
            frame_type: header.frame_type,
            header,
        });
    }

    if header.length > config.max_frame_size {
        return Err(Error::FrameSizeError(format!(
            "frame length {} exceeds max_frame_size {}",
            header.length, config.max_frame_size
        )));
    }

    let mut payload = vec![0u8; header.length as usize];
    read_exact_classified(transport, &mut payload)?;

    let frame = Frame::decode(&header, &payload, hpack, config)?;
    debug!("recv {:?} on stream {}", frame.frame_type(), frame.stream_id());
    Ok(frame)
}

/// Serializes `frame` against `hpack` and writes it to `transport`,
/// retrying partial writes until the whole buffer is flushed. Consumes
/// `frame`: the codec never retains it after sending.
///
/// Returns the number of bytes written (header + payload).
pub fn send_frame<W: Write + ?Sized>(
    transport: &mut W,
    frame: Frame,
    hpack: &mut HpackEncoder,
) -> Result<usize, Error> {
    let bytes = frame.serialize(hpack);
    debug!("send {:?} on stream {} ({} bytes)", frame.frame_type(), frame.stream_id(), bytes.len());

    let mut written = 0;
    while written < bytes.len() {
        match transport.write(&bytes[written..]) {
            Ok(0) => {
                return Err(Error::TransportError(std::io::Error::new(
                    std::io::ErrorKind::WriteZero,
                    "transport accepted 0 bytes",
                )))
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::TransportError(e)),
        }
    }
    Ok(written)
}
