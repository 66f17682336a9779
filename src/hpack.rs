//! HPACK: Header Compression for HTTP/2 (RFC 7541)
//!
//! Thin wrapper around `fluke-hpack` providing the [`H2Header`] type and the
//! decoder/encoder interfaces the frame codec treats as an opaque,
//! per-connection-direction black box: `encode`, `decode`, `set_capacity`.
//! The dynamic table each wraps is the only state that persists across
//! frames (see the codec's state-model notes).

use crate::error::{hpack_error, Error};

/// A decoded HTTP/2 header field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct H2Header {
    pub name: String,
    pub value: String,
}

impl H2Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// HPACK decoder for HTTP/2 header blocks. Wraps `fluke_hpack::Decoder`,
/// which maintains the dynamic table state for one connection direction.
pub struct HpackDecoder {
    inner: fluke_hpack::Decoder<'static>,
}

impl std::fmt::Debug for HpackDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HpackDecoder").finish()
    }
}

impl Default for HpackDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl HpackDecoder {
    pub fn new() -> Self {
        Self {
            inner: fluke_hpack::Decoder::new(),
        }
    }

    /// Decodes an HPACK-encoded header-block fragment into header fields,
    /// mutating the dynamic table as a side effect.
    pub fn decode(&mut self, data: &[u8]) -> Result<Vec<H2Header>, Error> {
        let pairs = self.inner.decode(data).map_err(hpack_error)?;
        Ok(pairs
            .into_iter()
            .map(|(name, value)| {
                H2Header::new(
                    String::from_utf8_lossy(&name).into_owned(),
                    String::from_utf8_lossy(&value).into_owned(),
                )
            })
            .collect())
    }

    /// Adjusts the dynamic table's maximum size, mirroring a peer's
    /// `SETTINGS_HEADER_TABLE_SIZE` or an explicit Dynamic Table Size
    /// Update signaled within the header block.
    pub fn set_capacity(&mut self, size: usize) {
        self.inner.set_max_table_size(size);
    }
}

/// HPACK encoder for HTTP/2 header blocks. Wraps `fluke_hpack::Encoder`,
/// which maintains the dynamic table state for one connection direction.
pub struct HpackEncoder {
    inner: fluke_hpack::Encoder<'static>,
    capacity: usize,
}

impl std::fmt::Debug for HpackEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HpackEncoder").finish()
    }
}

impl Default for HpackEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl HpackEncoder {
    pub fn new() -> Self {
        Self {
            inner: fluke_hpack::Encoder::new(),
            capacity: 4096,
        }
    }

    /// Encodes headers into an HPACK header-block fragment.
    pub fn encode(&mut self, headers: &[H2Header]) -> Vec<u8> {
        let pairs: Vec<(&[u8], &[u8])> = headers
            .iter()
            .map(|h| (h.name.as_bytes(), h.value.as_bytes()))
            .collect();
        self.inner.encode(pairs)
    }

    /// Adjusts the dynamic table's maximum size.
    pub fn set_capacity(&mut self, size: usize) {
        self.inner.set_max_table_size(size);
        self.capacity = size;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
