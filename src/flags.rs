//! Per-frame-type flag accessors.
//!
//! HTTP/2 reuses flag bit values across frame types: 0x1 is `END_STREAM` on
//! DATA/HEADERS but `ACK` on SETTINGS/PING. Scoping each flag set to its own
//! type (rather than exposing the raw flags byte on the shared header)
//! makes misreading a bit as the wrong semantic impossible at the type
//! level.

use bitflags::bitflags;

bitflags! {
    /// RFC 7540 §6.1.
    pub struct DataFlags: u8 {
        const END_STREAM = 0x1;
        const PADDED = 0x8;
    }
}

bitflags! {
    /// RFC 7540 §6.2.
    pub struct HeadersFlags: u8 {
        const END_STREAM = 0x1;
        const END_HEADERS = 0x4;
        const PADDED = 0x8;
        const PRIORITY = 0x20;
    }
}

bitflags! {
    /// RFC 7540 §6.5.
    pub struct SettingsFlags: u8 {
        const ACK = 0x1;
    }
}

bitflags! {
    /// RFC 7540 §6.6.
    pub struct PushPromiseFlags: u8 {
        const END_HEADERS = 0x4;
        const PADDED = 0x8;
    }
}

bitflags! {
    /// RFC 7540 §6.7.
    pub struct PingFlags: u8 {
        const ACK = 0x1;
    }
}

bitflags! {
    /// RFC 7540 §6.10.
    pub struct ContinuationFlags: u8 {
        const END_HEADERS = 0x4;
    }
}
