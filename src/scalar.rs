//! Big-endian scalar decoding.
//!
//! The wire format is big-endian throughout. These are thin wrappers around
//! `from_be_bytes`, except for the 24-bit primitive: there is no native `u24`,
//! so it is read as exactly three bytes and zero-extended into a `u32`. It
//! must never be read as a 4-byte `u32` with the top byte masked off — the
//! wire layout has no fourth byte to consume.

pub fn u16_be(b: [u8; 2]) -> u16 {
    u16::from_be_bytes(b)
}

pub fn u24_be(b: [u8; 3]) -> u32 {
    u32::from_be_bytes([0, b[0], b[1], b[2]])
}

pub fn u32_be(b: [u8; 4]) -> u32 {
    u32::from_be_bytes(b)
}

pub fn u64_be(b: [u8; 8]) -> u64 {
    u64::from_be_bytes(b)
}

/// Two's-complement reinterpretation of big-endian bytes.
pub fn i16_be(b: [u8; 2]) -> i16 {
    i16::from_be_bytes(b)
}

pub fn i32_be(b: [u8; 4]) -> i32 {
    i32::from_be_bytes(b)
}
