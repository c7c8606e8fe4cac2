//! The byte-stream capability the decoder consumes.
//!
//! The source exposes this as a quartet of global function pointers
//! (`MuTFFIODriver { read, write, tell, seek }`) installed process-wide.
//! That's not something a Rust port should reach for: every decode entry
//! point here instead takes `&mut impl Transport` as an ordinary parameter,
//! so distinct parses never contend over shared mutable state and there is
//! nothing process-wide to install or tear down.
//!
//! `write` is part of the source's driver struct but is reserved for a
//! symmetric writer this crate doesn't implement (see the crate's Non-goals);
//! it's omitted here rather than added as a method nothing calls.

use crate::error::{Mp4Error, Result};
use std::io::{Read, Seek, SeekFrom};

/// Four-operation capability the atom decoder is generic over: exact-length
/// reads, current position, and relative seeking. Any `Read + Seek` — a
/// file, an in-memory cursor, a bounded slice of one — satisfies it for
/// free via the blanket impl below.
pub trait Transport {
    /// Read exactly `buf.len()` bytes. Short reads are `Mp4Error::Eof`.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Current byte offset from the start of the stream.
    fn tell(&mut self) -> Result<u64>;

    /// Move the position by `delta` bytes relative to the current position.
    fn seek_relative(&mut self, delta: i64) -> Result<u64>;
}

impl<T: Read + Seek> Transport for T {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        Read::read_exact(self, buf).map_err(Mp4Error::from)
    }

    fn tell(&mut self) -> Result<u64> {
        Ok(Seek::stream_position(self)?)
    }

    fn seek_relative(&mut self, delta: i64) -> Result<u64> {
        Ok(Seek::seek(self, SeekFrom::Current(delta))?)
    }
}

/// Read a fixed-size byte array in one call; the common case for
/// scalar/header decoding.
pub fn read_array<T: Transport, const N: usize>(t: &mut T) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    t.read_exact(&mut buf)?;
    Ok(buf)
}

/// Read `len` bytes into a freshly allocated buffer; used for leaf-atom
/// payloads that are then handed to a `binrw` struct for field decoding.
pub fn read_vec<T: Transport>(t: &mut T, len: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    t.read_exact(&mut buf)?;
    Ok(buf)
}

/// Skip forward over `len` bytes without reading them into memory.
pub fn skip<T: Transport>(t: &mut T, len: u64) -> Result<()> {
    t.seek_relative(len as i64)?;
    Ok(())
}
