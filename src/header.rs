//! Atom header: the 8-byte `size`/`type` prefix common to every atom.

use crate::error::{Mp4Error, Result};
use crate::fourcc::FourCC;
use crate::scalar::u32_be;
use crate::transport::{read_array, Transport};

/// `{ size: u32, type: FourCC }`. `size` counts the whole atom, header
/// included; `type` is the raw four bytes, compared numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomHeader {
    pub size: u32,
    pub atom_type: FourCC,
}

impl AtomHeader {
    pub const WIRE_SIZE: u32 = 8;

    /// Read the 8-byte header and leave the transport positioned right
    /// after it, at the start of the atom's payload.
    pub fn read<T: Transport>(t: &mut T) -> Result<Self> {
        let size = u32_be(read_array(t)?);
        let atom_type = FourCC(read_array(t)?);
        let header = Self { size, atom_type };
        header.check_size()?;
        Ok(header)
    }

    /// Read the 8-byte header, then rewind so the transport is positioned
    /// exactly where it was before the call. Lets a container decoder
    /// inspect a child's type before deciding which full decoder to
    /// invoke on it. Fails with `Eof` cleanly at stream end; the top-level
    /// parser relies on that to detect its own termination.
    pub fn peek<T: Transport>(t: &mut T) -> Result<Self> {
        let header = Self::read(t)?;
        t.seek_relative(-(Self::WIRE_SIZE as i64))?;
        Ok(header)
    }

    /// Number of payload bytes after the 8-byte header, i.e. `size - 8`.
    pub fn payload_len(&self) -> Result<u32> {
        self.size
            .checked_sub(Self::WIRE_SIZE)
            .ok_or_else(|| Mp4Error::BadFormat(format!("atom size {} smaller than header", self.size)))
    }

    fn check_size(&self) -> Result<()> {
        if self.size < Self::WIRE_SIZE {
            return Err(Mp4Error::BadFormat(format!(
                "atom size {} is smaller than the 8-byte header",
                self.size
            )));
        }
        // size == 0 ("extends to EOF") and size == 1 (64-bit extended size
        // follows) are part of the wire format but not implemented by the
        // source this decoder is ported from. Treat both as malformed
        // rather than silently inventing extended-size support.
        if self.size == 1 {
            return Err(Mp4Error::BadFormat(
                "64-bit extended atom sizes are not supported".into(),
            ));
        }
        Ok(())
    }
}
