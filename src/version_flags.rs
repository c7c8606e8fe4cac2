//! The 4-byte `{ version: u8, flags: u24 }` prefix carried by most atoms.

use crate::scalar::u24_be;
use crate::transport::{read_array, Transport};
use crate::error::Result;
use binrw::BinRead;

/// Version/flags prefix: 1-byte version, 3-byte flags zero-extended to
/// `u32`. Always exactly 4 bytes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VersionFlags {
    pub version: u8,
    pub flags: u32,
}

impl VersionFlags {
    pub fn read<T: Transport>(t: &mut T) -> Result<Self> {
        let version = read_array::<_, 1>(t)?[0];
        let flags = u24_be(read_array(t)?);
        Ok(Self { version, flags })
    }
}

/// `binrw`-derived counterpart used by leaf atoms decoded from an
/// in-memory payload buffer rather than read incrementally off the
/// transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, BinRead)]
#[br(big)]
pub struct VersionFlagsRaw {
    pub version: u8,
    flags_hi: u8,
    flags_mid: u8,
    flags_lo: u8,
}

impl VersionFlagsRaw {
    pub fn flags(&self) -> u32 {
        u24_be([self.flags_hi, self.flags_mid, self.flags_lo])
    }
}

impl From<VersionFlagsRaw> for VersionFlags {
    fn from(raw: VersionFlagsRaw) -> Self {
        Self {
            version: raw.version,
            flags: raw.flags(),
        }
    }
}
