//! Sound media information header atom (`smhd`).
//!
//! Path: `moov/trak/mdia/minf/smhd`

use crate::error::Result;
use crate::header::AtomHeader;
use crate::scalar::i16_be;
use crate::transport::{read_array, Transport};
use crate::version_flags::VersionFlags;

#[derive(Debug, Clone, Copy)]
pub struct SoundMediaInformationHeaderAtom {
    pub header: AtomHeader,
    pub version_flags: VersionFlags,
    pub balance: i16,
    _reserved: u16,
}

impl SoundMediaInformationHeaderAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let version_flags = VersionFlags::read(t)?;
        let balance = i16_be(read_array(t)?);
        let _reserved = crate::scalar::u16_be(read_array(t)?);
        Ok(Self {
            header,
            version_flags,
            balance,
            _reserved,
        })
    }
}
