//! Video media information header atom (`vmhd`).
//!
//! Path: `moov/trak/mdia/minf/vmhd`

use crate::error::Result;
use crate::header::AtomHeader;
use crate::scalar::u16_be;
use crate::transport::{read_array, Transport};
use crate::version_flags::VersionFlags;

#[derive(Debug, Clone, Copy)]
pub struct VideoMediaInformationHeaderAtom {
    pub header: AtomHeader,
    pub version_flags: VersionFlags,
    pub graphics_mode: u16,
    pub opcolor: [u16; 3],
}

impl VideoMediaInformationHeaderAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let version_flags = VersionFlags::read(t)?;
        let graphics_mode = u16_be(read_array(t)?);
        let opcolor = [
            u16_be(read_array(t)?),
            u16_be(read_array(t)?),
            u16_be(read_array(t)?),
        ];
        Ok(Self {
            header,
            version_flags,
            graphics_mode,
            opcolor,
        })
    }
}
