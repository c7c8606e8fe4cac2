//! Compressed matte (`kmat`) and track matte (`matt`) atoms.
//!
//! Path: `moov/trak/matt`

use crate::atoms::stsd::SampleDescription;
use crate::error::{Mp4Error, Result};
use crate::header::AtomHeader;
use crate::transport::{read_vec, skip, Transport};
use crate::version_flags::VersionFlags;

#[derive(Debug, Clone)]
pub struct CompressedMatteAtom {
    pub header: AtomHeader,
    pub version_flags: VersionFlags,
    pub matte_image_description_structure: SampleDescription,
    pub matte_data: Vec<u8>,
}

impl CompressedMatteAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let version_flags = VersionFlags::read(t)?;
        let matte_image_description_structure = SampleDescription::decode(t)?;
        let matte_data_len = header
            .size
            .checked_sub(12)
            .and_then(|rem| rem.checked_sub(matte_image_description_structure.size))
            .ok_or_else(|| {
                Mp4Error::BadFormat("kmat smaller than its sample description structure".into())
            })?;
        let matte_data = read_vec(t, matte_data_len as usize)?;
        Ok(Self {
            header,
            version_flags,
            matte_image_description_structure,
            matte_data,
        })
    }
}

#[derive(Debug, Clone)]
pub struct TrackMatteAtom {
    pub header: AtomHeader,
    pub compressed_matte_atom: CompressedMatteAtom,
}

impl TrackMatteAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let compressed_matte_atom = CompressedMatteAtom::decode(t)?;
        let consumed = compressed_matte_atom
            .header
            .size
            .checked_add(8)
            .ok_or_else(|| Mp4Error::BadFormat("matt size overflow".into()))?;
        let remaining = header
            .size
            .checked_sub(consumed)
            .ok_or_else(|| Mp4Error::BadFormat("matt child larger than parent".into()))?;
        skip(t, remaining as u64)?;
        Ok(Self {
            header,
            compressed_matte_atom,
        })
    }
}
