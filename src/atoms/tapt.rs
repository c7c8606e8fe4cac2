//! Track aperture mode dimensions atom (`tapt`) and its three children:
//! clean (`clef`), production (`prof`), and encoded-pixels (`enof`)
//! aperture dimensions. All three share an identical 20-byte shape.
//!
//! Path: `moov/trak/tapt`

use crate::error::{Mp4Error, Result};
use crate::fourcc::FourCC;
use crate::header::AtomHeader;
use crate::scalar::u32_be;
use crate::transport::{read_array, skip, Transport};
use crate::version_flags::VersionFlags;

/// `{ version_flags, width, height }`, 12 bytes of payload after the
/// header. Used identically by `clef`, `prof`, and `enof`.
#[derive(Debug, Clone, Copy)]
pub struct ApertureDimensionsAtom {
    pub header: AtomHeader,
    pub version_flags: VersionFlags,
    pub width: u32,
    pub height: u32,
}

impl ApertureDimensionsAtom {
    fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let version_flags = VersionFlags::read(t)?;
        let width = u32_be(read_array(t)?);
        let height = u32_be(read_array(t)?);
        Ok(Self {
            header,
            version_flags,
            width,
            height,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrackApertureModeDimensionsAtom {
    pub clean_aperture_dimensions: Option<ApertureDimensionsAtom>,
    pub production_aperture_dimensions: Option<ApertureDimensionsAtom>,
    pub encoded_pixels_dimensions: Option<ApertureDimensionsAtom>,
}

impl TrackApertureModeDimensionsAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let mut out = Self::default();
        let mut offset = 8u32;
        while offset < header.size {
            let child = AtomHeader::peek(t)?;
            offset = offset
                .checked_add(child.size)
                .ok_or_else(|| Mp4Error::BadFormat("tapt child size overflow".into()))?;
            if offset > header.size {
                return Err(Mp4Error::BadFormat("tapt child overshoots parent size".into()));
            }
            match child.atom_type {
                FourCC::CLEF => {
                    out.clean_aperture_dimensions = Some(ApertureDimensionsAtom::decode(t)?)
                }
                FourCC::PROF => {
                    out.production_aperture_dimensions = Some(ApertureDimensionsAtom::decode(t)?)
                }
                FourCC::ENOF => {
                    out.encoded_pixels_dimensions = Some(ApertureDimensionsAtom::decode(t)?)
                }
                _ => skip(t, child.size as u64)?,
            }
        }
        Ok(out)
    }
}
