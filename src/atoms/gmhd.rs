//! Base media information (`gmhd`), the fallback `minf` variant used by
//! media types that are neither video nor sound (e.g. timed-metadata,
//! timecode tracks).
//!
//! Path: `moov/trak/mdia/minf/gmhd`

use crate::error::{Mp4Error, Result};
use crate::fourcc::FourCC;
use crate::header::AtomHeader;
use crate::scalar::{i16_be, u16_be, u32_be};
use crate::transport::{read_array, skip, Transport};
use crate::version_flags::VersionFlags;

/// Base media info (`gmin`): graphics mode/opcolor/balance, much like a
/// combined `vmhd`+`smhd`.
#[derive(Debug, Clone, Copy)]
pub struct BaseMediaInfoAtom {
    pub header: AtomHeader,
    pub version_flags: VersionFlags,
    pub graphics_mode: u16,
    pub opcolor: [u16; 3],
    pub balance: i16,
}

impl BaseMediaInfoAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let version_flags = VersionFlags::read(t)?;
        let graphics_mode = u16_be(read_array(t)?);
        let opcolor = [
            u16_be(read_array(t)?),
            u16_be(read_array(t)?),
            u16_be(read_array(t)?),
        ];
        let balance = i16_be(read_array(t)?);
        let _reserved = u16_be(read_array(t)?);
        Ok(Self {
            header,
            version_flags,
            graphics_mode,
            opcolor,
            balance,
        })
    }
}

/// Text media information (`text`): unlike most atoms this has no
/// version/flags prefix, just the matrix.
#[derive(Debug, Clone, Copy)]
pub struct TextMediaInformationAtom {
    pub header: AtomHeader,
    pub matrix_structure: [u32; 9],
}

impl TextMediaInformationAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let mut matrix_structure = [0u32; 9];
        for cell in matrix_structure.iter_mut() {
            *cell = u32_be(read_array(t)?);
        }
        Ok(Self {
            header,
            matrix_structure,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BaseMediaInformationHeaderAtom {
    pub gmin: Option<BaseMediaInfoAtom>,
    pub text: Option<TextMediaInformationAtom>,
}

impl BaseMediaInformationHeaderAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<(Self, u32)> {
        let header = AtomHeader::read(t)?;
        let mut out = Self::default();
        let mut offset = 8u32;
        while offset < header.size {
            let child = AtomHeader::peek(t)?;
            offset = offset
                .checked_add(child.size)
                .ok_or_else(|| Mp4Error::BadFormat("gmhd header child overflow".into()))?;
            if offset > header.size {
                return Err(Mp4Error::BadFormat(
                    "gmhd header child overshoots parent size".into(),
                ));
            }
            match child.atom_type {
                FourCC::GMIN => out.gmin = Some(BaseMediaInfoAtom::decode(t)?),
                FourCC::TEXT => out.text = Some(TextMediaInformationAtom::decode(t)?),
                _ => skip(t, child.size as u64)?,
            }
        }
        Ok((out, header.size))
    }
}

/// Base media information wrapper (`gmhd`): header child plus trailing
/// skipped bytes.
#[derive(Debug, Clone, Default)]
pub struct BaseMediaInformationAtom {
    pub header_child: BaseMediaInformationHeaderAtom,
}

impl BaseMediaInformationAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let (header_child, child_size) = BaseMediaInformationHeaderAtom::decode(t)?;
        let consumed = child_size
            .checked_add(8)
            .ok_or_else(|| Mp4Error::BadFormat("gmhd size overflow".into()))?;
        let remaining = header
            .size
            .checked_sub(consumed)
            .ok_or_else(|| Mp4Error::BadFormat("gmhd child larger than parent".into()))?;
        skip(t, remaining as u64)?;
        Ok(Self { header_child })
    }
}
