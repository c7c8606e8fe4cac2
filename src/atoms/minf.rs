//! Media information atom (`minf`) and its three mutually exclusive
//! variants: video, sound, and a "base" fallback for everything else
//! (timed-metadata and timecode tracks, mainly).
//!
//! Path: `moov/trak/mdia/minf`
//!
//! Unlike every other container here, `minf` doesn't carry its own
//! distinguishing type switch up front: it has to peek its *children*
//! until it recognizes one of `vmhd`/`smhd`/`gmhd`, then rewind back to
//! its own start and redecode as a whole using the matching variant's
//! full decoder. A `minf` whose children never include one of those
//! three is malformed.

use crate::atoms::dref::DataInformationAtom;
use crate::atoms::gmhd::BaseMediaInformationAtom;
use crate::atoms::hdlr::HandlerReferenceAtom;
use crate::atoms::smhd::SoundMediaInformationHeaderAtom;
use crate::atoms::stbl::SampleTableAtom;
use crate::atoms::vmhd::VideoMediaInformationHeaderAtom;
use crate::error::{Mp4Error, Result};
use crate::fourcc::FourCC;
use crate::header::AtomHeader;
use crate::transport::{skip, Transport};

#[derive(Debug, Clone, Default)]
pub struct VideoMediaInformationAtom {
    pub video_media_information_header: Option<VideoMediaInformationHeaderAtom>,
    pub handler_reference: Option<HandlerReferenceAtom>,
    pub data_information: Option<DataInformationAtom>,
    pub sample_table: Option<SampleTableAtom>,
}

impl VideoMediaInformationAtom {
    fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let mut out = Self::default();
        let mut offset = 8u32;
        while offset < header.size {
            let child = AtomHeader::peek(t)?;
            offset = offset
                .checked_add(child.size)
                .ok_or_else(|| Mp4Error::BadFormat("minf(video) child size overflow".into()))?;
            if offset > header.size {
                return Err(Mp4Error::BadFormat(
                    "minf(video) child overshoots parent size".into(),
                ));
            }
            match child.atom_type {
                FourCC::VMHD => {
                    out.video_media_information_header =
                        Some(VideoMediaInformationHeaderAtom::decode(t)?)
                }
                FourCC::HDLR => out.handler_reference = Some(HandlerReferenceAtom::decode(t)?),
                FourCC::DINF => out.data_information = Some(DataInformationAtom::decode(t)?),
                FourCC::STBL => out.sample_table = Some(SampleTableAtom::decode(t)?),
                _ => skip(t, child.size as u64)?,
            }
        }
        Ok(out)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SoundMediaInformationAtom {
    pub sound_media_information_header: Option<SoundMediaInformationHeaderAtom>,
    pub handler_reference: Option<HandlerReferenceAtom>,
    pub data_information: Option<DataInformationAtom>,
    pub sample_table: Option<SampleTableAtom>,
}

impl SoundMediaInformationAtom {
    fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let mut out = Self::default();
        let mut offset = 8u32;
        while offset < header.size {
            let child = AtomHeader::peek(t)?;
            offset = offset
                .checked_add(child.size)
                .ok_or_else(|| Mp4Error::BadFormat("minf(sound) child size overflow".into()))?;
            if offset > header.size {
                return Err(Mp4Error::BadFormat(
                    "minf(sound) child overshoots parent size".into(),
                ));
            }
            match child.atom_type {
                FourCC::SMHD => {
                    out.sound_media_information_header =
                        Some(SoundMediaInformationHeaderAtom::decode(t)?)
                }
                FourCC::HDLR => out.handler_reference = Some(HandlerReferenceAtom::decode(t)?),
                FourCC::DINF => out.data_information = Some(DataInformationAtom::decode(t)?),
                FourCC::STBL => out.sample_table = Some(SampleTableAtom::decode(t)?),
                _ => skip(t, child.size as u64)?,
            }
        }
        Ok(out)
    }
}

/// Which of the three mutually exclusive shapes a `minf` atom turned out
/// to hold, decided by which header its children carry.
#[derive(Debug, Clone)]
pub enum MediaInformationAtom {
    Video(VideoMediaInformationAtom),
    Sound(SoundMediaInformationAtom),
    Base(BaseMediaInformationAtom),
}

impl MediaInformationAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let start_offset = t.tell()?;
        let header = AtomHeader::read(t)?;
        let mut offset = 8u32;
        while offset < header.size {
            let child = AtomHeader::peek(t)?;
            offset = offset
                .checked_add(child.size)
                .ok_or_else(|| Mp4Error::BadFormat("minf child size overflow".into()))?;
            if offset > header.size {
                return Err(Mp4Error::BadFormat("minf child overshoots parent size".into()));
            }
            match child.atom_type {
                FourCC::VMHD => {
                    rewind(t, start_offset)?;
                    return Ok(Self::Video(VideoMediaInformationAtom::decode(t)?));
                }
                FourCC::SMHD => {
                    rewind(t, start_offset)?;
                    return Ok(Self::Sound(SoundMediaInformationAtom::decode(t)?));
                }
                FourCC::GMHD => {
                    rewind(t, start_offset)?;
                    return Ok(Self::Base(BaseMediaInformationAtom::decode(t)?));
                }
                _ => skip(t, child.size as u64)?,
            }
        }
        Err(Mp4Error::BadFormat(
            "minf has no vmhd/smhd/gmhd child to identify its variant".into(),
        ))
    }
}

fn rewind<T: Transport>(t: &mut T, start_offset: u64) -> Result<()> {
    let current = t.tell()?;
    let delta = start_offset as i64 - current as i64;
    t.seek_relative(delta)?;
    Ok(())
}
