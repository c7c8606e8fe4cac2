//! Sample table atom (`stbl`): the container holding every table that
//! maps a track's samples to their format, timing, size and location.
//!
//! Path: `moov/trak/mdia/minf/stbl`

use crate::atoms::cslg::CompositionShiftLeastGreatestAtom;
use crate::atoms::ctts::CompositionOffsetAtom;
use crate::atoms::sdtp::SampleDependencyFlagsAtom;
use crate::atoms::stco::ChunkOffsetAtom;
use crate::atoms::stsc::SampleToChunkAtom;
use crate::atoms::stsd::SampleDescriptionAtom;
use crate::atoms::stss::SyncSampleAtom;
use crate::atoms::stps::PartialSyncSampleAtom;
use crate::atoms::stsz::SampleSizeAtom;
use crate::atoms::stts::TimeToSampleAtom;
use crate::error::{Mp4Error, Result};
use crate::fourcc::FourCC;
use crate::header::AtomHeader;
use crate::transport::{skip, Transport};

/// `stsh` (shadow sync), `sgpd`/`sbgp` (sample grouping) are reserved for
/// future use by the format this is ported from and fall through to the
/// default skip below, same as any atom this decoder doesn't recognize.
#[derive(Debug, Clone, Default)]
pub struct SampleTableAtom {
    pub sample_description: Option<SampleDescriptionAtom>,
    pub time_to_sample: Option<TimeToSampleAtom>,
    pub composition_offset: Option<CompositionOffsetAtom>,
    pub composition_shift_least_greatest: Option<CompositionShiftLeastGreatestAtom>,
    pub sync_sample: Option<SyncSampleAtom>,
    pub partial_sync_sample: Option<PartialSyncSampleAtom>,
    pub sample_to_chunk: Option<SampleToChunkAtom>,
    pub sample_size: Option<SampleSizeAtom>,
    pub chunk_offset: Option<ChunkOffsetAtom>,
    pub sample_dependency_flags: Option<SampleDependencyFlagsAtom>,
}

impl SampleTableAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let mut out = Self::default();
        let mut offset = 8u32;
        while offset < header.size {
            let child = AtomHeader::peek(t)?;
            offset = offset
                .checked_add(child.size)
                .ok_or_else(|| Mp4Error::BadFormat("stbl child size overflow".into()))?;
            if offset > header.size {
                return Err(Mp4Error::BadFormat("stbl child overshoots parent size".into()));
            }
            match child.atom_type {
                FourCC::STSD => out.sample_description = Some(SampleDescriptionAtom::decode(t)?),
                FourCC::STTS => out.time_to_sample = Some(TimeToSampleAtom::decode(t)?),
                FourCC::CTTS => out.composition_offset = Some(CompositionOffsetAtom::decode(t)?),
                FourCC::CSLG => {
                    out.composition_shift_least_greatest =
                        Some(CompositionShiftLeastGreatestAtom::decode(t)?)
                }
                FourCC::STSS => out.sync_sample = Some(SyncSampleAtom::decode(t)?),
                FourCC::STPS => out.partial_sync_sample = Some(PartialSyncSampleAtom::decode(t)?),
                FourCC::STSC => out.sample_to_chunk = Some(SampleToChunkAtom::decode(t)?),
                FourCC::STSZ => out.sample_size = Some(SampleSizeAtom::decode(t)?),
                FourCC::STCO => out.chunk_offset = Some(ChunkOffsetAtom::decode(t)?),
                FourCC::SDTP => {
                    out.sample_dependency_flags = Some(SampleDependencyFlagsAtom::decode(t)?)
                }
                _ => skip(t, child.size as u64)?,
            }
        }
        Ok(out)
    }
}
