//! Time-to-sample atom (`stts`): maps runs of samples to their durations
//! in the track's time scale.
//!
//! Path: `moov/trak/mdia/minf/stbl/stts`

use crate::error::{Mp4Error, Result};
use crate::header::AtomHeader;
use crate::limits::MAX_TIME_TO_SAMPLE_TABLE_LEN;
use crate::scalar::u32_be;
use crate::transport::{read_array, Transport};
use crate::version_flags::VersionFlags;

/// One run: `sample_count` consecutive samples each `sample_duration`
/// time-scale units long.
#[derive(Debug, Clone, Copy)]
pub struct TimeToSampleEntry {
    pub sample_count: u32,
    pub sample_duration: u32,
}

impl TimeToSampleEntry {
    fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        Ok(Self {
            sample_count: u32_be(read_array(t)?),
            sample_duration: u32_be(read_array(t)?),
        })
    }
}

#[derive(Debug, Clone)]
pub struct TimeToSampleAtom {
    pub header: AtomHeader,
    pub version_flags: VersionFlags,
    pub entries: Vec<TimeToSampleEntry>,
}

impl TimeToSampleAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let version_flags = VersionFlags::read(t)?;
        let number_of_entries = u32_be(read_array(t)?);
        if number_of_entries as usize > MAX_TIME_TO_SAMPLE_TABLE_LEN {
            return Err(Mp4Error::TooManyAtoms(format!(
                "stts declares {number_of_entries} entries, max is {MAX_TIME_TO_SAMPLE_TABLE_LEN}"
            )));
        }
        let table_size = header
            .size
            .checked_sub(16)
            .ok_or_else(|| Mp4Error::BadFormat("stts shorter than its fixed prefix".into()))?;
        if table_size != number_of_entries.saturating_mul(8) {
            return Err(Mp4Error::BadFormat(
                "stts table size does not match its entry count".into(),
            ));
        }
        let mut entries = Vec::with_capacity(number_of_entries as usize);
        for _ in 0..number_of_entries {
            entries.push(TimeToSampleEntry::decode(t)?);
        }
        Ok(Self {
            header,
            version_flags,
            entries,
        })
    }
}
