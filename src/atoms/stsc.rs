//! Sample-to-chunk atom (`stsc`): maps runs of chunks to how many samples
//! each chunk in the run holds and which sample description applies.
//!
//! Path: `moov/trak/mdia/minf/stbl/stsc`

use crate::error::{Mp4Error, Result};
use crate::header::AtomHeader;
use crate::limits::MAX_SAMPLE_TO_CHUNK_TABLE_LEN;
use crate::scalar::u32_be;
use crate::transport::{read_array, Transport};
use crate::version_flags::VersionFlags;

#[derive(Debug, Clone, Copy)]
pub struct SampleToChunkEntry {
    pub first_chunk: u32,
    pub samples_per_chunk: u32,
    pub sample_description_id: u32,
}

impl SampleToChunkEntry {
    fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        Ok(Self {
            first_chunk: u32_be(read_array(t)?),
            samples_per_chunk: u32_be(read_array(t)?),
            sample_description_id: u32_be(read_array(t)?),
        })
    }
}

#[derive(Debug, Clone)]
pub struct SampleToChunkAtom {
    pub header: AtomHeader,
    pub version_flags: VersionFlags,
    pub entries: Vec<SampleToChunkEntry>,
}

impl SampleToChunkAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let version_flags = VersionFlags::read(t)?;
        let number_of_entries = u32_be(read_array(t)?);
        if number_of_entries as usize > MAX_SAMPLE_TO_CHUNK_TABLE_LEN {
            return Err(Mp4Error::TooManyAtoms(format!(
                "stsc declares {number_of_entries} entries, max is {MAX_SAMPLE_TO_CHUNK_TABLE_LEN}"
            )));
        }
        let table_size = header
            .size
            .checked_sub(16)
            .ok_or_else(|| Mp4Error::BadFormat("stsc shorter than its fixed prefix".into()))?;
        if table_size != number_of_entries.saturating_mul(12) {
            return Err(Mp4Error::BadFormat(
                "stsc table size does not match its entry count".into(),
            ));
        }
        let mut entries = Vec::with_capacity(number_of_entries as usize);
        for _ in 0..number_of_entries {
            entries.push(SampleToChunkEntry::decode(t)?);
        }
        Ok(Self {
            header,
            version_flags,
            entries,
        })
    }
}
