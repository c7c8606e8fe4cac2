//! Sync sample atom (`stss`): sample numbers of the track's key frames.
//!
//! Path: `moov/trak/mdia/minf/stbl/stss`

use crate::error::{Mp4Error, Result};
use crate::header::AtomHeader;
use crate::limits::MAX_SYNC_SAMPLE_TABLE_LEN;
use crate::scalar::u32_be;
use crate::transport::{read_array, Transport};
use crate::version_flags::VersionFlags;

#[derive(Debug, Clone)]
pub struct SyncSampleAtom {
    pub header: AtomHeader,
    pub version_flags: VersionFlags,
    pub sync_sample_table: Vec<u32>,
}

impl SyncSampleAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let version_flags = VersionFlags::read(t)?;
        let number_of_entries = u32_be(read_array(t)?);
        if number_of_entries as usize > MAX_SYNC_SAMPLE_TABLE_LEN {
            return Err(Mp4Error::TooManyAtoms(format!(
                "stss declares {number_of_entries} entries, max is {MAX_SYNC_SAMPLE_TABLE_LEN}"
            )));
        }
        let table_size = header
            .size
            .checked_sub(16)
            .ok_or_else(|| Mp4Error::BadFormat("stss shorter than its fixed prefix".into()))?;
        if table_size != number_of_entries.saturating_mul(4) {
            return Err(Mp4Error::BadFormat(
                "stss table size does not match its entry count".into(),
            ));
        }
        let mut sync_sample_table = Vec::with_capacity(number_of_entries as usize);
        for _ in 0..number_of_entries {
            sync_sample_table.push(u32_be(read_array(t)?));
        }
        Ok(Self {
            header,
            version_flags,
            sync_sample_table,
        })
    }
}
