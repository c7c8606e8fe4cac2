//! Partial sync sample atom (`stps`): sample numbers of "partial sync"
//! samples (open-GOP key frames).
//!
//! Path: `moov/trak/mdia/minf/stbl/stps`

use crate::error::{Mp4Error, Result};
use crate::header::AtomHeader;
use crate::limits::MAX_PARTIAL_SYNC_SAMPLE_TABLE_LEN;
use crate::scalar::u32_be;
use crate::transport::{read_array, Transport};
use crate::version_flags::VersionFlags;

#[derive(Debug, Clone)]
pub struct PartialSyncSampleAtom {
    pub header: AtomHeader,
    pub version_flags: VersionFlags,
    pub partial_sync_sample_table: Vec<u32>,
}

impl PartialSyncSampleAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let version_flags = VersionFlags::read(t)?;
        let entry_count = u32_be(read_array(t)?);
        if entry_count as usize > MAX_PARTIAL_SYNC_SAMPLE_TABLE_LEN {
            return Err(Mp4Error::TooManyAtoms(format!(
                "stps declares {entry_count} entries, max is {MAX_PARTIAL_SYNC_SAMPLE_TABLE_LEN}"
            )));
        }
        let table_size = header
            .size
            .checked_sub(16)
            .ok_or_else(|| Mp4Error::BadFormat("stps shorter than its fixed prefix".into()))?;
        if table_size != entry_count.saturating_mul(4) {
            return Err(Mp4Error::BadFormat(
                "stps table size does not match its entry count".into(),
            ));
        }
        let mut partial_sync_sample_table = Vec::with_capacity(entry_count as usize);
        for _ in 0..entry_count {
            partial_sync_sample_table.push(u32_be(read_array(t)?));
        }
        Ok(Self {
            header,
            version_flags,
            partial_sync_sample_table,
        })
    }
}
