//! Sample size atom (`stsz`): either a single uniform sample size or a
//! per-sample size table.
//!
//! Path: `moov/trak/mdia/minf/stbl/stsz`

use crate::error::{Mp4Error, Result};
use crate::header::AtomHeader;
use crate::limits::MAX_SAMPLE_SIZE_TABLE_LEN;
use crate::scalar::u32_be;
use crate::transport::{read_array, skip, Transport};
use crate::version_flags::VersionFlags;

#[derive(Debug, Clone)]
pub struct SampleSizeAtom {
    pub header: AtomHeader,
    pub version_flags: VersionFlags,
    pub sample_size: u32,
    /// Per-sample sizes. Empty when `sample_size != 0`, in which case
    /// every sample is `sample_size` bytes and no table is stored on
    /// disk.
    pub sample_size_table: Vec<u32>,
}

impl SampleSizeAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let version_flags = VersionFlags::read(t)?;
        let sample_size = u32_be(read_array(t)?);
        let number_of_entries = u32_be(read_array(t)?);
        let sample_size_table = if sample_size == 0 {
            if number_of_entries as usize > MAX_SAMPLE_SIZE_TABLE_LEN {
                return Err(Mp4Error::TooManyAtoms(format!(
                    "stsz declares {number_of_entries} entries, max is {MAX_SAMPLE_SIZE_TABLE_LEN}"
                )));
            }
            let table_size = header
                .size
                .checked_sub(20)
                .ok_or_else(|| Mp4Error::BadFormat("stsz shorter than its fixed prefix".into()))?;
            if table_size != number_of_entries.saturating_mul(4) {
                return Err(Mp4Error::BadFormat(
                    "stsz table size does not match its entry count".into(),
                ));
            }
            let mut table = Vec::with_capacity(number_of_entries as usize);
            for _ in 0..number_of_entries {
                table.push(u32_be(read_array(t)?));
            }
            table
        } else {
            let remaining = header
                .size
                .checked_sub(20)
                .ok_or_else(|| Mp4Error::BadFormat("stsz shorter than its fixed prefix".into()))?;
            skip(t, remaining as u64)?;
            Vec::new()
        };
        Ok(Self {
            header,
            version_flags,
            sample_size,
            sample_size_table,
        })
    }
}
