//! Composition offset atom (`ctts`): maps samples to the offset between
//! decode order and presentation order.
//!
//! Path: `moov/trak/mdia/minf/stbl/ctts`

use crate::error::{Mp4Error, Result};
use crate::header::AtomHeader;
use crate::limits::MAX_COMPOSITION_OFFSET_TABLE_LEN;
use crate::scalar::u32_be;
use crate::transport::{read_array, Transport};
use crate::version_flags::VersionFlags;

#[derive(Debug, Clone, Copy)]
pub struct CompositionOffsetEntry {
    pub sample_count: u32,
    pub composition_offset: u32,
}

impl CompositionOffsetEntry {
    fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        Ok(Self {
            sample_count: u32_be(read_array(t)?),
            composition_offset: u32_be(read_array(t)?),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CompositionOffsetAtom {
    pub header: AtomHeader,
    pub version_flags: VersionFlags,
    pub entries: Vec<CompositionOffsetEntry>,
}

impl CompositionOffsetAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let version_flags = VersionFlags::read(t)?;
        let entry_count = u32_be(read_array(t)?);
        if entry_count as usize > MAX_COMPOSITION_OFFSET_TABLE_LEN {
            return Err(Mp4Error::TooManyAtoms(format!(
                "ctts declares {entry_count} entries, max is {MAX_COMPOSITION_OFFSET_TABLE_LEN}"
            )));
        }
        let table_size = header
            .size
            .checked_sub(16)
            .ok_or_else(|| Mp4Error::BadFormat("ctts shorter than its fixed prefix".into()))?;
        if table_size != entry_count.saturating_mul(8) {
            return Err(Mp4Error::BadFormat(
                "ctts table size does not match its entry count".into(),
            ));
        }
        let mut entries = Vec::with_capacity(entry_count as usize);
        for _ in 0..entry_count {
            entries.push(CompositionOffsetEntry::decode(t)?);
        }
        Ok(Self {
            header,
            version_flags,
            entries,
        })
    }
}
