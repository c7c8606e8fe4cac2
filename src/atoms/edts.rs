//! Edit list (`elst`) and edit (`edts`) atoms: the table that maps a
//! track's presentation timeline onto its media timeline.
//!
//! Path: `moov/trak/edts`

use crate::error::{Mp4Error, Result};
use crate::header::AtomHeader;
use crate::limits::MAX_EDIT_LIST_ENTRIES;
use crate::scalar::u32_be;
use crate::transport::{read_array, skip, Transport};
use crate::version_flags::VersionFlags;

#[derive(Debug, Clone, Copy)]
pub struct EditListEntry {
    pub track_duration: u32,
    pub media_time: u32,
    pub media_rate: u32,
}

impl EditListEntry {
    fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        Ok(Self {
            track_duration: u32_be(read_array(t)?),
            media_time: u32_be(read_array(t)?),
            media_rate: u32_be(read_array(t)?),
        })
    }
}

#[derive(Debug, Clone)]
pub struct EditListAtom {
    pub header: AtomHeader,
    pub version_flags: VersionFlags,
    pub entries: Vec<EditListEntry>,
}

impl EditListAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let version_flags = VersionFlags::read(t)?;
        let number_of_entries = u32_be(read_array(t)?);
        if number_of_entries as usize > MAX_EDIT_LIST_ENTRIES {
            return Err(Mp4Error::TooManyAtoms(format!(
                "elst declares {number_of_entries} entries, max is {MAX_EDIT_LIST_ENTRIES}"
            )));
        }
        let table_size = header
            .size
            .checked_sub(16)
            .ok_or_else(|| Mp4Error::BadFormat("elst shorter than its fixed prefix".into()))?;
        if table_size != number_of_entries.saturating_mul(12) {
            return Err(Mp4Error::BadFormat(
                "elst table size does not match its entry count".into(),
            ));
        }
        let mut entries = Vec::with_capacity(number_of_entries as usize);
        for _ in 0..number_of_entries {
            entries.push(EditListEntry::decode(t)?);
        }
        Ok(Self {
            header,
            version_flags,
            entries,
        })
    }
}

#[derive(Debug, Clone)]
pub struct EditAtom {
    pub header: AtomHeader,
    pub edit_list_atom: EditListAtom,
}

impl EditAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let edit_list_atom = EditListAtom::decode(t)?;
        let consumed = edit_list_atom
            .header
            .size
            .checked_add(8)
            .ok_or_else(|| Mp4Error::BadFormat("edts size overflow".into()))?;
        let remaining = header
            .size
            .checked_sub(consumed)
            .ok_or_else(|| Mp4Error::BadFormat("edts child larger than parent".into()))?;
        skip(t, remaining as u64)?;
        Ok(Self {
            header,
            edit_list_atom,
        })
    }
}
