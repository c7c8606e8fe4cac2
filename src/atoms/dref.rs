//! Data reference (`dref`) and data information (`dinf`) atoms.
//!
//! Path: `moov/trak/mdia/minf/dinf/dref`

use crate::error::{Mp4Error, Result};
use crate::fourcc::FourCC;
use crate::header::AtomHeader;
use crate::limits::{MAX_DATA_REFERENCES, MAX_DATA_REFERENCE_DATA_SIZE};
use crate::transport::{read_array, read_vec, skip, Transport};
use crate::version_flags::VersionFlags;

/// One entry in a `dref` table: a named, versioned reference to a data
/// source (commonly a self-referencing `url `/`alis` atom).
#[derive(Debug, Clone)]
pub struct DataReference {
    pub size: u32,
    pub reference_type: FourCC,
    pub version_flags: VersionFlags,
    pub data: Vec<u8>,
}

impl DataReference {
    fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let size = crate::scalar::u32_be(read_array(t)?);
        let reference_type = FourCC(read_array(t)?);
        let version_flags = VersionFlags::read(t)?;
        let data_size = size
            .checked_sub(12)
            .ok_or_else(|| Mp4Error::BadFormat("data reference shorter than its prefix".into()))?;
        if data_size as usize > MAX_DATA_REFERENCE_DATA_SIZE {
            return Err(Mp4Error::TooManyAtoms(format!(
                "data reference payload is {data_size} bytes, max is {MAX_DATA_REFERENCE_DATA_SIZE}"
            )));
        }
        let data = read_vec(t, data_size as usize)?;
        Ok(Self {
            size,
            reference_type,
            version_flags,
            data,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct DataReferenceAtom {
    pub header: Option<AtomHeader>,
    pub version_flags: Option<VersionFlags>,
    pub data_references: Vec<DataReference>,
}

impl DataReferenceAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let version_flags = VersionFlags::read(t)?;
        let number_of_entries = crate::scalar::u32_be(read_array(t)?);
        if number_of_entries as usize > MAX_DATA_REFERENCES {
            return Err(Mp4Error::TooManyAtoms(format!(
                "dref declares {number_of_entries} entries, max is {MAX_DATA_REFERENCES}"
            )));
        }
        let mut offset = 16u32;
        let mut data_references = Vec::with_capacity(number_of_entries as usize);
        for _ in 0..number_of_entries {
            let child = AtomHeader::peek(t)?;
            offset = offset
                .checked_add(child.size)
                .ok_or_else(|| Mp4Error::BadFormat("dref entry size overflow".into()))?;
            if offset > header.size {
                return Err(Mp4Error::BadFormat("dref entry overshoots parent size".into()));
            }
            data_references.push(DataReference::decode(t)?);
        }
        let remaining = header
            .size
            .checked_sub(offset)
            .ok_or_else(|| Mp4Error::BadFormat("dref entries exceed parent size".into()))?;
        skip(t, remaining as u64)?;
        Ok(Self {
            header: Some(header),
            version_flags: Some(version_flags),
            data_references,
        })
    }
}

/// Data information atom (`dinf`): wraps a single `dref`.
#[derive(Debug, Clone, Default)]
pub struct DataInformationAtom {
    pub data_reference: Option<DataReferenceAtom>,
}

impl DataInformationAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let mut out = Self::default();
        let mut offset = 8u32;
        while offset < header.size {
            let child = AtomHeader::peek(t)?;
            offset = offset
                .checked_add(child.size)
                .ok_or_else(|| Mp4Error::BadFormat("dinf child size overflow".into()))?;
            if offset > header.size {
                return Err(Mp4Error::BadFormat("dinf child overshoots parent size".into()));
            }
            match child.atom_type {
                FourCC::DREF => out.data_reference = Some(DataReferenceAtom::decode(t)?),
                _ => skip(t, child.size as u64)?,
            }
        }
        Ok(out)
    }
}
