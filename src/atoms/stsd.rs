//! Sample description atom (`stsd`): the table mapping sample description
//! IDs to format-specific configuration records.
//!
//! Path: `moov/trak/mdia/minf/stbl/stsd`

use crate::error::{Mp4Error, Result};
use crate::fourcc::FourCC;
use crate::limits::MAX_SAMPLE_DESCRIPTION_TABLE_LEN;
use crate::scalar::u32_be;
use crate::transport::{read_array, read_vec, skip, Transport};
use crate::version_flags::VersionFlags;

/// `{ size, data_format, reserved[6], data_reference_index, additional }`.
/// The format-specific payload (`additional`) is kept as opaque bytes:
/// interpreting it is a media-codec concern, not this decoder's.
#[derive(Debug, Clone)]
pub struct SampleDescription {
    pub size: u32,
    pub data_format: FourCC,
    pub data_reference_index: u16,
    pub additional: Vec<u8>,
}

impl SampleDescription {
    pub(crate) fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let size = u32_be(read_array(t)?);
        let data_format = FourCC(read_array(t)?);
        let _reserved: [u8; 6] = read_array(t)?;
        let data_reference_index = crate::scalar::u16_be(read_array(t)?);
        let additional_len = size.checked_sub(16).ok_or_else(|| {
            Mp4Error::BadFormat("sample description shorter than its 16-byte prefix".into())
        })?;
        let additional = read_vec(t, additional_len as usize)?;
        Ok(Self {
            size,
            data_format,
            data_reference_index,
            additional,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SampleDescriptionAtom {
    pub version_flags: Option<VersionFlags>,
    pub entries: Vec<SampleDescription>,
}

impl SampleDescriptionAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = crate::header::AtomHeader::read(t)?;
        let version_flags = VersionFlags::read(t)?;
        let number_of_entries = u32_be(read_array(t)?);
        if number_of_entries as usize > MAX_SAMPLE_DESCRIPTION_TABLE_LEN {
            return Err(Mp4Error::TooManyAtoms(format!(
                "stsd declares {number_of_entries} entries, max is {MAX_SAMPLE_DESCRIPTION_TABLE_LEN}"
            )));
        }
        let mut offset = 16u32;
        let mut entries = Vec::with_capacity(number_of_entries as usize);
        for _ in 0..number_of_entries {
            let child = crate::header::AtomHeader::peek(t)?;
            offset = offset
                .checked_add(child.size)
                .ok_or_else(|| Mp4Error::BadFormat("stsd entry size overflow".into()))?;
            if offset > header.size {
                return Err(Mp4Error::BadFormat("stsd entry overshoots parent size".into()));
            }
            entries.push(SampleDescription::decode(t)?);
        }
        let remaining = header
            .size
            .checked_sub(offset)
            .ok_or_else(|| Mp4Error::BadFormat("stsd entries exceed parent size".into()))?;
        skip(t, remaining as u64)?;
        Ok(Self {
            version_flags: Some(version_flags),
            entries,
        })
    }
}
