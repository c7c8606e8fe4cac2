//! Sample dependency flags atom (`sdtp`): one opaque flags byte per
//! sample describing its dependency relationships (I/P/B-frame-style
//! leading/dependency/depended-on/redundancy bits).
//!
//! Path: `moov/trak/mdia/minf/stbl/sdtp`

use crate::error::{Mp4Error, Result};
use crate::header::AtomHeader;
use crate::limits::MAX_SAMPLE_DEPENDENCY_FLAGS_TABLE_LEN;
use crate::transport::{read_vec, Transport};
use crate::version_flags::VersionFlags;

#[derive(Debug, Clone)]
pub struct SampleDependencyFlagsAtom {
    pub header: AtomHeader,
    pub version_flags: VersionFlags,
    pub sample_dependency_flags_table: Vec<u8>,
}

impl SampleDependencyFlagsAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let version_flags = VersionFlags::read(t)?;
        let table_size = header
            .size
            .checked_sub(12)
            .ok_or_else(|| Mp4Error::BadFormat("sdtp shorter than its fixed prefix".into()))?;
        if table_size as usize > MAX_SAMPLE_DEPENDENCY_FLAGS_TABLE_LEN {
            return Err(Mp4Error::TooManyAtoms(format!(
                "sdtp table is {table_size} bytes, max is {MAX_SAMPLE_DEPENDENCY_FLAGS_TABLE_LEN}"
            )));
        }
        let sample_dependency_flags_table = read_vec(t, table_size as usize)?;
        Ok(Self {
            header,
            version_flags,
            sample_dependency_flags_table,
        })
    }
}
