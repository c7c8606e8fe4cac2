//! Extended language tag atom (`elng`).
//!
//! Path: `moov/trak/mdia/elng`

use crate::error::{Mp4Error, Result};
use crate::header::AtomHeader;
use crate::limits::MAX_LANGUAGE_TAG_LENGTH;
use crate::transport::{read_vec, Transport};
use crate::version_flags::VersionFlags;

#[derive(Debug, Clone)]
pub struct ExtendedLanguageTagAtom {
    pub header: AtomHeader,
    pub version_flags: VersionFlags,
    /// Raw BCP-47 language tag bytes.
    pub language_tag: Vec<u8>,
}

impl ExtendedLanguageTagAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let version_flags = VersionFlags::read(t)?;
        let tag_len = header
            .payload_len()?
            .checked_sub(4)
            .ok_or_else(|| Mp4Error::BadFormat("elng shorter than its fixed prefix".into()))?;
        if tag_len as usize > MAX_LANGUAGE_TAG_LENGTH {
            return Err(Mp4Error::TooManyAtoms(format!(
                "elng language tag is {tag_len} bytes, max is {MAX_LANGUAGE_TAG_LENGTH}"
            )));
        }
        let language_tag = read_vec(t, tag_len as usize)?;
        Ok(Self {
            header,
            version_flags,
            language_tag,
        })
    }
}
