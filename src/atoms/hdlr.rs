//! Handler reference atom (`hdlr`).
//!
//! Path: `moov/trak/mdia/hdlr`, also used inside `minf` variants.

use crate::error::{Mp4Error, Result};
use crate::fourcc::FourCC;
use crate::header::AtomHeader;
use crate::limits::MAX_COMPONENT_NAME_LENGTH;
use crate::scalar::u32_be;
use crate::transport::{read_array, read_vec, Transport};
use crate::version_flags::VersionFlags;

#[derive(Debug, Clone)]
pub struct HandlerReferenceAtom {
    pub header: AtomHeader,
    pub version_flags: VersionFlags,
    pub component_type: FourCC,
    pub component_subtype: FourCC,
    pub component_manufacturer: u32,
    pub component_flags: u32,
    pub component_flags_mask: u32,
    /// Pascal-style or plain ASCII component name, raw bytes.
    pub component_name: Vec<u8>,
}

impl HandlerReferenceAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let version_flags = VersionFlags::read(t)?;
        let component_type = FourCC(read_array(t)?);
        let component_subtype = FourCC(read_array(t)?);
        let component_manufacturer = u32_be(read_array(t)?);
        let component_flags = u32_be(read_array(t)?);
        let component_flags_mask = u32_be(read_array(t)?);
        let name_len = header
            .payload_len()?
            .checked_sub(24)
            .ok_or_else(|| Mp4Error::BadFormat("hdlr shorter than its fixed prefix".into()))?;
        if name_len as usize > MAX_COMPONENT_NAME_LENGTH {
            return Err(Mp4Error::TooManyAtoms(format!(
                "hdlr component_name is {name_len} bytes, max is {MAX_COMPONENT_NAME_LENGTH}"
            )));
        }
        let component_name = read_vec(t, name_len as usize)?;
        Ok(Self {
            header,
            version_flags,
            component_type,
            component_subtype,
            component_manufacturer,
            component_flags,
            component_flags_mask,
            component_name,
        })
    }
}
