//! Composition shift least/greatest atom (`cslg`): the bounds on
//! composition offsets declared by a sibling `ctts`.
//!
//! Path: `moov/trak/mdia/minf/stbl/cslg`

use crate::error::Result;
use crate::header::AtomHeader;
use crate::scalar::{i32_be, u32_be};
use crate::transport::{read_array, Transport};
use crate::version_flags::VersionFlags;

#[derive(Debug, Clone, Copy)]
pub struct CompositionShiftLeastGreatestAtom {
    pub header: AtomHeader,
    pub version_flags: VersionFlags,
    pub composition_offset_to_display_offset_shift: u32,
    pub least_display_offset: i32,
    pub greatest_display_offset: i32,
    pub display_start_time: i32,
    pub display_end_time: i32,
}

impl CompositionShiftLeastGreatestAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let version_flags = VersionFlags::read(t)?;
        Ok(Self {
            header,
            version_flags,
            composition_offset_to_display_offset_shift: u32_be(read_array(t)?),
            least_display_offset: i32_be(read_array(t)?),
            greatest_display_offset: i32_be(read_array(t)?),
            display_start_time: i32_be(read_array(t)?),
            display_end_time: i32_be(read_array(t)?),
        })
    }
}
