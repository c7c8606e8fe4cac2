//! Track load settings atom (`load`). Unlike most leaf atoms this one
//! carries no version/flags prefix.
//!
//! Path: `moov/trak/load`

use crate::error::Result;
use crate::header::AtomHeader;
use crate::scalar::u32_be;
use crate::transport::{read_array, Transport};

#[derive(Debug, Clone, Copy)]
pub struct TrackLoadSettingsAtom {
    pub header: AtomHeader,
    pub preload_start_time: u32,
    pub preload_duration: u32,
    pub preload_flags: u32,
    pub default_hints: u32,
}

impl TrackLoadSettingsAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        Ok(Self {
            header,
            preload_start_time: u32_be(read_array(t)?),
            preload_duration: u32_be(read_array(t)?),
            preload_flags: u32_be(read_array(t)?),
            default_hints: u32_be(read_array(t)?),
        })
    }
}
