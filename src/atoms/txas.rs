//! Track exclude-from-autoselection atom (`txas`): a marker atom with no
//! payload beyond its own header.
//!
//! Path: `moov/trak/txas`

use crate::error::Result;
use crate::header::AtomHeader;
use crate::transport::{skip, Transport};

#[derive(Debug, Clone, Copy)]
pub struct TrackExcludeFromAutoselectionAtom {
    pub header: AtomHeader,
}

impl TrackExcludeFromAutoselectionAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        skip(t, header.payload_len()? as u64)?;
        Ok(Self { header })
    }
}
