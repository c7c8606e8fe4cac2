//! Track reference atom (`tref`): a list of typed references to other
//! tracks (e.g. `hint`, `cdsc`). The reference's own FourCC carries its
//! meaning, so every child is decoded the same way regardless of type.
//!
//! Path: `moov/trak/tref`

use crate::error::{Mp4Error, Result};
use crate::header::AtomHeader;
use crate::limits::{MAX_TRACK_REFERENCE_TYPE_ATOMS, MAX_TRACK_REFERENCE_TYPE_TRACK_IDS};
use crate::scalar::u32_be;
use crate::transport::{read_array, Transport};

#[derive(Debug, Clone)]
pub struct TrackReferenceTypeAtom {
    pub header: AtomHeader,
    pub track_ids: Vec<u32>,
}

impl TrackReferenceTypeAtom {
    fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let payload = header.payload_len()?;
        if payload % 4 != 0 {
            return Err(Mp4Error::BadFormat(
                "track reference type atom is not a whole number of track IDs".into(),
            ));
        }
        let track_id_count = payload / 4;
        if track_id_count as usize > MAX_TRACK_REFERENCE_TYPE_TRACK_IDS {
            return Err(Mp4Error::TooManyAtoms(format!(
                "track reference declares {track_id_count} track IDs, max is {MAX_TRACK_REFERENCE_TYPE_TRACK_IDS}"
            )));
        }
        let mut track_ids = Vec::with_capacity(track_id_count as usize);
        for _ in 0..track_id_count {
            track_ids.push(u32_be(read_array(t)?));
        }
        Ok(Self { header, track_ids })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrackReferenceAtom {
    pub track_reference_type: Vec<TrackReferenceTypeAtom>,
}

impl TrackReferenceAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let mut track_reference_type = Vec::new();
        let mut offset = 8u32;
        while offset < header.size {
            if track_reference_type.len() >= MAX_TRACK_REFERENCE_TYPE_ATOMS {
                return Err(Mp4Error::TooManyAtoms(format!(
                    "tref has more than {MAX_TRACK_REFERENCE_TYPE_ATOMS} reference types"
                )));
            }
            let child = AtomHeader::peek(t)?;
            offset = offset
                .checked_add(child.size)
                .ok_or_else(|| Mp4Error::BadFormat("tref child size overflow".into()))?;
            if offset > header.size {
                return Err(Mp4Error::BadFormat("tref child overshoots parent size".into()));
            }
            track_reference_type.push(TrackReferenceTypeAtom::decode(t)?);
        }
        Ok(Self {
            track_reference_type,
        })
    }
}
