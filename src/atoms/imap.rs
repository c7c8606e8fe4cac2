//! Track input map atom (`imap`) and its children: a track input atom
//! (`\0\0in`) carrying an input-type atom (`\0\0ty`) and/or an object-ID
//! atom (`obid`).
//!
//! Path: `moov/trak/imap`

use crate::error::{Mp4Error, Result};
use crate::fourcc::FourCC;
use crate::header::AtomHeader;
use crate::limits::MAX_TRACK_REFERENCE_TYPE_ATOMS;
use crate::scalar::{u16_be, u32_be};
use crate::transport::{read_array, skip, Transport};

#[derive(Debug, Clone, Copy)]
pub struct InputTypeAtom {
    pub header: AtomHeader,
    pub input_type: u32,
}

impl InputTypeAtom {
    fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let input_type = u32_be(read_array(t)?);
        Ok(Self { header, input_type })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ObjectIdAtom {
    pub header: AtomHeader,
    pub object_id: u32,
}

impl ObjectIdAtom {
    fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let object_id = u32_be(read_array(t)?);
        Ok(Self { header, object_id })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrackInputAtom {
    pub atom_id: u32,
    pub child_count: u16,
    pub input_type_atom: Option<InputTypeAtom>,
    pub object_id_atom: Option<ObjectIdAtom>,
}

impl TrackInputAtom {
    fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let atom_id = u32_be(read_array(t)?);
        let child_count = u16_be(read_array(t)?);
        let _reserved: [u8; 6] = read_array(t)?;
        let mut out = Self {
            atom_id,
            child_count,
            ..Self::default()
        };
        let mut offset = 20u32;
        while offset < header.size {
            let child = AtomHeader::peek(t)?;
            offset = offset
                .checked_add(child.size)
                .ok_or_else(|| Mp4Error::BadFormat("track input atom child size overflow".into()))?;
            if offset > header.size {
                return Err(Mp4Error::BadFormat(
                    "track input atom child overshoots parent size".into(),
                ));
            }
            match child.atom_type {
                FourCC::INPUT_TYPE => out.input_type_atom = Some(InputTypeAtom::decode(t)?),
                FourCC::OBJECT_ID => out.object_id_atom = Some(ObjectIdAtom::decode(t)?),
                _ => skip(t, child.size as u64)?,
            }
        }
        Ok(out)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrackInputMapAtom {
    pub track_input_atoms: Vec<TrackInputAtom>,
}

impl TrackInputMapAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let mut track_input_atoms = Vec::new();
        let mut offset = 8u32;
        while offset < header.size {
            let child = AtomHeader::peek(t)?;
            offset = offset
                .checked_add(child.size)
                .ok_or_else(|| Mp4Error::BadFormat("imap child size overflow".into()))?;
            if offset > header.size {
                return Err(Mp4Error::BadFormat("imap child overshoots parent size".into()));
            }
            if child.atom_type == FourCC::TRACK_INPUT {
                if track_input_atoms.len() >= MAX_TRACK_REFERENCE_TYPE_ATOMS {
                    return Err(Mp4Error::TooManyAtoms(format!(
                        "imap has more than {MAX_TRACK_REFERENCE_TYPE_ATOMS} track input atoms"
                    )));
                }
                track_input_atoms.push(TrackInputAtom::decode(t)?);
            } else {
                skip(t, child.size as u64)?;
            }
        }
        Ok(Self { track_input_atoms })
    }
}
