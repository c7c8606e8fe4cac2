//! The plain top-level atoms that carry no structure the decoder cares
//! about: `mdat`, `free`, `skip`, `wide`. Each is just a header followed by
//! opaque payload bytes that are skipped rather than buffered — sample data
//! decoding is explicitly out of scope.

use crate::error::Result;
use crate::fourcc::FourCC;
use crate::header::AtomHeader;
use crate::scalar::u16_be;
use crate::transport::{read_array, skip, Transport};

macro_rules! skip_atom {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            pub header: AtomHeader,
        }

        impl $name {
            pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
                let header = AtomHeader::read(t)?;
                skip(t, header.payload_len()? as u64)?;
                Ok(Self { header })
            }
        }
    };
}

skip_atom!(MovieDataAtom);
skip_atom!(FreeAtom);
skip_atom!(SkipAtom);
skip_atom!(WideAtom);

/// Preview atom (`pnot`): a reference to a separate preview resource, not
/// itself a container of further atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewAtom {
    pub header: AtomHeader,
    pub modification_time: u32,
    pub version: u16,
    pub atom_type: FourCC,
    pub atom_index: u16,
}

impl PreviewAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let modification_time = crate::scalar::u32_be(read_array(t)?);
        let version = u16_be(read_array(t)?);
        let atom_type = FourCC(read_array(t)?);
        let atom_index = u16_be(read_array(t)?);
        Ok(Self {
            header,
            modification_time,
            version,
            atom_type,
            atom_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn decodes_wide_atom() {
        let bytes: &[u8] = &[
            0x00, 0x00, 0x00, 0x10, 0x77, 0x69, 0x64, 0x65, 0, 0, 0, 0, 0, 0, 0, 0,
        ];
        let mut cursor = Cursor::new(bytes);
        let wide = WideAtom::decode(&mut cursor).unwrap();
        assert_eq!(wide.header.size, 16);
        assert_eq!(wide.header.atom_type, FourCC::WIDE);
        assert_eq!(cursor.position(), 16);
    }
}
