//! Color table atom (`ctab`).
//!
//! Path: `moov/trak/ctab`

use crate::error::{Mp4Error, Result};
use crate::header::AtomHeader;
use crate::scalar::{u16_be, u32_be};
use crate::transport::{read_array, Transport};

#[derive(Debug, Clone)]
pub struct ColorTableAtom {
    pub header: AtomHeader,
    pub color_table_seed: u32,
    pub color_table_flags: u16,
    /// One less than the number of entries in `color_array`.
    pub color_table_size: u16,
    /// `{ alpha, red, green, blue }` quadruplets, `color_table_size + 1` of
    /// them.
    pub color_array: Vec<[u16; 4]>,
}

impl ColorTableAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let color_table_seed = u32_be(read_array(t)?);
        let color_table_flags = u16_be(read_array(t)?);
        let color_table_size = u16_be(read_array(t)?);
        let entry_count = color_table_size as u32 + 1;
        let expected = header
            .size
            .checked_sub(16)
            .ok_or_else(|| Mp4Error::BadFormat("ctab shorter than its fixed prefix".into()))?;
        if expected != entry_count.saturating_mul(8) {
            return Err(Mp4Error::BadFormat(
                "ctab color array size does not match color_table_size".into(),
            ));
        }
        let mut color_array = Vec::with_capacity(entry_count as usize);
        for _ in 0..entry_count {
            color_array.push([
                u16_be(read_array(t)?),
                u16_be(read_array(t)?),
                u16_be(read_array(t)?),
                u16_be(read_array(t)?),
            ]);
        }
        Ok(Self {
            header,
            color_table_seed,
            color_table_flags,
            color_table_size,
            color_array,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn decodes_literal_color_table() {
        let bytes: Vec<u8> = vec![
            0x00, 0x00, 0x00, 0x20, 0x63, 0x74, 0x61, 0x62, 0x00, 0x01, 0x02, 0x03, 0x00, 0x01,
            0x00, 0x01, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x10, 0x11, 0x12, 0x13,
            0x14, 0x15, 0x16, 0x17,
        ];
        let mut cursor = Cursor::new(bytes);
        let atom = ColorTableAtom::decode(&mut cursor).unwrap();
        assert_eq!(atom.color_table_seed, 0x0001_0203);
        assert_eq!(atom.color_table_flags, 1);
        assert_eq!(atom.color_table_size, 1);
        assert_eq!(atom.color_array.len(), 2);
        assert_eq!(atom.color_array[0], [0x0001, 0x0203, 0x0405, 0x0607]);
        assert_eq!(atom.color_array[1], [0x1011, 0x1213, 0x1415, 0x1617]);
    }
}
