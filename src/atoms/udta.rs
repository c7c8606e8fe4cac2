//! User data atom (`udta`): a free-form list of vendor-specific,
//! size-prefixed items with no shared schema.
//!
//! Path: `moov/trak/udta` and `moov/trak/mdia/udta`

use crate::error::{Mp4Error, Result};
use crate::fourcc::FourCC;
use crate::header::AtomHeader;
use crate::limits::MAX_USER_DATA_ITEMS;
use crate::transport::{read_vec, Transport};

#[derive(Debug, Clone)]
pub struct UserDataItem {
    pub size: u32,
    pub item_type: FourCC,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct UserDataAtom {
    pub items: Vec<UserDataItem>,
}

impl UserDataAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let mut items = Vec::new();
        let mut offset = 8u32;
        while offset < header.size {
            if items.len() >= MAX_USER_DATA_ITEMS {
                return Err(Mp4Error::TooManyAtoms(format!(
                    "udta has more than {MAX_USER_DATA_ITEMS} items"
                )));
            }
            let item_header = AtomHeader::read(t)?;
            let data = read_vec(t, item_header.payload_len()? as usize)?;
            offset = offset
                .checked_add(item_header.size)
                .ok_or_else(|| Mp4Error::BadFormat("udta item size overflow".into()))?;
            if offset > header.size {
                return Err(Mp4Error::BadFormat("udta item overshoots parent size".into()));
            }
            items.push(UserDataItem {
                size: item_header.size,
                item_type: item_header.atom_type,
                data,
            });
        }
        Ok(Self { items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn decodes_literal_user_data() {
        let mut bytes: Vec<u8> = vec![0x00, 0x00, 0x00, 0x1C];
        bytes.extend_from_slice(b"udta");
        bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x0C]);
        bytes.extend_from_slice(b"abcd");
        bytes.extend_from_slice(&[1, 2, 3, 4]);
        bytes.extend_from_slice(&[0x00, 0x00, 0x00, 0x08]);
        bytes.extend_from_slice(b"ijkl");
        assert_eq!(bytes.len(), 28);
        let mut cursor = Cursor::new(bytes);
        let atom = UserDataAtom::decode(&mut cursor).unwrap();
        assert_eq!(atom.items.len(), 2);
        assert_eq!(atom.items[0].item_type, FourCC::from_str("abcd"));
        assert_eq!(atom.items[0].data, vec![1, 2, 3, 4]);
        assert_eq!(atom.items[1].item_type, FourCC::from_str("ijkl"));
        assert!(atom.items[1].data.is_empty());
        assert_eq!(cursor.position(), 28);
    }
}
