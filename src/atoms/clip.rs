//! Clipping region (`crgn`) and clipping (`clip`) atoms.
//!
//! Path: `moov/trak/clip`

use crate::atoms::quickdraw::QuickDrawRegion;
use crate::error::Result;
use crate::header::AtomHeader;
use crate::transport::Transport;

#[derive(Debug, Clone)]
pub struct ClippingRegionAtom {
    pub header: AtomHeader,
    pub region: QuickDrawRegion,
}

impl ClippingRegionAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let region = QuickDrawRegion::decode(t)?;
        Ok(Self { header, region })
    }
}

#[derive(Debug, Clone)]
pub struct ClippingAtom {
    pub header: AtomHeader,
    pub clipping_region: ClippingRegionAtom,
}

impl ClippingAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let clipping_region = ClippingRegionAtom::decode(t)?;
        Ok(Self {
            header,
            clipping_region,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn decodes_literal_clipping_atom() {
        let bytes: Vec<u8> = vec![
            0x00, 0x00, 0x00, 0x1A, 0x63, 0x6C, 0x69, 0x70, 0x00, 0x00, 0x00, 0x12, 0x63, 0x72,
            0x67, 0x6E, 0x00, 0x0A, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,
        ];
        let mut cursor = Cursor::new(bytes);
        let atom = ClippingAtom::decode(&mut cursor).unwrap();
        assert_eq!(atom.header.size, 26);
        assert_eq!(atom.clipping_region.header.size, 18);
        assert_eq!(atom.clipping_region.region.size, 10);
        assert_eq!(atom.clipping_region.region.rect.top, 1);
        assert_eq!(atom.clipping_region.region.rect.left, 0x0203);
        assert_eq!(atom.clipping_region.region.rect.bottom, 0x0405);
        assert_eq!(atom.clipping_region.region.rect.right, 0x0607);
    }
}
