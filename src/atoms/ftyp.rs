//! File type compatibility atom (`ftyp`).

use crate::error::{Mp4Error, Result};
use crate::fourcc::FourCC;
use crate::header::AtomHeader;
use crate::limits::MAX_COMPATIBLE_BRANDS;
use crate::transport::{read_array, read_vec, Transport};
use binrw::BinRead;
use std::io::Cursor;

#[derive(Debug, Clone, BinRead)]
#[br(big, import { brand_count: u32 })]
pub struct FileTypeCompatibilityAtom {
    pub major_brand: FourCCRaw,
    pub minor_version: u32,
    #[br(count = brand_count)]
    pub compatible_brands: Vec<FourCCRaw>,
}

/// `binrw` can't derive directly into [`FourCC`] (it isn't `BinRead`), so
/// leaf atoms read the raw 4 bytes and convert afterwards.
#[derive(Debug, Clone, Copy, BinRead)]
#[br(big)]
pub struct FourCCRaw(pub [u8; 4]);

impl From<FourCCRaw> for FourCC {
    fn from(raw: FourCCRaw) -> Self {
        FourCC(raw.0)
    }
}

impl FileTypeCompatibilityAtom {
    /// `size - 16` must be a multiple of 4; the quotient is the brand
    /// count. Checked here, before the `binrw` parse, rather than letting
    /// its `count` expression silently truncate a non-multiple remainder.
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let payload_len = header.payload_len()?;
        let region = payload_len
            .checked_sub(8)
            .ok_or_else(|| Mp4Error::BadFormat("ftyp shorter than its fixed prefix".into()))?;
        if region % 4 != 0 {
            return Err(Mp4Error::BadFormat(format!(
                "ftyp compatible_brands region ({region} bytes) is not a multiple of 4"
            )));
        }
        let brand_count = region / 4;
        if brand_count as usize > MAX_COMPATIBLE_BRANDS {
            return Err(Mp4Error::TooManyAtoms(format!(
                "ftyp declares {brand_count} compatible brands, max is {MAX_COMPATIBLE_BRANDS}"
            )));
        }
        let buf = read_vec(t, payload_len as usize)?;
        let mut cursor = Cursor::new(buf);
        Ok(FileTypeCompatibilityAtom::read_args(
            &mut cursor,
            FileTypeCompatibilityAtomBinReadArgs { brand_count },
        )?)
    }

    pub fn major_brand(&self) -> FourCC {
        self.major_brand.into()
    }

    pub fn compatible_brands(&self) -> Vec<FourCC> {
        self.compatible_brands.iter().map(|&b| b.into()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn decodes_literal_ftyp() {
        let bytes: &[u8] = &[
            0x00, 0x00, 0x00, 0x14, 0x66, 0x74, 0x79, 0x70, 0x71, 0x74, 0x20, 0x20, 0x00, 0x00,
            0x02, 0x00, 0x71, 0x74, 0x20, 0x20,
        ];
        let mut cursor = Cursor::new(bytes);
        let ftyp = FileTypeCompatibilityAtom::decode(&mut cursor).unwrap();
        assert_eq!(ftyp.major_brand().to_string(), "qt  ");
        assert_eq!(ftyp.minor_version, 0x0000_0200);
        assert_eq!(ftyp.compatible_brands().len(), 1);
        assert_eq!(ftyp.compatible_brands()[0].to_string(), "qt  ");
    }

    #[test]
    fn rejects_misaligned_brand_region() {
        let mut bytes = vec![0x00, 0x00, 0x00, 0x13]; // size = 19, not 16 + 4*N
        bytes.extend_from_slice(b"ftyp");
        bytes.extend_from_slice(b"qt  ");
        bytes.extend_from_slice(&[0, 0, 2, 0]);
        bytes.extend_from_slice(b"qt "); // 3 trailing bytes
        let mut cursor = Cursor::new(bytes);
        let err = FileTypeCompatibilityAtom::decode(&mut cursor).unwrap_err();
        assert!(matches!(err, Mp4Error::BadFormat(_)));
    }
}
