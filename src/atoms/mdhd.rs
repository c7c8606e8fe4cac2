//! Media header atom (`mdhd`). One per track; describes characteristics
//! of a single media (`mdia`), including time scale and duration.
//!
//! Path: `moov/trak/mdia/mdhd`

use crate::error::Result;
use crate::header::AtomHeader;
use crate::transport::{read_vec, Transport};
use crate::version_flags::{VersionFlags, VersionFlagsRaw};
use binrw::BinRead;
use std::io::Cursor;
use time::{ext::NumericalDuration, Duration};

#[derive(Debug, Clone, BinRead)]
#[br(big)]
pub struct MediaHeaderAtom {
    #[br(temp)]
    version_flags_raw: VersionFlagsRaw,
    pub creation_time: u32,
    pub modification_time: u32,
    pub time_scale: u32,
    /// Unscaled duration ("ticks"); divide by `time_scale` for seconds.
    pub duration: u32,
    /// ISO-639-2/T language code, packed as three 5-bit values offset by
    /// `0x60`, with the top bit reserved as padding.
    #[br(map = decode_language)]
    pub language: String,
    pub quality: u16,
    #[br(calc = version_flags_raw.into())]
    pub version_flags: VersionFlags,
}

impl MediaHeaderAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let buf = read_vec(t, header.payload_len()? as usize)?;
        let mut cursor = Cursor::new(buf);
        Ok(Self::read(&mut cursor)?)
    }

    pub fn duration_scaled(&self) -> Duration {
        (self.duration as f64 / self.time_scale as f64).seconds()
    }
}

fn decode_language(packed: u16) -> String {
    [
        (((packed >> 10) & 0b1_1111) as u8 + 0x60) as char,
        (((packed >> 5) & 0b1_1111) as u8 + 0x60) as char,
        ((packed & 0b1_1111) as u8 + 0x60) as char,
    ]
    .iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::decode_language;

    #[test]
    fn decodes_eng_language_code() {
        // 'e'-0x60=5, 'n'-0x60=14, 'g'-0x60=7
        let packed = (5u16 << 10) | (14u16 << 5) | 7u16;
        assert_eq!(decode_language(packed), "eng");
    }
}
