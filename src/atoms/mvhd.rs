//! Movie header atom (`mvhd`). Exactly one per `moov`.
//!
//! Path: `moov/mvhd`

use crate::error::Result;
use crate::header::AtomHeader;
use crate::transport::{read_vec, Transport};
use crate::version_flags::{VersionFlags, VersionFlagsRaw};
use binrw::BinRead;
use std::io::Cursor;
use time::{Duration, PrimitiveDateTime};

/// Movie header atom (`mvhd`). Fixed 108-byte layout.
#[derive(Debug, Clone, BinRead)]
#[br(big)]
pub struct MovieHeaderAtom {
    #[br(temp)]
    version_flags_raw: VersionFlagsRaw,
    pub creation_time: u32,
    pub modification_time: u32,
    pub time_scale: u32,
    pub duration: u32,
    /// 16.16 fixed-point; 1.0 (0x00010000) is normal rate.
    pub preferred_rate: u32,
    /// 8.8 fixed-point; 1.0 (0x0100) is full volume.
    pub preferred_volume: u16,
    _reserved: [u8; 10],
    /// Row-major 3x3 matrix; a-d/x/y cells are 16.16, u/v/w cells are 2.30.
    pub matrix_structure: [u32; 9],
    pub preview_time: u32,
    pub preview_duration: u32,
    pub poster_time: u32,
    pub selection_time: u32,
    pub selection_duration: u32,
    pub current_time: u32,
    pub next_track_id: u32,
    #[br(calc = version_flags_raw.into())]
    pub version_flags: VersionFlags,
}

impl MovieHeaderAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let buf = read_vec(t, header.payload_len()? as usize)?;
        let mut cursor = Cursor::new(buf);
        Ok(Self::read(&mut cursor)?)
    }

    pub fn creation_datetime(&self) -> PrimitiveDateTime {
        crate::consts::mp4_time_zero() + Duration::seconds(self.creation_time as i64)
    }

    pub fn modification_datetime(&self) -> PrimitiveDateTime {
        crate::consts::mp4_time_zero() + Duration::seconds(self.modification_time as i64)
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration as f64 / self.time_scale as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn decodes_source_test_vector() {
        let mut bytes = vec![0x00, 0x00, 0x00, 0x00]; // size patched below
        bytes.extend_from_slice(b"mvhd");
        bytes.push(1); // version
        bytes.extend_from_slice(&[0x01, 0x02, 0x03]); // flags
        // creation_time, modification_time, time_scale, duration, preferred_rate: each 0x01020304
        for _ in 0..5 {
            bytes.extend_from_slice(&[0x01, 0x02, 0x03, 0x04]);
        }
        bytes.extend_from_slice(&[0x01, 0x02]); // preferred_volume
        bytes.extend_from_slice(&[0u8; 10]); // reserved
        // matrix: 36 sequential bytes 0x01..=0x24, so matrix[0] = 0x01020304
        // and matrix[8] = 0x21222324.
        bytes.extend((1u8..=36).collect::<Vec<u8>>());
        // preview/poster/selection/current time + next_track_id: 7 u32 filler fields
        for _ in 0..7 {
            bytes.extend_from_slice(&[0, 0, 0, 0]);
        }
        let size = bytes.len() as u32;
        bytes[0..4].copy_from_slice(&size.to_be_bytes());
        let mut cursor = Cursor::new(bytes);
        let mvhd = MovieHeaderAtom::decode(&mut cursor).unwrap();
        assert_eq!(mvhd.version_flags.version, 1);
        assert_eq!(mvhd.version_flags.flags, 0x0102_03);
        assert_eq!(mvhd.creation_time, 0x0102_0304);
        assert_eq!(mvhd.matrix_structure[0], 0x0102_0304);
        assert_eq!(mvhd.matrix_structure[8], 0x2122_2324);
    }
}
