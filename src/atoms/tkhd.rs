//! Track header atom (`tkhd`).
//!
//! Path: `moov/trak[multiple]/tkhd`

use crate::error::Result;
use crate::header::AtomHeader;
use crate::transport::{read_vec, Transport};
use crate::version_flags::{VersionFlags, VersionFlagsRaw};
use binrw::BinRead;
use std::io::Cursor;
use time::{Duration, PrimitiveDateTime};

/// Track header atom (`tkhd`). Fixed 92-byte layout.
#[derive(Debug, Clone, BinRead)]
#[br(big)]
pub struct TrackHeaderAtom {
    #[br(temp)]
    version_flags_raw: VersionFlagsRaw,
    pub creation_time: u32,
    pub modification_time: u32,
    pub track_id: u32,
    _reserved1: [u8; 4],
    pub duration: u32,
    _reserved2: [u8; 8],
    pub layer: u16,
    pub alternate_group: u16,
    /// 8.8 fixed-point.
    pub volume: u16,
    _reserved3: [u8; 2],
    pub matrix_structure: [u32; 9],
    /// 16.16 fixed-point.
    pub track_width: u32,
    /// 16.16 fixed-point.
    pub track_height: u32,
    #[br(calc = version_flags_raw.into())]
    pub version_flags: VersionFlags,
}

impl TrackHeaderAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let buf = read_vec(t, header.payload_len()? as usize)?;
        let mut cursor = Cursor::new(buf);
        Ok(Self::read(&mut cursor)?)
    }

    pub fn width(&self) -> f64 {
        self.track_width as f64 / 65536.0
    }

    pub fn height(&self) -> f64 {
        self.track_height as f64 / 65536.0
    }

    pub fn volume(&self) -> f64 {
        self.volume as f64 / 256.0
    }

    pub fn creation_datetime(&self) -> PrimitiveDateTime {
        crate::consts::mp4_time_zero() + Duration::seconds(self.creation_time as i64)
    }

    pub fn modification_datetime(&self) -> PrimitiveDateTime {
        crate::consts::mp4_time_zero() + Duration::seconds(self.modification_time as i64)
    }
}
