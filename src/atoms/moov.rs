//! Movie atom (`moov`): the metadata container holding everything about
//! a movie except the media samples themselves.
//!
//! Path: `moov`

use crate::atoms::clip::ClippingAtom;
use crate::atoms::ctab::ColorTableAtom;
use crate::atoms::mvhd::MovieHeaderAtom;
use crate::atoms::trak::TrackAtom;
use crate::atoms::udta::UserDataAtom;
use crate::error::{Mp4Error, Result};
use crate::fourcc::FourCC;
use crate::header::AtomHeader;
use crate::limits::MAX_TRACK_ATOMS;
use crate::transport::{skip, Transport};

#[derive(Debug, Clone, Default)]
pub struct MovieAtom {
    pub movie_header: Option<MovieHeaderAtom>,
    pub clipping: Option<ClippingAtom>,
    pub track: Vec<TrackAtom>,
    pub user_data: Option<UserDataAtom>,
    pub color_table: Option<ColorTableAtom>,
}

impl MovieAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let mut out = Self::default();
        let mut offset = 8u32;
        while offset < header.size {
            let child = AtomHeader::peek(t)?;
            offset = offset
                .checked_add(child.size)
                .ok_or_else(|| Mp4Error::BadFormat("moov child size overflow".into()))?;
            if offset > header.size {
                return Err(Mp4Error::BadFormat("moov child overshoots parent size".into()));
            }
            match child.atom_type {
                FourCC::MVHD => {
                    if out.movie_header.is_some() {
                        return Err(Mp4Error::TooManyAtoms(
                            "moov has more than one mvhd".into(),
                        ));
                    }
                    out.movie_header = Some(MovieHeaderAtom::decode(t)?);
                }
                FourCC::CLIP => {
                    if out.clipping.is_some() {
                        return Err(Mp4Error::TooManyAtoms(
                            "moov has more than one clip".into(),
                        ));
                    }
                    out.clipping = Some(ClippingAtom::decode(t)?);
                }
                FourCC::TRAK => {
                    if out.track.len() >= MAX_TRACK_ATOMS {
                        return Err(Mp4Error::TooManyAtoms(format!(
                            "moov has more than {MAX_TRACK_ATOMS} tracks"
                        )));
                    }
                    out.track.push(TrackAtom::decode(t)?);
                }
                FourCC::UDTA => {
                    if out.user_data.is_some() {
                        return Err(Mp4Error::TooManyAtoms(
                            "moov has more than one udta".into(),
                        ));
                    }
                    out.user_data = Some(UserDataAtom::decode(t)?);
                }
                FourCC::CTAB => {
                    if out.color_table.is_some() {
                        return Err(Mp4Error::TooManyAtoms(
                            "moov has more than one ctab".into(),
                        ));
                    }
                    out.color_table = Some(ColorTableAtom::decode(t)?);
                }
                _ => skip(t, child.size as u64)?,
            }
        }
        Ok(out)
    }
}
