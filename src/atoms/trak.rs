//! Track atom (`trak`): one per track in the movie, combining the track
//! header with its geometry, matte, editing, referencing, loading,
//! input-mapping, media, and user-data children.
//!
//! Path: `moov/trak`

use crate::atoms::clip::ClippingAtom;
use crate::atoms::edts::EditAtom;
use crate::atoms::imap::TrackInputMapAtom;
use crate::atoms::load::TrackLoadSettingsAtom;
use crate::atoms::matt::TrackMatteAtom;
use crate::atoms::mdia::MediaAtom;
use crate::atoms::tapt::TrackApertureModeDimensionsAtom;
use crate::atoms::tkhd::TrackHeaderAtom;
use crate::atoms::tref::TrackReferenceAtom;
use crate::atoms::txas::TrackExcludeFromAutoselectionAtom;
use crate::atoms::udta::UserDataAtom;
use crate::error::{Mp4Error, Result};
use crate::fourcc::FourCC;
use crate::header::AtomHeader;
use crate::transport::{skip, Transport};

#[derive(Debug, Clone, Default)]
pub struct TrackAtom {
    pub track_header: Option<TrackHeaderAtom>,
    pub track_aperture_mode_dimensions: Option<TrackApertureModeDimensionsAtom>,
    pub clipping: Option<ClippingAtom>,
    pub track_matte: Option<TrackMatteAtom>,
    pub edit: Option<EditAtom>,
    pub track_reference: Option<TrackReferenceAtom>,
    pub track_exclude_from_autoselection: Option<TrackExcludeFromAutoselectionAtom>,
    pub track_load_settings: Option<TrackLoadSettingsAtom>,
    pub track_input_map: Option<TrackInputMapAtom>,
    pub media: Option<MediaAtom>,
    pub user_data: Option<UserDataAtom>,
}

impl TrackAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let mut out = Self::default();
        let mut offset = 8u32;
        while offset < header.size {
            let child = AtomHeader::peek(t)?;
            offset = offset
                .checked_add(child.size)
                .ok_or_else(|| Mp4Error::BadFormat("trak child size overflow".into()))?;
            if offset > header.size {
                return Err(Mp4Error::BadFormat("trak child overshoots parent size".into()));
            }
            match child.atom_type {
                FourCC::TKHD => out.track_header = Some(TrackHeaderAtom::decode(t)?),
                FourCC::TAPT => {
                    out.track_aperture_mode_dimensions =
                        Some(TrackApertureModeDimensionsAtom::decode(t)?)
                }
                FourCC::CLIP => out.clipping = Some(ClippingAtom::decode(t)?),
                FourCC::MATT => out.track_matte = Some(TrackMatteAtom::decode(t)?),
                FourCC::EDTS => out.edit = Some(EditAtom::decode(t)?),
                FourCC::TREF => out.track_reference = Some(TrackReferenceAtom::decode(t)?),
                FourCC::TXAS => {
                    out.track_exclude_from_autoselection =
                        Some(TrackExcludeFromAutoselectionAtom::decode(t)?)
                }
                FourCC::LOAD => out.track_load_settings = Some(TrackLoadSettingsAtom::decode(t)?),
                FourCC::IMAP => out.track_input_map = Some(TrackInputMapAtom::decode(t)?),
                FourCC::MDIA => out.media = Some(MediaAtom::decode(t)?),
                FourCC::UDTA => out.user_data = Some(UserDataAtom::decode(t)?),
                _ => skip(t, child.size as u64)?,
            }
        }
        Ok(out)
    }
}
