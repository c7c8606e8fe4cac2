//! Media atom (`mdia`): a track's media header, handler, extended
//! language tag, media information, and user data.
//!
//! Path: `moov/trak/mdia`

use crate::atoms::elng::ExtendedLanguageTagAtom;
use crate::atoms::hdlr::HandlerReferenceAtom;
use crate::atoms::mdhd::MediaHeaderAtom;
use crate::atoms::minf::MediaInformationAtom;
use crate::atoms::udta::UserDataAtom;
use crate::error::{Mp4Error, Result};
use crate::fourcc::FourCC;
use crate::header::AtomHeader;
use crate::transport::{skip, Transport};

#[derive(Debug, Clone, Default)]
pub struct MediaAtom {
    pub media_header: Option<MediaHeaderAtom>,
    pub extended_language_tag: Option<ExtendedLanguageTagAtom>,
    pub handler_reference: Option<HandlerReferenceAtom>,
    pub media_information: Option<MediaInformationAtom>,
    pub user_data: Option<UserDataAtom>,
}

impl MediaAtom {
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let header = AtomHeader::read(t)?;
        let mut out = Self::default();
        let mut offset = 8u32;
        while offset < header.size {
            let child = AtomHeader::peek(t)?;
            offset = offset
                .checked_add(child.size)
                .ok_or_else(|| Mp4Error::BadFormat("mdia child size overflow".into()))?;
            if offset > header.size {
                return Err(Mp4Error::BadFormat("mdia child overshoots parent size".into()));
            }
            match child.atom_type {
                FourCC::MDHD => out.media_header = Some(MediaHeaderAtom::decode(t)?),
                FourCC::ELNG => {
                    out.extended_language_tag = Some(ExtendedLanguageTagAtom::decode(t)?)
                }
                FourCC::HDLR => out.handler_reference = Some(HandlerReferenceAtom::decode(t)?),
                FourCC::MINF => out.media_information = Some(MediaInformationAtom::decode(t)?),
                FourCC::UDTA => out.user_data = Some(UserDataAtom::decode(t)?),
                _ => skip(t, child.size as u64)?,
            }
        }
        Ok(out)
    }
}
