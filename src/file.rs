//! Top-level movie file: the sequence of atoms found directly in the
//! stream, as opposed to nested inside a container.
//!
//! The source terminates this scan by checking for `MuTFFErrorEOF` after
//! a loop whose condition is itself "does peeking the next header
//! succeed" — i.e. `Eof` from [`crate::header::AtomHeader::peek`] *is*
//! the success case, not a failure to propagate. Every other error still
//! aborts the parse.
//!
//! The source also indexes `movie_data`/`free`/`skip`/`wide` by a single
//! shared `movie_count` counter instead of each array's own count, and
//! checks `pnot` against the `wide` atom limit instead of its own. Both
//! look like copy-paste mistakes rather than intended behaviour: each
//! field here is its own `Vec`, pushed independently, so neither
//! cross-contamination is possible, and `pnot` is checked against its own
//! [`crate::limits::MAX_PREVIEW_ATOMS`].

use crate::atoms::ftyp::FileTypeCompatibilityAtom;
use crate::atoms::moov::MovieAtom;
use crate::atoms::movie_data::{FreeAtom, MovieDataAtom, PreviewAtom, SkipAtom, WideAtom};
use crate::error::{Mp4Error, Result};
use crate::fourcc::FourCC;
use crate::header::AtomHeader;
use crate::limits::{
    MAX_FILE_TYPE_COMPATIBILITY_ATOMS, MAX_FREE_ATOMS, MAX_MOVIE_ATOMS, MAX_MOVIE_DATA_ATOMS,
    MAX_PREVIEW_ATOMS, MAX_SKIP_ATOMS, MAX_WIDE_ATOMS,
};
use crate::transport::{skip, Transport};

#[derive(Debug, Clone, Default)]
pub struct MovieFile {
    pub file_type_compatibility: Vec<FileTypeCompatibilityAtom>,
    pub movie: Vec<MovieAtom>,
    pub movie_data: Vec<MovieDataAtom>,
    pub free: Vec<FreeAtom>,
    pub skip: Vec<SkipAtom>,
    pub wide: Vec<WideAtom>,
    pub preview: Vec<PreviewAtom>,
}

impl MovieFile {
    /// Decode every top-level atom up to end of stream. The transport is
    /// not rewound first; callers that need to reparse a stream from the
    /// start should seek to 0 themselves.
    pub fn decode<T: Transport>(t: &mut T) -> Result<Self> {
        let mut out = Self::default();
        loop {
            let header = match AtomHeader::peek(t) {
                Ok(header) => header,
                Err(Mp4Error::Eof) => return Ok(out),
                Err(e) => return Err(e),
            };
            match header.atom_type {
                FourCC::FTYP => {
                    if out.file_type_compatibility.len() >= MAX_FILE_TYPE_COMPATIBILITY_ATOMS {
                        return Err(Mp4Error::TooManyAtoms(format!(
                            "file has more than {MAX_FILE_TYPE_COMPATIBILITY_ATOMS} ftyp atoms"
                        )));
                    }
                    out.file_type_compatibility
                        .push(FileTypeCompatibilityAtom::decode(t)?);
                }
                FourCC::MOOV => {
                    if out.movie.len() >= MAX_MOVIE_ATOMS {
                        return Err(Mp4Error::TooManyAtoms(format!(
                            "file has more than {MAX_MOVIE_ATOMS} moov atoms"
                        )));
                    }
                    out.movie.push(MovieAtom::decode(t)?);
                }
                FourCC::MDAT => {
                    if out.movie_data.len() >= MAX_MOVIE_DATA_ATOMS {
                        return Err(Mp4Error::TooManyAtoms(format!(
                            "file has more than {MAX_MOVIE_DATA_ATOMS} mdat atoms"
                        )));
                    }
                    out.movie_data.push(MovieDataAtom::decode(t)?);
                }
                FourCC::FREE => {
                    if out.free.len() >= MAX_FREE_ATOMS {
                        return Err(Mp4Error::TooManyAtoms(format!(
                            "file has more than {MAX_FREE_ATOMS} free atoms"
                        )));
                    }
                    out.free.push(FreeAtom::decode(t)?);
                }
                FourCC::SKIP => {
                    if out.skip.len() >= MAX_SKIP_ATOMS {
                        return Err(Mp4Error::TooManyAtoms(format!(
                            "file has more than {MAX_SKIP_ATOMS} skip atoms"
                        )));
                    }
                    out.skip.push(SkipAtom::decode(t)?);
                }
                FourCC::WIDE => {
                    if out.wide.len() >= MAX_WIDE_ATOMS {
                        return Err(Mp4Error::TooManyAtoms(format!(
                            "file has more than {MAX_WIDE_ATOMS} wide atoms"
                        )));
                    }
                    out.wide.push(WideAtom::decode(t)?);
                }
                FourCC::PNOT => {
                    if out.preview.len() >= MAX_PREVIEW_ATOMS {
                        return Err(Mp4Error::TooManyAtoms(format!(
                            "file has more than {MAX_PREVIEW_ATOMS} pnot atoms"
                        )));
                    }
                    out.preview.push(PreviewAtom::decode(t)?);
                }
                _ => {
                    skip(t, header.size as u64)?;
                }
            }
        }
    }
}
