//! Four-character-code atom type tags.
//!
//! A `FourCC` is four bytes taken verbatim from the wire and compared
//! numerically, exactly as the source does via its `MuTFF_FOUR_C` packing
//! macro. Most are printable ASCII (`moov`, `trak`, ...) but some vendor
//! extensions are not: GoPro's copyright-prefixed tags and the `imap`
//! children `\0\0ty`/`\0\0in` use bytes outside the ASCII range. Displaying
//! those as UTF-8 would fail, so printing maps each byte through
//! ISO-8859-1 (i.e. `byte as char`) rather than decoding as UTF-8.
use std::fmt;

/// A 4-byte atom type code, compared and hashed by its raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Build a `FourCC` from a 4-byte ASCII literal at compile time.
    pub const fn from_str(s: &str) -> Self {
        let b = s.as_bytes();
        assert!(b.len() == 4, "FourCC literal must be exactly 4 bytes");
        Self([b[0], b[1], b[2], b[3]])
    }

    pub const fn as_bytes(&self) -> [u8; 4] {
        self.0
    }

    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl From<[u8; 4]> for FourCC {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

macro_rules! fourcc_consts {
    ($($name:ident => $lit:literal),* $(,)?) => {
        impl FourCC {
            $(pub const $name: FourCC = FourCC::from_str($lit);)*
        }
    };
}

fourcc_consts! {
    FTYP => "ftyp",
    MOOV => "moov",
    MDAT => "mdat",
    FREE => "free",
    SKIP => "skip",
    WIDE => "wide",
    PNOT => "pnot",

    MVHD => "mvhd",
    CLIP => "clip",
    TRAK => "trak",
    UDTA => "udta",
    CTAB => "ctab",

    TKHD => "tkhd",
    TAPT => "tapt",
    MATT => "matt",
    EDTS => "edts",
    TREF => "tref",
    TXAS => "txas",
    LOAD => "load",
    IMAP => "imap",
    MDIA => "mdia",

    CLEF => "clef",
    PROF => "prof",
    ENOF => "enof",

    CRGN => "crgn",

    EDITS_ELST => "elst",

    TRACK_INPUT => "\0\0in",
    INPUT_TYPE => "\0\0ty",
    OBJECT_ID => "obid",

    MDHD => "mdhd",
    ELNG => "elng",
    HDLR => "hdlr",
    MINF => "minf",

    VMHD => "vmhd",
    SMHD => "smhd",
    GMHD => "gmhd",
    GMIN => "gmin",
    TEXT => "text",
    DINF => "dinf",
    STBL => "stbl",
    DREF => "dref",

    STSD => "stsd",
    STTS => "stts",
    CTTS => "ctts",
    CSLG => "cslg",
    STSS => "stss",
    STPS => "stps",
    STSC => "stsc",
    STSZ => "stsz",
    STCO => "stco",
    SDTP => "sdtp",

    COMPRESSED_MATTE => "kmat",
}
