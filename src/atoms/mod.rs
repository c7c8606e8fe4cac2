//! One module per atom type, named after its FourCC (or a descriptive
//! name when several FourCCs share a module, e.g. `gmhd`/`gmin`/`text`).

pub mod clip;
pub mod cslg;
pub mod ctab;
pub mod ctts;
pub mod dref;
pub mod edts;
pub mod elng;
pub mod ftyp;
pub mod gmhd;
pub mod hdlr;
pub mod imap;
pub mod load;
pub mod matt;
pub mod mdhd;
pub mod mdia;
pub mod minf;
pub mod moov;
pub mod movie_data;
pub mod mvhd;
pub mod quickdraw;
pub mod sdtp;
pub mod smhd;
pub mod stbl;
pub mod stco;
pub mod stsc;
pub mod stsd;
pub mod stss;
pub mod stps;
pub mod stsz;
pub mod stts;
pub mod tapt;
pub mod tkhd;
pub mod trak;
pub mod tref;
pub mod txas;
pub mod udta;
pub mod vmhd;
