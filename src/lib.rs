//! Recursive-descent decoder for the QuickTime / MP4 (ISO base-media)
//! atom tree.
//!
//! Every atom starts with an 8-byte `{ size: u32, type: FourCC }` header
//! ([`header::AtomHeader`]). Container atoms hold further atoms and are
//! decoded by looping over child headers; leaf atoms hold a fixed or
//! table-shaped payload and are decoded directly. [`file::MovieFile`] is
//! the entry point: it scans a stream for its top-level atoms and
//! recurses into `moov` to build the full tree.
//!
//! This crate only reads. Writing back a tree to the wire format is a
//! deliberate non-goal.

pub mod atoms;
pub mod consts;
pub mod error;
pub mod file;
pub mod fourcc;
pub mod header;
pub mod limits;
pub mod scalar;
pub mod transport;
pub mod version_flags;

pub use error::{Mp4Error, Result};
pub use file::MovieFile;
pub use fourcc::FourCC;
pub use header::AtomHeader;
pub use transport::Transport;
