//! Compile-time capacities for bounded collections.
//!
//! Every count the decoder accumulates (track count, table row count, user
//! data item count, ...) is checked against one of these limits before the
//! corresponding `Vec` is grown. Exceeding a limit is reported as
//! [`crate::error::Mp4Error::TooManyAtoms`] rather than left to grow
//! unbounded, since most of these counts come straight off attacker-controlled
//! `u32` fields in the file.
//!
//! These are plain constants rather than a runtime-configurable struct: the
//! source this is ported from used fixed-capacity arrays sized by macros at
//! compile time, and a const is the direct Rust equivalent. A caller that
//! needs different capacities forks these values; nothing in the decoder
//! reads them through indirection that would make them runtime-configurable
//! without also recompiling.

pub const MAX_COMPATIBLE_BRANDS: usize = 64;
pub const MAX_USER_DATA_ITEMS: usize = 64;
pub const MAX_TRACK_ATOMS: usize = 64;
pub const MAX_TRACK_REFERENCE_TYPE_ATOMS: usize = 16;
pub const MAX_TRACK_REFERENCE_TYPE_TRACK_IDS: usize = 64;
pub const MAX_LANGUAGE_TAG_LENGTH: usize = 256;
pub const MAX_COMPONENT_NAME_LENGTH: usize = 256;
pub const MAX_DATA_REFERENCES: usize = 16;
pub const MAX_DATA_REFERENCE_DATA_SIZE: usize = 4096;
pub const MAX_SAMPLE_DESCRIPTION_TABLE_LEN: usize = 256;
pub const MAX_TIME_TO_SAMPLE_TABLE_LEN: usize = 1 << 20;
pub const MAX_COMPOSITION_OFFSET_TABLE_LEN: usize = 1 << 20;
pub const MAX_SYNC_SAMPLE_TABLE_LEN: usize = 1 << 20;
pub const MAX_PARTIAL_SYNC_SAMPLE_TABLE_LEN: usize = 1 << 20;
pub const MAX_SAMPLE_TO_CHUNK_TABLE_LEN: usize = 1 << 20;
pub const MAX_SAMPLE_SIZE_TABLE_LEN: usize = 1 << 22;
pub const MAX_CHUNK_OFFSET_TABLE_LEN: usize = 1 << 22;
pub const MAX_SAMPLE_DEPENDENCY_FLAGS_TABLE_LEN: usize = 1 << 22;
pub const MAX_EDIT_LIST_ENTRIES: usize = 1024;
pub const MAX_FILE_TYPE_COMPATIBILITY_ATOMS: usize = 8;
pub const MAX_MOVIE_ATOMS: usize = 8;
pub const MAX_MOVIE_DATA_ATOMS: usize = 64;
pub const MAX_FREE_ATOMS: usize = 64;
pub const MAX_SKIP_ATOMS: usize = 64;
pub const MAX_WIDE_ATOMS: usize = 64;
pub const MAX_PREVIEW_ATOMS: usize = 8;
