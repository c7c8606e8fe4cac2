//! Error taxonomy for the atom decoder.
//!
//! Every decode function returns `Result<T, Mp4Error>`. There is no retry and
//! no partial result: a failing decoder aborts the parse and the error
//! propagates to the caller unchanged.

use std::fmt;

/// Failure kinds surfaced by the atom decoder.
///
/// There is no `None`/success variant: success is the `Ok` side of a
/// `Result`, not a variant of this enum.
#[derive(Debug)]
pub enum Mp4Error {
    /// The underlying transport failed on `read`, `write`, `seek` or `tell`.
    Io(std::io::Error),
    /// End of stream. Expected only at the top-level parser's atom-header
    /// peek boundary; anywhere else it is a premature-truncation failure.
    Eof,
    /// A structural violation: size/count arithmetic doesn't add up, a
    /// child atom overshoots its parent, an unrecognised `minf` flavour,
    /// a table whose byte length isn't a multiple of its row width.
    BadFormat(String),
    /// A bounded array or bounded region would overflow its compile-time
    /// capacity. Also used for over-long variable-length string regions.
    TooManyAtoms(String),
    /// Reserved: only raised by implementations that replace bounded
    /// arrays with growable allocations, on allocation failure.
    OutOfMemory,
}

impl fmt::Display for Mp4Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Eof => write!(f, "unexpected end of stream"),
            Self::BadFormat(msg) => write!(f, "bad format: {msg}"),
            Self::TooManyAtoms(msg) => write!(f, "too many atoms: {msg}"),
            Self::OutOfMemory => write!(f, "out of memory"),
        }
    }
}

impl std::error::Error for Mp4Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Mp4Error {
    fn from(err: std::io::Error) -> Self {
        // An EOF-shaped read failure is reported by transports as
        // `ErrorKind::UnexpectedEof`; fold it into our own `Eof` so callers
        // can match on it without reaching into `std::io`.
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Self::Eof
        } else {
            Self::Io(err)
        }
    }
}

impl From<binrw::Error> for Mp4Error {
    fn from(err: binrw::Error) -> Self {
        match err {
            binrw::Error::Io(e) => Self::from(e),
            other => Self::BadFormat(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Mp4Error>;
