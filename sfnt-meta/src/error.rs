//! The error type returned by every decoding operation.

use sfnt_types::Tag;

/// An error that occurs while decoding a font.
///
/// Any error aborts the whole decode, with one exception: failures while
/// decoding the `fvar` table are logged and the font is reported as not
/// variable.
#[derive(Debug)]
pub enum Error {
    /// The container signature is not one of the four known sfnt versions.
    InvalidFormat(u32),
    /// A table the decoder expected to be present has no directory entry.
    TableNotFound(Tag),
    /// A read, seek or skip went past the end of the data.
    ///
    /// `position` is the position the operation would have reached.
    EndOfData { size: u64, position: u64 },
    /// Sizes or offsets within a table are inconsistent.
    MalformedTable { tag: Tag, reason: &'static str },
    /// The underlying byte source failed.
    Io(std::io::Error),
}

impl Error {
    pub(crate) fn end_of_data(size: u64, position: u64) -> Self {
        Error::EndOfData { size, position }
    }

    pub(crate) fn malformed(tag: Tag, reason: &'static str) -> Self {
        Error::MalformedTable { tag, reason }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidFormat(version) => write!(f, "Invalid sfnt version 0x{version:08X}"),
            Error::TableNotFound(tag) => write!(f, "the {tag} table is missing"),
            Error::EndOfData { size, position } => {
                write!(f, "end of data: position {position} is past size {size}")
            }
            Error::MalformedTable { tag, reason } => write!(f, "malformed {tag} table: {reason}"),
            Error::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
