//! Reading font metadata from sfnt containers
//!
//! This crate decodes the descriptive parts of an OpenType or TrueType font:
//! the localized strings of the [`name`][name] table, the weight and width
//! classes from [`OS/2`][os2], and the axes and named instances of
//! [`fvar`][fvar]. Nothing else in the font is read.
//!
//! Strings are keyed by BCP-47 style locale tags such as `en-US` or
//! `zh-Hans`; each field offers an exact lookup and a [fallback] lookup that
//! always produces something sensible for a user's locale.
//!
//! # Example
//!
//! ```no_run
//! # let path_to_my_font_file = std::path::Path::new("");
//! let props = sfnt_meta::open_path(path_to_my_font_file)?;
//! println!(
//!     "{} ({}), weight {}",
//!     props.family_for("ja-JP"),
//!     props.subfamily_for("ja-JP"),
//!     props.weight_class()
//! );
//! for instance in props.instances() {
//!     println!("  {}", instance.name_for("en-US"));
//! }
//! # Ok::<_, sfnt_meta::Error>(())
//! ```
//!
//! Fonts can also be decoded from memory with [`open`], from any seekable
//! reader with [`open_reader`], or from a forward only stream with
//! [`open_stream`].
//!
//! [name]: https://learn.microsoft.com/en-us/typography/opentype/spec/name
//! [os2]: https://learn.microsoft.com/en-us/typography/opentype/spec/os2
//! [fvar]: https://learn.microsoft.com/en-us/typography/opentype/spec/fvar

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]

mod cursor;
mod directory;
mod error;
pub mod fallback;
pub mod locale;
mod parser;
mod properties;
mod source;
pub mod tables;

use std::{
    fs::File,
    io::{BufReader, Read, Seek},
    path::Path,
};

pub use cursor::{ByteCursor, StringEncoding, TableCursor};
pub use directory::{check_signature, TableDirectory, TableRecord, SFNT_VERSIONS};
pub use error::Error;
pub use parser::{FontParser, ParseState};
pub use properties::{FontProperties, LocalizedStrings, VariationAxis, VariationInstance};
pub use source::{ByteSource, MemorySource, SeekSource, StreamSource};

/// Public re-export of the sfnt-types crate.
pub extern crate sfnt_types as types;

/// Decode a font held in memory.
pub fn open(data: &[u8]) -> Result<FontProperties, Error> {
    FontParser::new(ByteCursor::from_slice(data)).parse()
}

/// Decode the font file at `path`.
pub fn open_path(path: impl AsRef<Path>) -> Result<FontProperties, Error> {
    let path = path.as_ref();
    log::debug!("opening {}", path.display());
    open_reader(BufReader::new(File::open(path)?))
}

/// Decode a font from a seekable reader, starting at its current position.
pub fn open_reader<R: Read + Seek>(reader: R) -> Result<FontProperties, Error> {
    let (source, size) = SeekSource::new(reader)?;
    FontParser::new(ByteCursor::new(source, size)).parse()
}

/// Decode a font from a reader that can only move forward.
///
/// `len` is the number of bytes the font occupies. Decoding fails with
/// [`Error::Io`] if the tables are laid out in a way that would need the
/// reader to go back.
pub fn open_stream<R: Read>(reader: R, len: u64) -> Result<FontProperties, Error> {
    FontParser::new(ByteCursor::new(StreamSource::new(reader), len)).parse()
}

#[cfg(test)]
#[path = "tests/test_fonts.rs"]
mod test_fonts;
