//! Common [scalar data types][data types] used when reading sfnt font containers
//!
//! [data types]: https://docs.microsoft.com/en-us/typography/opentype/spec/otff#data-types

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixed;
mod name_id;
mod raw;
mod tag;

pub use fixed::Fixed;
pub use name_id::NameId;
pub use raw::Scalar;
pub use tag::Tag;

/// The sfnt version for fonts containing TrueType outlines.
pub const TT_SFNT_VERSION: u32 = 0x00010000;
/// The sfnt version used by Apple for TrueType fonts (`'true'`).
pub const TRUE_SFNT_VERSION: u32 = 0x74727565;
/// The sfnt version for old style PostScript fonts wrapped in an sfnt (`'typ1'`).
pub const TYP1_SFNT_VERSION: u32 = 0x74797031;
/// The sfnt version for fonts containing CFF outlines (`'OTTO'`).
pub const CFF_SFNT_VERSION: u32 = 0x4F54544F;
