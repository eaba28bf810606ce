//! Test data shared between the sfnt-meta crates.
//!
//! Fonts are assembled in memory rather than loaded from disk; see
//! [`FontBuilder`] and the per-table builders.

pub mod bebuffer;
pub mod fvar;
pub mod name;
pub mod os2;
pub mod sfnt;
pub mod source_han;

pub use bebuffer::BeBuffer;
pub use fvar::FvarBuilder;
pub use name::NameTableBuilder;
pub use sfnt::FontBuilder;

/// Microsoft platform language ids used by the fixtures.
pub mod lcid {
    pub const EN_US: u16 = 0x0409;
    pub const JA_JP: u16 = 0x0411;
    pub const KO_KR: u16 = 0x0412;
    pub const ZH_TW: u16 = 0x0404;
    pub const ZH_CN: u16 = 0x0804;
    pub const ZH_HK: u16 = 0x0c04;
    pub const FR_FR: u16 = 0x040c;
    /// Not present in the LCID table; resolves to the root locale.
    pub const NEUTRAL: u16 = 0x0000;
}
