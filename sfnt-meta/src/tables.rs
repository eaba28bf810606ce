//! Decoders for the tables that carry font metadata.
//!
//! Each decoder reads from the font's cursor at the offset given by the
//! table directory and writes what it finds into the properties being built.

pub mod fvar;
pub mod name;
pub mod os2;
