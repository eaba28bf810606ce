//! The sfnt header and table directory.

use indexmap::IndexMap;
use sfnt_types::{Tag, CFF_SFNT_VERSION, TRUE_SFNT_VERSION, TT_SFNT_VERSION, TYP1_SFNT_VERSION};

use crate::{cursor::ByteCursor, error::Error, source::ByteSource};

/// Every sfnt version accepted by [`check_signature`].
pub const SFNT_VERSIONS: [u32; 4] = [
    TT_SFNT_VERSION,
    TRUE_SFNT_VERSION,
    TYP1_SFNT_VERSION,
    CFF_SFNT_VERSION,
];

/// searchRange, entrySelector, rangeShift
const BINARY_SEARCH_FIELDS_LEN: u64 = 6;

/// The location of a single table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRecord {
    pub tag: Tag,
    pub offset: u64,
    pub length: u64,
}

impl TableRecord {
    /// The offset one past the last byte of the table.
    pub fn end(&self) -> u64 {
        self.offset + self.length
    }
}

/// The tables in a font, keyed by tag.
///
/// Iteration follows the order in which tags first appear in the directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableDirectory {
    sfnt_version: u32,
    records: IndexMap<Tag, TableRecord>,
}

impl TableDirectory {
    /// Read the directory that follows the sfnt version.
    ///
    /// The cursor must be positioned directly after the signature. If a tag
    /// appears more than once, the last record wins.
    pub fn read<S: ByteSource>(
        cursor: &mut ByteCursor<S>,
        sfnt_version: u32,
    ) -> Result<Self, Error> {
        let num_tables = cursor.read::<u16>()?;
        cursor.skip(BINARY_SEARCH_FIELDS_LEN)?;
        let mut records = IndexMap::with_capacity(num_tables as usize);
        for _ in 0..num_tables {
            let tag = cursor.read::<Tag>()?;
            let _checksum = cursor.read::<u32>()?;
            let offset = cursor.read::<u32>()? as u64;
            let length = cursor.read::<u32>()? as u64;
            let record = TableRecord {
                tag,
                offset,
                length,
            };
            if let Some(previous) = records.insert(tag, record) {
                log::debug!("duplicate {tag} record, replacing {previous:?} with {record:?}");
            }
        }
        Ok(TableDirectory {
            sfnt_version,
            records,
        })
    }

    /// The signature at the start of the font.
    pub fn sfnt_version(&self) -> u32 {
        self.sfnt_version
    }

    /// The record for `tag`, if the font has that table.
    pub fn get(&self, tag: Tag) -> Option<&TableRecord> {
        self.records.get(&tag)
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.records.contains_key(&tag)
    }

    /// All records, in directory order.
    pub fn records(&self) -> impl Iterator<Item = &TableRecord> + '_ {
        self.records.values()
    }

    /// The number of distinct tables.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read the sfnt version and check that it is one we understand.
pub fn check_signature<S: ByteSource>(cursor: &mut ByteCursor<S>) -> Result<u32, Error> {
    let version = cursor.read::<u32>()?;
    if SFNT_VERSIONS.contains(&version) {
        Ok(version)
    } else {
        Err(Error::InvalidFormat(version))
    }
}
