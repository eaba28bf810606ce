//! The [OS/2](https://docs.microsoft.com/en-us/typography/opentype/spec/os2) table

use sfnt_types::Tag;

use crate::{
    cursor::ByteCursor, directory::TableDirectory, error::Error, properties::FontProperties,
    source::ByteSource,
};

/// 'OS/2'
pub const TAG: Tag = Tag::new(b"OS/2");

/// version, xAvgCharWidth
const WEIGHT_CLASS_OFFSET: u64 = 4;
/// The table must be at least this long to contain usWidthClass.
const WIDTH_CLASS_END: u64 = 8;

/// Read the weight and width classes.
///
/// Values are taken as stored; nothing checks that the weight is one of the
/// usual multiples of 100.
pub(crate) fn decode<S: ByteSource>(
    cursor: &mut ByteCursor<S>,
    directory: &TableDirectory,
    props: &mut FontProperties,
) -> Result<(), Error> {
    let record = directory.get(TAG).ok_or(Error::TableNotFound(TAG))?;
    cursor.seek_to(record.offset)?;
    cursor.skip(WEIGHT_CLASS_OFFSET)?;
    props.weight_class = cursor.read()?;
    if record.length >= WIDTH_CLASS_END {
        props.width_class = cursor.read()?;
    }
    Ok(())
}
