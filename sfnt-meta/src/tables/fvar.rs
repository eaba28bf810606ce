//! The [fvar (Font Variations)](https://docs.microsoft.com/en-us/typography/opentype/spec/fvar) table

use indexmap::IndexMap;
use sfnt_types::{NameId, Tag};

use crate::{
    cursor::{ByteCursor, TableCursor},
    directory::TableDirectory,
    error::Error,
    properties::{LocalizedStrings, VariationAxis, VariationInstance},
    source::ByteSource,
};

/// 'fvar'
pub const TAG: Tag = Tag::new(b"fvar");

/// The length of the fixed part of the table, before any padding that
/// precedes the axis array.
const HEADER_LEN: u64 = 16;
/// tag, minValue, defaultValue, maxValue, flags, axisNameID
const MIN_AXIS_SIZE: u16 = 20;
/// subfamilyNameID, flags
const INSTANCE_HEADER_LEN: u64 = 4;

/// Axes and named instances decoded from `fvar`.
///
/// Names are left empty; they are filled in once the `name` table has been
/// read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variations {
    pub axes: Vec<VariationAxis>,
    pub instances: Vec<VariationInstance>,
}

/// The header fields that describe the layout of the rest of the table.
#[derive(Clone, Copy, Debug)]
struct Header {
    axes_array_offset: u16,
    axis_count: u16,
    axis_size: u16,
    instance_count: u16,
    instance_size: u16,
}

/// Decode the axes and instances.
///
/// The table is copied out of the font first and every read stays inside
/// it; arrays that would run past the table's length are
/// [`Error::MalformedTable`]. A table with no axes decodes to empty
/// [`Variations`].
pub(crate) fn decode<S: ByteSource>(
    cursor: &mut ByteCursor<S>,
    directory: &TableDirectory,
) -> Result<Variations, Error> {
    let record = directory.get(TAG).ok_or(Error::TableNotFound(TAG))?;
    cursor.seek_to(record.offset)?;
    let mut table = cursor.extract(record.length)?;
    // majorVersion, minorVersion
    table.skip(4)?;
    let axes_array_offset = table.read::<u16>()?;
    // reserved
    table.skip(2)?;
    let axis_count = table.read::<u16>()?;
    if axis_count == 0 {
        return Ok(Variations::default());
    }
    let header = Header {
        axes_array_offset,
        axis_count,
        axis_size: table.read()?,
        instance_count: table.read()?,
        instance_size: table.read()?,
    };
    log::debug!("{header:?}");
    header.validate(record.length)?;

    table.seek_to(header.axes_array_offset as u64)?;
    let mut axis_data = table.extract(header.axis_count as u64 * header.axis_size as u64)?;
    let axes = (0..header.axis_count as u64)
        .map(|ix| {
            axis_data.seek_to(ix * header.axis_size as u64)?;
            read_axis(&mut axis_data)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let instances = if header.instance_count > 0 {
        read_instances(&mut table, &header, &axes)?
    } else {
        Vec::new()
    };
    Ok(Variations { axes, instances })
}

impl Header {
    fn coords_len(&self) -> u64 {
        4 * self.axis_count as u64
    }

    fn has_postscript_name(&self) -> bool {
        self.instance_size as u64 >= INSTANCE_HEADER_LEN + self.coords_len() + 2
    }

    /// Check the record sizes, and that both arrays fit in `table_len` bytes.
    fn validate(&self, table_len: u64) -> Result<(), Error> {
        if (self.axes_array_offset as u64) < HEADER_LEN {
            return Err(Error::malformed(TAG, "axes array overlaps header"));
        }
        if self.axis_size < MIN_AXIS_SIZE {
            return Err(Error::malformed(TAG, "axis records too small"));
        }
        if self.instance_count > 0
            && (self.instance_size as u64) < INSTANCE_HEADER_LEN + self.coords_len()
        {
            return Err(Error::malformed(TAG, "instance records too small for axis count"));
        }
        let end = self.axes_array_offset as u64
            + self.axis_count as u64 * self.axis_size as u64
            + self.instance_count as u64 * self.instance_size as u64;
        if end > table_len {
            return Err(Error::malformed(TAG, "axis and instance arrays overrun the table"));
        }
        Ok(())
    }
}

fn read_axis(data: &mut TableCursor) -> Result<VariationAxis, Error> {
    let tag = data.read()?;
    let min = data.read_fixed()?;
    let default = data.read_fixed()?;
    let max = data.read_fixed()?;
    // flags
    data.skip(2)?;
    let name_id = data.read()?;
    Ok(VariationAxis {
        tag,
        min,
        default,
        max,
        name_id,
        name: LocalizedStrings::default(),
    })
}

/// Read the instance array, which directly follows the axis array.
fn read_instances(
    table: &mut TableCursor,
    header: &Header,
    axes: &[VariationAxis],
) -> Result<Vec<VariationInstance>, Error> {
    let instance_size = header.instance_size as u64;
    let has_postscript_name = header.has_postscript_name();

    let mut data = table.extract(header.instance_count as u64 * instance_size)?;
    (0..header.instance_count as u64)
        .map(|ix| -> Result<VariationInstance, Error> {
            data.seek_to(ix * instance_size)?;
            let name_id = data.read::<NameId>()?;
            // flags
            data.skip(2)?;
            let mut coordinates = IndexMap::with_capacity(axes.len());
            for axis in axes {
                coordinates.insert(axis.tag, data.read_fixed()?.to_f64());
            }
            let postscript_name_id = if has_postscript_name {
                Some(data.read::<NameId>()?)
            } else {
                None
            };
            Ok(VariationInstance {
                name_id,
                coordinates,
                postscript_name_id,
                name: LocalizedStrings::default(),
                postscript_name: LocalizedStrings::default(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use sfnt_test_data::{be_buffer, FontBuilder, FvarBuilder};
    use sfnt_types::{Fixed, TT_SFNT_VERSION};

    use super::*;

    fn decode_table(table: Vec<u8>) -> Result<Variations, Error> {
        let font = FontBuilder::new(TT_SFNT_VERSION)
            .add_table(TAG, table)
            .build();
        let mut cursor = ByteCursor::from_slice(&font);
        cursor.skip(4)?;
        let directory = TableDirectory::read(&mut cursor, TT_SFNT_VERSION)?;
        decode(&mut cursor, &directory)
    }

    #[test]
    fn axes_and_instances() {
        let table = FvarBuilder::new()
            .add_axis(b"wght", 100.0, 400.0, 900.0, 256)
            .add_axis(b"slnt", -15.5, 0.0, 0.0, 257)
            .add_instance(258, &[700.0, -15.5], None)
            .add_instance(259, &[100.0, 0.0], None)
            .build();
        let vars = decode_table(table).unwrap();
        assert_eq!(vars.axes.len(), 2);
        let slnt = &vars.axes[1];
        assert_eq!(slnt.tag(), Tag::new(b"slnt"));
        assert_eq!(slnt.min(), Fixed::from_f64(-15.5));
        assert_eq!(slnt.default(), Fixed::ZERO);
        assert_eq!(slnt.name_id(), NameId::new(257));
        assert_eq!(vars.instances.len(), 2);
        let bold_italic = &vars.instances[0];
        assert_eq!(bold_italic.name_id(), NameId::new(258));
        let coords: Vec<_> = bold_italic
            .coordinates()
            .iter()
            .map(|(tag, value)| (tag.to_string(), *value))
            .collect();
        assert_eq!(
            coords,
            [("wght".to_string(), 700.0), ("slnt".to_string(), -15.5)]
        );
        assert_eq!(bold_italic.postscript_name_id(), None);
    }

    #[test]
    fn postscript_name_ids() {
        let table = FvarBuilder::new()
            .add_axis(b"wght", 100.0, 400.0, 900.0, 256)
            .add_instance(257, &[100.0], Some(300))
            .add_instance(258, &[900.0], None)
            .build();
        let vars = decode_table(table).unwrap();
        assert_eq!(vars.instances[0].postscript_name_id(), Some(NameId::new(300)));
        assert_eq!(vars.instances[1].postscript_name_id(), Some(NameId::new(0xFFFF)));
    }

    #[test]
    fn no_axes() {
        let table = be_buffer!(1u16, 0u16, 16u16, 2u16, 0u16, 20u16, 0u16, 4u16).into_vec();
        let vars = decode_table(table).unwrap();
        assert!(vars.axes.is_empty());
        assert!(vars.instances.is_empty());
    }

    #[test]
    fn larger_records_are_stepped_over() {
        let table = be_buffer! {
            1u16, 0u16, 16u16, 2u16,
            2u16,   // axisCount
            24u16,  // axisSize, with 4 bytes of future fields
            1u16,   // instanceCount
            16u16,  // instanceSize, with a postscript name id and 2 unknown bytes
            (Tag::new(b"wght")), (Fixed::from_integer(1)), (Fixed::from_integer(2)),
            (Fixed::from_integer(3)), 0u16, 256u16, 0xFFFFFFFFu32,
            (Tag::new(b"wdth")), (Fixed::from_integer(4)), (Fixed::from_integer(5)),
            (Fixed::from_integer(6)), 0u16, 257u16, 0xFFFFFFFFu32,
            258u16, 0u16, (Fixed::from_integer(2)), (Fixed::from_integer(5)), 259u16, 0u16
        }
        .into_vec();
        let vars = decode_table(table).unwrap();
        assert_eq!(vars.axes[1].tag(), Tag::new(b"wdth"));
        assert_eq!(vars.axes[1].max(), Fixed::from_integer(6));
        assert_eq!(vars.instances[0].coordinate(Tag::new(b"wdth")), Some(5.0));
        assert_eq!(vars.instances[0].postscript_name_id(), Some(NameId::new(259)));
    }

    #[test]
    fn axes_array_offset_is_applied() {
        let table = FvarBuilder::new()
            .axes_array_offset(24)
            .add_axis(b"wght", 100.0, 400.0, 900.0, 256)
            .add_instance(257, &[100.0], None)
            .build();
        let vars = decode_table(table).unwrap();
        assert_eq!(vars.axes[0].tag(), Tag::new(b"wght"));
        assert_eq!(vars.instances[0].coordinate(Tag::new(b"wght")), Some(100.0));
    }

    #[test]
    fn axes_array_offset_inside_header() {
        let table = FvarBuilder::new()
            .axes_array_offset(8)
            .add_axis(b"wght", 100.0, 400.0, 900.0, 256)
            .build();
        assert!(matches!(
            decode_table(table),
            Err(Error::MalformedTable { tag: TAG, .. })
        ));
    }

    #[test]
    fn instance_size_too_small() {
        let table = FvarBuilder::new()
            .add_axis(b"wght", 100.0, 400.0, 900.0, 256)
            .add_axis(b"wdth", 50.0, 100.0, 200.0, 257)
            .add_instance(258, &[400.0, 100.0], None)
            .instance_size(8)
            .build();
        assert!(matches!(
            decode_table(table),
            Err(Error::MalformedTable { tag: TAG, .. })
        ));
    }

    #[test]
    fn truncated_instances() {
        let mut table = FvarBuilder::new()
            .add_axis(b"wght", 100.0, 400.0, 900.0, 256)
            .add_instance(257, &[100.0], None)
            .add_instance(258, &[900.0], None)
            .build();
        table.truncate(table.len() - 4);
        assert!(matches!(
            decode_table(table),
            Err(Error::MalformedTable { tag: TAG, .. })
        ));
    }

    #[test]
    fn arrays_stay_inside_the_table() {
        // two instances declared, none stored; the next table must not be
        // read in their place
        let fvar = be_buffer! {
            1u16, 0u16, 16u16, 2u16, 1u16, 20u16, 2u16, 8u16,
            (Tag::new(b"wght")), (Fixed::from_integer(100)), (Fixed::from_integer(400)),
            (Fixed::from_integer(900)), 0u16, 256u16
        };
        let font = FontBuilder::new(TT_SFNT_VERSION)
            .add_table(TAG, fvar)
            .add_table(Tag::new(b"zzzz"), vec![0x55; 64])
            .build();
        let mut cursor = ByteCursor::from_slice(&font);
        cursor.skip(4).unwrap();
        let directory = TableDirectory::read(&mut cursor, TT_SFNT_VERSION).unwrap();
        assert!(matches!(
            decode(&mut cursor, &directory),
            Err(Error::MalformedTable { tag: TAG, .. })
        ));
        // the table was consumed whole
        let fvar = directory.get(TAG).unwrap();
        assert_eq!(cursor.position(), fvar.end());
    }
}
