//! The [name (Naming)](https://docs.microsoft.com/en-us/typography/opentype/spec/name) table

use sfnt_types::{NameId, Tag};

use crate::{
    cursor::{ByteCursor, StringEncoding, TableCursor},
    directory::TableDirectory,
    error::Error,
    locale::{self, PLATFORM_MACINTOSH, PLATFORM_WINDOWS},
    properties::{FontProperties, LocalizedStrings},
    source::ByteSource,
};

/// 'name'
pub const TAG: Tag = Tag::new(b"name");

/// version, count, storageOffset
const HEADER_LEN: u64 = 6;
const RECORD_LEN: u64 = 12;
/// Language ids at or above this refer to a language tag record.
const FIRST_LANG_TAG_ID: u16 = 0x8000;

/// A single record from the name table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameRecord {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
    pub name_id: NameId,
    pub length: u16,
    pub string_offset: u16,
}

impl NameRecord {
    fn read(table: &mut TableCursor) -> Result<Self, Error> {
        Ok(NameRecord {
            platform_id: table.read()?,
            encoding_id: table.read()?,
            language_id: table.read()?,
            name_id: table.read()?,
            length: table.read()?,
            string_offset: table.read()?,
        })
    }

    /// Macintosh or Windows platform, with encoding 0 or 1.
    ///
    /// For Windows these are the symbol and Unicode BMP encodings, both
    /// stored as UTF-16BE; for the Macintosh encoding 0 is Roman.
    pub fn is_supported(&self) -> bool {
        matches!(self.platform_id, PLATFORM_MACINTOSH | PLATFORM_WINDOWS)
            && matches!(self.encoding_id, 0 | 1)
    }
}

/// Decode the `name` table into `props`.
///
/// The whole table is copied out of the font first, so the string lookups
/// that follow never seek the font's own source.
pub(crate) fn decode<S: ByteSource>(
    cursor: &mut ByteCursor<S>,
    directory: &TableDirectory,
    props: &mut FontProperties,
) -> Result<(), Error> {
    let record = directory.get(TAG).ok_or(Error::TableNotFound(TAG))?;
    cursor.seek_to(record.offset)?;
    let mut table = cursor.extract(record.length)?;

    let version = table.read::<u16>()?;
    let count = table.read::<u16>()?;
    let storage_offset = table.read::<u16>()? as u64;
    let records = (0..count)
        .map(|_| NameRecord::read(&mut table))
        .collect::<Result<Vec<_>, _>>()?;
    let lang_tags = if version >= 1 {
        table.seek_to(HEADER_LEN + RECORD_LEN * count as u64)?;
        read_lang_tags(&mut table, storage_offset)?
    } else {
        Vec::new()
    };
    log::debug!(
        "name table version {version}: {count} records, {} language tags",
        lang_tags.len()
    );

    for record in records {
        if !record.is_supported() {
            log::trace!(
                "skipping name record {:?} (platform {}, encoding {})",
                record.name_id,
                record.platform_id,
                record.encoding_id
            );
            continue;
        }
        table.seek_to(storage_offset + record.string_offset as u64)?;
        let value = match record.platform_id {
            PLATFORM_WINDOWS => {
                table.read_string_as(record.length as u64, StringEncoding::Utf16Be)?
            }
            _ => table.read_string(record.length as u64)?,
        };
        let locale = match record.language_id.checked_sub(FIRST_LANG_TAG_ID) {
            Some(ix) if version >= 1 => lang_tags
                .get(ix as usize)
                .map(String::as_str)
                .unwrap_or(locale::ROOT),
            _ => locale::resolve(record.platform_id, record.language_id),
        };
        store(props, record.name_id, locale, value);
    }
    Ok(())
}

/// Read the language tag strings of a version 1 table.
///
/// Tags that are empty or not ASCII are replaced by the root locale.
fn read_lang_tags(table: &mut TableCursor, storage_offset: u64) -> Result<Vec<String>, Error> {
    let count = table.read::<u16>()?;
    let mut records = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let length = table.read::<u16>()?;
        let offset = table.read::<u16>()?;
        records.push((length, offset));
    }
    let mut tags = Vec::with_capacity(records.len());
    for (length, offset) in records {
        table.seek_to(storage_offset + offset as u64)?;
        let tag = table.read_string_as(length as u64, StringEncoding::Utf16Be)?;
        if tag.is_empty() || !tag.is_ascii() {
            log::debug!("unusable language tag {tag:?}");
            tags.push(locale::ROOT.to_string());
        } else {
            tags.push(tag);
        }
    }
    Ok(tags)
}

/// Route a decoded string to the property for its name id.
fn store(props: &mut FontProperties, name_id: NameId, locale: &str, value: String) {
    match name_id {
        NameId::UNIQUE_ID => props.unique_identifier = value,
        NameId::VERSION_STRING => props.version = value,
        NameId::VENDOR_URL => props.vendor_url = value,
        NameId::LICENSE_URL => props.license_info_url = value,
        NameId::DESIGNER_URL => {
            if props.designer_url.is_empty() {
                props.designer_url = value;
            }
        }
        _ => match localized_field(props, name_id) {
            Some(strings) => strings.insert(locale, value),
            None => log::trace!("ignoring name id {name_id:?}"),
        },
    }
}

fn localized_field(props: &mut FontProperties, name_id: NameId) -> Option<&mut LocalizedStrings> {
    Some(match name_id {
        NameId::COPYRIGHT_NOTICE => &mut props.copyright,
        NameId::FAMILY_NAME => &mut props.family,
        NameId::SUBFAMILY_NAME => &mut props.subfamily,
        NameId::FULL_NAME => &mut props.full_name,
        NameId::POSTSCRIPT_NAME => &mut props.postscript_name,
        NameId::TRADEMARK => &mut props.trademark,
        NameId::MANUFACTURER => &mut props.manufacturer,
        NameId::DESIGNER => &mut props.designer,
        NameId::DESCRIPTION => &mut props.description,
        NameId::LICENSE_DESCRIPTION => &mut props.license_description,
        NameId::TYPOGRAPHIC_FAMILY_NAME => &mut props.preferred_family,
        NameId::TYPOGRAPHIC_SUBFAMILY_NAME => &mut props.preferred_subfamily,
        NameId::COMPATIBLE_FULL_NAME => &mut props.compatible_full_name,
        NameId::SAMPLE_TEXT => &mut props.sample_text,
        NameId::WWS_FAMILY_NAME => &mut props.wws_family,
        NameId::WWS_SUBFAMILY_NAME => &mut props.wws_subfamily,
        NameId::VARIATIONS_POSTSCRIPT_NAME_PREFIX => &mut props.variations_postscript_name_prefix,
        id if id.is_font_specific() => props.extra_names.entry(id).or_default(),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use sfnt_test_data::{lcid, name::utf16_be, NameTableBuilder};

    use super::*;

    fn decode_table(table: &[u8]) -> Result<FontProperties, Error> {
        let font = sfnt_test_data::FontBuilder::new(sfnt_types::TT_SFNT_VERSION)
            .add_table(TAG, table.to_vec())
            .build();
        let mut cursor = ByteCursor::from_slice(&font);
        cursor.skip(4)?;
        let directory = TableDirectory::read(&mut cursor, sfnt_types::TT_SFNT_VERSION)?;
        let mut props = FontProperties::default();
        decode(&mut cursor, &directory, &mut props)?;
        Ok(props)
    }

    #[test]
    fn single_windows_record() {
        let table = NameTableBuilder::new().add_ms(1033, 1, "Test").build();
        let props = decode_table(&table).unwrap();
        assert_eq!(props.family().get("en-US"), Some("Test"));
        assert_eq!(props.family().len(), 1);
    }

    #[test]
    fn dispatch_by_name_id() {
        let mut builder = NameTableBuilder::new();
        for id in 0..=25u16 {
            builder = builder.add_ms(lcid::EN_US, id, &format!("id {id}"));
        }
        let props = decode_table(&builder.build()).unwrap();
        assert_eq!(props.copyright_for("en-US"), "id 0");
        assert_eq!(props.family_for("en-US"), "id 1");
        assert_eq!(props.subfamily_for("en-US"), "id 2");
        assert_eq!(props.unique_identifier(), "id 3");
        assert_eq!(props.full_name_for("en-US"), "id 4");
        assert_eq!(props.version(), "id 5");
        assert_eq!(props.postscript_name_for("en-US"), "id 6");
        assert_eq!(props.trademark_for("en-US"), "id 7");
        assert_eq!(props.manufacturer_for("en-US"), "id 8");
        assert_eq!(props.designer_for("en-US"), "id 9");
        assert_eq!(props.description_for("en-US"), "id 10");
        assert_eq!(props.vendor_url(), "id 11");
        assert_eq!(props.designer_url(), "id 12");
        assert_eq!(props.license_description_for("en-US"), "id 13");
        assert_eq!(props.license_info_url(), "id 14");
        assert_eq!(props.preferred_family_for("en-US"), "id 16");
        assert_eq!(props.preferred_subfamily_for("en-US"), "id 17");
        assert_eq!(props.compatible_full_name_for("en-US"), "id 18");
        assert_eq!(props.sample_text_for("en-US"), "id 19");
        assert_eq!(props.wws_family_for("en-US"), "id 21");
        assert_eq!(props.wws_subfamily_for("en-US"), "id 22");
        assert_eq!(props.variations_postscript_name_prefix_for("en-US"), "id 25");
        assert!(props.extra_names().is_empty());
    }

    #[test]
    fn scalar_write_policies() {
        let table = NameTableBuilder::new()
            .add_ms(lcid::EN_US, 3, "first id")
            .add_ms(lcid::JA_JP, 3, "second id")
            .add_ms(lcid::EN_US, 12, "first url")
            .add_ms(lcid::JA_JP, 12, "second url")
            .build();
        let props = decode_table(&table).unwrap();
        assert_eq!(props.unique_identifier(), "second id");
        assert_eq!(props.designer_url(), "first url");
    }

    #[test]
    fn unsupported_records_are_skipped() {
        let table = NameTableBuilder::new()
            // unicode platform
            .add_record(0, 3, 0, 1, utf16_be("unicode"))
            // windows, UCS-4
            .add_record(3, 10, lcid::EN_US, 1, utf16_be("ucs4"))
            // macintosh, japanese
            .add_record(1, 1, 11, 1, vec![0x82, 0xA0])
            .add_record(3, 0, lcid::EN_US, 2, utf16_be("symbol"))
            .build();
        let props = decode_table(&table).unwrap();
        assert_eq!(props.family().len(), 1);
        assert_eq!(props.family().get("ja-JP"), Some("\u{82}\u{a0}"));
        assert_eq!(props.subfamily().get("en-US"), Some("symbol"));
    }

    #[test]
    fn mac_strings_and_overwrite_order() {
        let table = NameTableBuilder::new()
            .add_mac(0, 1, "Café Mac")
            .add_ms(lcid::ZH_CN, 1, "中文")
            .add_ms(lcid::EN_US, 1, "Café")
            // utf-16 on the mac platform is detected by the leading zero byte
            .add_record(1, 0, 14, 2, utf16_be("Bold Ελληνικά"))
            .build();
        let props = decode_table(&table).unwrap();
        let family: Vec<_> = props.family().iter().collect();
        assert_eq!(family, [("en-US", "Café"), ("zh-Hans", "中文")]);
        assert_eq!(props.subfamily().get("el-GR"), Some("Bold Ελληνικά"));
    }

    #[test]
    fn font_specific_ids() {
        let table = NameTableBuilder::new()
            .add_ms(lcid::EN_US, 255, "reserved")
            .add_ms(lcid::EN_US, 256, "Weight")
            .add_ms(lcid::FR_FR, 256, "Graisse")
            .add_ms(lcid::EN_US, 32767, "last")
            .add_ms(lcid::EN_US, 32768, "out of range")
            .build();
        let props = decode_table(&table).unwrap();
        let ids: Vec<_> = props.extra_names().keys().map(|id| id.to_u16()).collect();
        assert_eq!(ids, [256, 32767]);
        let weight = props.extra_name(NameId::new(256)).unwrap();
        assert_eq!(weight.get("fr-FR"), Some("Graisse"));
        assert_eq!(weight.lookup("en-GB"), "Weight");
    }

    #[test]
    fn unknown_language_is_root() {
        let table = NameTableBuilder::new()
            .add_ms(lcid::NEUTRAL, 17, "Neutral")
            .add_mac(95, 17, "Gap")
            .build();
        let props = decode_table(&table).unwrap();
        assert_eq!(props.preferred_subfamily().get("und"), Some("Gap"));
        assert_eq!(props.preferred_subfamily().len(), 1);
    }

    #[test]
    fn version_one_lang_tags() {
        let mut builder = NameTableBuilder::new();
        let de = builder.add_lang_tag("de-CH");
        let bad = builder.add_lang_tag("日本");
        let table = builder
            .add_ms(de, 1, "Schrift")
            .add_ms(bad, 2, "Fett")
            .add_ms(0x8005, 4, "missing")
            .add_ms(lcid::EN_US, 1, "Font")
            .build();
        let props = decode_table(&table).unwrap();
        assert_eq!(props.family().get("de-CH"), Some("Schrift"));
        assert_eq!(props.family().get("en-US"), Some("Font"));
        assert_eq!(props.subfamily().get("und"), Some("Fett"));
        assert_eq!(props.full_name().get("und"), Some("missing"));
    }

    #[test]
    fn version_zero_ignores_lang_tag_ids() {
        let table = NameTableBuilder::new().add_ms(0x8000, 1, "A").build();
        let props = decode_table(&table).unwrap();
        assert_eq!(props.family().get("und"), Some("A"));
    }

    #[test]
    fn string_past_end_of_table() {
        let mut table = NameTableBuilder::new().add_ms(lcid::EN_US, 1, "Test").build();
        // claim a longer string than the storage holds
        table[14..16].copy_from_slice(&100u16.to_be_bytes());
        assert!(matches!(
            decode_table(&table),
            Err(Error::EndOfData { .. })
        ));
    }

    #[test]
    fn missing_table() {
        let mut cursor = ByteCursor::from_slice(&[]);
        let mut props = FontProperties::default();
        assert!(matches!(
            decode(&mut cursor, &TableDirectory::default(), &mut props),
            Err(Error::TableNotFound(TAG))
        ));
    }
}
