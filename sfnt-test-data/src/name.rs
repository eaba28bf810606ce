//! Building `name` tables.

use crate::bebuffer::BeBuffer;

pub const PLATFORM_UNICODE: u16 = 0;
pub const PLATFORM_MACINTOSH: u16 = 1;
pub const PLATFORM_WINDOWS: u16 = 3;

#[derive(Clone, Debug)]
struct Record {
    platform_id: u16,
    encoding_id: u16,
    language_id: u16,
    name_id: u16,
    string: Vec<u8>,
}

/// Builds a `name` table from a list of records.
///
/// Records are written in the order they are added; the decoder does not
/// require the sorting real fonts use, and tests sometimes rely on order.
#[derive(Clone, Debug, Default)]
pub struct NameTableBuilder {
    records: Vec<Record>,
    lang_tags: Vec<String>,
}

impl NameTableBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Add a Windows platform, Unicode BMP (encoding 1) record.
    pub fn add_ms(self, language_id: u16, name_id: u16, value: &str) -> Self {
        self.add_record(
            PLATFORM_WINDOWS,
            1,
            language_id,
            name_id,
            utf16_be(value),
        )
    }

    /// Add a Macintosh platform, Roman (encoding 0) record.
    ///
    /// The string is stored as Latin-1; characters outside that range are
    /// replaced with `?`.
    pub fn add_mac(self, language_id: u16, name_id: u16, value: &str) -> Self {
        let bytes = value
            .chars()
            .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
            .collect();
        self.add_record(PLATFORM_MACINTOSH, 0, language_id, name_id, bytes)
    }

    /// Add a record with arbitrary ids and raw string bytes.
    pub fn add_record(
        mut self,
        platform_id: u16,
        encoding_id: u16,
        language_id: u16,
        name_id: u16,
        string: Vec<u8>,
    ) -> Self {
        self.records.push(Record {
            platform_id,
            encoding_id,
            language_id,
            name_id,
            string,
        });
        self
    }

    /// Add a language tag, switching the table to version 1.
    ///
    /// Returns the language id records should use to refer to the tag.
    pub fn add_lang_tag(&mut self, tag: &str) -> u16 {
        self.lang_tags.push(tag.to_string());
        0x8000 + (self.lang_tags.len() - 1) as u16
    }

    pub fn build(&self) -> Vec<u8> {
        let version = if self.lang_tags.is_empty() { 0u16 } else { 1 };
        let count = self.records.len() as u16;
        let mut string_offset = 6 + 12 * self.records.len();
        if version == 1 {
            string_offset += 2 + 4 * self.lang_tags.len();
        }

        let mut buf = BeBuffer::new()
            .push(version)
            .push(count)
            .push(string_offset as u16);
        let mut storage = Vec::new();
        for record in &self.records {
            buf = buf
                .push(record.platform_id)
                .push(record.encoding_id)
                .push(record.language_id)
                .push(record.name_id)
                .push(record.string.len() as u16)
                .push(storage.len() as u16);
            storage.extend_from_slice(&record.string);
        }
        if version == 1 {
            buf = buf.push(self.lang_tags.len() as u16);
            for tag in &self.lang_tags {
                let encoded = utf16_be(tag);
                buf = buf
                    .push(encoded.len() as u16)
                    .push(storage.len() as u16);
                storage.extend(encoded);
            }
        }
        buf.extend_bytes(&storage).into_vec()
    }
}

/// Encode a string as UTF-16, big endian.
pub fn utf16_be(value: &str) -> Vec<u8> {
    value.encode_utf16().flat_map(u16::to_be_bytes).collect()
}
