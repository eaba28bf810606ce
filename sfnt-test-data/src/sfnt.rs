//! Assembling complete sfnt files.

use sfnt_types::Tag;

use crate::bebuffer::BeBuffer;

const HEADER_LEN: usize = 12;
const RECORD_LEN: usize = 16;

/// Builds an sfnt container from a set of raw tables.
///
/// Table data is laid out in the order the tables were added, each padded to
/// a four byte boundary. Directory records are sorted by tag, as required of
/// real fonts, so the directory order and the file order generally differ.
#[derive(Clone, Debug)]
pub struct FontBuilder {
    sfnt_version: u32,
    tables: Vec<(Tag, Vec<u8>)>,
}

impl FontBuilder {
    pub fn new(sfnt_version: u32) -> Self {
        FontBuilder {
            sfnt_version,
            tables: Vec::new(),
        }
    }

    /// Add a table; a second table with the same tag replaces the first.
    pub fn add_table(mut self, tag: Tag, data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        match self.tables.iter_mut().find(|(existing, _)| *existing == tag) {
            Some(slot) => slot.1 = data,
            None => self.tables.push((tag, data)),
        }
        self
    }

    /// The offset at which the table with this tag will be placed.
    pub fn offset_of(&self, tag: Tag) -> Option<u32> {
        self.layout()
            .into_iter()
            .find(|(t, _, _)| *t == tag)
            .map(|(_, offset, _)| offset)
    }

    fn layout(&self) -> Vec<(Tag, u32, u32)> {
        let mut offset = HEADER_LEN + RECORD_LEN * self.tables.len();
        let mut result = Vec::with_capacity(self.tables.len());
        for (tag, data) in &self.tables {
            result.push((*tag, offset as u32, data.len() as u32));
            offset += data.len().next_multiple_of(4);
        }
        result
    }

    pub fn build(&self) -> Vec<u8> {
        let num_tables = self.tables.len() as u16;
        let entry_selector = if num_tables == 0 {
            0
        } else {
            num_tables.ilog2() as u16
        };
        let search_range = (1u16 << entry_selector) * 16;
        let range_shift = (num_tables * 16).saturating_sub(search_range);

        let mut records = self.layout();
        records.sort_by_key(|(tag, _, _)| *tag);

        let mut buf = BeBuffer::new()
            .push(self.sfnt_version)
            .push(num_tables)
            .push(search_range)
            .push(entry_selector)
            .push(range_shift);
        for (tag, offset, length) in records {
            buf = buf.push(tag).push(0u32).push(offset).push(length);
        }
        for (_, data) in &self.tables {
            buf = buf.extend_bytes(data).align_to(4);
        }
        buf.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_sorted_data_in_insertion_order() {
        let font = FontBuilder::new(0x00010000)
            .add_table(Tag::new(b"name"), vec![1, 2, 3])
            .add_table(Tag::new(b"OS/2"), vec![4, 5, 6, 7, 8])
            .build();
        // header + 2 records
        let data_start = 12 + 32;
        assert_eq!(&font[4..6], &[0, 2]);
        // first record is 'OS/2', placed after the padded 'name' data
        assert_eq!(&font[12..16], b"OS/2");
        assert_eq!(&font[20..24], &((data_start + 4) as u32).to_be_bytes());
        assert_eq!(&font[28..32], b"name");
        assert_eq!(&font[36..40], &(data_start as u32).to_be_bytes());
        assert_eq!(&font[data_start..data_start + 4], &[1, 2, 3, 0]);
        assert_eq!(font.len(), data_start + 4 + 8);
    }

    #[test]
    fn replacing_a_table() {
        let builder = FontBuilder::new(0x4F54544F)
            .add_table(Tag::new(b"name"), vec![1])
            .add_table(Tag::new(b"name"), vec![2, 2]);
        assert_eq!(builder.offset_of(Tag::new(b"name")), Some(28));
        assert_eq!(builder.build().len(), 28 + 4);
    }
}
