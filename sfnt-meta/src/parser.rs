//! Driving a decode from signature to finished properties.

use crate::{
    cursor::ByteCursor,
    directory::{self, TableDirectory, TableRecord},
    error::Error,
    properties::FontProperties,
    source::ByteSource,
    tables::{fvar, name, os2},
};

/// The tables this crate decodes, in no particular order.
const DECODED_TABLES: [sfnt_types::Tag; 3] = [name::TAG, os2::TAG, fvar::TAG];

/// Where a [`FontParser`] is in its decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseState {
    /// Nothing has been read.
    Unopened,
    /// The sfnt version has been read and is valid.
    SignatureChecked,
    /// The table directory has been read.
    DirectoryRead,
    /// `name`, `OS/2` and `fvar` have been decoded and variation names
    /// linked.
    TablesDecoded,
    /// The properties are complete.
    Done,
}

/// Decodes the metadata of a single font.
///
/// Each call to [`step`](Self::step) performs one transition; most callers
/// just want [`parse`](Self::parse), which runs them all. An error aborts
/// the decode, except that errors in the `fvar` table are logged and the
/// font is treated as not variable.
#[derive(Debug)]
pub struct FontParser<S> {
    cursor: ByteCursor<S>,
    state: ParseState,
    sfnt_version: u32,
    directory: TableDirectory,
    props: FontProperties,
}

impl<S: ByteSource> FontParser<S> {
    pub fn new(cursor: ByteCursor<S>) -> Self {
        FontParser {
            cursor,
            state: ParseState::Unopened,
            sfnt_version: 0,
            directory: TableDirectory::default(),
            props: FontProperties::default(),
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    /// Run every remaining transition and return the result.
    ///
    /// The parser, and with it the byte source, is dropped whether or not
    /// this succeeds.
    pub fn parse(mut self) -> Result<FontProperties, Error> {
        while self.state != ParseState::Done {
            self.step()?;
        }
        Ok(self.props)
    }

    /// The decoded properties, once the parser is [`ParseState::Done`].
    pub fn into_properties(self) -> Option<FontProperties> {
        (self.state == ParseState::Done).then_some(self.props)
    }

    /// Advance to the next state.
    ///
    /// On error the state is unchanged. Calling this when already done does
    /// nothing.
    pub fn step(&mut self) -> Result<ParseState, Error> {
        let next = match self.state {
            ParseState::Unopened => {
                self.sfnt_version = directory::check_signature(&mut self.cursor)?;
                ParseState::SignatureChecked
            }
            ParseState::SignatureChecked => {
                self.directory = TableDirectory::read(&mut self.cursor, self.sfnt_version)?;
                // provisional: cleared if the table has no usable axes
                self.props.variable = self.directory.contains(fvar::TAG);
                ParseState::DirectoryRead
            }
            ParseState::DirectoryRead => {
                self.decode_tables()?;
                ParseState::TablesDecoded
            }
            ParseState::TablesDecoded => {
                self.props.directory = std::mem::take(&mut self.directory);
                ParseState::Done
            }
            ParseState::Done => return Ok(ParseState::Done),
        };
        log::debug!("{:?} -> {next:?}", self.state);
        self.state = next;
        Ok(next)
    }

    /// Decode the tables we care about in the order they appear in the file.
    ///
    /// Reading in file order means the cursor only ever moves forward, which
    /// matters for sources that rewind slowly or not at all.
    fn decode_tables(&mut self) -> Result<(), Error> {
        let mut records: Vec<TableRecord> = DECODED_TABLES
            .iter()
            .filter_map(|tag| self.directory.get(*tag).copied())
            .collect();
        records.sort_by_key(|record| record.offset);

        for record in records {
            log::debug!(
                "decoding {} at offset {} ({} bytes)",
                record.tag,
                record.offset,
                record.length
            );
            match record.tag {
                name::TAG => name::decode(&mut self.cursor, &self.directory, &mut self.props)?,
                os2::TAG => os2::decode(&mut self.cursor, &self.directory, &mut self.props)?,
                fvar::TAG => self.decode_variations(),
                _ => (),
            }
        }
        if self.props.variable {
            self.props.link_variation_names();
        }
        Ok(())
    }

    fn decode_variations(&mut self) {
        match fvar::decode(&mut self.cursor, &self.directory) {
            Ok(vars) if vars.axes.is_empty() => {
                log::debug!("fvar table has no axes");
                self.props.clear_variations();
            }
            Ok(vars) => {
                self.props.axes = vars.axes;
                self.props.instances = vars.instances;
            }
            Err(err) => {
                log::warn!("ignoring fvar table: {err}");
                self.props.clear_variations();
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/test_parser.rs"]
mod tests;
