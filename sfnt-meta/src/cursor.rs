//! Bounded, big-endian reading over a [`ByteSource`].

use sfnt_types::{Fixed, Scalar};

use crate::{
    error::Error,
    source::{ByteSource, MemorySource},
};

/// A cursor over a table that has been copied out of the font.
pub type TableCursor = ByteCursor<MemorySource<Vec<u8>>>;

/// How the bytes of a string are encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringEncoding {
    /// UTF-16, big endian. Unpaired surrogates are replaced.
    Utf16Be,
    /// ISO 8859-1: every byte is the code point of the same value.
    Latin1,
}

/// A reader with a declared size and a current position.
///
/// Every operation that would move the position past `size` fails with
/// [`Error::EndOfData`] and leaves the position unchanged. Moving backwards
/// is supported, but costs a rewind of the source to its start followed by
/// a forward skip; callers that care should read in ascending order.
#[derive(Debug)]
pub struct ByteCursor<S> {
    source: S,
    size: u64,
    pos: u64,
}

impl<'a> ByteCursor<MemorySource<&'a [u8]>> {
    /// A cursor over a byte slice.
    pub fn from_slice(data: &'a [u8]) -> Self {
        ByteCursor::new(MemorySource::new(data), data.len() as u64)
    }
}

impl TableCursor {
    /// A cursor that owns its bytes.
    pub fn from_vec(data: Vec<u8>) -> Self {
        let size = data.len() as u64;
        ByteCursor::new(MemorySource::new(data), size)
    }
}

impl<S: ByteSource> ByteCursor<S> {
    /// Create a cursor over `size` bytes of `source`, starting at its
    /// current position.
    pub fn new(source: S, size: u64) -> Self {
        ByteCursor {
            source,
            size,
            pos: 0,
        }
    }

    /// The declared size of the data.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The current position, relative to the start of the data.
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// The number of bytes between the current position and the end.
    pub fn remaining(&self) -> u64 {
        self.size - self.pos
    }

    /// Consume the cursor, returning the underlying source.
    pub fn into_inner(self) -> S {
        self.source
    }

    fn check_advance(&self, n: u64) -> Result<(), Error> {
        if n > self.remaining() {
            return Err(Error::end_of_data(
                self.size,
                self.pos.saturating_add(n),
            ));
        }
        Ok(())
    }

    /// Read a big-endian scalar.
    pub fn read<T: Scalar>(&mut self) -> Result<T, Error> {
        let mut raw = T::Raw::default();
        self.read_to(raw.as_mut())?;
        Ok(T::from_raw(raw))
    }

    /// Read a 16.16 fixed point value.
    pub fn read_fixed(&mut self) -> Result<Fixed, Error> {
        self.read()
    }

    /// Fill `buf` from the current position.
    ///
    /// Succeeds when at least `buf.len()` bytes remain.
    pub fn read_to(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        self.check_advance(buf.len() as u64)?;
        self.source.read_exact(buf)?;
        self.pos += buf.len() as u64;
        Ok(())
    }

    /// Read `len` bytes into a new vector.
    pub fn read_bytes(&mut self, len: u64) -> Result<Vec<u8>, Error> {
        self.check_advance(len)?;
        // checked against the declared size above
        let mut buf = vec![0u8; len as usize];
        self.read_to(&mut buf)?;
        Ok(buf)
    }

    /// Read a string of `len` bytes, guessing its encoding.
    ///
    /// Strings starting with a zero byte are treated as UTF-16BE and
    /// everything else as Latin-1. This suits Macintosh platform names,
    /// which carry no usable encoding information.
    pub fn read_string(&mut self, len: u64) -> Result<String, Error> {
        let bytes = self.read_bytes(len)?;
        let encoding = match bytes.first() {
            Some(0) => StringEncoding::Utf16Be,
            _ => StringEncoding::Latin1,
        };
        Ok(decode_string(&bytes, encoding))
    }

    /// Read a string of `len` bytes in a known encoding.
    pub fn read_string_as(&mut self, len: u64, encoding: StringEncoding) -> Result<String, Error> {
        let bytes = self.read_bytes(len)?;
        Ok(decode_string(&bytes, encoding))
    }

    /// Move forward by `n` bytes.
    pub fn skip(&mut self, n: u64) -> Result<(), Error> {
        self.check_advance(n)?;
        self.source.skip(n)?;
        self.pos += n;
        Ok(())
    }

    /// Move to an absolute position.
    ///
    /// Seeking backwards rewinds the source and skips forward from the
    /// start.
    pub fn seek_to(&mut self, offset: u64) -> Result<(), Error> {
        if offset > self.size {
            return Err(Error::end_of_data(self.size, offset));
        }
        if offset >= self.pos {
            return self.skip(offset - self.pos);
        }
        log::trace!("rewinding from {} to reach {offset}", self.pos);
        self.source.rewind()?;
        self.pos = 0;
        self.skip(offset)
    }

    /// Copy the next `len` bytes into an independent cursor.
    ///
    /// Seeks within the returned cursor never touch this cursor's source.
    pub fn extract(&mut self, len: u64) -> Result<TableCursor, Error> {
        self.read_bytes(len).map(TableCursor::from_vec)
    }
}

fn decode_string(bytes: &[u8], encoding: StringEncoding) -> String {
    match encoding {
        StringEncoding::Latin1 => bytes.iter().map(|b| char::from(*b)).collect(),
        StringEncoding::Utf16Be => {
            let units = bytes
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
            char::decode_utf16(units)
                .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
                .collect()
        }
    }
}
