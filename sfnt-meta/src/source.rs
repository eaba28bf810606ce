//! Sources of font bytes.
//!
//! A decode only ever needs three things from its input: read the next few
//! bytes, skip forward, and (rarely) go back to the start. [`ByteSource`]
//! captures exactly that, so a font can be decoded from memory, from a file,
//! or from a stream that cannot seek at all.

use std::io::{self, Read, Seek, SeekFrom};

use crate::error::Error;

/// The capabilities a [`ByteCursor`](crate::ByteCursor) needs from its input.
///
/// Bounds are enforced by the cursor; implementations may assume every
/// request stays within the declared size.
pub trait ByteSource {
    /// Fill `buf` with the next `buf.len()` bytes.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error>;

    /// Advance by `n` bytes without returning them.
    fn skip(&mut self, n: u64) -> Result<(), Error>;

    /// Return to the position the source was at when decoding began.
    fn rewind(&mut self) -> Result<(), Error>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        (**self).read_exact(buf)
    }

    fn skip(&mut self, n: u64) -> Result<(), Error> {
        (**self).skip(n)
    }

    fn rewind(&mut self) -> Result<(), Error> {
        (**self).rewind()
    }
}

/// Font data that is fully in memory.
#[derive(Clone, Debug)]
pub struct MemorySource<T> {
    data: T,
    pos: usize,
}

impl<T: AsRef<[u8]>> MemorySource<T> {
    pub fn new(data: T) -> Self {
        MemorySource { data, pos: 0 }
    }

    /// The length of the underlying data, in bytes.
    pub fn len(&self) -> usize {
        self.data.as_ref().len()
    }

    /// `true` if the underlying data is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn end_of_data(&self, requested: usize) -> Error {
        Error::end_of_data(
            self.len() as u64,
            self.pos as u64 + requested as u64,
        )
    }
}

impl<T: AsRef<[u8]>> ByteSource for MemorySource<T> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        let end = self.pos.saturating_add(buf.len());
        let bytes = self
            .data
            .as_ref()
            .get(self.pos..end)
            .ok_or_else(|| self.end_of_data(buf.len()))?;
        buf.copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    fn skip(&mut self, n: u64) -> Result<(), Error> {
        let n = usize::try_from(n).map_err(|_| Error::end_of_data(self.len() as u64, n))?;
        if self.len() - self.pos < n {
            return Err(self.end_of_data(n));
        }
        self.pos += n;
        Ok(())
    }

    fn rewind(&mut self) -> Result<(), Error> {
        self.pos = 0;
        Ok(())
    }
}

/// A seekable reader, such as a [`File`](std::fs::File).
///
/// The position of the reader when the source is created is the start of the
/// font.
#[derive(Debug)]
pub struct SeekSource<R> {
    reader: R,
    start: u64,
}

impl<R: Read + Seek> SeekSource<R> {
    /// Wrap a reader, returning the source and the number of bytes between
    /// the current position and the end of the reader.
    pub fn new(mut reader: R) -> Result<(Self, u64), Error> {
        let start = reader.stream_position()?;
        let end = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(start))?;
        Ok((SeekSource { reader, start }, end.saturating_sub(start)))
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read + Seek> ByteSource for SeekSource<R> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        self.reader.read_exact(buf).map_err(Into::into)
    }

    fn skip(&mut self, n: u64) -> Result<(), Error> {
        let delta = i64::try_from(n).map_err(|_| io::Error::from(io::ErrorKind::InvalidInput))?;
        self.reader.seek(SeekFrom::Current(delta))?;
        Ok(())
    }

    fn rewind(&mut self) -> Result<(), Error> {
        self.reader.seek(SeekFrom::Start(self.start))?;
        Ok(())
    }
}

/// A reader that can only move forward, such as a pipe or a socket.
///
/// Skipping reads and discards. Rewinding is not supported, so decoding only
/// succeeds if no table needs to be read from before the current position.
#[derive(Debug)]
pub struct StreamSource<R> {
    reader: R,
}

impl<R: Read> StreamSource<R> {
    pub fn new(reader: R) -> Self {
        StreamSource { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for StreamSource<R> {
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        self.reader.read_exact(buf).map_err(Into::into)
    }

    fn skip(&mut self, n: u64) -> Result<(), Error> {
        let skipped = io::copy(&mut self.reader.by_ref().take(n), &mut io::sink())?;
        if skipped < n {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }
        Ok(())
    }

    fn rewind(&mut self) -> Result<(), Error> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "stream cannot be rewound").into())
    }
}
