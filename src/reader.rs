use std::fmt::Display;
use std::io::{self, Read};
use std::iter::FusedIterator;

use crate::errors::{ChunkError, Result};

/// A byte stream that can be consumed in fixed-size chunks.
///
/// The reader owns its source `R` and a chunk size that is validated once,
/// at construction. It is still a plain [`Read`] (every read is passed
/// straight to the source), and it hands out [`Chunks`] iterations that
/// split whatever is left in the source into buffers of at most
/// `chunk_size` bytes.
///
/// Every chunk is the result of exactly one `read` call on the source. A
/// read returning fewer bytes than requested ends the iteration, even when
/// the source would have produced more data on a later call. As a result,
/// a source whose length is a multiple of the chunk size (including an
/// empty source) yields one trailing empty chunk.
#[derive(Debug)]
pub struct ChunkedReader<R> {
    inner: R,
    chunk_size: usize,
}

impl<R: Read> ChunkedReader<R> {
    /// Wraps `inner`, failing with [`ChunkError::InvalidArgument`] unless
    /// `chunk_size` is a positive number that fits in `usize`.
    pub fn new<S>(inner: R, chunk_size: S) -> Result<Self>
    where
        S: TryInto<usize> + Display + Copy,
    {
        let chunk_size = validate_chunk_size(chunk_size)?;
        log::debug!("[chunked_reader] created with chunk size {}", chunk_size);

        Ok(ChunkedReader { inner, chunk_size })
    }

    /// Same as [`ChunkedReader::new`], but an absent source is rejected
    /// with [`ChunkError::InvalidArgument`] as well.
    pub fn from_optional<S>(inner: Option<R>, chunk_size: S) -> Result<Self>
    where
        S: TryInto<usize> + Display + Copy,
    {
        let inner = inner.ok_or_else(|| {
            ChunkError::InvalidArgument("source must not be absent".into())
        })?;
        Self::new(inner, chunk_size)
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Starts a new iteration from the current position of the source.
    ///
    /// The source stays with this reader: once the iteration is dropped,
    /// the reader can be read from directly or iterated again, continuing
    /// where the last read stopped.
    pub fn chunks(&mut self) -> Chunks<&mut R> {
        Chunks::new(&mut self.inner, self.chunk_size)
    }

    /// Moves the source into a new iteration.
    pub fn into_chunks(self) -> Chunks<R> {
        Chunks::new(self.inner, self.chunk_size)
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for ChunkedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Read> IntoIterator for ChunkedReader<R> {
    type Item = Result<Vec<u8>>;
    type IntoIter = Chunks<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_chunks()
    }
}

impl<'a, R: Read> IntoIterator for &'a mut ChunkedReader<R> {
    type Item = Result<Vec<u8>>;
    type IntoIter = Chunks<&'a mut R>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks()
    }
}

/// One pass over a source, one chunk per `read` call.
///
/// `has_more` starts out `true` and flips to `false` for good on the first
/// short read. A failed read leaves it untouched; the iteration should not
/// be used after an error.
#[derive(Debug)]
pub struct Chunks<R> {
    source: R,
    chunk_size: usize,
    has_more: bool,
}

impl<R: Read> Chunks<R> {
    fn new(source: R, chunk_size: usize) -> Self {
        Chunks {
            source,
            chunk_size,
            has_more: true,
        }
    }

    /// Whether the source might still hold data.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Reads the next chunk with a single bounded read on the source.
    ///
    /// Returns [`ChunkError::Exhausted`] once a short read has been seen,
    /// and [`ChunkError::Io`] when the source fails.
    pub fn next_chunk(&mut self) -> Result<Vec<u8>> {
        if !self.has_more {
            return Err(ChunkError::Exhausted);
        }

        let mut chunk = Vec::new();
        chunk.try_reserve_exact(self.chunk_size).map_err(|e| {
            log::debug!(
                "[chunks] can't allocate {} bytes: {}",
                self.chunk_size,
                e
            );
            io::Error::from(io::ErrorKind::OutOfMemory)
        })?;
        chunk.resize(self.chunk_size, 0);

        let bytes_read = self.source.read(&mut chunk)?;
        log::trace!(
            "[chunks] requested {} bytes, got {}",
            self.chunk_size,
            bytes_read
        );

        self.has_more = bytes_read == self.chunk_size;
        if !self.has_more {
            log::trace!("[chunks] short read, iteration is over");
        }

        if bytes_read < self.chunk_size {
            chunk.truncate(bytes_read);
            chunk.shrink_to_fit();
        }
        Ok(chunk)
    }

    /// Chunks are read-only views of the source, removal always fails.
    pub fn remove(&mut self) -> Result<()> {
        Err(ChunkError::Unsupported("remove"))
    }

    pub fn into_inner(self) -> R {
        self.source
    }
}

impl<R: Read> Iterator for Chunks<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_more {
            return None;
        }
        Some(self.next_chunk())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.has_more {
            (1, None)
        } else {
            (0, Some(0))
        }
    }
}

impl<R: Read> FusedIterator for Chunks<R> {}

fn validate_chunk_size<S>(chunk_size: S) -> Result<usize>
where
    S: TryInto<usize> + Display + Copy,
{
    match chunk_size.try_into() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ChunkError::InvalidArgument(format!(
            "chunk size must be larger than 0, got {}",
            chunk_size
        ))),
    }
}
