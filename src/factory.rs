use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::errors::Result;
use crate::reader::ChunkedReader;

/// Reusable chunk size configuration.
///
/// The setter accepts any value; a zero or negative chunk size only fails
/// when a reader is built from it.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct ChunkedReaderFactory {
    chunk_size: i64,
}

impl ChunkedReaderFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chunk_size(chunk_size: i64) -> Self {
        ChunkedReaderFactory { chunk_size }
    }

    /// Loads the configuration from a JSON file such as
    /// `{"chunk_size": 4096}`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        log::debug!(
            "Loading chunk configuration from {}",
            path.as_ref().display()
        );

        let contents = fs::read_to_string(path)?;
        let factory = serde_json::from_str(&contents)?;
        Ok(factory)
    }

    pub fn chunk_size(&self) -> i64 {
        self.chunk_size
    }

    pub fn set_chunk_size(&mut self, chunk_size: i64) {
        self.chunk_size = chunk_size;
    }

    /// Binds a new reader to `source` with the current chunk size.
    pub fn build<R: Read>(&self, source: R) -> Result<ChunkedReader<R>> {
        log::debug!(
            "[factory] building reader, chunk size {}",
            self.chunk_size
        );
        ChunkedReader::new(source, self.chunk_size)
    }

    pub fn build_optional<R: Read>(
        &self,
        source: Option<R>,
    ) -> Result<ChunkedReader<R>> {
        ChunkedReader::from_optional(source, self.chunk_size)
    }
}
