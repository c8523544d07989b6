//! # Data Chunk
//!
//! `data-chunk` reads any [`std::io::Read`] source in fixed-size chunks.
//!
//! A [`ChunkedReader`] wraps a source together with a validated chunk size
//! and hands out [`Chunks`], an iterator yielding one buffer per bounded
//! read. A [`ChunkedReaderFactory`] keeps a chunk size around and builds
//! readers for new sources on demand.
//!
//! ```
//! use data_chunk::ChunkedReaderFactory;
//!
//! let factory = ChunkedReaderFactory::with_chunk_size(3);
//! let chunks = factory
//!     .build(&b"ABCDEFG"[..])?
//!     .into_iter()
//!     .collect::<data_chunk::Result<Vec<_>>>()?;
//! assert_eq!(chunks, vec![b"ABC".to_vec(), b"DEF".to_vec(), b"G".to_vec()]);
//! # Ok::<(), data_chunk::ChunkError>(())
//! ```

pub mod errors;
pub mod factory;
pub mod reader;

pub use errors::{ChunkError, Result};
pub use factory::ChunkedReaderFactory;
pub use reader::{ChunkedReader, Chunks};
