use data_chunk::ChunkError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Couldn't open input file {0}: {1}")]
    InputOpenError(String, io::Error),

    #[error("Couldn't create output directory: {0}")]
    OutputDirectoryCreationError(String),

    #[error("Couldn't write chunk {0}: {1}")]
    ChunkWriteError(usize, io::Error),

    #[error("Input path has no file name: {0}")]
    InvalidInputPath(String),

    #[error(transparent)]
    ChunkError(#[from] ChunkError),
}
