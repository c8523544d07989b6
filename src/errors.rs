use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChunkError>;

#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No more chunks: the source is exhausted")]
    Exhausted,
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),
    #[error("Config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ChunkError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}
