use std::fs::File;
use std::path::{Path, PathBuf};

use clap::Subcommand;
use data_chunk::{ChunkedReader, ChunkedReaderFactory};

use crate::AppError;

mod split;
mod stat;

const DEFAULT_CHUNK_SIZE: i64 = 4096;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Stat(stat::Stat),
    Split(split::Split),
}

/// Chunk size selection shared by every subcommand.
#[derive(Clone, Debug, clap::Args)]
pub struct ChunkOptions {
    #[clap(
        short,
        long,
        allow_negative_numbers = true,
        help = "Chunk size in bytes, overrides the config file"
    )]
    chunk_size: Option<i64>,

    #[clap(
        long,
        value_parser,
        help = "JSON file holding the chunk size, e.g. {\"chunk_size\": 4096}"
    )]
    config: Option<PathBuf>,
}

impl ChunkOptions {
    pub fn factory(&self) -> Result<ChunkedReaderFactory, AppError> {
        let mut factory = match &self.config {
            Some(path) => ChunkedReaderFactory::load(path)?,
            None => ChunkedReaderFactory::with_chunk_size(DEFAULT_CHUNK_SIZE),
        };
        if let Some(chunk_size) = self.chunk_size {
            factory.set_chunk_size(chunk_size);
        }
        log::debug!("Using chunk size {}", factory.chunk_size());

        Ok(factory)
    }
}

pub fn open_chunked(
    factory: &ChunkedReaderFactory,
    path: &Path,
) -> Result<ChunkedReader<File>, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::InputOpenError(path.display().to_string(), e)
    })?;
    Ok(factory.build(file)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    #[test]
    fn flag_overrides_config_file() {
        let dir = TempDir::new("options").unwrap();
        let config = dir.path().join("chunks.json");
        fs::write(&config, r#"{"chunk_size": 16}"#).unwrap();

        let options = ChunkOptions {
            chunk_size: None,
            config: Some(config.clone()),
        };
        assert_eq!(options.factory().unwrap().chunk_size(), 16);

        let options = ChunkOptions {
            chunk_size: Some(8),
            config: Some(config),
        };
        assert_eq!(options.factory().unwrap().chunk_size(), 8);
    }

    #[test]
    fn default_chunk_size_without_options() {
        let options = ChunkOptions {
            chunk_size: None,
            config: None,
        };
        assert_eq!(options.factory().unwrap().chunk_size(), DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn missing_input_is_reported() {
        let dir = TempDir::new("options").unwrap();
        let factory = ChunkedReaderFactory::with_chunk_size(4);
        let result = open_chunked(&factory, &dir.path().join("nope"));
        assert!(matches!(result, Err(AppError::InputOpenError(_, _))));
    }
}
