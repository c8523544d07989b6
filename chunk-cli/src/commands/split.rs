use std::fs;
use std::path::{Path, PathBuf};

use data_chunk::ChunkedReaderFactory;

use super::{open_chunked, ChunkOptions};
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(
    name = "split",
    about = "Write every chunk of a file to its own part file"
)]
pub struct Split {
    #[clap(value_parser, help = "File to split")]
    file: PathBuf,

    #[clap(value_parser, help = "Directory receiving the part files")]
    out_dir: PathBuf,

    #[clap(flatten)]
    options: ChunkOptions,
}

impl Split {
    pub fn run(&self) -> Result<(), AppError> {
        let factory = self.options.factory()?;
        let parts = split_file(&factory, &self.file, &self.out_dir)?;
        println!(
            "Wrote {} parts to {}",
            parts.len(),
            self.out_dir.display()
        );

        Ok(())
    }
}

/// Writes chunk `i` of `file` to `<out_dir>/<file name>.<i>` and returns the
/// paths written, in order.
pub fn split_file(
    factory: &ChunkedReaderFactory,
    file: &Path,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, AppError> {
    let file_name = file
        .file_name()
        .ok_or_else(|| {
            AppError::InvalidInputPath(file.display().to_string())
        })?
        .to_string_lossy()
        .into_owned();

    let reader = open_chunked(factory, file)?;
    fs::create_dir_all(out_dir).map_err(|e| {
        AppError::OutputDirectoryCreationError(format!(
            "{}: {}",
            out_dir.display(),
            e
        ))
    })?;

    let mut parts = Vec::new();
    for (index, chunk) in reader.into_iter().enumerate() {
        let chunk = chunk?;
        let part = out_dir.join(format!("{}.{}", file_name, index));
        fs::write(&part, &chunk)
            .map_err(|e| AppError::ChunkWriteError(index, e))?;
        log::trace!("[split] {} bytes -> {}", chunk.len(), part.display());
        parts.push(part);
    }

    Ok(parts)
}
