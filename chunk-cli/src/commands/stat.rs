use std::path::{Path, PathBuf};

use crc32fast::Hasher;
use data_chunk::ChunkedReaderFactory;

use super::{open_chunked, ChunkOptions};
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(
    name = "stat",
    about = "Print the length and CRC32 checksum of every chunk of a file"
)]
pub struct Stat {
    #[clap(value_parser, help = "File to read")]
    file: PathBuf,

    #[clap(flatten)]
    options: ChunkOptions,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ChunkStat {
    pub index: usize,
    pub len: usize,
    pub crc32: u32,
}

impl Stat {
    pub fn run(&self) -> Result<(), AppError> {
        let factory = self.options.factory()?;
        let stats = chunk_stats(&factory, &self.file)?;

        for stat in &stats {
            println!("{}\t{}\t{:08x}", stat.index, stat.len, stat.crc32);
        }
        let total: usize = stats.iter().map(|stat| stat.len).sum();
        println!("{} chunks, {} bytes", stats.len(), total);

        Ok(())
    }
}

pub fn chunk_stats(
    factory: &ChunkedReaderFactory,
    path: &Path,
) -> Result<Vec<ChunkStat>, AppError> {
    let reader = open_chunked(factory, path)?;

    let mut stats = Vec::new();
    for (index, chunk) in reader.into_iter().enumerate() {
        let chunk = chunk?;
        let mut hasher = Hasher::new();
        hasher.update(&chunk);
        stats.push(ChunkStat {
            index,
            len: chunk.len(),
            crc32: hasher.finalize(),
        });
    }
    log::trace!("[stat] {} chunks in {}", stats.len(), path.display());

    Ok(stats)
}
