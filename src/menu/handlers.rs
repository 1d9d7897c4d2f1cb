use crate::component::{ChunkMerger, FileChunker};
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use rust_i18n::t;

pub fn run_file_chunker(term: &Term, config: &Config) -> Result<()> {
    let chunker = FileChunker::new(config.clone());

    if let Err(e) = chunker.run() {
        eprintln!("{} {:#}", style(t!("common.error_prefix")).red().bold(), e);
    }

    pause(term)?;
    Ok(())
}

pub fn run_chunk_merger(term: &Term, config: &Config) -> Result<()> {
    let merger = ChunkMerger::new(config.clone());

    if let Err(e) = merger.run() {
        eprintln!("{} {:#}", style(t!("common.error_prefix")).red().bold(), e);
    }

    pause(term)?;
    Ok(())
}
