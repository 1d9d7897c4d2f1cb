//! 功能元件模組
//!
//! 每個子模組實現一個獨立的功能，包含主要邏輯和互動流程

pub mod chunk_merger;
pub mod file_chunker;
mod path_prompt;
mod progress;
pub mod summary;

pub use chunk_merger::{ChunkMerger, CollateOptions, Collator};
pub use file_chunker::{FileChunker, PartitionOptions, Partitioner, PlannedChunk};
pub use progress::create_progress_bar;
pub use summary::print_outcome;
