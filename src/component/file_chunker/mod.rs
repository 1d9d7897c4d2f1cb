//! 檔案分組元件
//!
//! 將資料夾中的檔案依名稱排序，按固定數量移入依序編號的子資料夾

mod main;
mod partitioner;

pub use main::FileChunker;
pub use partitioner::{PartitionOptions, Partitioner, PlannedChunk};
