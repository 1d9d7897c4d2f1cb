//! 合併元件
//!
//! 將分組資料夾內的檔案移回單一資料夾，並刪除已清空的分組資料夾

mod collator;
mod main;

pub use collator::{CollateOptions, Collator};
pub use main::ChunkMerger;
