//! 致命錯誤定義
//!
//! 只有這裡的錯誤會中止整個執行，其餘失敗都記錄在 `ErrorReport`

use std::path::PathBuf;
use thiserror::Error;

use crate::tools::{MAX_CHUNK_SIZE, MAX_START_INDEX, MIN_CHUNK_SIZE};

#[derive(Debug, Error)]
pub enum ChunkError {
    #[error("無效的路徑 {}: {reason}", .path.display())]
    InvalidInput { path: PathBuf, reason: &'static str },

    #[error(
        "每個資料夾的檔案數必須介於 {} 與 {} 之間，收到 {value}",
        MIN_CHUNK_SIZE,
        MAX_CHUNK_SIZE
    )]
    InvalidChunkSize { value: usize },

    #[error("起始編號不可大於 {}，收到 {value}", MAX_START_INDEX)]
    InvalidStartIndex { value: usize },

    #[error("至少需要一個輸入路徑")]
    NoInputPaths,

    #[error("無法讀取資料夾 {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

pub type Result<T> = std::result::Result<T, ChunkError>;
