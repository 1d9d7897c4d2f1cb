//! 分組資料夾命名規則
//!
//! 分割與合併共用同一套命名：`prefix + 補零序號 + suffix`

pub const DEFAULT_PREFIX: &str = "chunk-";
pub const DEFAULT_SUFFIX: &str = "";
pub const DEFAULT_CHUNK_SIZE: usize = 110;
pub const DEFAULT_START_INDEX: usize = 1;
pub const MIN_CHUNK_SIZE: usize = 2;
pub const MAX_CHUNK_SIZE: usize = 300;
pub const MAX_START_INDEX: usize = 30_000;

/// 補零寬度：分組總數的位數，最少 2 位
#[must_use]
pub fn pad_width(group_count: usize) -> usize {
    group_count.to_string().len().max(2)
}

/// 序號超過寬度時完整輸出，不會截斷
#[must_use]
pub fn chunk_folder_name(prefix: &str, sequence: usize, width: usize, suffix: &str) -> String {
    format!("{prefix}{sequence:0width$}{suffix}")
}

#[must_use]
pub fn is_chunk_folder(prefix: &str, name: &str) -> bool {
    name.starts_with(prefix)
}
