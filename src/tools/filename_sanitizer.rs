//! 檔名正規化模組
//!
//! 移除在各種檔案系統上不安全的字元，失敗時只影響單一檔案

use regex::Regex;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

/// 大部分檔案系統的單一檔名長度上限（位元組）
const MAX_FILENAME_BYTES: usize = 255;

static REGEX_INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*\x00-\x1f\x7f]"#).expect("Invalid regex"));

static REGEX_RESERVED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(CON|PRN|AUX|NUL|COM[1-9]|LPT[1-9])(\..*)?$").expect("Invalid regex")
});

#[derive(Debug, Error)]
pub enum SanitizeError {
    #[error("檔名不是有效的 UTF-8")]
    NotUtf8,

    #[error("正規化後檔名為空")]
    Empty,

    #[error("目標檔名已存在: {0}")]
    TargetExists(String),

    #[error("重新命名失敗: {0}")]
    Io(#[from] io::Error),
}

/// 將檔名轉換為安全形式
pub fn sanitize_filename(name: &OsStr) -> Result<String, SanitizeError> {
    let name = name.to_str().ok_or(SanitizeError::NotUtf8)?;

    let stripped = REGEX_INVALID_CHARS.replace_all(name, "");
    let mut result = stripped.trim_end_matches(['.', ' ']).to_string();

    if result.is_empty() {
        return Err(SanitizeError::Empty);
    }

    if REGEX_RESERVED_NAME.is_match(&result) {
        result = match result.split_once('.') {
            Some((stem, rest)) => format!("{stem}_.{rest}"),
            None => format!("{result}_"),
        };
    }

    truncate_on_char_boundary(&mut result, MAX_FILENAME_BYTES);
    Ok(result)
}

fn truncate_on_char_boundary(value: &mut String, max_bytes: usize) {
    if value.len() <= max_bytes {
        return;
    }
    let mut end = max_bytes;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    value.truncate(end);
}

/// 將 `directory` 中的檔案改為正規化後的名稱，回傳最終檔名
///
/// 名稱未改變時不做任何事；目標已存在時不覆蓋
pub fn rename_to_sanitized(directory: &Path, name: &OsStr) -> Result<OsString, SanitizeError> {
    let sanitized = sanitize_filename(name)?;
    if sanitized.as_str() == name {
        return Ok(name.to_owned());
    }

    let target = directory.join(&sanitized);
    if target.exists() {
        return Err(SanitizeError::TargetExists(sanitized));
    }

    fs::rename(directory.join(name), &target)?;
    Ok(OsString::from(sanitized))
}
