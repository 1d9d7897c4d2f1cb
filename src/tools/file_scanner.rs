use crate::error::{ChunkError, Result};
use log::warn;
use std::ffi::OsString;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// 只列出第一層項目，不會遞迴進入子資料夾
///
/// 根目錄無法讀取時回傳錯誤；單一項目（例如失效的連結）讀取失敗則略過
fn first_level_entries(directory: &Path) -> Result<Vec<DirEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        match entry {
            Ok(entry) => entries.push(entry),
            Err(source) if source.depth() == 0 => {
                return Err(ChunkError::Io {
                    path: directory.to_path_buf(),
                    source,
                });
            }
            Err(e) => warn!("略過無法讀取的項目: {e}"),
        }
    }

    Ok(entries)
}

/// 列出第一層的檔案名稱（指向檔案的連結也算），依字典序排序
pub fn list_first_level_files(directory: &Path) -> Result<Vec<OsString>> {
    let mut files: Vec<OsString> = first_level_entries(directory)?
        .into_iter()
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.file_name().to_owned())
        .collect();

    files.sort();
    Ok(files)
}

/// 列出第一層的所有項目名稱，依字典序排序
pub fn list_first_level_names(directory: &Path) -> Result<Vec<OsString>> {
    let mut names: Vec<OsString> = first_level_entries(directory)?
        .into_iter()
        .map(|entry| entry.file_name().to_owned())
        .collect();

    names.sort();
    Ok(names)
}
