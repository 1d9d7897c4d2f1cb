//! 分組資料夾合併器
//!
//! 將符合前綴的第一層子資料夾內的檔案移回同一個資料夾，並刪除已清空的子資料夾

use crate::error::{ChunkError, Result};
use crate::tools::{
    DEFAULT_PREFIX, ErrorReport, ItemFailure, RunOutcome, is_chunk_folder, list_first_level_files,
    list_first_level_names, move_file, validate_directory_exists,
};
use indicatif::ProgressBar;
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollateOptions {
    pub prefix: String,
    /// 檔案的目的地，未指定時使用第一個來源資料夾
    pub output: Option<PathBuf>,
}

impl Default for CollateOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            output: None,
        }
    }
}

pub struct Collator {
    sources: Vec<PathBuf>,
    options: CollateOptions,
    progress: ProgressBar,
}

impl Collator {
    pub fn new(sources: Vec<PathBuf>, options: CollateOptions) -> Self {
        Self {
            sources,
            options,
            progress: ProgressBar::hidden(),
        }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn destination(&self) -> Result<&Path> {
        match (&self.options.output, self.sources.first()) {
            (Some(output), _) => Ok(output),
            (None, Some(first)) => Ok(first),
            (None, None) => Err(ChunkError::NoInputPaths),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(ChunkError::NoInputPaths);
        }
        for source in &self.sources {
            validate_directory_exists(source)?;
        }
        validate_directory_exists(self.destination()?)
    }

    /// 所有來源資料夾中符合前綴的名稱（去重並排序）
    ///
    /// 任一來源找到的名稱，會在每個來源底下都嘗試一次
    pub fn eligible_folders(&self) -> Result<Vec<OsString>> {
        self.validate()?;

        let mut names = BTreeSet::new();
        for source in &self.sources {
            names.extend(
                list_first_level_names(source)?
                    .into_iter()
                    .filter(|name| is_chunk_folder(&self.options.prefix, &name.to_string_lossy())),
            );
        }
        Ok(names.into_iter().collect())
    }

    pub fn run(&self) -> Result<RunOutcome> {
        let folders = self.eligible_folders()?;
        let destination = self.destination()?;

        info!(
            "開始合併 {} 個來源，{} 個候選資料夾 -> {}",
            self.sources.len(),
            folders.len(),
            destination.display()
        );

        let mut report = ErrorReport::new();
        let mut moved = 0;

        for source in &self.sources {
            for folder in &folders {
                let subfolder = source.join(folder);
                if !subfolder.is_dir() {
                    continue;
                }
                moved += self.drain_folder(&subfolder, destination, &mut report);
                self.remove_folder(&subfolder, &mut report);
            }
        }

        self.progress.finish_and_clear();
        info!("合併完成 - 移動: {}, 失敗: {}", moved, report.len());

        Ok(RunOutcome { moved, report })
    }

    /// 將子資料夾第一層的檔案移到目的地，回傳成功移動的數量
    fn drain_folder(&self, subfolder: &Path, destination: &Path, report: &mut ErrorReport) -> usize {
        let files = match list_first_level_files(subfolder) {
            Ok(files) => files,
            Err(e) => {
                warn!("無法讀取資料夾 {}: {e}", subfolder.display());
                report.record(ItemFailure::Move {
                    item: subfolder.display().to_string(),
                    reason: e.to_string(),
                });
                return 0;
            }
        };

        self.progress.inc_length(files.len() as u64);

        let mut moved = 0;
        for name in files {
            let from = subfolder.join(&name);
            let to = destination.join(&name);

            match move_file(&from, &to) {
                Ok(()) => {
                    debug!("移動檔案: {} -> {}", from.display(), to.display());
                    moved += 1;
                }
                Err(e) => {
                    warn!("移動檔案失敗 {}: {e}", from.display());
                    report.record(ItemFailure::Move {
                        item: from.display().to_string(),
                        reason: e.to_string(),
                    });
                }
            }
            self.progress.inc(1);
        }

        moved
    }

    /// 只會刪除空資料夾，仍有內容時記錄失敗
    fn remove_folder(&self, subfolder: &Path, report: &mut ErrorReport) {
        match fs::remove_dir(subfolder) {
            Ok(()) => debug!("刪除資料夾: {}", subfolder.display()),
            Err(e) => {
                warn!("無法刪除資料夾 {}: {e}", subfolder.display());
                report.record(ItemFailure::Cleanup {
                    folder: subfolder.display().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }
}
