//! 檔案分割器
//!
//! 將資料夾第一層的檔案依名稱排序後，按固定數量移入依序編號的子資料夾

use crate::error::{ChunkError, Result};
use crate::tools::{
    DEFAULT_CHUNK_SIZE, DEFAULT_PREFIX, DEFAULT_START_INDEX, DEFAULT_SUFFIX, ErrorReport,
    ItemFailure, MAX_CHUNK_SIZE, MAX_START_INDEX, MIN_CHUNK_SIZE, RunOutcome, chunk_folder_name,
    list_first_level_files, move_file, pad_width, rename_to_sanitized, sanitize_filename,
    validate_directory_exists,
};
use indicatif::ProgressBar;
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// 分割參數
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionOptions {
    /// 每個子資料夾的檔案數上限
    pub chunk_size: usize,
    /// 第一個子資料夾的序號
    pub start_index: usize,
    pub prefix: String,
    pub suffix: String,
    /// 子資料夾建立的位置，未指定時使用來源資料夾
    pub output: Option<PathBuf>,
    /// 移動前是否先正規化檔名
    pub sanitize: bool,
}

impl Default for PartitionOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            start_index: DEFAULT_START_INDEX,
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            output: None,
            sanitize: true,
        }
    }
}

/// 預定建立的一個子資料夾及其成員
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedChunk {
    pub name: String,
    pub files: Vec<OsString>,
}

pub struct Partitioner {
    source: PathBuf,
    options: PartitionOptions,
    progress: ProgressBar,
}

impl Partitioner {
    pub fn new(source: impl Into<PathBuf>, options: PartitionOptions) -> Self {
        Self {
            source: source.into(),
            options,
            progress: ProgressBar::hidden(),
        }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    #[must_use]
    pub fn destination(&self) -> &Path {
        self.options.output.as_deref().unwrap_or(&self.source)
    }

    fn validate(&self) -> Result<()> {
        validate_directory_exists(&self.source)?;
        if let Some(output) = &self.options.output {
            validate_directory_exists(output)?;
        }
        let chunk_size = self.options.chunk_size;
        if !(MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(&chunk_size) {
            return Err(ChunkError::InvalidChunkSize { value: chunk_size });
        }
        let start_index = self.options.start_index;
        if start_index > MAX_START_INDEX {
            return Err(ChunkError::InvalidStartIndex { value: start_index });
        }
        Ok(())
    }

    /// 預覽分割結果，不會改動任何檔案
    ///
    /// 啟用正規化時以正規化後的名稱排序；無法正規化或新名稱已被占用的檔案沿用原名
    pub fn plan(&self) -> Result<Vec<PlannedChunk>> {
        self.validate()?;

        let mut files = list_first_level_files(&self.source)?;
        if self.options.sanitize {
            files = preview_sanitized_names(files);
        }

        Ok(self.build_chunks(files))
    }

    pub fn run(&self) -> Result<RunOutcome> {
        self.validate()?;

        info!(
            "開始分割: {} -> {}",
            self.source.display(),
            self.destination().display()
        );

        let mut report = ErrorReport::new();

        // 開始改名前取得完整清單，之後只依這份清單與改名結果分組
        let mut files = list_first_level_files(&self.source)?;
        if self.options.sanitize {
            files = self.sanitize_names(files, &mut report);
        }

        let chunks = self.build_chunks(files);
        let total: usize = chunks.iter().map(|c| c.files.len()).sum();
        self.progress.set_length(total as u64);

        let mut moved = 0;
        for chunk in &chunks {
            moved += self.move_chunk(chunk, &mut report);
        }

        self.progress.finish_and_clear();
        info!(
            "分割完成 - 子資料夾: {}, 移動: {}, 失敗: {}",
            chunks.len(),
            moved,
            report.len()
        );

        Ok(RunOutcome { moved, report })
    }

    /// 依序正規化檔名，回傳排序後的最終檔名
    fn sanitize_names(&self, files: Vec<OsString>, report: &mut ErrorReport) -> Vec<OsString> {
        let mut final_names: Vec<OsString> = files
            .into_iter()
            .map(|name| match rename_to_sanitized(&self.source, &name) {
                Ok(new_name) => {
                    if new_name != name {
                        debug!(
                            "重新命名: {} -> {}",
                            name.to_string_lossy(),
                            new_name.to_string_lossy()
                        );
                    }
                    new_name
                }
                Err(e) => {
                    warn!("無法正規化檔名 {}: {e}", name.to_string_lossy());
                    report.record(ItemFailure::Rename {
                        name: name.to_string_lossy().into_owned(),
                        reason: e.to_string(),
                    });
                    name
                }
            })
            .collect();

        final_names.sort();
        final_names
    }

    fn build_chunks(&self, files: Vec<OsString>) -> Vec<PlannedChunk> {
        let groups: Vec<&[OsString]> = files.chunks(self.options.chunk_size).collect();
        let width = pad_width(groups.len());

        groups
            .into_iter()
            .enumerate()
            .map(|(idx, members)| PlannedChunk {
                name: chunk_folder_name(
                    &self.options.prefix,
                    self.options.start_index + idx,
                    width,
                    &self.options.suffix,
                ),
                files: members.to_vec(),
            })
            .collect()
    }

    /// 移動一組檔案，回傳成功移動的數量
    fn move_chunk(&self, chunk: &PlannedChunk, report: &mut ErrorReport) -> usize {
        let folder = self.destination().join(&chunk.name);

        // 已存在的同名資料夾直接沿用
        if let Err(e) = fs::create_dir_all(&folder) {
            warn!("無法建立資料夾 {}: {e}", folder.display());
            for name in &chunk.files {
                report.record(ItemFailure::Move {
                    item: name.to_string_lossy().into_owned(),
                    reason: e.to_string(),
                });
            }
            self.progress.inc(chunk.files.len() as u64);
            return 0;
        }

        let mut moved = 0;
        for name in &chunk.files {
            let from = self.source.join(name);
            let to = folder.join(name);

            match move_file(&from, &to) {
                Ok(()) => {
                    debug!("移動檔案: {} -> {}", from.display(), to.display());
                    moved += 1;
                }
                Err(e) => {
                    warn!("移動檔案失敗 {}: {e}", from.display());
                    report.record(ItemFailure::Move {
                        item: name.to_string_lossy().into_owned(),
                        reason: e.to_string(),
                    });
                }
            }
            self.progress.inc(1);
        }

        moved
    }
}

/// 模擬 `rename_to_sanitized` 依序改名的結果，不會改動檔案
fn preview_sanitized_names(files: Vec<OsString>) -> Vec<OsString> {
    let mut taken: BTreeSet<OsString> = files.iter().cloned().collect();

    let mut final_names: Vec<OsString> = files
        .into_iter()
        .map(|name| {
            let Ok(sanitized) = sanitize_filename(&name) else {
                return name;
            };
            let sanitized = OsString::from(sanitized);
            if sanitized == name || taken.contains(&sanitized) {
                return name;
            }
            taken.remove(&name);
            taken.insert(sanitized.clone());
            sanitized
        })
        .collect();

    final_names.sort();
    final_names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::FailureCategory;
    use tempfile::TempDir;

    fn options(chunk_size: usize) -> PartitionOptions {
        PartitionOptions {
            chunk_size,
            ..PartitionOptions::default()
        }
    }

    fn create_files(base: &Path, names: &[&str]) {
        for name in names {
            fs::write(base.join(name), name).unwrap();
        }
    }

    #[test]
    fn test_partition_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        create_files(base, &["b.txt", "a.txt", "c.txt"]);

        let outcome = Partitioner::new(base, options(2)).run().unwrap();

        assert_eq!(outcome.moved, 3);
        assert!(outcome.report.is_empty());
        assert!(base.join("chunk-01/a.txt").exists());
        assert!(base.join("chunk-01/b.txt").exists());
        assert!(base.join("chunk-02/c.txt").exists());
        assert!(!base.join("a.txt").exists());
    }

    #[test]
    fn test_plan_does_not_touch_files() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        create_files(base, &["b.txt", "a.txt", "c.txt"]);

        let plan = Partitioner::new(base, options(2)).plan().unwrap();

        assert_eq!(
            plan,
            vec![
                PlannedChunk {
                    name: "chunk-01".to_string(),
                    files: vec!["a.txt".into(), "b.txt".into()],
                },
                PlannedChunk {
                    name: "chunk-02".to_string(),
                    files: vec!["c.txt".into()],
                },
            ]
        );
        assert!(base.join("a.txt").exists());
        assert!(!base.join("chunk-01").exists());
    }

    #[test]
    fn test_plan_sorts_by_sanitized_name() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        create_files(base, &["?z.txt", "m.txt"]);

        let plan = Partitioner::new(base, options(2)).plan().unwrap();
        assert_eq!(plan[0].files, vec![OsString::from("m.txt"), "z.txt".into()]);
    }

    #[test]
    fn test_empty_directory_moves_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let outcome = Partitioner::new(temp_dir.path(), options(2)).run().unwrap();

        assert_eq!(outcome.moved, 0);
        assert!(outcome.report.is_empty());
        assert!(list_first_level_files(temp_dir.path()).unwrap().is_empty());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_single_file_minimum_chunk_size() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        create_files(base, &["only.txt"]);

        let outcome = Partitioner::new(base, options(MIN_CHUNK_SIZE)).run().unwrap();

        assert_eq!(outcome.moved, 1);
        assert!(base.join("chunk-01/only.txt").exists());
        assert_eq!(fs::read_dir(base).unwrap().count(), 1);
    }

    #[test]
    fn test_padding_grows_with_group_count() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        let names: Vec<String> = (0..200).map(|i| format!("file{i:03}.txt")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        create_files(base, &refs);

        let opts = PartitionOptions {
            chunk_size: 2,
            start_index: 0,
            prefix: "part".to_string(),
            suffix: "x".to_string(),
            ..PartitionOptions::default()
        };
        let outcome = Partitioner::new(base, opts).run().unwrap();

        assert_eq!(outcome.moved, 200);
        assert!(base.join("part000x/file000.txt").exists());
        assert!(base.join("part099x/file199.txt").exists());
    }

    #[test]
    fn test_directories_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        create_files(base, &["a.txt"]);
        fs::create_dir(base.join("nested")).unwrap();
        fs::write(base.join("nested/inner.txt"), "inner").unwrap();

        let outcome = Partitioner::new(base, options(2)).run().unwrap();

        assert_eq!(outcome.moved, 1);
        assert!(base.join("nested/inner.txt").exists());
    }

    #[test]
    fn test_output_directory() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        create_files(source.path(), &["a.txt", "b.txt"]);

        let opts = PartitionOptions {
            output: Some(output.path().to_path_buf()),
            ..options(2)
        };
        let outcome = Partitioner::new(source.path(), opts).run().unwrap();

        assert_eq!(outcome.moved, 2);
        assert!(output.path().join("chunk-01/a.txt").exists());
        assert!(!source.path().join("chunk-01").exists());
    }

    #[test]
    fn test_sanitize_failure_keeps_original_name() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        create_files(base, &["a?.txt", "a.txt"]);

        let outcome = Partitioner::new(base, options(2)).run().unwrap();

        assert_eq!(outcome.moved, 2);
        assert_eq!(
            outcome.report.identifiers(FailureCategory::Filenames),
            ["a?.txt"]
        );
        assert!(base.join("chunk-01/a?.txt").exists());
        assert!(base.join("chunk-01/a.txt").exists());
    }

    #[test]
    fn test_sanitize_renames_before_sorting() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        create_files(base, &["?c.txt", "a.txt", "b.txt"]);

        let outcome = Partitioner::new(base, options(2)).run().unwrap();

        assert_eq!(outcome.moved, 3);
        assert!(base.join("chunk-01/a.txt").exists());
        assert!(base.join("chunk-01/b.txt").exists());
        assert!(base.join("chunk-02/c.txt").exists());
    }

    #[test]
    fn test_collision_in_reused_folder_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        create_files(base, &["a.txt", "b.txt"]);
        fs::create_dir(base.join("chunk-01")).unwrap();
        fs::write(base.join("chunk-01/a.txt"), "existing").unwrap();

        let outcome = Partitioner::new(base, options(2)).run().unwrap();

        assert_eq!(outcome.moved, 1);
        assert_eq!(outcome.report.identifiers(FailureCategory::Unmoved), ["a.txt"]);
        assert_eq!(
            fs::read_to_string(base.join("chunk-01/a.txt")).unwrap(),
            "existing"
        );
        assert!(base.join("a.txt").exists());
    }

    #[test]
    fn test_invalid_chunk_size() {
        let temp_dir = TempDir::new().unwrap();
        create_files(temp_dir.path(), &["a.txt"]);

        for size in [0, 1, MAX_CHUNK_SIZE + 1] {
            let err = Partitioner::new(temp_dir.path(), options(size))
                .run()
                .unwrap_err();
            assert!(matches!(err, ChunkError::InvalidChunkSize { .. }));
        }
        assert!(temp_dir.path().join("a.txt").exists());
    }

    #[test]
    fn test_invalid_start_index() {
        let temp_dir = TempDir::new().unwrap();
        create_files(temp_dir.path(), &["a.txt", "b.txt", "c.txt"]);

        for start_index in [MAX_START_INDEX + 1, usize::MAX] {
            let opts = PartitionOptions {
                start_index,
                ..options(2)
            };
            let partitioner = Partitioner::new(temp_dir.path(), opts);
            assert!(matches!(
                partitioner.plan().unwrap_err(),
                ChunkError::InvalidStartIndex { .. }
            ));
            assert!(matches!(
                partitioner.run().unwrap_err(),
                ChunkError::InvalidStartIndex { .. }
            ));
        }
        assert_eq!(list_first_level_files(temp_dir.path()).unwrap().len(), 3);
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 3);
    }

    #[test]
    fn test_maximum_start_index() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        create_files(base, &["a.txt"]);

        let opts = PartitionOptions {
            start_index: MAX_START_INDEX,
            ..options(2)
        };
        let outcome = Partitioner::new(base, opts).run().unwrap();

        assert_eq!(outcome.moved, 1);
        assert!(base.join(format!("chunk-{MAX_START_INDEX}/a.txt")).exists());
    }

    #[test]
    fn test_folder_creation_failure_continues_with_next_group() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        create_files(source.path(), &["a.txt", "b.txt", "c.txt", "d.txt"]);
        // 同名的一般檔案讓第一個資料夾無法建立
        fs::write(output.path().join("chunk-01"), "blocker").unwrap();

        let opts = PartitionOptions {
            output: Some(output.path().to_path_buf()),
            ..options(2)
        };
        let outcome = Partitioner::new(source.path(), opts).run().unwrap();

        assert_eq!(outcome.moved, 2);
        assert_eq!(
            outcome.report.identifiers(FailureCategory::Unmoved),
            ["a.txt", "b.txt"]
        );
        assert!(source.path().join("a.txt").exists());
        assert!(source.path().join("b.txt").exists());
        assert_eq!(
            list_first_level_files(&output.path().join("chunk-02")).unwrap(),
            vec!["c.txt", "d.txt"]
        );
        assert_eq!(
            fs::read_to_string(output.path().join("chunk-01")).unwrap(),
            "blocker"
        );
    }

    #[test]
    fn test_plan_keeps_original_name_on_sanitize_collision() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        create_files(base, &["a?.txt", "a.txt"]);

        let partitioner = Partitioner::new(base, options(2));
        let plan = partitioner.plan().unwrap();
        assert_eq!(
            plan[0].files,
            vec![OsString::from("a.txt"), "a?.txt".into()]
        );

        let outcome = partitioner.run().unwrap();
        assert!(outcome.report.identifiers(FailureCategory::Unmoved).is_empty());
        assert_eq!(
            list_first_level_files(&base.join(&plan[0].name)).unwrap(),
            plan[0].files
        );
    }

    #[test]
    fn test_plan_matches_run_after_sanitize() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        create_files(base, &["?c.txt", "b|.txt", "a.txt", "b.txt", "d.txt"]);

        let partitioner = Partitioner::new(base, options(2));
        let plan = partitioner.plan().unwrap();
        let outcome = partitioner.run().unwrap();

        assert_eq!(outcome.moved, 5);
        for chunk in &plan {
            assert_eq!(
                list_first_level_files(&base.join(&chunk.name)).unwrap(),
                chunk.files
            );
        }
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let err = Partitioner::new(&missing, options(2)).run().unwrap_err();
        assert!(matches!(err, ChunkError::InvalidInput { .. }));
    }
}
