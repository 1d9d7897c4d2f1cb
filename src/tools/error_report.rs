//! 執行錯誤報告
//!
//! 每個項目的失敗都記錄在報告中，不會中斷整批處理

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureCategory {
    Unmoved,
    Undeleted,
    Filenames,
}

impl FailureCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unmoved => "unmoved",
            Self::Undeleted => "undeleted",
            Self::Filenames => "filenames",
        }
    }
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 單一項目的失敗
#[derive(Debug, Clone, Error)]
pub enum ItemFailure {
    #[error("無法重新命名 {name}: {reason}")]
    Rename { name: String, reason: String },

    #[error("無法移動 {item}: {reason}")]
    Move { item: String, reason: String },

    #[error("無法刪除資料夾 {folder}: {reason}")]
    Cleanup { folder: String, reason: String },
}

impl ItemFailure {
    #[must_use]
    pub const fn category(&self) -> FailureCategory {
        match self {
            Self::Rename { .. } => FailureCategory::Filenames,
            Self::Move { .. } => FailureCategory::Unmoved,
            Self::Cleanup { .. } => FailureCategory::Undeleted,
        }
    }

    /// 報告中用來辨識項目的原始名稱或路徑
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Self::Rename { name, .. } => name,
            Self::Move { item, .. } => item,
            Self::Cleanup { folder, .. } => folder,
        }
    }
}

#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct ErrorReport {
    entries: BTreeMap<FailureCategory, Vec<String>>,
    #[serde(skip)]
    failures: Vec<ItemFailure>,
}

impl ErrorReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, failure: ItemFailure) {
        self.entries
            .entry(failure.category())
            .or_default()
            .push(failure.identifier().to_string());
        self.failures.push(failure);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    #[must_use]
    pub fn identifiers(&self, category: FailureCategory) -> &[String] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// 依類別排序的項目
    pub fn categories(&self) -> impl Iterator<Item = (FailureCategory, &[String])> {
        self.entries
            .iter()
            .map(|(category, items)| (*category, items.as_slice()))
    }

    #[must_use]
    pub fn failures(&self) -> &[ItemFailure] {
        &self.failures
    }

    pub fn merge(&mut self, other: Self) {
        for failure in other.failures {
            self.record(failure);
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// 分割或合併的執行結果
#[derive(Debug, Default, Clone)]
pub struct RunOutcome {
    /// 成功移動的檔案數
    pub moved: usize,
    pub report: ErrorReport,
}
