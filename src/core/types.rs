// シャッフル処理に関連するデータ型定義

use super::error::{ShuffleError, ShuffleResult};
use serde::{Serialize, Serializer};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// スキャン時に取得したファイル情報
///
/// スキャン時点の値をコピーして保持する。ディスク上のファイルへの参照は持たない。
/// ファイル名は OS のバイト列のまま保持し、表示用の文字列は別に持つ。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileEntry {
    #[serde(serialize_with = "serialize_lossy_path")]
    path: PathBuf,
    #[serde(serialize_with = "serialize_lossy_path")]
    parent: PathBuf,
    #[serde(skip)]
    file_name: OsString,
    #[serde(rename = "file_name")]
    display_name: String,
    name_length: usize,
}

impl FileEntry {
    /// 絶対パスからエントリを作成（ファイル名を持たないパスは `None`）
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let file_name = path.file_name()?.to_os_string();
        let parent = path.parent()?.to_path_buf();

        Some(Self::build(path, parent, file_name))
    }

    fn build(path: PathBuf, parent: PathBuf, file_name: OsString) -> Self {
        let display_name = file_name.to_string_lossy().into_owned();

        Self {
            name_length: display_name.chars().count(),
            path,
            parent,
            file_name,
            display_name,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parent(&self) -> &Path {
        &self.parent
    }

    /// ディスク上のファイル名（UTF-8 とは限らない）
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    /// 表示用のファイル名（UTF-8 でないバイトは置換文字になる）
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// ファイル名の長さ（文字数）
    pub fn name_length(&self) -> usize {
        self.name_length
    }

    /// 同じディレクトリ内で別名になったエントリを作成
    pub fn renamed(&self, new_name: &OsStr) -> Self {
        Self::build(
            self.parent.join(new_name),
            self.parent.clone(),
            new_name.to_os_string(),
        )
    }
}

/// JSON 出力用にパスを文字列化する（UTF-8 でないバイトは置換文字になる）
pub(crate) fn serialize_lossy_path<S: Serializer>(
    path: &Path,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

fn serialize_lossy_optional_path<S: Serializer>(
    path: &Option<PathBuf>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match path {
        Some(path) => serialize_lossy_path(path, serializer),
        None => serializer.serialize_none(),
    }
}

/// 進捗通知イベント
///
/// `progress >= 0` は作業セット内の位置、`progress < 0` は不定または完了フェーズを表す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressEvent {
    pub message: String,
    pub progress: i64,
}

impl ProgressEvent {
    pub const INDETERMINATE: i64 = -1;

    pub fn step(message: impl Into<String>, index: usize) -> Self {
        Self {
            message: message.into(),
            progress: index as i64,
        }
    }

    pub fn indeterminate(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            progress: Self::INDETERMINATE,
        }
    }

    pub fn is_indeterminate(&self) -> bool {
        self.progress < 0
    }
}

/// バッチ処理の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchOperation {
    Rename,
    CreateDirectories,
    MoveToDirectories,
    MoveToTopDir,
    DeleteOldDirs,
}

impl BatchOperation {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rename => "rename",
            Self::CreateDirectories => "create_directories",
            Self::MoveToDirectories => "move_files_to_directories",
            Self::MoveToTopDir => "move_files_to_top_dir",
            Self::DeleteOldDirs => "delete_old_dirs",
        }
    }
}

impl fmt::Display for BatchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 個別ファイル・ディレクトリ単位の失敗
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationFailure {
    #[serde(serialize_with = "serialize_lossy_path")]
    pub source: PathBuf,
    #[serde(serialize_with = "serialize_lossy_optional_path")]
    pub target: Option<PathBuf>,
    pub reason: String,
}

impl OperationFailure {
    pub fn new(source: impl Into<PathBuf>, target: Option<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for OperationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Some(target) => write!(
                f,
                "{} -> {}: {}",
                self.source.display(),
                target.display(),
                self.reason
            ),
            None => write!(f, "{}: {}", self.source.display(), self.reason),
        }
    }
}

/// バッチ処理の結果サマリー
///
/// 個別の失敗はバッチを中断せずに収集され、完了後にまとめて報告される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub operation: BatchOperation,
    pub total: usize,
    pub succeeded: usize,
    pub failures: Vec<OperationFailure>,
}

impl BatchReport {
    pub fn new(operation: BatchOperation) -> Self {
        Self {
            operation,
            total: 0,
            succeeded: 0,
            failures: Vec::new(),
        }
    }

    pub fn record_success(&mut self) {
        self.total += 1;
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self, failure: OperationFailure) {
        self.total += 1;
        self.failures.push(failure);
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    /// 失敗が一件もなければ true
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// 失敗を含むレポートを `ShuffleError::BatchFailed` に変換
    pub fn into_result(self) -> ShuffleResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ShuffleError::batch_failed(
                self.operation.as_str(),
                self.failed_count(),
                self.total,
            ))
        }
    }
}
