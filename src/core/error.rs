// シャッフル処理専用のカスタムエラー型定義

use std::path::{Path, PathBuf};
use thiserror::Error;

/// シャッフル処理固有のエラー型
#[derive(Error, Debug)]
pub enum ShuffleError {
    #[error("スキャンエラー: {path} - {source}")]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("作業セットが空です: {operation} の前にファイルを含むディレクトリをスキャンしてください")]
    EmptyWorkingSet { operation: String },

    #[error("リネームエラー: {from} -> {to} - {reason}")]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },

    #[error("ディレクトリ作成エラー: {path} - {reason}")]
    DirectoryCreateFailed { path: PathBuf, reason: String },

    #[error("ディレクトリ削除エラー: {path} - {reason}")]
    DirectoryDeleteFailed { path: PathBuf, reason: String },

    #[error("設定エラー: 桁数 {digits} が最短ファイル名の長さ {min_length} を超えています (既存プレフィックス置換モード)")]
    ConfigurationInvalid { digits: usize, min_length: usize },

    #[error("バリデーションエラー: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("{operation} が部分的に失敗しました: {failed}/{total} 件のエラー")]
    BatchFailed {
        operation: String,
        failed: usize,
        total: usize,
    },

    #[error("設定ファイルエラー: {path} - {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl ShuffleError {
    /// スキャンエラーの作成
    pub fn scan_failed(path: impl AsRef<Path>, source: anyhow::Error) -> Self {
        Self::ScanFailed {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// 空の作業セットエラーの作成
    pub fn empty_working_set(operation: impl Into<String>) -> Self {
        Self::EmptyWorkingSet {
            operation: operation.into(),
        }
    }

    /// リネームエラーの作成
    pub fn rename_failed(
        from: impl AsRef<Path>,
        to: impl AsRef<Path>,
        reason: impl Into<String>,
    ) -> Self {
        Self::RenameFailed {
            from: from.as_ref().to_path_buf(),
            to: to.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// ディレクトリ作成エラーの作成
    pub fn directory_create_failed(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::DirectoryCreateFailed {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// ディレクトリ削除エラーの作成
    pub fn directory_delete_failed(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::DirectoryDeleteFailed {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// 桁数と最短ファイル名の不整合エラーの作成
    pub fn configuration_invalid(digits: usize, min_length: usize) -> Self {
        Self::ConfigurationInvalid { digits, min_length }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// バッチ部分失敗エラーの作成
    pub fn batch_failed(operation: impl Into<String>, failed: usize, total: usize) -> Self {
        Self::BatchFailed {
            operation: operation.into(),
            failed,
            total,
        }
    }

    /// 設定ファイルエラーの作成
    pub fn settings(path: impl AsRef<Path>, source: anyhow::Error) -> Self {
        Self::Settings {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigurationInvalid { .. } | Self::ValidationError { .. } => {
                ErrorSeverity::Critical
            }
            Self::Settings { .. } | Self::EmptyWorkingSet { .. } => ErrorSeverity::High,
            Self::ScanFailed { .. } | Self::DirectoryCreateFailed { .. } => ErrorSeverity::High,
            Self::BatchFailed { .. } => ErrorSeverity::Medium,
            Self::RenameFailed { .. } | Self::DirectoryDeleteFailed { .. } => {
                ErrorSeverity::Medium
            }
        }
    }

    /// ファイルシステムを変更する前に検出されるエラーかどうか
    ///
    /// 設定系のエラーは変更前に検証されるため、ディスク上の状態は変わっていない。
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationInvalid { .. }
                | Self::ValidationError { .. }
                | Self::EmptyWorkingSet { .. }
                | Self::Settings { .. }
        )
    }

    /// エラーコンテキストを取得
    pub fn context(&self) -> ErrorContext {
        match self {
            Self::ScanFailed { path, .. } => ErrorContext::new("scan")
                .with_resource(path.display().to_string())
                .with_suggestion("ディレクトリのパスとアクセス権限を確認してください"),
            Self::RenameFailed { from, .. } => ErrorContext::new("rename")
                .with_resource(from.display().to_string())
                .with_suggestion("同名ファイルの有無と書き込み権限を確認してください"),
            Self::DirectoryCreateFailed { path, .. } => ErrorContext::new("create_directories")
                .with_resource(path.display().to_string())
                .with_suggestion("別のディレクトリ接頭辞を指定してください"),
            Self::DirectoryDeleteFailed { path, .. } => ErrorContext::new("delete_old_dirs")
                .with_resource(path.display().to_string())
                .with_suggestion("ディレクトリが空であることを確認してください"),
            Self::ConfigurationInvalid { min_length, .. } => ErrorContext::new("configuration")
                .with_suggestion(format!(
                    "桁数を {min_length} 以下にするか、新しいプレフィックスを挿入するモードを使用してください"
                )),
            Self::Settings { path, .. } => ErrorContext::new("settings")
                .with_resource(path.display().to_string())
                .with_suggestion("設定ファイルのJSON形式を確認してください"),
            _ => ErrorContext::new("unknown"),
        }
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 中重要度 - 警告レベル
    Medium,
    /// 高重要度 - 要対応
    High,
    /// 致命的 - 処理を開始できない
    Critical,
}

impl ErrorSeverity {
    /// 重要度の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// エラーコンテキスト情報
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// 実行していた操作
    pub operation: String,
    /// 関連するリソース（ファイルパス等）
    pub resource: Option<String>,
    /// エラー解決のための提案
    pub suggestion: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            resource: None,
            suggestion: None,
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// シャッフル処理の結果型
pub type ShuffleResult<T> = std::result::Result<T, ShuffleError>;
