// シャッフルワークフロー
//
// 一回の実行で行う操作の順序:
// 1. 古いサブディレクトリの解体（有効な場合）
// 2. 再スキャン
// 3. シャッフルとリネーム
// 4. サブディレクトリへの振り分け（有効な場合）
// 5. 最終スキャン

use super::ShuffleEngine;
use crate::config::ShuffleSettings;
use crate::core::types::serialize_lossy_path;
use crate::core::{BatchReport, ShuffleError, ShuffleResult};
use crate::reporting::ProgressReporter;
use crate::storage::FileSystemBackend;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// ワークフロー一回分の結果
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowSummary {
    #[serde(serialize_with = "serialize_lossy_path")]
    pub root: PathBuf,
    pub files_found: usize,
    pub moved_to_top: Option<BatchReport>,
    pub deleted_dirs: Option<BatchReport>,
    pub renamed: Option<BatchReport>,
    pub created_dirs: Option<BatchReport>,
    pub distributed: Option<BatchReport>,
    pub final_file_count: usize,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
}

impl WorkflowSummary {
    fn new(root: &Path, started_at: DateTime<Local>) -> Self {
        Self {
            root: root.to_path_buf(),
            files_found: 0,
            moved_to_top: None,
            deleted_dirs: None,
            renamed: None,
            created_dirs: None,
            distributed: None,
            final_file_count: 0,
            started_at,
            finished_at: started_at,
        }
    }

    /// 実行されたバッチのレポートを実行順に返す
    pub fn reports(&self) -> impl Iterator<Item = &BatchReport> {
        [
            &self.moved_to_top,
            &self.deleted_dirs,
            &self.renamed,
            &self.created_dirs,
            &self.distributed,
        ]
        .into_iter()
        .flatten()
    }

    pub fn total_failures(&self) -> usize {
        self.reports().map(BatchReport::failed_count).sum()
    }

    pub fn is_success(&self) -> bool {
        self.total_failures() == 0
    }

    /// 最初に失敗したバッチを `BatchFailed` エラーに変換する
    pub fn into_result(self) -> ShuffleResult<Self> {
        let first_failed = self
            .reports()
            .find(|report| !report.is_success())
            .map(|report| {
                ShuffleError::batch_failed(
                    report.operation.as_str(),
                    report.failed_count(),
                    report.total,
                )
            });

        match first_failed {
            Some(error) => Err(error),
            None => Ok(self),
        }
    }

    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// 設定に従ってエンジンの操作を順に実行する
#[derive(Debug, Clone)]
pub struct ShuffleWorkflow {
    settings: ShuffleSettings,
}

impl ShuffleWorkflow {
    pub fn new(settings: ShuffleSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ShuffleSettings {
        &self.settings
    }

    /// 古いディレクトリの解体を行うかどうか（再帰モードでのみ有効）
    pub fn flattens(&self) -> bool {
        self.settings.recursive && self.settings.delete_old_dirs
    }

    /// ワークフローを実行する
    ///
    /// 設定の検証はファイルシステムに触れる前に行う。ディレクトリの作成に
    /// 一つでも失敗した場合は振り分けを行わず、作成失敗を `created_dirs` に
    /// 記録したサマリーを返す。失敗は `WorkflowSummary::into_result` で検出できる。
    pub fn run<S, R>(
        &self,
        engine: &mut ShuffleEngine<S, R>,
        root: &Path,
    ) -> ShuffleResult<WorkflowSummary>
    where
        S: FileSystemBackend,
        R: ProgressReporter,
    {
        let mut summary = WorkflowSummary::new(root, Local::now());
        let settings = &self.settings;
        settings.validate()?;

        if !engine.read_directory(root, settings.recursive)? {
            info!(root = %root.display(), "No files found");
            summary.finished_at = Local::now();
            return Ok(summary);
        }
        summary.files_found = engine.file_count();

        let naming = settings.naming_config(engine.file_count());
        naming.validate_for_min_length(engine.min_file_name_length())?;

        let flatten = self.flattens();
        if flatten {
            summary.moved_to_top = Some(engine.move_files_to_top_dir()?);
            summary.deleted_dirs = Some(engine.delete_old_dirs()?);
        }

        engine.read_directory(root, settings.recursive && !flatten)?;
        summary.renamed = Some(engine.shuffle_files(&naming)?);

        if let Some(distribution) = &settings.distribution {
            let created = engine.create_directories(distribution)?;
            let create_failed = !created.is_success();
            if create_failed {
                warn!(
                    failed = created.failed_count(),
                    "Directory creation failed, skipping distribution"
                );
            }
            summary.created_dirs = Some(created);

            if !create_failed {
                summary.distributed =
                    Some(engine.move_files_to_directories(distribution.files_per_directory)?);
            }
        }

        engine.read_directory(root, settings.recursive || settings.distribution.is_some())?;
        summary.final_file_count = engine.file_count();
        summary.finished_at = Local::now();

        info!(
            root = %root.display(),
            files = summary.files_found,
            failures = summary.total_failures(),
            "Workflow finished"
        );
        Ok(summary)
    }
}
