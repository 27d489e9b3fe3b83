// シャッフルエンジン - スキャン、並べ替え、リネーム、サブディレクトリ操作

use crate::config::{DistributionConfig, NamingConfig};
use crate::core::{
    BatchOperation, BatchReport, FileEntry, OperationFailure, ShuffleError, ShuffleResult,
};
use crate::naming::NameFormatter;
use crate::reporting::ProgressReporter;
use crate::scanner::DirectoryScanner;
use crate::sequence::SequenceAllocator;
use crate::storage::FileSystemBackend;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 依存性注入によるシャッフルエンジン
///
/// 作業セットと連番の状態はこのインスタンスだけが所有する。
/// 全ての操作は呼び出し元のスレッドで順番に実行される。
pub struct ShuffleEngine<S, R> {
    backend: S,
    reporter: R,
    rng: StdRng,
    root: Option<PathBuf>,
    working_set: Vec<FileEntry>,
    allocator: SequenceAllocator,
}

impl<S, R> ShuffleEngine<S, R>
where
    S: FileSystemBackend,
    R: ProgressReporter,
{
    /// OSの乱数で初期化したエンジンを作成
    pub fn new(backend: S, reporter: R) -> Self {
        Self::with_rng(backend, reporter, StdRng::from_os_rng())
    }

    /// 固定シードのエンジンを作成（再現可能な並べ替え）
    pub fn with_seed(backend: S, reporter: R, seed: u64) -> Self {
        Self::with_rng(backend, reporter, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(backend: S, reporter: R, rng: StdRng) -> Self {
        Self {
            backend,
            reporter,
            rng,
            root: None,
            working_set: Vec::new(),
            allocator: SequenceAllocator::new(),
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// 最後にスキャンしたディレクトリ
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    // ========================================
    // スキャン
    // ========================================

    /// ディレクトリを読み込み、作業セットを置き換える
    ///
    /// ファイルが一つも見つからなかった場合は `Ok(false)` を返す。
    pub fn read_directory(&mut self, root: &Path, recursive: bool) -> ShuffleResult<bool> {
        let entries = DirectoryScanner::scan_directory(&self.backend, root, recursive)?;
        info!(root = %root.display(), recursive, files = entries.len(), "Scanned directory");

        self.root = Some(root.to_path_buf());
        self.working_set = entries;

        Ok(!self.working_set.is_empty())
    }

    /// 作業セットの読み取り専用ビュー
    pub fn file_list(&self) -> &[FileEntry] {
        &self.working_set
    }

    pub fn file_count(&self) -> usize {
        self.working_set.len()
    }

    pub fn min_file_name_length(&self) -> usize {
        DirectoryScanner::min_file_name_length(&self.working_set)
    }

    /// ファイル数を表すのに必要な桁数
    pub fn recommended_digits(&self) -> usize {
        NameFormatter::decimal_width(self.working_set.len() as u64)
    }

    /// 推奨桁数で既存プレフィックス置換モードが使えるかどうか
    pub fn prefix_replace_allowed(&self) -> bool {
        !self.working_set.is_empty() && self.recommended_digits() <= self.min_file_name_length()
    }

    /// 作業セット先頭のファイルが1番になった場合の名前
    pub fn preview_name(&self, naming: &NamingConfig) -> Option<String> {
        self.working_set
            .first()
            .and_then(|entry| NameFormatter::format_os(entry.file_name(), 1, naming))
            .map(|name| name.to_string_lossy().into_owned())
    }

    // ========================================
    // シャッフル
    // ========================================

    /// 作業セットをその場で並べ替える
    ///
    /// 各位置 i について [0, len) から一様に選んだ j と入れ替える。
    pub fn permute(&mut self) {
        let len = self.working_set.len();
        for i in 0..len {
            let j = self.rng.random_range(0..len);
            self.working_set.swap(i, j);
        }
    }

    /// 作業セットを並べ替え、新しい連番でリネームする
    ///
    /// 設定の検証はディスクに触れる前に行う。個別のリネーム失敗は
    /// バッチを中断せずにレポートへ集められる。
    pub fn shuffle_files(&mut self, naming: &NamingConfig) -> ShuffleResult<BatchReport> {
        if self.working_set.is_empty() {
            return Err(ShuffleError::empty_working_set("shuffle"));
        }
        naming.validate_for_min_length(self.min_file_name_length())?;

        self.reporter.report_status("Shuffling file list...", -1);

        self.allocator.reset();
        self.permute();

        let mut report = BatchReport::new(BatchOperation::Rename);

        for i in 0..self.working_set.len() {
            let entry = self.working_set[i].clone();

            // 置換できない名前には連番を割り当てない
            let new_name = if NameFormatter::can_format(entry.file_name(), naming.prefix_mode) {
                let directory = naming.is_per_folder().then(|| entry.parent());
                let seq = self.allocator.next(directory);
                NameFormatter::format_os(entry.file_name(), seq, naming)
            } else {
                None
            };

            let Some(new_name) = new_name else {
                let error = ShuffleError::rename_failed(
                    entry.path(),
                    entry.path(),
                    "non-UTF-8 file name cannot have its prefix replaced",
                );
                self.report_failure(&error);
                report.record_failure(OperationFailure::new(entry.path(), None, error.to_string()));
                self.reporter.report_status("Renaming files...", i as i64);
                continue;
            };
            let target = entry.parent().join(&new_name);

            match self.rename_entry(&entry, &target) {
                Ok(()) => {
                    self.working_set[i] = entry.renamed(&new_name);
                    report.record_success();
                }
                Err(error) => {
                    self.report_failure(&error);
                    report.record_failure(OperationFailure::new(
                        entry.path(),
                        Some(target),
                        error.to_string(),
                    ));
                }
            }

            self.reporter.report_status("Renaming files...", i as i64);
        }

        self.reporter.report_status("Done.", -1);

        if !report.is_success() {
            warn!(
                failed = report.failed_count(),
                total = report.total,
                "Some files could not be renamed"
            );
        }
        Ok(report)
    }

    fn rename_entry(&self, entry: &FileEntry, target: &Path) -> ShuffleResult<()> {
        self.backend
            .rename(entry.path(), target)
            .map_err(|e| ShuffleError::rename_failed(entry.path(), target, format!("{e:#}")))
    }

    // ========================================
    // サブディレクトリ操作
    // ========================================

    /// 作業セットを収めるのに必要な数のディレクトリを作成する
    ///
    /// 名前は `接頭辞 + ゼロ埋めした番号`。番号の桁数はディレクトリ数の桁数。
    /// 既存のディレクトリと名前が衝突した場合は、そのディレクトリの失敗として記録する。
    pub fn create_directories(
        &self,
        distribution: &DistributionConfig,
    ) -> ShuffleResult<BatchReport> {
        distribution.validate()?;
        let root = self.require_root("create_directories")?;

        let count = distribution.directory_count(self.working_set.len());
        let digits = NameFormatter::decimal_width(count as u64);
        info!(count, "needed dirs");

        self.reporter.report_status("Creating directories...", -1);
        let mut report = BatchReport::new(BatchOperation::CreateDirectories);

        for i in 1..=count {
            let name = format!(
                "{}{}",
                distribution.directory_prefix,
                NameFormatter::pad_number(i as u64, digits)
            );
            let path = root.join(name);

            let created = if self.backend.exists(&path) {
                Err(anyhow::anyhow!("Already exists"))
            } else {
                self.backend.create_dir(&path)
            };

            match created {
                Ok(()) => report.record_success(),
                Err(e) => {
                    let error = ShuffleError::directory_create_failed(&path, format!("{e:#}"));
                    self.report_failure(&error);
                    report.record_failure(OperationFailure::new(&path, None, error.to_string()));
                }
            }
            self.reporter
                .report_status("Creating directories...", (i - 1) as i64);
        }

        Ok(report)
    }

    /// ルート直下のファイルをサブディレクトリへ振り分ける
    ///
    /// サブディレクトリごとにルートのファイルを列挙し直し、先頭から最大
    /// `files_per_directory` 件を移動する。容量が足りなければ残りはルートに残る。
    pub fn move_files_to_directories(
        &self,
        files_per_directory: usize,
    ) -> ShuffleResult<BatchReport> {
        if files_per_directory == 0 {
            return Err(ShuffleError::validation(
                "files_per_directory",
                "ディレクトリあたりのファイル数は1以上である必要があります",
            ));
        }
        let root = self.require_root("move_files_to_directories")?;

        let subdirs = self
            .backend
            .list_subdirectories(root)
            .map_err(|e| ShuffleError::scan_failed(root, e))?;

        self.reporter
            .report_status("Moving files to directories...", -1);
        let mut report = BatchReport::new(BatchOperation::MoveToDirectories);
        let mut step = 0i64;

        for subdir in &subdirs {
            let files = self
                .backend
                .list_files(root)
                .map_err(|e| ShuffleError::scan_failed(root, e))?;

            for file in files.iter().take(files_per_directory) {
                let Some(name) = file.file_name() else {
                    continue;
                };
                let target = subdir.join(name);
                debug!(from = %file.display(), to = %target.display(), "About to move");

                self.move_file(file, &target, &mut report);
                self.reporter
                    .report_status("Moving files to directories...", step);
                step += 1;
            }
        }

        Ok(report)
    }

    /// ルート直下のサブディレクトリを削除する（空でないものは失敗として記録）
    pub fn delete_old_dirs(&self) -> ShuffleResult<BatchReport> {
        let root = self.require_root("delete_old_dirs")?;

        let subdirs = self
            .backend
            .list_subdirectories(root)
            .map_err(|e| ShuffleError::scan_failed(root, e))?;

        self.reporter.report_status("Deleting old directories...", -1);
        let mut report = BatchReport::new(BatchOperation::DeleteOldDirs);

        for (i, subdir) in subdirs.iter().enumerate() {
            debug!(dir = %subdir.display(), "About to delete directory");

            match self.backend.remove_dir(subdir) {
                Ok(()) => report.record_success(),
                Err(e) => {
                    let error = ShuffleError::directory_delete_failed(subdir, format!("{e:#}"));
                    self.report_failure(&error);
                    report.record_failure(OperationFailure::new(subdir, None, error.to_string()));
                }
            }
            self.reporter
                .report_status("Deleting old directories...", i as i64);
        }

        Ok(report)
    }

    /// サブディレクトリ内のファイルをルートへ移動する
    ///
    /// ルートに同名のファイルがある場合はそのファイルの失敗として記録する。
    pub fn move_files_to_top_dir(&self) -> ShuffleResult<BatchReport> {
        let root = self.require_root("move_files_to_top_dir")?;

        let subdirs = self
            .backend
            .list_subdirectories(root)
            .map_err(|e| ShuffleError::scan_failed(root, e))?;

        self.reporter
            .report_status("Moving files to top directory...", -1);
        let mut report = BatchReport::new(BatchOperation::MoveToTopDir);
        let mut step = 0i64;

        for subdir in &subdirs {
            let files = match self.backend.list_files(subdir) {
                Ok(files) => files,
                Err(e) => {
                    let error = ShuffleError::scan_failed(subdir, e);
                    self.report_failure(&error);
                    report.record_failure(OperationFailure::new(subdir, None, error.to_string()));
                    continue;
                }
            };

            for file in &files {
                let Some(name) = file.file_name() else {
                    continue;
                };
                let target = root.join(name);
                debug!(from = %file.display(), to = %target.display(), "About to move");

                self.move_file(file, &target, &mut report);
                self.reporter
                    .report_status("Moving files to top directory...", step);
                step += 1;
            }
        }

        Ok(report)
    }

    fn move_file(&self, from: &Path, to: &Path, report: &mut BatchReport) {
        match self.backend.rename(from, to) {
            Ok(()) => report.record_success(),
            Err(e) => {
                let error = ShuffleError::rename_failed(from, to, format!("{e:#}"));
                self.report_failure(&error);
                report.record_failure(OperationFailure::new(
                    from,
                    Some(to.to_path_buf()),
                    error.to_string(),
                ));
            }
        }
    }

    fn require_root(&self, operation: &str) -> ShuffleResult<&Path> {
        self.root
            .as_deref()
            .ok_or_else(|| ShuffleError::empty_working_set(operation))
    }

    fn report_failure(&self, error: &ShuffleError) {
        warn!("{error}");
        self.reporter
            .report_status(&format!("Failed: {error}"), -1);
    }
}
