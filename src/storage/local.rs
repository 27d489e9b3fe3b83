use super::{is_hidden, FileSystemBackend};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// ローカルファイルシステム用のバックエンド
#[derive(Debug, Clone, Default)]
pub struct LocalFileSystem {
    include_hidden: bool,
}

impl LocalFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// 隠しファイル・隠しディレクトリも対象にする
    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    pub fn includes_hidden(&self) -> bool {
        self.include_hidden
    }

    /// 直下のエントリを名前順に列挙し、条件に合うものだけを返す
    fn list_entries<F>(&self, dir: &Path, keep: F) -> Result<Vec<PathBuf>>
    where
        F: Fn(&walkdir::DirEntry) -> bool,
    {
        let mut paths = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry =
                entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;

            if !self.include_hidden && is_hidden(entry.path()) {
                continue;
            }
            if keep(&entry) {
                paths.push(entry.into_path());
            }
        }

        Ok(paths)
    }
}

impl FileSystemBackend for LocalFileSystem {
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        // シンボリックリンクは辿らないため、通常ファイルのみが対象になる
        self.list_entries(dir, |entry| entry.file_type().is_file())
    }

    fn list_subdirectories(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.list_entries(dir, |entry| entry.file_type().is_dir())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        if from == to {
            return Ok(());
        }
        // std::fs::rename は移動先を上書きするため、事前に確認する
        if to.symlink_metadata().is_ok() {
            anyhow::bail!("Target already exists: {}", to.display());
        }

        debug!(from = %from.display(), to = %to.display(), "rename");
        std::fs::rename(from, to).with_context(|| {
            format!("Failed to rename {} to {}", from.display(), to.display())
        })
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        std::fs::create_dir(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))
    }

    fn remove_dir(&self, path: &Path) -> Result<()> {
        std::fs::remove_dir(path)
            .with_context(|| format!("Failed to remove directory: {}", path.display()))
    }
}
