use crate::core::{FileEntry, ShuffleError, ShuffleResult};
use crate::storage::FileSystemBackend;
use std::path::Path;
use tracing::debug;

/// 作業セットを作るディレクトリスキャナー
///
/// 再帰モードでもルート直下のサブディレクトリまでしか降りない。
pub struct DirectoryScanner;

impl DirectoryScanner {
    pub fn scan_directory<S: FileSystemBackend + ?Sized>(
        backend: &S,
        root: &Path,
        recursive: bool,
    ) -> ShuffleResult<Vec<FileEntry>> {
        if !backend.is_dir(root) {
            return Err(ShuffleError::scan_failed(
                root,
                anyhow::anyhow!("Not a directory"),
            ));
        }

        let mut entries = Vec::new();

        if recursive {
            debug!("Recursive mode.");
            let subdirs = backend
                .list_subdirectories(root)
                .map_err(|e| ShuffleError::scan_failed(root, e))?;

            for subdir in subdirs {
                debug!(dir = %subdir.display(), "Entering directory");
                let files = backend
                    .list_files(&subdir)
                    .map_err(|e| ShuffleError::scan_failed(&subdir, e))?;
                entries.extend(files.into_iter().filter_map(FileEntry::from_path));
            }
        }

        let files = backend
            .list_files(root)
            .map_err(|e| ShuffleError::scan_failed(root, e))?;
        entries.extend(files.into_iter().filter_map(FileEntry::from_path));

        Ok(entries)
    }

    /// 最短のファイル名の長さ（空なら 0）
    pub fn min_file_name_length(entries: &[FileEntry]) -> usize {
        entries
            .iter()
            .map(FileEntry::name_length)
            .min()
            .unwrap_or(0)
    }
}
