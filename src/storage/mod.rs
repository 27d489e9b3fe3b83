use anyhow::Result;
use mockall::automock;
use std::path::{Path, PathBuf};

pub mod local;

/// ファイルシステム操作のトレイト
///
/// エンジンがディスクに触れる操作は全てこのトレイトを経由する。
/// 一覧取得は直下のエントリのみを対象とし、ファイル名順で返す。
#[automock]
pub trait FileSystemBackend: Send + Sync {
    /// ディレクトリ直下の通常ファイルを列挙する
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// ディレクトリ直下のサブディレクトリを列挙する
    fn list_subdirectories(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// パスが存在するかチェック
    fn exists(&self, path: &Path) -> bool;

    /// パスがディレクトリかどうかチェック
    fn is_dir(&self, path: &Path) -> bool;

    /// ファイルをリネーム（移動）する。移動先が既に存在する場合は失敗する
    fn rename(&self, from: &Path, to: &Path) -> Result<()>;

    /// ディレクトリを作成する。既に存在する場合は失敗する
    fn create_dir(&self, path: &Path) -> Result<()>;

    /// 空のディレクトリを削除する
    fn remove_dir(&self, path: &Path) -> Result<()>;
}

// FileSystemBackend for Box<dyn FileSystemBackend>
impl FileSystemBackend for Box<dyn FileSystemBackend> {
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.as_ref().list_files(dir)
    }

    fn list_subdirectories(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.as_ref().list_subdirectories(dir)
    }

    fn exists(&self, path: &Path) -> bool {
        self.as_ref().exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.as_ref().is_dir(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<()> {
        self.as_ref().rename(from, to)
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        self.as_ref().create_dir(path)
    }

    fn remove_dir(&self, path: &Path) -> Result<()> {
        self.as_ref().remove_dir(path)
    }
}

/// 隠しエントリ（ドットで始まる名前）かどうかを判定
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}
