// サブディレクトリへの振り分け設定

use crate::core::{ShuffleError, ShuffleResult};
use serde::{Deserialize, Serialize};

/// 新しいサブディレクトリの作成と振り分けの設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionConfig {
    pub files_per_directory: usize,
    pub directory_prefix: String,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            files_per_directory: 100,
            directory_prefix: "dir".to_string(),
        }
    }
}

impl DistributionConfig {
    pub fn new(files_per_directory: usize, directory_prefix: impl Into<String>) -> Self {
        Self {
            files_per_directory,
            directory_prefix: directory_prefix.into(),
        }
    }

    /// `file_count` 件のファイルに必要なディレクトリ数（切り上げ）
    pub fn directory_count(&self, file_count: usize) -> usize {
        file_count.div_ceil(self.files_per_directory.max(1))
    }

    pub fn validate(&self) -> ShuffleResult<()> {
        if self.files_per_directory == 0 {
            return Err(ShuffleError::validation(
                "files_per_directory",
                "ディレクトリあたりのファイル数は1以上である必要があります",
            ));
        }
        if self.directory_prefix.contains(['/', '\\', '\0']) {
            return Err(ShuffleError::validation(
                "directory_prefix",
                "ディレクトリ接頭辞にパス区切りやNUL文字は使用できません",
            ));
        }
        Ok(())
    }
}
