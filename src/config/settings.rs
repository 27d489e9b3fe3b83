// 設定ファイル (JSON) から読み込むシャッフル設定

use super::{DistributionConfig, NamingConfig, NumberingMode, PrefixMode};
use crate::core::{ShuffleError, ShuffleResult};
use crate::naming::NameFormatter;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// ワークフロー全体の設定
///
/// `digits` を省略した場合はファイル数の桁数が使われる。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShuffleSettings {
    pub digits: Option<usize>,
    pub separator: Option<String>,
    pub prefix_mode: PrefixMode,
    pub numbering: NumberingMode,
    pub recursive: bool,
    pub include_hidden: bool,
    pub delete_old_dirs: bool,
    pub distribution: Option<DistributionConfig>,
    pub seed: Option<u64>,
}

impl ShuffleSettings {
    pub fn from_file(path: &Path) -> ShuffleResult<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))
            .map_err(|e| ShuffleError::settings(path, e))?;

        serde_json::from_str(&content).map_err(|e| ShuffleError::settings(path, e.into()))
    }

    /// `file_count` 件のファイルに対する命名設定を組み立てる
    pub fn naming_config(&self, file_count: usize) -> NamingConfig {
        let defaults = NamingConfig::default();
        NamingConfig {
            digits: self
                .digits
                .unwrap_or_else(|| NameFormatter::decimal_width(file_count as u64)),
            separator: self.separator.clone().unwrap_or(defaults.separator),
            prefix_mode: self.prefix_mode,
            numbering: self.numbering,
        }
    }

    pub fn validate(&self) -> ShuffleResult<()> {
        if let Some(distribution) = &self.distribution {
            distribution.validate()?;
        }
        if self.digits == Some(0) {
            return Err(ShuffleError::validation(
                "digits",
                "桁数は1以上である必要があります",
            ));
        }
        Ok(())
    }
}
