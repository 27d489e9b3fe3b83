// 命名設定 - 桁数、区切り文字、プレフィックスモード、採番モード

use crate::core::{ShuffleError, ShuffleResult};
use serde::{Deserialize, Serialize};

/// 新しいプレフィックスの付け方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixMode {
    /// 番号と区切り文字を先頭に挿入し、元の名前は全て残す
    #[default]
    InsertNew,
    /// 番号と区切り文字で元の名前の先頭を上書きする
    ReplaceExisting,
}

/// 連番の採番方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberingMode {
    /// 作業セット全体で一つのカウンター
    #[default]
    Global,
    /// 元のディレクトリごとに独立したカウンター
    PerFolder,
}

/// シャッフル一回分の命名設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub digits: usize,
    pub separator: String,
    pub prefix_mode: PrefixMode,
    pub numbering: NumberingMode,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            digits: 1,
            separator: "-".to_string(),
            prefix_mode: PrefixMode::InsertNew,
            numbering: NumberingMode::Global,
        }
    }
}

impl NamingConfig {
    pub fn new(digits: usize, separator: impl Into<String>) -> Self {
        Self {
            digits,
            separator: separator.into(),
            ..Self::default()
        }
    }

    pub fn with_digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_prefix_mode(mut self, prefix_mode: PrefixMode) -> Self {
        self.prefix_mode = prefix_mode;
        self
    }

    pub fn with_numbering(mut self, numbering: NumberingMode) -> Self {
        self.numbering = numbering;
        self
    }

    pub fn is_per_folder(&self) -> bool {
        self.numbering == NumberingMode::PerFolder
    }

    /// 値の範囲チェック
    pub fn validate(&self) -> ShuffleResult<()> {
        if self.digits == 0 {
            return Err(ShuffleError::validation(
                "digits",
                "桁数は1以上である必要があります",
            ));
        }
        if self.separator.contains(['/', '\\', '\0']) {
            return Err(ShuffleError::validation(
                "separator",
                "区切り文字にパス区切りやNUL文字は使用できません",
            ));
        }
        Ok(())
    }

    /// 置換モードで桁数が最短ファイル名の長さを超えていないかチェック
    pub fn validate_for_min_length(&self, min_length: usize) -> ShuffleResult<()> {
        self.validate()?;
        if self.prefix_mode == PrefixMode::ReplaceExisting && self.digits > min_length {
            return Err(ShuffleError::configuration_invalid(self.digits, min_length));
        }
        Ok(())
    }
}
