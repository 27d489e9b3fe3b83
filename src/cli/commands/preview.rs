use super::validate_target_directory;
use crate::cli::NamingArgs;
use crate::config::{PrefixMode, ShuffleSettings};
use crate::create_engine;
use crate::reporting::NoOpProgressReporter;
use anyhow::Result;
use std::path::Path;

impl NamingArgs {
    /// 指定されたフラグだけ設定を上書きする
    pub fn apply_to(&self, settings: &mut ShuffleSettings) {
        if let Some(digits) = self.digits {
            settings.digits = Some(digits);
        }
        if let Some(separator) = &self.separator {
            settings.separator = Some(separator.clone());
        }
        if self.replace_prefix {
            settings.prefix_mode = PrefixMode::ReplaceExisting;
        }
    }
}

/// 先頭のファイルに付く名前を表示する（ファイルは変更しない）
pub fn execute_preview(
    target_directory: &Path,
    naming: &NamingArgs,
    recursive: bool,
    include_hidden: bool,
) -> Result<Option<String>> {
    validate_target_directory(target_directory)?;

    let mut engine = create_engine(include_hidden, NoOpProgressReporter::new(), None);
    if !engine.read_directory(target_directory, recursive)? {
        println!("✅ 対象ファイルがありません。");
        return Ok(None);
    }

    let mut settings = ShuffleSettings::default();
    naming.apply_to(&mut settings);
    let config = settings.naming_config(engine.file_count());
    config.validate_for_min_length(engine.min_file_name_length())?;

    let preview = engine.preview_name(&config);
    if let (Some(first), Some(name)) = (engine.file_list().first(), &preview) {
        println!("🔍 {} → {}", first.display_name(), name);
    }
    Ok(preview)
}
