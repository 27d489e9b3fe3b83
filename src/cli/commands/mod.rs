pub mod distribute;
pub mod flatten;
pub mod preview;
pub mod scan;
pub mod shuffle;

pub use distribute::*;
pub use flatten::*;
pub use preview::*;
pub use scan::*;
pub use shuffle::*;

use crate::core::BatchReport;
use std::path::Path;

/// 対象ディレクトリの存在確認
pub(crate) fn validate_target_directory(target_directory: &Path) -> anyhow::Result<()> {
    if !target_directory.exists() {
        anyhow::bail!(
            "Target directory does not exist: {}",
            target_directory.display()
        );
    }
    if !target_directory.is_dir() {
        anyhow::bail!(
            "Target path is not a directory: {}",
            target_directory.display()
        );
    }
    Ok(())
}

/// バッチ結果の一行表示
pub(crate) fn print_report(label: &str, report: &BatchReport) {
    if report.is_success() {
        println!("   - {label}: {} 件", report.succeeded);
    } else {
        println!(
            "   - {label}: {} 件 (エラー {} 件)",
            report.succeeded,
            report.failed_count()
        );
    }
}
