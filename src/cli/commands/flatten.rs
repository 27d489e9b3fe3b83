use super::{print_report, validate_target_directory};
use crate::core::BatchReport;
use crate::create_engine;
use crate::reporting::ConsoleProgressReporter;
use anyhow::Result;
use std::path::Path;

/// flattenコマンドの結果
#[derive(Debug)]
pub struct FlattenOutcome {
    pub moved: BatchReport,
    pub deleted: Option<BatchReport>,
}

/// サブディレクトリのファイルを対象ディレクトリへ戻す
pub fn execute_flatten(
    target_directory: &Path,
    delete_old_dirs: bool,
    include_hidden: bool,
    quiet: bool,
) -> Result<FlattenOutcome> {
    validate_target_directory(target_directory)?;

    let reporter = if quiet {
        ConsoleProgressReporter::quiet()
    } else {
        ConsoleProgressReporter::new()
    };
    let mut engine = create_engine(include_hidden, reporter, None);
    engine.read_directory(target_directory, true)?;
    engine.reporter().set_total(engine.file_count());

    let moved = engine.move_files_to_top_dir()?;
    let deleted = if delete_old_dirs {
        Some(engine.delete_old_dirs()?)
    } else {
        None
    };

    if !quiet {
        println!("\n✅ 処理完了!");
        println!("📊 処理結果:");
        print_report("トップへ移動", &moved);
        if let Some(report) = &deleted {
            print_report("削除したディレクトリ", report);
        }
    }

    let moved = moved.into_result()?;
    let deleted = deleted.map(BatchReport::into_result).transpose()?;
    Ok(FlattenOutcome { moved, deleted })
}
