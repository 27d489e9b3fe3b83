use super::{print_report, validate_target_directory};
use crate::config::DistributionConfig;
use crate::core::{BatchReport, ShuffleError};
use crate::create_engine;
use crate::reporting::ConsoleProgressReporter;
use anyhow::Result;
use std::path::Path;

/// distributeコマンドの結果
#[derive(Debug)]
pub struct DistributeOutcome {
    pub created: BatchReport,
    pub moved: BatchReport,
}

/// ファイル名を変えずにサブディレクトリへ振り分ける
pub fn execute_distribute(
    target_directory: &Path,
    distribution: &DistributionConfig,
    include_hidden: bool,
    quiet: bool,
) -> Result<Option<DistributeOutcome>> {
    validate_target_directory(target_directory)?;
    distribution.validate()?;

    let reporter = if quiet {
        ConsoleProgressReporter::quiet()
    } else {
        ConsoleProgressReporter::new()
    };
    let mut engine = create_engine(include_hidden, reporter, None);
    if !engine.read_directory(target_directory, false)? {
        if !quiet {
            println!("✅ 対象ファイルがありません。");
        }
        return Ok(None);
    }
    engine.reporter().set_total(engine.file_count());

    let created = engine.create_directories(distribution)?;
    if let Some(failure) = created.failures.first() {
        return Err(
            ShuffleError::directory_create_failed(&failure.source, failure.reason.clone()).into(),
        );
    }
    let moved = engine.move_files_to_directories(distribution.files_per_directory)?;

    if !quiet {
        println!("\n✅ 処理完了!");
        println!("📊 処理結果:");
        print_report("作成したディレクトリ", &created);
        print_report("振り分け", &moved);
    }

    let moved = moved.into_result()?;
    Ok(Some(DistributeOutcome { created, moved }))
}
