use super::{print_report, validate_target_directory};
use crate::cli::NamingArgs;
use crate::config::{DistributionConfig, NumberingMode, ShuffleSettings};
use crate::create_engine;
use crate::engine::{ShuffleWorkflow, WorkflowSummary};
use crate::reporting::ConsoleProgressReporter;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// shuffleコマンドの引数
#[derive(Debug, Clone, Default)]
pub struct ShuffleOptions {
    pub target_directory: PathBuf,
    pub naming: NamingArgs,
    pub recursive: bool,
    pub per_folder: bool,
    pub files_per_dir: Option<usize>,
    pub dir_prefix: Option<String>,
    pub delete_old_dirs: bool,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub include_hidden: bool,
    pub quiet: bool,
}

impl ShuffleOptions {
    /// 設定ファイルを読み込み、コマンドラインで指定された項目だけ上書きする
    pub fn resolve_settings(&self) -> Result<ShuffleSettings> {
        let mut settings = match &self.config {
            Some(path) => ShuffleSettings::from_file(path)?,
            None => ShuffleSettings::default(),
        };

        self.naming.apply_to(&mut settings);
        if self.recursive {
            settings.recursive = true;
        }
        if self.per_folder {
            settings.numbering = NumberingMode::PerFolder;
        }
        if self.delete_old_dirs {
            settings.delete_old_dirs = true;
        }
        if self.include_hidden {
            settings.include_hidden = true;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if let Some(files_per_directory) = self.files_per_dir {
            let prefix = self
                .dir_prefix
                .clone()
                .or_else(|| {
                    settings
                        .distribution
                        .as_ref()
                        .map(|d| d.directory_prefix.clone())
                })
                .unwrap_or_else(|| DistributionConfig::default().directory_prefix);
            settings.distribution = Some(DistributionConfig::new(files_per_directory, prefix));
        }

        settings.validate()?;
        Ok(settings)
    }
}

/// シャッフルワークフローを実行する
pub fn execute_shuffle(options: ShuffleOptions) -> Result<WorkflowSummary> {
    validate_target_directory(&options.target_directory)?;
    let settings = options.resolve_settings()?;
    let root = options.target_directory.as_path();

    if !options.quiet {
        println!("🔀 ファイルシャッフル");
        println!("📂 対象ディレクトリ: {}", root.display());
        if let Some(distribution) = &settings.distribution {
            println!(
                "📁 振り分け: {} 件ずつ '{}' ディレクトリへ",
                distribution.files_per_directory, distribution.directory_prefix
            );
        }
    }

    let reporter = if options.quiet {
        ConsoleProgressReporter::quiet()
    } else {
        ConsoleProgressReporter::new()
    };
    let mut engine = create_engine(settings.include_hidden, reporter, settings.seed);

    // 進捗表示の総件数を決めるための事前スキャン
    engine.read_directory(root, settings.recursive)?;
    engine.reporter().set_total(engine.file_count());

    let summary = ShuffleWorkflow::new(settings).run(&mut engine, root)?;

    if let Some(report_path) = &options.report {
        let json = serde_json::to_string_pretty(&summary)?;
        fs::write(report_path, json)
            .with_context(|| format!("Failed to write report: {}", report_path.display()))?;
    }

    if !options.quiet {
        print_summary(&summary);
        if let Some(report_path) = &options.report {
            println!("📄 結果は {} に保存されました", report_path.display());
        }
    }

    Ok(summary.into_result()?)
}

fn print_summary(summary: &WorkflowSummary) {
    if summary.files_found == 0 {
        println!("✅ 対象ファイルがありません。");
        return;
    }

    println!("\n✅ 処理完了!");
    println!("📊 処理結果:");
    println!("   - 対象ファイル数: {}", summary.files_found);
    if let Some(report) = &summary.moved_to_top {
        print_report("トップへ移動", report);
    }
    if let Some(report) = &summary.deleted_dirs {
        print_report("削除したディレクトリ", report);
    }
    if let Some(report) = &summary.renamed {
        print_report("リネーム", report);
    }
    if let Some(report) = &summary.created_dirs {
        print_report("作成したディレクトリ", report);
    }
    if let Some(report) = &summary.distributed {
        print_report("振り分け", report);
    }
    println!(
        "   - 総処理時間: {:.2}秒",
        summary.elapsed().num_milliseconds() as f64 / 1000.0
    );

    let failures = summary.total_failures();
    if failures > 0 {
        println!("⚠️  {failures}件の操作でエラーが発生しました");
    }
}
