use super::validate_target_directory;
use crate::core::FileEntry;
use crate::create_engine;
use crate::reporting::NoOpProgressReporter;
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

/// scanコマンドの引数
pub struct ScanOptions {
    pub target_directory: PathBuf,
    pub recursive: bool,
    pub include_hidden: bool,
    pub json: bool,
}

/// スキャン結果と統計
#[derive(Debug, Serialize)]
pub struct ScanListing {
    pub root: PathBuf,
    pub recursive: bool,
    pub file_count: usize,
    pub min_name_length: usize,
    pub recommended_digits: usize,
    pub prefix_replace_allowed: bool,
    pub files: Vec<FileEntry>,
}

/// ディレクトリをスキャンして一覧と統計を表示する
pub fn execute_scan(options: ScanOptions) -> Result<ScanListing> {
    validate_target_directory(&options.target_directory)?;

    let mut engine = create_engine(options.include_hidden, NoOpProgressReporter::new(), None);
    engine.read_directory(&options.target_directory, options.recursive)?;

    let listing = ScanListing {
        root: options.target_directory.clone(),
        recursive: options.recursive,
        file_count: engine.file_count(),
        min_name_length: engine.min_file_name_length(),
        recommended_digits: engine.recommended_digits(),
        prefix_replace_allowed: engine.prefix_replace_allowed(),
        files: engine.file_list().to_vec(),
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(listing);
    }

    println!("📂 対象ディレクトリ: {}", listing.root.display());
    for entry in &listing.files {
        println!("   {}", entry.path().display());
    }
    println!("\n📊 スキャン結果:");
    println!("   - ファイル数: {}", listing.file_count);
    if listing.file_count > 0 {
        println!("   - 最短ファイル名: {} 文字", listing.min_name_length);
        println!("   - 推奨桁数: {}", listing.recommended_digits);
        println!(
            "   - 既存プレフィックス置換: {}",
            if listing.prefix_replace_allowed {
                "使用可能"
            } else {
                "使用不可"
            }
        );
    }

    Ok(listing)
}
