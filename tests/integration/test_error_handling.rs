// エラーハンドリングの統合テスト
use anyhow::Result;
use shuffile::core::ErrorSeverity;
use shuffile::{
    create_engine, CollectingProgressReporter, DistributionConfig, NamingConfig, PrefixMode,
    ShuffleError, ShuffleSettings, ShuffleWorkflow,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_nonexistent_directory_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("missing");

    let mut engine = create_engine(false, CollectingProgressReporter::new(), Some(1));
    let error = engine.read_directory(&missing, false).unwrap_err();

    assert!(matches!(error, ShuffleError::ScanFailed { .. }));
    assert_eq!(error.severity(), ErrorSeverity::High);
    assert!(error.context().suggestion.is_some());
    Ok(())
}

#[test]
fn test_file_as_root_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let file = temp_dir.path().join("file.txt");
    fs::write(&file, b"x")?;

    let mut engine = create_engine(false, CollectingProgressReporter::new(), Some(1));
    assert!(matches!(
        engine.read_directory(&file, false),
        Err(ShuffleError::ScanFailed { .. })
    ));
    Ok(())
}

#[test]
fn test_empty_directory_handling() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let mut engine = create_engine(false, CollectingProgressReporter::new(), Some(1));

    // 空のディレクトリはエラーではない
    assert!(!engine.read_directory(temp_dir.path(), true)?);
    assert!(matches!(
        engine.shuffle_files(&NamingConfig::default()),
        Err(ShuffleError::EmptyWorkingSet { .. })
    ));
    Ok(())
}

#[test]
fn test_replace_mode_digits_exceed_shortest_name() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("ab"), b"x")?;
    fs::write(temp_dir.path().join("abcdef"), b"x")?;

    let mut engine = create_engine(false, CollectingProgressReporter::new(), Some(1));
    engine.read_directory(temp_dir.path(), false)?;
    assert_eq!(engine.min_file_name_length(), 2);

    let naming = NamingConfig::new(3, "-").with_prefix_mode(PrefixMode::ReplaceExisting);
    let error = engine.shuffle_files(&naming).unwrap_err();

    assert!(error.is_preflight());
    assert!(matches!(
        error,
        ShuffleError::ConfigurationInvalid {
            digits: 3,
            min_length: 2
        }
    ));

    // ディスクは変更されていない
    let mut names: Vec<String> = fs::read_dir(temp_dir.path())?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["ab", "abcdef"]);
    Ok(())
}

#[test]
fn test_invalid_settings_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ not json")?;

    let error = ShuffleSettings::from_file(&path).unwrap_err();
    assert!(matches!(error, ShuffleError::Settings { .. }));
    Ok(())
}

#[test]
fn test_zero_files_per_directory_rejected() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join("a"), b"x")?;

    let settings = ShuffleSettings {
        distribution: Some(DistributionConfig::new(0, "dir")),
        ..ShuffleSettings::default()
    };
    let mut engine = create_engine(false, CollectingProgressReporter::new(), Some(1));
    let error = ShuffleWorkflow::new(settings)
        .run(&mut engine, temp_dir.path())
        .unwrap_err();

    assert!(matches!(error, ShuffleError::ValidationError { .. }));
    assert!(temp_dir.path().join("a").exists());
    Ok(())
}

#[test]
fn test_non_empty_directory_delete_is_reported() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    fs::create_dir(root.join("keep"))?;
    fs::write(root.join("keep").join("inside"), b"x")?;
    fs::create_dir(root.join("gone"))?;

    let mut engine = create_engine(false, CollectingProgressReporter::new(), Some(1));
    engine.read_directory(root, false)?;
    let report = engine.delete_old_dirs()?;

    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed_count(), 1);
    assert!(root.join("keep").join("inside").exists());

    let failures = engine.reporter().failures();
    assert_eq!(failures.len(), 1);
    assert!(failures[0].starts_with("Failed"));

    assert!(matches!(
        report.into_result(),
        Err(ShuffleError::BatchFailed {
            failed: 1,
            total: 2,
            ..
        })
    ));
    Ok(())
}

#[test]
fn test_flatten_never_overwrites() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    fs::create_dir(root.join("sub"))?;
    fs::write(root.join("sub").join("dup.txt"), b"inner")?;
    fs::write(root.join("dup.txt"), b"outer")?;

    let mut engine = create_engine(false, CollectingProgressReporter::new(), Some(1));
    engine.read_directory(root, true)?;
    let moved = engine.move_files_to_top_dir()?;
    let deleted = engine.delete_old_dirs()?;

    assert_eq!(moved.failed_count(), 1);
    // 中身が残っているのでディレクトリは削除できない
    assert_eq!(deleted.failed_count(), 1);
    assert_eq!(fs::read(root.join("dup.txt"))?, b"outer");
    assert_eq!(fs::read(root.join("sub").join("dup.txt"))?, b"inner");
    Ok(())
}
