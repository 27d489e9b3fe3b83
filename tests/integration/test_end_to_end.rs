// エンドツーエンド統合テスト
use shuffile::{
    create_engine, CollectingProgressReporter, DistributionConfig, NamingConfig, NumberingMode,
    PrefixMode, ShuffleSettings, ShuffleWorkflow,
};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn files_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

fn dirs_in(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

/// 3ファイルをシャッフルし、1-,2-,3- の連番が一つずつ付くことを確認
#[test]
fn test_shuffle_three_files() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    for name in ["a.txt", "bb.txt", "ccc.txt"] {
        fs::write(root.join(name), name).unwrap();
    }

    let mut engine = create_engine(false, CollectingProgressReporter::new(), Some(2024));
    assert!(engine.read_directory(root, false).unwrap());
    assert_eq!(engine.min_file_name_length(), 5);

    let report = engine.shuffle_files(&NamingConfig::new(1, "-")).unwrap();
    assert!(report.is_success());

    let names = files_in(root);
    assert_eq!(names.len(), 3);

    let numbers: HashSet<&str> = names.iter().map(|n| &n[..1]).collect();
    assert_eq!(numbers, HashSet::from(["1", "2", "3"]));

    let originals: HashSet<&str> = names.iter().map(|n| &n[2..]).collect();
    assert_eq!(originals, HashSet::from(["a.txt", "bb.txt", "ccc.txt"]));

    // 内容は元のファイル名のまま
    for name in &names {
        assert_eq!(fs::read_to_string(root.join(name)).unwrap(), &name[2..]);
    }
}

/// 同じシードなら同じ割り当てになる
#[test]
fn test_seeded_runs_are_reproducible() {
    let run = |seed: u64| -> Vec<String> {
        let temp_dir = TempDir::new().unwrap();
        for i in 0..20 {
            fs::write(temp_dir.path().join(format!("track{i:02}.mp3")), b"x").unwrap();
        }
        let mut engine = create_engine(false, CollectingProgressReporter::new(), Some(seed));
        engine.read_directory(temp_dir.path(), false).unwrap();
        engine.shuffle_files(&NamingConfig::new(2, "_")).unwrap();
        files_in(temp_dir.path())
    };

    assert_eq!(run(5), run(5));
}

/// 二回シャッフルすると古い番号の前に新しい番号が付く（挿入モード）
#[test]
fn test_repeated_shuffle_without_rescan() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("x"), b"x").unwrap();
    fs::write(root.join("y"), b"y").unwrap();

    let mut engine = create_engine(false, CollectingProgressReporter::new(), Some(8));
    engine.read_directory(root, false).unwrap();
    engine.shuffle_files(&NamingConfig::new(1, "-")).unwrap();
    engine.shuffle_files(&NamingConfig::new(1, "-")).unwrap();

    let names = files_in(root);
    assert_eq!(names.len(), 2);
    assert!(names.iter().all(|n| n.len() == 5));
}

/// 置換モードでは既存の番号を上書きする
#[test]
fn test_replace_mode_overwrites_old_prefix() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    for name in ["1-aaa", "2-bbb", "3-ccc"] {
        fs::write(root.join(name), name).unwrap();
    }

    let mut engine = create_engine(false, CollectingProgressReporter::new(), Some(3));
    engine.read_directory(root, false).unwrap();
    assert!(engine.prefix_replace_allowed());

    let naming = NamingConfig::new(1, "-").with_prefix_mode(PrefixMode::ReplaceExisting);
    engine.shuffle_files(&naming).unwrap();

    let names = files_in(root);
    assert_eq!(names.len(), 3);
    let bodies: HashSet<&str> = names.iter().map(|n| &n[2..]).collect();
    assert_eq!(bodies, HashSet::from(["aaa", "bbb", "ccc"]));
    let numbers: HashSet<&str> = names.iter().map(|n| &n[..2]).collect();
    assert_eq!(numbers, HashSet::from(["1-", "2-", "3-"]));
}

/// フォルダごとの連番
#[test]
fn test_per_folder_numbering_workflow() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    for (dir, count) in [("disc1", 4), ("disc2", 2)] {
        fs::create_dir(root.join(dir)).unwrap();
        for i in 0..count {
            fs::write(root.join(dir).join(format!("song{i}.ogg")), b"x").unwrap();
        }
    }

    let settings = ShuffleSettings {
        recursive: true,
        numbering: NumberingMode::PerFolder,
        ..ShuffleSettings::default()
    };
    let mut engine = create_engine(false, CollectingProgressReporter::new(), Some(10));
    let summary = ShuffleWorkflow::new(settings).run(&mut engine, root).unwrap();

    assert!(summary.is_success());
    let disc1: HashSet<String> = files_in(&root.join("disc1"))
        .iter()
        .map(|n| n[..1].to_string())
        .collect();
    let disc2: HashSet<String> = files_in(&root.join("disc2"))
        .iter()
        .map(|n| n[..1].to_string())
        .collect();
    assert_eq!(disc1.len(), 4);
    assert!(disc1.iter().all(|n| ["1", "2", "3", "4"].contains(&n.as_str())));
    assert_eq!(disc2, HashSet::from(["1".to_string(), "2".to_string()]));
}

/// 解体・シャッフル・振り分けを一度に行う
#[test]
fn test_full_workflow_redistributes() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir(root.join("old")).unwrap();
    for i in 0..5 {
        fs::write(root.join("old").join(format!("in{i}.dat")), b"x").unwrap();
    }
    for i in 0..6 {
        fs::write(root.join(format!("top{i}.dat")), b"x").unwrap();
    }

    let settings = ShuffleSettings {
        recursive: true,
        delete_old_dirs: true,
        distribution: Some(DistributionConfig::new(4, "part")),
        seed: Some(77),
        ..ShuffleSettings::default()
    };
    let mut engine = create_engine(false, CollectingProgressReporter::new(), settings.seed);
    let summary = ShuffleWorkflow::new(settings)
        .run(&mut engine, root)
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(summary.files_found, 11);
    assert_eq!(summary.final_file_count, 11);
    assert_eq!(dirs_in(root), vec!["part1", "part2", "part3"]);
    assert_eq!(files_in(&root.join("part1")).len(), 4);
    assert_eq!(files_in(&root.join("part2")).len(), 4);
    assert_eq!(files_in(&root.join("part3")).len(), 3);
    assert!(files_in(root).is_empty());

    // 全ての番号 1..=11 がちょうど一度ずつ使われている
    let mut numbers: Vec<u32> = ["part1", "part2", "part3"]
        .iter()
        .flat_map(|d| files_in(&root.join(d)))
        .map(|n| n.split('-').next().unwrap().parse().unwrap())
        .collect();
    numbers.sort();
    assert_eq!(numbers, (1..=11).collect::<Vec<u32>>());
}

/// 進捗イベントの順序
#[test]
fn test_progress_event_sequence() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["p", "q"] {
        fs::write(temp_dir.path().join(name), b"x").unwrap();
    }

    let mut engine = create_engine(false, CollectingProgressReporter::new(), Some(1));
    engine.read_directory(temp_dir.path(), false).unwrap();
    engine.shuffle_files(&NamingConfig::new(1, "-")).unwrap();

    let events = engine.reporter().events();
    let messages: Vec<&str> = events.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec!["Shuffling file list...", "Renaming files...", "Renaming files...", "Done."]
    );
    assert!(events[0].is_indeterminate());
    assert_eq!(events[1].progress, 0);
    assert_eq!(events[2].progress, 1);
    assert!(events[3].is_indeterminate());
}
