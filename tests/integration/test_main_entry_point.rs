// バイナリとエントリーポイントのテスト
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_shuffile"))
}

fn files_in(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_cli_help() {
    let output = Command::new(get_binary_path())
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("shuffile"));
    for command in ["scan", "preview", "shuffle", "flatten", "distribute"] {
        assert!(stdout.contains(command), "missing {command} in help");
    }
}

#[test]
fn test_cli_version() {
    let output = Command::new(get_binary_path())
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_nonexistent_directory_exits_with_error() {
    let output = Command::new(get_binary_path())
        .args(["shuffle", "/nonexistent/shuffile/target", "--quiet"])
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"));
}

#[test]
fn test_cli_shuffle_renames_files() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["a.txt", "bb.txt", "ccc.txt"] {
        fs::write(temp_dir.path().join(name), b"x").unwrap();
    }

    let output = Command::new(get_binary_path())
        .arg("shuffle")
        .arg(temp_dir.path())
        .args(["--seed", "3", "--digits", "2", "--separator", "_", "--quiet"])
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(), "{:?}", output);
    let names = files_in(temp_dir.path());
    assert_eq!(names.len(), 3);
    let prefixes: Vec<&str> = {
        let mut p: Vec<&str> = names.iter().map(|n| &n[..3]).collect();
        p.sort();
        p
    };
    assert_eq!(prefixes, vec!["01_", "02_", "03_"]);
}

#[test]
fn test_cli_scan_json() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("one.txt"), b"x").unwrap();
    fs::write(temp_dir.path().join(".hidden"), b"x").unwrap();

    let output = Command::new(get_binary_path())
        .arg("scan")
        .arg(temp_dir.path())
        .arg("--json")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["file_count"], 1);
    assert_eq!(json["files"][0]["file_name"], "one.txt");
}

#[test]
fn test_cli_replace_mode_rejected() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("ab"), b"x").unwrap();

    let output = Command::new(get_binary_path())
        .arg("shuffle")
        .arg(temp_dir.path())
        .args(["--digits", "4", "--replace-prefix", "--quiet"])
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(files_in(temp_dir.path()), vec!["ab"]);
}

#[test]
fn test_cli_distribute_and_flatten() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    for i in 0..5 {
        fs::write(root.join(format!("f{i}")), b"x").unwrap();
    }

    let output = Command::new(get_binary_path())
        .arg("distribute")
        .arg(root)
        .args(["--files-per-dir", "2", "--dir-prefix", "box", "--quiet"])
        .output()
        .expect("Failed to execute binary");
    assert!(output.status.success(), "{:?}", output);
    assert!(files_in(root).is_empty());
    assert_eq!(files_in(&root.join("box3")), vec!["f4"]);

    let output = Command::new(get_binary_path())
        .arg("flatten")
        .arg(root)
        .args(["--delete-old-dirs", "--quiet"])
        .output()
        .expect("Failed to execute binary");
    assert!(output.status.success(), "{:?}", output);
    assert_eq!(files_in(root).len(), 5);
    assert!(!root.join("box1").exists());
}
