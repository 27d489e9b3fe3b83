// 連番の払い出し

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 連番アロケーター
///
/// グローバルカウンターは呼び出しごとに必ず進む（進捗の位置としても使う）。
/// ディレクトリを指定した場合はディレクトリごとのカウンターから払い出す。
#[derive(Debug, Default)]
pub struct SequenceAllocator {
    global: u64,
    per_directory: HashMap<PathBuf, u64>,
}

impl SequenceAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 次の連番を返す
    pub fn next(&mut self, directory: Option<&Path>) -> u64 {
        self.global += 1;

        match directory {
            None => self.global,
            Some(dir) => {
                let seq = self.per_directory.entry(dir.to_path_buf()).or_insert(0);
                *seq += 1;
                *seq
            }
        }
    }

    /// シャッフル開始時にカウンターを全てリセットする
    pub fn reset(&mut self) {
        self.global = 0;
        self.per_directory.clear();
    }

    /// これまでに払い出した回数
    pub fn issued(&self) -> u64 {
        self.global
    }

    /// ディレクトリごとの最後の連番
    pub fn last_for(&self, directory: &Path) -> Option<u64> {
        self.per_directory.get(directory).copied()
    }
}
