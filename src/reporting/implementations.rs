// 進捗報告の具象実装

use super::traits::ProgressReporter;
use crate::core::ProgressEvent;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Mutex;

/// コンソール出力による進捗報告実装
#[derive(Debug, Default)]
pub struct ConsoleProgressReporter {
    quiet: bool,
    total: AtomicUsize,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    /// 進捗率の計算に使う総件数を設定
    pub fn set_total(&self, total: usize) {
        self.total.store(total, Ordering::Relaxed);
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn report_status(&self, message: &str, progress: i64) {
        if message.starts_with("Failed") {
            // 失敗は quiet でも表示する
            eprintln!("❌ {message}");
            return;
        }
        if self.quiet {
            return;
        }

        if progress < 0 {
            println!("🔀 {message}");
            return;
        }

        let completed = progress as usize + 1;
        let total = self.total.load(Ordering::Relaxed);
        if total == 0 {
            if completed % 100 == 0 {
                println!("📊 {message} {completed}");
            }
        } else if completed % 100 == 0 || completed == total {
            let percentage = (completed as f64 / total as f64) * 100.0;
            println!("📊 {message} {completed}/{total} ({percentage:.1}%)");
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressReporter for NoOpProgressReporter {
    fn report_status(&self, _message: &str, _progress: i64) {
        // 何もしない
    }
}

/// 受け取ったイベントをメモリに溜める実装
#[derive(Debug, Default)]
pub struct CollectingProgressReporter {
    events: Mutex<Vec<ProgressEvent>>,
}

impl CollectingProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 受け取ったイベントのスナップショット
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// `Failed` で始まるメッセージだけを返す
    pub fn failures(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|event| event.message.starts_with("Failed"))
            .map(|event| event.message)
            .collect()
    }
}

impl ProgressReporter for CollectingProgressReporter {
    fn report_status(&self, message: &str, progress: i64) {
        if let Ok(mut events) = self.events.lock() {
            events.push(ProgressEvent {
                message: message.to_string(),
                progress,
            });
        }
    }
}

/// チャンネルにイベントを送る実装
///
/// 受信側が閉じている場合、イベントは破棄される。
#[derive(Debug)]
pub struct ChannelProgressReporter {
    sender: Sender<ProgressEvent>,
}

impl ChannelProgressReporter {
    pub fn new(sender: Sender<ProgressEvent>) -> Self {
        Self { sender }
    }
}

impl ProgressReporter for ChannelProgressReporter {
    fn report_status(&self, message: &str, progress: i64) {
        let _ = self.sender.send(ProgressEvent {
            message: message.to_string(),
            progress,
        });
    }
}
