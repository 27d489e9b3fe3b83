// 進捗報告のトレイト定義

use mockall::automock;

/// 進捗報告を抽象化するトレイト
///
/// エンジンは呼び出し元のスレッド上で同期的に通知する。
/// `progress >= 0` は処理中の位置、`progress < 0` は不定または完了を表す。
/// 失敗も同じ経路で通知され、メッセージが `Failed` で始まる。
#[automock]
pub trait ProgressReporter: Send + Sync {
    fn report_status(&self, message: &str, progress: i64);
}

impl<R: ProgressReporter + ?Sized> ProgressReporter for &R {
    fn report_status(&self, message: &str, progress: i64) {
        (**self).report_status(message, progress)
    }
}

impl ProgressReporter for Box<dyn ProgressReporter> {
    fn report_status(&self, message: &str, progress: i64) {
        self.as_ref().report_status(message, progress)
    }
}
