// ファイルシャッフル・リネームツール
//
// ディレクトリ内のファイルをランダムに並べ替え、連番プレフィックス付きの
// 名前に変更する。サブディレクトリへの振り分けと解体にも対応。

pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod logging;
pub mod naming;
pub mod reporting;
pub mod scanner;
pub mod sequence;
pub mod storage;

pub use crate::config::{
    DistributionConfig, NamingConfig, NumberingMode, PrefixMode, ShuffleSettings,
};
pub use crate::core::{
    BatchOperation, BatchReport, FileEntry, OperationFailure, ProgressEvent, ShuffleError,
    ShuffleResult,
};
pub use crate::engine::{ShuffleEngine, ShuffleWorkflow, WorkflowSummary};
pub use crate::naming::NameFormatter;
pub use crate::reporting::{
    ChannelProgressReporter, CollectingProgressReporter, ConsoleProgressReporter,
    NoOpProgressReporter, ProgressReporter,
};
pub use crate::scanner::DirectoryScanner;
pub use crate::storage::{local::LocalFileSystem, FileSystemBackend};

/// 実ファイルシステムとコンソール出力を使うエンジン
pub type ConsoleShuffleEngine = ShuffleEngine<LocalFileSystem, ConsoleProgressReporter>;

/// 実ファイルシステムを使うエンジンを作成する
///
/// `seed` を指定すると並べ替えが再現可能になる。
pub fn create_engine<R: ProgressReporter>(
    include_hidden: bool,
    reporter: R,
    seed: Option<u64>,
) -> ShuffleEngine<LocalFileSystem, R> {
    let backend = LocalFileSystem::new().with_hidden(include_hidden);
    match seed {
        Some(seed) => ShuffleEngine::with_seed(backend, reporter, seed),
        None => ShuffleEngine::new(backend, reporter),
    }
}
