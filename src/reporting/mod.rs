// 進捗報告
//
// エンジンから呼び出し側への通知経路。
// - traits.rs          - ProgressReporter トレイト
// - implementations.rs - コンソール、NoOp、収集、チャンネル実装

pub mod implementations;
pub mod traits;

// 公開API
pub use implementations::{
    ChannelProgressReporter, CollectingProgressReporter, ConsoleProgressReporter,
    NoOpProgressReporter,
};
pub use traits::*;
