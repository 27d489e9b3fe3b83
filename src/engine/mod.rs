// エンジン層 - シャッフル処理とワークフロー
// ストレージと進捗報告を組み合わせて高レベルな処理を提供

pub mod shuffle_engine;
pub mod workflow;

// 公開API
pub use shuffle_engine::ShuffleEngine;
pub use workflow::{ShuffleWorkflow, WorkflowSummary};
