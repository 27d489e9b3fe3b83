// 設定管理
//
// - naming.rs       - 命名設定（桁数、区切り文字、プレフィックス、採番）
// - distribution.rs - サブディレクトリ振り分け設定
// - settings.rs     - JSON設定ファイルとCLI上書き用の設定

pub mod distribution;
pub mod naming;
pub mod settings;

// 公開API
pub use distribution::DistributionConfig;
pub use naming::{NamingConfig, NumberingMode, PrefixMode};
pub use settings::ShuffleSettings;
