// ログ初期化
//
// `SHUFFILE_LOG` が設定されていればそのフィルタを使い、
// なければ `-v` の回数でレベルを決める。出力は stderr。

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// ログフィルタを読む環境変数
pub const LOG_ENV_VAR: &str = "SHUFFILE_LOG";

/// `-v` の回数に対応するログレベル
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn build_env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)))
}

/// グローバルなログ購読者を設定する
///
/// 既に設定済みの場合（テストから複数回呼ばれた場合など）はエラーを返す。
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    Registry::default()
        .with(build_env_filter(verbosity))
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}
