use bunny_stream::config::APP_CONFIG;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// tracing を初期化する
///
/// 出力先は stderr（stdout は `--machine` の JSON 用）。
/// RUST_LOG が設定されていなければ APP_CONFIG.logging.level を使う。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(APP_CONFIG.logging.level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    // テストなどで二重初期化された場合は既存のものを使う
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
