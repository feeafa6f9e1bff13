//! ロギング初期化
//!
//! `RUST_LOG` が設定されていればそれを優先し、なければ設定のログレベルを使う。

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// ロギング初期化エラー
#[derive(Debug, Error)]
pub enum LoggingError {
    /// ログレベル指定を解釈できない
    #[error("invalid log level '{level}': {source}")]
    InvalidLevel {
        /// 指定されたログレベル
        level: String,
        /// フィルター解析エラー
        source: tracing_subscriber::filter::ParseError,
    },

    /// グローバルサブスクライバーが設定済み
    #[error("failed to install subscriber: {0}")]
    Install(String),
}

/// ログレベル文字列からフィルターを構築
///
/// `RUST_LOG` が有効な値ならそちらを使う。
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(level).map_err(|source| LoggingError::InvalidLevel {
            level: level.to_string(),
            source,
        })
    })
}

/// ログ出力を初期化
pub fn init(level: &str) -> Result<(), LoggingError> {
    let filter = build_filter(level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))
}
