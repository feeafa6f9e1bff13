//! Client Registry Server
//!
//! クライアントレコードをメモリ内で管理するHTTPサーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ロギング初期化ユーティリティ
pub mod logging;

/// クライアントレジストリ
pub mod registry;

/// axumサーバー起動・シャットダウンハンドリング
pub mod server;

/// アプリケーション状態
#[derive(Clone, Default)]
pub struct AppState {
    /// クライアントレジストリ
    pub registry: registry::ClientRegistry,
}
