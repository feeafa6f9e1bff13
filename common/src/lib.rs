//! Client Registry Common
//!
//! サーバーとテストで共有する型・プロトコル・検証ルール・エラー定義

#![warn(missing_docs)]

/// 設定構造体
pub mod config;

/// エラー型定義
pub mod error;

/// 通信プロトコル定義（リクエスト/レスポンス）
pub mod protocol;

/// 共通型定義
pub mod types;

/// 入力検証ルール
pub mod validation;
