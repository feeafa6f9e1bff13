//! 設定管理
//!
//! ServerConfig設定構造体

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CommonError;

/// サーバー設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// ログレベル (デフォルト: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

impl ServerConfig {
    /// JSON設定ファイルを読み込む（未指定フィールドはデフォルト値）
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CommonError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CommonError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// バインドアドレス（host:port）
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
