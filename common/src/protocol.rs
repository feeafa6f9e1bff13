//! 通信プロトコル定義
//!
//! HTTPクライアント↔サーバー間のメッセージ

use serde::{Deserialize, Serialize};

use crate::types::Client;

/// クライアント作成・更新リクエスト
///
/// `POST /clientes/crear/` と `PUT /clientes/actualizar` の共通ボディ。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientRequest {
    /// 識別子
    pub id: String,
    /// 名
    pub first_name: String,
    /// 姓
    pub last_name: String,
}

impl ClientRequest {
    /// リクエストをクライアントレコードに変換
    pub fn into_client(self) -> Client {
        Client {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

/// `GET /` のあいさつメッセージ
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Greeting {
    /// メッセージ本文
    pub message: String,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            message: "¡Hola mundo!".to_string(),
        }
    }
}
