//! 共通型定義
//!
//! クライアントレコードのコアデータ型

use serde::{Deserialize, Serialize};

/// クライアントレコード
///
/// 不変の値型として扱う。更新時はフィールドを書き換えず、
/// 同じIDを持つ新しいレコードで置き換える。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Client {
    /// 一意識別子（3文字固定）
    pub id: String,
    /// 名
    pub first_name: String,
    /// 姓
    pub last_name: String,
}

impl Client {
    /// 新しいクライアントレコードを作成
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// 同じIDで氏名だけを差し替えたレコードを返す
    pub fn with_names(&self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}
