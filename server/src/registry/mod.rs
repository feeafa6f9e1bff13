//! クライアントレジストリ
//!
//! クライアントレコードをメモリ内で管理する。永続化は行わず、
//! プロセス終了とともに破棄される。

use client_registry_common::{
    error::{RegistryError, RegistryResult},
    protocol::ClientRequest,
    types::Client,
    validation,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// 挿入順を保持するクライアントテーブル
///
/// `clients` が順序の正、`index` はIDから位置への索引。
#[derive(Debug, Default, Clone)]
pub struct ClientTable {
    clients: Vec<Client>,
    index: HashMap<String, usize>,
}

impl ClientTable {
    /// 空のテーブルを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 全クライアントを挿入順で取得
    pub fn list(&self) -> &[Client] {
        &self.clients
    }

    /// IDでクライアントを検索
    pub fn find(&self, id: &str) -> Option<&Client> {
        self.index.get(id).map(|&pos| &self.clients[pos])
    }

    /// IDが登録済みか
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// 末尾にクライアントを追加
    ///
    /// 同じIDが既に存在する場合は追加せず `None` を返す。
    pub fn create(&mut self, client: Client) -> Option<Client> {
        if self.contains(&client.id) {
            return None;
        }
        self.index.insert(client.id.clone(), self.clients.len());
        self.clients.push(client.clone());
        Some(client)
    }

    /// 同じ位置のレコードを新しい氏名のレコードで置き換える
    pub fn update(&mut self, id: &str, first_name: &str, last_name: &str) -> Option<Client> {
        let pos = *self.index.get(id)?;
        let updated = self.clients[pos].with_names(first_name, last_name);
        self.clients[pos] = updated.clone();
        Some(updated)
    }

    /// レコードを削除して削除前の値を返す
    pub fn delete(&mut self, id: &str) -> Option<Client> {
        let pos = self.index.remove(id)?;
        let removed = self.clients.remove(pos);
        for client in &self.clients[pos..] {
            if let Some(slot) = self.index.get_mut(&client.id) {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    /// 登録件数
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

/// クライアントレジストリ
///
/// 各操作は読み取りから変更までを1回のロック取得内で行う。
#[derive(Clone, Default)]
pub struct ClientRegistry {
    table: Arc<RwLock<ClientTable>>,
}

impl ClientRegistry {
    /// 新しいレジストリを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 全クライアントを取得
    pub async fn list(&self) -> Vec<Client> {
        let table = self.table.read().await;
        table.list().to_vec()
    }

    /// クライアントを取得
    pub async fn find(&self, id: &str) -> RegistryResult<Client> {
        let table = self.table.read().await;
        table
            .find(id)
            .cloned()
            .ok_or_else(|| RegistryError::ClientNotFound(id.to_string()))
    }

    /// クライアントを作成
    ///
    /// 識別子の重複チェックは書き込みロック内で行う。
    pub async fn create(&self, req: ClientRequest) -> RegistryResult<Client> {
        let mut table = self.table.write().await;
        validation::validate_create(&req, |id| table.contains(id))?;

        let id = req.id.clone();
        table
            .create(req.into_client())
            .ok_or(RegistryError::ClientNotCreated(id))
    }

    /// クライアントの氏名を更新
    pub async fn update(&self, req: ClientRequest) -> RegistryResult<Client> {
        validation::validate_update(&req)?;

        let mut table = self.table.write().await;
        table
            .update(&req.id, &req.first_name, &req.last_name)
            .ok_or(RegistryError::ClientNotCreated(req.id))
    }

    /// クライアントを削除
    pub async fn delete(&self, id: &str) -> RegistryResult<Client> {
        let mut table = self.table.write().await;
        table
            .delete(id)
            .ok_or_else(|| RegistryError::ClientNotFound(id.to_string()))
    }

    /// 登録件数
    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }

    /// 空かどうか
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.is_empty()
    }
}
