//! クライアントAPIハンドラー
//!
//! 各ハンドラーはレジストリ操作1回分のステートレスな処理

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Response,
    Json,
};
use client_registry_common::protocol::ClientRequest;
use tracing::info;

use super::{error::AppError, json_response};
use crate::AppState;

/// GET /clientes/ - 全クライアント一覧
pub async fn list_clients(State(state): State<AppState>) -> Response {
    let clients = state.registry.list().await;
    tracing::debug!(count = clients.len(), "listing clients");
    json_response(clients)
}

/// GET /clientes/buscar/:id - クライアント取得
pub async fn find_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let client = state.registry.find(&id).await?;
    Ok(json_response(client))
}

/// POST /clientes/crear/ - クライアント作成
pub async fn create_client(
    State(state): State<AppState>,
    payload: Result<Json<ClientRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = payload?;
    let client = state.registry.create(req).await?;
    info!(id = %client.id, "client created");
    Ok(json_response(client))
}

/// PUT /clientes/actualizar - クライアント更新
pub async fn update_client(
    State(state): State<AppState>,
    payload: Result<Json<ClientRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = payload?;
    let client = state.registry.update(req).await?;
    info!(id = %client.id, "client updated");
    Ok(json_response(client))
}

/// DELETE /clientes/borrar/:id/ - クライアント削除
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let client = state.registry.delete(&id).await?;
    info!(id = %client.id, "client deleted");
    Ok(json_response(client))
}
