//! REST APIハンドラー
//!
//! あいさつページとクライアントCRUD API

pub mod clients;
pub mod error;
pub mod pages;

use crate::AppState;
use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

/// JSONレスポンスに付与する固定Content-Type
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/html/", get(pages::html))
        .route("/clientes/", get(clients::list_clients))
        .route("/clientes/buscar/:id", get(clients::find_client))
        .route("/clientes/crear/", post(clients::create_client))
        .route("/clientes/actualizar", put(clients::update_client))
        .route("/clientes/borrar/:id/", delete(clients::delete_client))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 固定Content-Type付きのJSONレスポンスを生成
pub(crate) fn json_response<T: Serialize>(body: T) -> Response {
    (
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static(JSON_CONTENT_TYPE),
        )],
        Json(body),
    )
        .into_response()
}
