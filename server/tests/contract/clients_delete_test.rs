//! Contract Test: DELETE /clientes/borrar/:id/

use axum::http::StatusCode;
use serde_json::json;

use crate::support::{build_app, create_client, send_empty};

/// DELETE /clientes/borrar/:id/ - 正常系: 削除したレコードを返す
#[tokio::test]
async fn test_delete_client_success() {
    let app = build_app();
    create_client(&app, "001", "Ana", "Diaz").await;
    create_client(&app, "002", "Bea", "Gil").await;

    let (status, body) = send_empty(&app, "DELETE", "/clientes/borrar/001/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": "001", "first_name": "Ana", "last_name": "Diaz"})
    );

    // 他のレコードには影響しない
    let (_, list) = send_empty(&app, "GET", "/clientes/").await;
    assert_eq!(
        list,
        json!([{"id": "002", "first_name": "Bea", "last_name": "Gil"}])
    );
}

/// DELETE /clientes/borrar/:id/ - 異常系: 存在しないID
#[tokio::test]
async fn test_delete_missing_client() {
    let app = build_app();
    create_client(&app, "001", "Ana", "Diaz").await;

    let (status, body) = send_empty(&app, "DELETE", "/clientes/borrar/999/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "client not found");

    let (_, list) = send_empty(&app, "GET", "/clientes/").await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}
