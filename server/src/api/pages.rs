//! あいさつページハンドラー

use axum::response::{Html, Response};
use client_registry_common::protocol::Greeting;

const HELLO_HTML: &str = r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <title>¡Hola mundo!</title>
</head>
<body>
    <h1>¡Hola mundo!</h1>
</body>
</html>
"#;

/// GET / - あいさつJSON
pub async fn index() -> Response {
    super::json_response(Greeting::default())
}

/// GET /html/ - あいさつHTML
pub async fn html() -> Html<&'static str> {
    Html(HELLO_HTML)
}
