//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use client_registry_common::error::{CommonError, RegistryError};
use serde_json::json;

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub RegistryError);

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        AppError(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let detail = rejection.body_text();
        let err = match rejection {
            JsonRejection::JsonDataError(_) => CommonError::InvalidBody(detail),
            JsonRejection::MissingJsonContentType(_) => CommonError::UnsupportedMediaType(detail),
            _ => CommonError::MalformedBody(detail),
        };
        AppError(err.into())
    }
}

impl AppError {
    /// HTTPステータスコード
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            RegistryError::Common(CommonError::Validation(_))
            | RegistryError::Common(CommonError::InvalidBody(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            RegistryError::Common(CommonError::MalformedBody(_)) => StatusCode::BAD_REQUEST,
            RegistryError::Common(CommonError::UnsupportedMediaType(_)) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            RegistryError::Common(CommonError::Config(_))
            | RegistryError::Common(CommonError::Serialization(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            RegistryError::ClientNotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::ClientNotCreated(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!(status = status.as_u16(), error = %self.0, "request rejected");

        let mut response = super::json_response(json!({
            "error": self.0.external_message()
        }));
        *response.status_mut() = status;
        response
    }
}
