//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// 入力検証エラー
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// 作成時の識別子エラー（重複と形式不正を区別しない）
    #[error("client already exists or malformed identifier")]
    InvalidClientId,

    /// 識別子の長さ不正
    #[error("identifier must be exactly {expected} characters")]
    ClientIdLength {
        /// 期待される文字数
        expected: usize,
    },

    /// 氏名フィールドの長さ不正
    #[error("{field} must be between {min} and {max} characters")]
    NameLength {
        /// フィールド名
        field: &'static str,
        /// 最小文字数
        min: usize,
        /// 最大文字数
        max: usize,
    },
}

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// リクエストボディが構文的に不正（JSONとして読めない）
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// リクエストボディの内容がスキーマに合わない（フィールド欠落・型違い）
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Content-TypeがJSONではない
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

/// Client registry error type
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Client not found
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    /// Client was not stored
    #[error("Client not created: {0}")]
    ClientNotCreated(String),
}

impl RegistryError {
    /// 呼び出し元に返すメッセージ
    ///
    /// 検証エラーは内容をそのまま返す。それ以外は固定文言。
    pub fn external_message(&self) -> String {
        match self {
            Self::Common(CommonError::Validation(err)) => err.to_string(),
            Self::Common(CommonError::MalformedBody(detail))
            | Self::Common(CommonError::InvalidBody(detail))
            | Self::Common(CommonError::UnsupportedMediaType(detail)) => detail.clone(),
            Self::Common(CommonError::Config(_)) | Self::Common(CommonError::Serialization(_)) => {
                "Internal server error".to_string()
            }
            Self::ClientNotFound(_) => "client not found".to_string(),
            Self::ClientNotCreated(_) => "client not created".to_string(),
        }
    }

    /// 検証エラーかどうか
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Common(CommonError::Validation(_)))
    }
}

impl From<ValidationError> for RegistryError {
    fn from(err: ValidationError) -> Self {
        RegistryError::Common(CommonError::Validation(err))
    }
}

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
