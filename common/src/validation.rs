//! 入力検証ルール
//!
//! ストアを変更する前に呼び出す検証関数群。
//! 文字数はUnicodeスカラー値単位で数え、前後の空白は除去しない。

use crate::error::ValidationError;
use crate::protocol::ClientRequest;

/// 識別子の固定長
pub const CLIENT_ID_LEN: usize = 3;

/// 氏名の最小文字数
pub const NAME_MIN_LEN: usize = 2;

/// 氏名の最大文字数
pub const NAME_MAX_LEN: usize = 30;

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// 氏名フィールドの長さを検証
pub fn validate_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let len = char_len(value);
    if (NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::NameLength {
            field,
            min: NAME_MIN_LEN,
            max: NAME_MAX_LEN,
        })
    }
}

/// 作成時の識別子を検証
///
/// 3文字であり、かつ `exists` が偽を返すこと。
/// どちらの違反も [`ValidationError::InvalidClientId`] になる。
pub fn validate_client_id<F>(id: &str, exists: F) -> Result<(), ValidationError>
where
    F: Fn(&str) -> bool,
{
    if char_len(id) == CLIENT_ID_LEN && !exists(id) {
        Ok(())
    } else {
        Err(ValidationError::InvalidClientId)
    }
}

/// 作成リクエストを検証
pub fn validate_create<F>(req: &ClientRequest, exists: F) -> Result<(), ValidationError>
where
    F: Fn(&str) -> bool,
{
    validate_client_id(&req.id, exists)?;
    validate_names(req)
}

/// 更新リクエストを検証
///
/// 存在確認はストア側で行う。ここではスキーマ上の制約のみ見る。
pub fn validate_update(req: &ClientRequest) -> Result<(), ValidationError> {
    if char_len(&req.id) != CLIENT_ID_LEN {
        return Err(ValidationError::ClientIdLength {
            expected: CLIENT_ID_LEN,
        });
    }
    validate_names(req)
}

/// 氏名の両フィールドを検証
pub fn validate_names(req: &ClientRequest) -> Result<(), ValidationError> {
    validate_name("first_name", &req.first_name)?;
    validate_name("last_name", &req.last_name)
}
