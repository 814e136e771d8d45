//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// すべての API ルートはこの型を失敗エンベロープ
/// `{ success: false, message, error? }` として返します。
///
/// ## Fields
/// * `kind` - エラーの分類（HTTP ステータスコードにマッピング）
/// * `message` - ユーザー向けのエラーメッセージ
/// * `detail` - 元のエラーの説明（エンベロープの `error` フィールド）
/// * `source` - 元のエラー（オプション、デバッグ用）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::NotFound, "Question not found");
/// assert_eq!(err.status_code(), 404);
///
/// let err = AppError::bad_request("Invalid request body").with_detail("missing field `email`");
/// assert_eq!(err.detail().as_deref(), Some("missing field `email`"));
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    detail: Option<String>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// アプリケーション結果型エイリアス
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// 新しいエラーを作成
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
            source: None,
        }
    }

    /// 400 Bad Request エラー
    #[inline]
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// 401 Unauthorized エラー
    #[inline]
    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// 403 Forbidden エラー
    #[inline]
    pub fn forbidden(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// 404 Not Found エラー
    #[inline]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// 409 Conflict エラー
    #[inline]
    pub fn conflict(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// 500 Internal Server Error
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// 元のエラーを設定
    ///
    /// `source` の表示文字列はエンベロープの `error` に出力されます。
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// 元のエラーが値として存在しない場合の説明を設定
    #[inline]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// ユーザー向けメッセージを差し替え
    #[inline]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// エラー種別を取得
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// HTTP ステータスコードを取得
    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// メッセージを取得
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// エンベロープの `error` フィールドに出す説明
    ///
    /// 明示的な `detail` を優先し、無ければ `source` の表示文字列を使います。
    pub fn detail(&self) -> Option<String> {
        self.detail
            .clone()
            .or_else(|| self.source.as_ref().map(|e| e.to_string()))
    }

    /// サーバーエラーかどうか
    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(detail) = &self.detail {
            builder.field("detail", detail);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

// ============================================================================
// Result extension traits
// ============================================================================

/// `Result<T, E>` を `AppResult<T>` に変換するための拡張トレイト
pub trait ResultExt<T, E> {
    /// 操作単位の汎用メッセージを付与
    ///
    /// サーバーエラー (5xx) のみ `message` に置き換え、
    /// クライアントエラー (4xx) は個別のメッセージを保持します。
    fn or_fail(self, message: &'static str) -> AppResult<T>
    where
        E: Into<AppError>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn or_fail(self, message: &'static str) -> AppResult<T>
    where
        E: Into<AppError>,
    {
        self.map_err(|e| {
            let err: AppError = e.into();
            if err.is_server_error() {
                err.with_message(message)
            } else {
                err
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_error() {
        let err = AppError::new(ErrorKind::NotFound, "User not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "User not found");
        assert!(err.detail().is_none());
    }

    #[test]
    fn test_detail_prefers_explicit_value() {
        let io_err = std::io::Error::other("disk on fire");
        let err = AppError::internal("Failed").with_source(io_err);
        assert_eq!(err.detail().as_deref(), Some("disk on fire"));
        assert!(err.source().is_some());

        let err = err.with_detail("explicit");
        assert_eq!(err.detail().as_deref(), Some("explicit"));
    }

    #[test]
    fn test_display() {
        let err = AppError::not_found("User not found");
        assert_eq!(err.to_string(), "[Not Found] User not found");
    }

    #[test]
    fn test_or_fail_replaces_server_message_only() {
        let server: Result<(), AppError> = Err(AppError::internal("pool exhausted"));
        let err = server.or_fail("Failed to delete user").unwrap_err();
        assert_eq!(err.message(), "Failed to delete user");

        let client: Result<(), AppError> = Err(AppError::bad_request("Email is required"));
        let err = client.or_fail("Failed to delete user").unwrap_err();
        assert_eq!(err.message(), "Email is required");
    }
}
