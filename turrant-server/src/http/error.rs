//! API error types with IntoResponse
//!
//! Every failure is rendered as the `{data, error}` envelope. `data` keeps the
//! shape of the endpoint that failed: `[]` for lists, `null` for single items.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::db::{ConfigError, DbError};
use crate::models::ValidationError;

/// Empty `data` value sent alongside an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyData {
    List,
    Item,
}

impl EmptyData {
    fn value(self) -> Value {
        match self {
            Self::List => json!([]),
            Self::Item => Value::Null,
        }
    }
}

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Well-formed input failed validation (400)
    Validation(ValidationError),

    /// Body could not be read as the expected JSON (400/415/422)
    Rejected(JsonRejection),

    /// No matching record (404)
    NotFound { message: &'static str },

    /// Store credentials missing (503)
    Unavailable { source: ConfigError, empty: EmptyData },

    /// Store call failed (500, logged)
    Database { source: DbError, empty: EmptyData },
}

impl ApiError {
    /// Map a data-access failure on a list endpoint.
    pub fn list(err: DbError) -> Self {
        Self::from_db(err, EmptyData::List)
    }

    /// Map a data-access failure on a single-item endpoint.
    pub fn item(err: DbError) -> Self {
        Self::from_db(err, EmptyData::Item)
    }

    fn from_db(err: DbError, empty: EmptyData) -> Self {
        match err {
            DbError::Config(source) => Self::Unavailable { source, empty },
            source => Self::Database { source, empty },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Rejected(rejection) => rejection.status(),
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            Self::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (empty, message) = match self {
            Self::Validation(e) => (EmptyData::Item, e.to_string()),
            Self::Rejected(rejection) => (EmptyData::Item, rejection.body_text()),
            Self::NotFound { message } => (EmptyData::Item, message.to_string()),
            Self::Unavailable { source, empty } => {
                tracing::warn!("Store not configured: {}", source);
                (empty, source.to_string())
            }
            Self::Database { source, empty } => {
                tracing::error!("Database error: {}", source);
                (empty, format!("Database error: {}", source))
            }
        };

        let body = json!({
            "data": empty.value(),
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected(rejection)
    }
}

/// Single-item endpoints are the common case.
impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::item(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    use crate::store::StoreError;

    async fn body(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn config_error_is_503_with_message() {
        let (status, body) = body(ApiError::list(DbError::Config(ConfigError::MissingUrl))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["data"], json!([]));
        assert_eq!(
            body["error"],
            json!("SUPABASE_URL not configured. Please update .env file.")
        );
    }

    #[tokio::test]
    async fn store_error_is_500_with_prefix() {
        let err = DbError::Store(StoreError::MultipleRows {
            table: "blog_posts".into(),
            count: 2,
        });
        let (status, body) = body(ApiError::item(err)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["data"], Value::Null);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Database error: "));
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let (status, body) = body(ApiError::NotFound {
            message: "Post not found",
        })
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"data": null, "error": "Post not found"}));
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::from(ValidationError::Empty { field: "title" });
        let (status, body) = body(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("title cannot be empty"));
    }
}
