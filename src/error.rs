use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Failure of a single request. Each variant maps to exactly one status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation error: {0}")]
    Validation(&'static str),
    #[error("todo not found")]
    NotFound,
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self {
            ApiError::Validation(message) => json!({ "message": message }),
            ApiError::NotFound => json!({ "message": "Todo not found" }),
            ApiError::Store(err) => {
                tracing::error!(error = %err, "store query failed");
                store_error_body(err)
            }
        };
        (self.status(), Json(body)).into_response()
    }
}

// The driver error goes back to the client as-is
fn store_error_body(err: &sqlx::Error) -> Value {
    match err {
        sqlx::Error::Database(db) => json!({
            "message": db.message(),
            "code": db.code(),
        }),
        other => json!({ "message": other.to_string() }),
    }
}

/// Errors that stop the server before or while it is serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("http error: {0}")]
    Http(#[from] hyper::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(
            ApiError::Validation("Username is required").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Store(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn non_database_errors_surface_their_display_text() {
        let body = store_error_body(&sqlx::Error::PoolClosed);
        assert_eq!(
            body["message"],
            Value::String(sqlx::Error::PoolClosed.to_string())
        );
        assert!(body.get("code").is_none());
    }

    #[test]
    fn server_error_display() {
        let err = ServerError::Config("unsupported scheme".to_string());
        assert!(format!("{err}").contains("configuration error"));
    }
}
