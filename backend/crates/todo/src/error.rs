//! Todo Error Types
//!
//! This module provides todo-specific error variants classified with
//! the shared `kernel::error::kind::ErrorKind`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::conversions::sqlx_error_kind;
use kernel::error::kind::ErrorKind;
use kernel::id::TodoId;
use thiserror::Error;

/// Todo-specific result type alias
pub type TodoResult<T> = Result<T, TodoError>;

/// Todo-specific error variants
///
/// Each variant maps to an HTTP status code. Responses carry no body.
#[derive(Debug, Error)]
pub enum TodoError {
    /// No row with this id
    #[error("Todo {0} not found")]
    NotFound(TodoId),

    /// Body id missing or different from the path id on update
    #[error("Todo id mismatch: path {path}, body {body:?}")]
    IdMismatch { path: TodoId, body: Option<TodoId> },

    /// Title absent or empty
    #[error("Title is required")]
    MissingTitle,

    /// Body could not be parsed as JSON of the expected shape
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Path parameter could not be parsed
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TodoError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TodoError::NotFound(_) => StatusCode::NOT_FOUND,
            TodoError::IdMismatch { .. }
            | TodoError::MissingTitle
            | TodoError::MalformedBody(_)
            | TodoError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            TodoError::Database(_) | TodoError::Migration(_) | TodoError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TodoError::NotFound(_) => ErrorKind::NotFound,
            TodoError::IdMismatch { .. }
            | TodoError::MissingTitle
            | TodoError::MalformedBody(_)
            | TodoError::InvalidPath(_) => ErrorKind::BadRequest,
            TodoError::Database(_) | TodoError::Migration(_) | TodoError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Whether retrying the failed operation may succeed
    ///
    /// Only connectivity-class database failures qualify.
    pub fn is_transient(&self) -> bool {
        match self {
            TodoError::Database(e) => sqlx_error_kind(e).is_retryable(),
            TodoError::Migration(sqlx::migrate::MigrateError::Execute(e)) => {
                sqlx_error_kind(e).is_retryable()
            }
            _ => false,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TodoError::Database(e) => {
                tracing::error!(error = %e, "Todo database error");
            }
            TodoError::Migration(e) => {
                tracing::error!(error = %e, "Todo migration error");
            }
            TodoError::Internal(msg) => {
                tracing::error!(message = %msg, "Todo internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Todo request rejected");
            }
        }
    }
}

impl From<JsonRejection> for TodoError {
    fn from(rejection: JsonRejection) -> Self {
        TodoError::MalformedBody(rejection.body_text())
    }
}

impl From<PathRejection> for TodoError {
    fn from(rejection: PathRejection) -> Self {
        TodoError::InvalidPath(rejection.body_text())
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        self.log();
        // Status code only, no structured error body
        (self.status_code(), ()).into_response()
    }
}
