//! Error conversions - classification of external errors
//!
//! Maps third-party errors onto [`ErrorKind`] without consuming them.

use super::kind::ErrorKind;

/// `sqlx::Error` を所有権を奪わずに分類する
///
/// 起動時の再試行判定（[`ErrorKind::is_retryable`]）と
/// ドメインエラーの分類に使用します。
pub fn sqlx_error_kind(err: &sqlx::Error) -> ErrorKind {
    match err {
        sqlx::Error::RowNotFound => ErrorKind::NotFound,
        sqlx::Error::PoolTimedOut => ErrorKind::ServiceUnavailable,
        sqlx::Error::Io(_) => ErrorKind::ServiceUnavailable,
        sqlx::Error::Database(db_err) => match db_err.code() {
            // PostgreSQL specific error codes
            // https://www.postgresql.org/docs/current/errcodes-appendix.html
            Some(code) => match code.as_ref() {
                // Class 08: Connection Exception
                "08000" | "08001" | "08003" | "08004" | "08006" => ErrorKind::ServiceUnavailable,
                // Class 23: Integrity Constraint Violation
                "23000" | "23001" | "23503" | "23505" => ErrorKind::Conflict,
                "23502" | "23514" => ErrorKind::BadRequest,
                // Class 42: Syntax Error or Access Rule Violation
                "42501" => ErrorKind::Forbidden,
                // Class 53: Insufficient Resources
                "53000" | "53100" | "53200" | "53300" => ErrorKind::ServiceUnavailable,
                // Class 57: Operator Intervention
                "57P01" | "57P02" | "57P03" => ErrorKind::ServiceUnavailable,
                "57014" => ErrorKind::RequestTimeout,
                _ => ErrorKind::InternalServerError,
            },
            None => ErrorKind::InternalServerError,
        },
        _ => ErrorKind::InternalServerError,
    }
}
