//! # Error Handling
//!
//! Error types for the clans store and classification of constraint
//! violations reported by the storage engine.

use std::path::PathBuf;

use sea_orm::{DbErr, RuntimeErr};
use thiserror::Error;

/// Leading text of every "value too long" message, whether raised by the
/// model's bound check or by Postgres.
const VALUE_TOO_LONG_PREFIX: &str = "value too long";

/// Errors raised by the clans store
#[derive(Debug, Error)]
pub enum ClanError {
    #[error("clan with tag '{0}' already exists")]
    DuplicateTag(String),
    #[error("clan '{0}' is missing a name")]
    MissingName(String),
    #[error("value too long for column {column}: {actual} characters exceeds limit of {max}")]
    ValueTooLong {
        column: &'static str,
        max: usize,
        actual: usize,
    },
    #[error("clan '{tag}' rejected: {message}")]
    ValueRejected { tag: String, message: String },
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid legacy clan config {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl ClanError {
    /// Maps an error raised while writing the clan identified by `tag`.
    pub fn from_write(tag: &str, error: DbErr) -> Self {
        match ConstraintViolation::classify(&error) {
            Some(ConstraintViolation::Unique) => {
                tracing::debug!(?error, tag, "Unique constraint violation detected");
                ClanError::DuplicateTag(tag.to_string())
            }
            Some(ConstraintViolation::NotNull) => {
                tracing::debug!(?error, tag, "Not-null constraint violation detected");
                ClanError::MissingName(tag.to_string())
            }
            Some(ConstraintViolation::ValueTooLong) => {
                tracing::debug!(?error, tag, "Value exceeds declared column length");
                ClanError::ValueRejected {
                    tag: tag.to_string(),
                    message: error_message(&error),
                }
            }
            None => ClanError::Database(error),
        }
    }
}

/// Text of `error` without sea-orm's variant prefix.
fn error_message(error: &DbErr) -> String {
    match error {
        DbErr::Custom(message) => message.clone(),
        DbErr::Query(RuntimeErr::SqlxError(sqlx_err))
        | DbErr::Exec(RuntimeErr::SqlxError(sqlx_err)) => match sqlx_err.as_database_error() {
            Some(db_error) => db_error.message().to_string(),
            None => sqlx_err.to_string(),
        },
        other => other.to_string(),
    }
}

/// Storage-layer constraint a write was rejected by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// Primary key (tag) already taken
    Unique,
    /// Required column left empty
    NotNull,
    /// String longer than its declared bound
    ValueTooLong,
}

impl ConstraintViolation {
    /// Classifies `error`, returning `None` when it is not a constraint failure.
    pub fn classify(error: &DbErr) -> Option<Self> {
        const PG_UNIQUE: &str = "23505";
        const PG_NOT_NULL: &str = "23502";
        const PG_STRING_TOO_LONG: &str = "22001";
        const MYSQL_DUPLICATE_CODES: &[&str] = &["1022", "1062", "1169", "1586"];
        const MYSQL_NOT_NULL_CODES: &[&str] = &["1048", "1364"];
        const MYSQL_TOO_LONG: &str = "1406";
        const SQLITE_DUPLICATE_CODES: &[&str] = &["1555", "2067"];
        const SQLITE_NOT_NULL: &str = "1299";

        let runtime_err = match error {
            DbErr::Custom(message) if message.starts_with(VALUE_TOO_LONG_PREFIX) => {
                return Some(Self::ValueTooLong);
            }
            DbErr::Query(RuntimeErr::SqlxError(sqlx_err))
            | DbErr::Exec(RuntimeErr::SqlxError(sqlx_err)) => sqlx_err,
            _ => return None,
        };

        let db_error = runtime_err.as_database_error()?;

        if db_error.is_unique_violation() {
            return Some(Self::Unique);
        }

        if let Some(code) = db_error.code() {
            let code_str = code.as_ref();
            if code_str == PG_UNIQUE
                || MYSQL_DUPLICATE_CODES.contains(&code_str)
                || SQLITE_DUPLICATE_CODES.contains(&code_str)
            {
                return Some(Self::Unique);
            }
            if code_str == PG_NOT_NULL
                || code_str == SQLITE_NOT_NULL
                || MYSQL_NOT_NULL_CODES.contains(&code_str)
            {
                return Some(Self::NotNull);
            }
            if code_str == PG_STRING_TOO_LONG || code_str == MYSQL_TOO_LONG {
                return Some(Self::ValueTooLong);
            }
        }

        let message = db_error.message();
        if message.contains("NOT NULL constraint failed") {
            return Some(Self::NotNull);
        }
        if message.starts_with(VALUE_TOO_LONG_PREFIX) {
            return Some(Self::ValueTooLong);
        }

        None
    }
}
