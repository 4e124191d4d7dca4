//! Error types for the PostgreSQL storage backend.

use objsync_storage::StorageError;
use sqlx_core::error::Error as SqlxError;

/// Errors specific to the PostgreSQL storage backend.
#[derive(Debug, thiserror::Error)]
pub enum PostgresError {
    /// Database connection error.
    #[error("Database connection error: {0}")]
    Connection(#[from] SqlxError),

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Pool error.
    #[error("Pool error: {message}")]
    Pool { message: String },

    /// Schema bootstrap error.
    #[error("Schema error: {message}")]
    Schema { message: String },
}

impl PostgresError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a new pool error.
    #[must_use]
    pub fn pool(message: impl Into<String>) -> Self {
        Self::Pool {
            message: message.into(),
        }
    }

    /// Creates a new schema error.
    #[must_use]
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }
}

impl From<PostgresError> for StorageError {
    fn from(err: PostgresError) -> Self {
        match err {
            PostgresError::Connection(e) => StorageError::connection_error(e.to_string()),
            PostgresError::Config { message } => {
                StorageError::internal(format!("Configuration error: {message}"))
            }
            PostgresError::Pool { message } => {
                StorageError::connection_error(format!("Pool error: {message}"))
            }
            PostgresError::Schema { message } => {
                StorageError::internal(format!("Schema error: {message}"))
            }
        }
    }
}

/// Result type alias for PostgreSQL operations.
pub type Result<T> = std::result::Result<T, PostgresError>;

/// Maps a sqlx error from a query to a `StorageError`, distinguishing
/// connectivity loss from everything else.
pub(crate) fn query_error(context: &str, err: SqlxError) -> StorageError {
    match err {
        SqlxError::Io(_)
        | SqlxError::Tls(_)
        | SqlxError::PoolTimedOut
        | SqlxError::PoolClosed
        | SqlxError::WorkerCrashed => {
            StorageError::connection_error(format!("{context}: {err}"))
        }
        SqlxError::ColumnDecode { .. } | SqlxError::Decode(_) | SqlxError::TypeNotFound { .. } => {
            StorageError::invalid_record(format!("{context}: {err}"))
        }
        other => StorageError::internal(format!("{context}: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PostgresError::config("invalid URL");
        assert!(err.to_string().contains("Configuration error"));

        let err = PostgresError::pool("pool exhausted");
        assert!(err.to_string().contains("Pool error"));

        let err = PostgresError::schema("create table failed");
        assert!(err.to_string().contains("Schema error"));
    }

    #[test]
    fn test_conversion_to_storage_error() {
        let pg_err = PostgresError::config("test error");
        let storage_err: StorageError = pg_err.into();
        assert!(matches!(storage_err, StorageError::Internal { .. }));

        let pg_err = PostgresError::pool("no connections");
        let storage_err: StorageError = pg_err.into();
        assert!(storage_err.is_connection_error());
    }

    #[test]
    fn test_query_error_classification() {
        let io = SqlxError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "refused",
        ));
        assert!(query_error("fetch", io).is_connection_error());

        let timeout = query_error("fetch", SqlxError::PoolTimedOut);
        assert!(timeout.is_connection_error());

        let other = query_error("fetch", SqlxError::RowNotFound);
        assert!(!other.is_connection_error());
    }
}
