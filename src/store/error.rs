use thiserror::Error;

/// Result type for document store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Error types for document store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// No store was configured for this process
    #[error("Document store is not configured")]
    NotConfigured,

    /// Database unreachable, authentication failure or bad connection settings
    #[error("Connection error: {0}")]
    Connection(String),

    /// Connection pool issues
    #[error("Pool error: {0}")]
    Pool(String),

    /// SQL errors, constraint violations
    #[error("Database error: {0}")]
    Database(String),

    /// Filters must be JSON objects
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// Documents must be JSON objects that survive encoding
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convert tokio-postgres errors to store errors
impl From<tokio_postgres::Error> for StoreError {
    fn from(err: tokio_postgres::Error) -> Self {
        if let Some(db_error) = err.as_db_error() {
            return StoreError::Database(format!(
                "{}: {}",
                db_error.code().code(),
                db_error.message()
            ));
        }

        if err.is_closed() {
            return StoreError::Connection(err.to_string());
        }

        StoreError::Database(err.to_string())
    }
}

impl From<deadpool_postgres::PoolError> for StoreError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        StoreError::Pool(err.to_string())
    }
}

impl From<deadpool_postgres::BuildError> for StoreError {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        StoreError::Connection(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}
