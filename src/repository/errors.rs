use diesel::r2d2::PoolError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use thiserror::Error;

/// Result type returned by every repository operation.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Failures reported by the storage layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No record matched the requested identifier, or a referenced parent is missing.
    #[error("record not found")]
    NotFound,
    /// A uniqueness constraint rejected the write.
    #[error("record already exists")]
    AlreadyExists,
    #[error("failed to obtain a database connection: {0}")]
    Pool(#[from] PoolError),
    #[error("database error: {0}")]
    Database(DieselError),
    #[error("failed to encode stored value: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<DieselError> for RepositoryError {
    fn from(value: DieselError) -> Self {
        match value {
            DieselError::NotFound => RepositoryError::NotFound,
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                RepositoryError::AlreadyExists
            }
            DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                RepositoryError::NotFound
            }
            other => RepositoryError::Database(other),
        }
    }
}
