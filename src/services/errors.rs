use thiserror::Error;

use crate::domain::filter::FilterError;
use crate::repository::RepositoryError;

/// Result type returned by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error kinds surfaced to callers of the service layer.
///
/// Storage failures keep the operation that produced them in `context`.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested entity does not exist.
    #[error("{context}: not found")]
    NotFound { context: &'static str },
    /// A uniqueness constraint was violated.
    #[error("{context}: already exists")]
    AlreadyExists { context: &'static str },
    /// Filter or field constraints were violated before reaching storage.
    #[error("validation error: {0}")]
    Validation(String),
    /// Any other storage or infrastructure failure.
    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        #[source]
        source: RepositoryError,
    },
    /// Reading or writing a photo file failed.
    #[error("{context}: {source}")]
    PhotoStorage {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl ServiceError {
    /// Build a converter that tags a repository error with the failing operation.
    ///
    /// ```ignore
    /// repo.delete_object(id).map_err(ServiceError::context("failed to delete object"))?;
    /// ```
    pub fn context(context: &'static str) -> impl FnOnce(RepositoryError) -> ServiceError {
        move |err| match err {
            RepositoryError::NotFound => ServiceError::NotFound { context },
            RepositoryError::AlreadyExists => ServiceError::AlreadyExists { context },
            source => ServiceError::Internal { context, source },
        }
    }
}

impl From<FilterError> for ServiceError {
    fn from(value: FilterError) -> Self {
        ServiceError::Validation(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_keeps_error_kind_and_operation() {
        let err = ServiceError::context("failed to get object")(RepositoryError::NotFound);
        assert!(matches!(
            err,
            ServiceError::NotFound {
                context: "failed to get object"
            }
        ));
        assert_eq!(err.to_string(), "failed to get object: not found");

        let err = ServiceError::context("failed to create comparison")(
            RepositoryError::AlreadyExists,
        );
        assert!(matches!(err, ServiceError::AlreadyExists { .. }));
    }

    #[test]
    fn storage_failures_become_internal() {
        let err = ServiceError::context("failed to list objects")(RepositoryError::Database(
            diesel::result::Error::RollbackTransaction,
        ));

        assert!(matches!(err, ServiceError::Internal { .. }));
        assert!(err.to_string().starts_with("failed to list objects: "));
    }
}
