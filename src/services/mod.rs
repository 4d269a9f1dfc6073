//! Service layer: orchestrates validation and repository calls for each
//! endpoint and reports outcomes as [`ServiceError`] variants.

use thiserror::Error;

use crate::forms::{FieldErrors, FormError};
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod doctors;
pub mod patients;
pub mod specializations;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("entity not found")]
    NotFound,

    #[error("ID mismatch")]
    IdMismatch,

    #[error("validation failed: {0:?}")]
    Validation(FieldErrors),

    /// A write referenced a row that does not exist.
    #[error("invalid reference: {0}")]
    InvalidReference(String),

    /// A delete was refused because other rows still reference the entity.
    #[error("entity is still referenced: {0}")]
    InUse(String),

    /// The row changed between load and save and still exists.
    #[error("concurrent modification: {0}")]
    Conflict(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ForeignKeyViolation(message) => {
                ServiceError::InvalidReference(message)
            }
            RepositoryError::ConcurrencyConflict(message) => ServiceError::Conflict(message),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Validation(err.field_errors())
    }
}

/// Resolves the outcome of an optimistic update.
///
/// A conflict is re-checked against storage: if the row is gone the caller
/// gets [`ServiceError::NotFound`], otherwise the conflict is returned as is.
/// Nothing is retried.
pub(crate) fn resolve_update<T, F>(result: RepositoryResult<T>, still_exists: F) -> ServiceResult<T>
where
    F: FnOnce() -> RepositoryResult<bool>,
{
    match result {
        Ok(value) => Ok(value),
        Err(RepositoryError::ConcurrencyConflict(message)) => {
            if still_exists()? {
                log::error!("Update lost to a concurrent modification: {message}");
                Err(ServiceError::Conflict(message))
            } else {
                Err(ServiceError::NotFound)
            }
        }
        Err(err) => Err(err.into()),
    }
}
