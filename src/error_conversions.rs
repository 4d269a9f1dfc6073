//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository error types, so the
//! conversion from [`TypeConstraintError`] lives here.

use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(format!("stored row violates a constraint: {val}"))
    }
}
