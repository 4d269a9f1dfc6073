//! Read-only services for specializations.

use crate::domain::specialization::Specialization;
use crate::domain::types::SpecializationId;
use crate::repository::SpecializationReader;
use crate::services::{ServiceError, ServiceResult};

pub fn list_specializations<R>(repo: &R) -> ServiceResult<Vec<Specialization>>
where
    R: SpecializationReader + ?Sized,
{
    repo.list_specializations().map_err(ServiceError::from)
}

pub fn get_specialization<R>(repo: &R, id: i32) -> ServiceResult<Specialization>
where
    R: SpecializationReader + ?Sized,
{
    let id = SpecializationId::new(id).map_err(|_| ServiceError::NotFound)?;
    repo.get_specialization_by_id(id)?
        .ok_or(ServiceError::NotFound)
}
