//! Services backing the patients resource.
//!
//! Same contract as the doctors services, including the id-mismatch check and
//! conflict resolution on update.

use crate::domain::patient::{Patient, PatientSortKey};
use crate::domain::types::PatientId;
use crate::dto::patient::{PatientEditDto, PatientListItem};
use crate::forms::patient::{PatientForm, PatientPayload};
use crate::pagination::{ListParams, ListQuery, PageLimits};
use crate::repository::{PatientReader, PatientWriter, RepositoryError};
use crate::services::{ServiceError, ServiceResult, resolve_update};

fn patient_id(id: i32) -> ServiceResult<PatientId> {
    PatientId::new(id).map_err(|_| ServiceError::NotFound)
}

pub fn list_patients<R>(
    repo: &R,
    params: &ListParams,
    limits: PageLimits,
) -> ServiceResult<Vec<PatientListItem>>
where
    R: PatientReader + ?Sized,
{
    let query = ListQuery::<PatientSortKey>::from_params(params, limits);

    let patients = repo.list_patients(&query)?;

    Ok(patients.into_iter().map(PatientListItem::from).collect())
}

pub fn get_patient<R>(repo: &R, id: i32) -> ServiceResult<PatientEditDto>
where
    R: PatientReader + ?Sized,
{
    let patient = repo
        .get_patient_by_id(patient_id(id)?)?
        .ok_or(ServiceError::NotFound)?;

    Ok(patient.into())
}

pub fn create_patient<R>(repo: &R, form: PatientForm) -> ServiceResult<Patient>
where
    R: PatientWriter + ?Sized,
{
    let payload = PatientPayload::try_from(form)?;

    let patient = repo.create_patient(&payload.into_new())?;
    log::info!("Created patient {}", patient.id);

    Ok(patient)
}

pub fn update_patient<R>(repo: &R, id: i32, form: PatientForm) -> ServiceResult<()>
where
    R: PatientReader + PatientWriter + ?Sized,
{
    if form.id != Some(id) {
        return Err(ServiceError::IdMismatch);
    }

    let payload = PatientPayload::try_from(form)?;

    let id = patient_id(id)?;
    let current = repo.get_patient_by_id(id)?.ok_or(ServiceError::NotFound)?;

    let result = repo.update_patient(id, current.version, &payload.into_update());
    resolve_update(result, || repo.patient_exists(id))?;

    Ok(())
}

pub fn delete_patient<R>(repo: &R, id: i32) -> ServiceResult<Patient>
where
    R: PatientWriter + ?Sized,
{
    match repo.delete_patient(patient_id(id)?) {
        Ok(Some(patient)) => {
            log::info!("Deleted patient {}", patient.id);
            Ok(patient)
        }
        Ok(None) => Err(ServiceError::NotFound),
        Err(RepositoryError::ForeignKeyViolation(message)) => Err(ServiceError::InUse(message)),
        Err(err) => Err(err.into()),
    }
}
