//! Services backing the doctors resource.

use crate::domain::doctor::{Doctor, DoctorSortKey};
use crate::domain::types::DoctorId;
use crate::dto::doctor::{DoctorEditDto, DoctorListItem};
use crate::forms::doctor::{DoctorForm, DoctorPayload};
use crate::pagination::{ListParams, ListQuery, PageLimits};
use crate::repository::{DoctorReader, DoctorWriter, RepositoryError};
use crate::services::{ServiceError, ServiceResult, resolve_update};

fn doctor_id(id: i32) -> ServiceResult<DoctorId> {
    DoctorId::new(id).map_err(|_| ServiceError::NotFound)
}

/// Returns one sorted page of doctors projected for list views.
pub fn list_doctors<R>(
    repo: &R,
    params: &ListParams,
    limits: PageLimits,
) -> ServiceResult<Vec<DoctorListItem>>
where
    R: DoctorReader + ?Sized,
{
    let query = ListQuery::<DoctorSortKey>::from_params(params, limits);

    let doctors = repo.list_doctors(&query)?;

    Ok(doctors.into_iter().map(DoctorListItem::from).collect())
}

/// Loads a doctor in its edit shape.
pub fn get_doctor<R>(repo: &R, id: i32) -> ServiceResult<DoctorEditDto>
where
    R: DoctorReader + ?Sized,
{
    let doctor = repo
        .get_doctor_by_id(doctor_id(id)?)?
        .ok_or(ServiceError::NotFound)?;

    Ok(doctor.into())
}

/// Validates the form and stores a new doctor.
pub fn create_doctor<R>(repo: &R, form: DoctorForm) -> ServiceResult<Doctor>
where
    R: DoctorWriter + ?Sized,
{
    let payload = DoctorPayload::try_from(form)?;

    let doctor = repo.create_doctor(&payload.into_new())?;
    log::info!("Created doctor {}", doctor.id);

    Ok(doctor)
}

/// Replaces the editable fields of an existing doctor.
///
/// The body id must match the path id. A concurrent modification detected at
/// save time is reported as not found if the row is gone, or as a conflict.
pub fn update_doctor<R>(repo: &R, id: i32, form: DoctorForm) -> ServiceResult<()>
where
    R: DoctorReader + DoctorWriter + ?Sized,
{
    if form.id != Some(id) {
        return Err(ServiceError::IdMismatch);
    }

    let payload = DoctorPayload::try_from(form)?;

    let id = doctor_id(id)?;
    let current = repo.get_doctor_by_id(id)?.ok_or(ServiceError::NotFound)?;

    let result = repo.update_doctor(id, current.version, &payload.into_update());
    resolve_update(result, || repo.doctor_exists(id))?;

    Ok(())
}

/// Deletes a doctor and returns its last stored state.
pub fn delete_doctor<R>(repo: &R, id: i32) -> ServiceResult<Doctor>
where
    R: DoctorWriter + ?Sized,
{
    match repo.delete_doctor(doctor_id(id)?) {
        Ok(Some(doctor)) => {
            log::info!("Deleted doctor {}", doctor.id);
            Ok(doctor)
        }
        Ok(None) => Err(ServiceError::NotFound),
        Err(RepositoryError::ForeignKeyViolation(message)) => Err(ServiceError::InUse(message)),
        Err(err) => Err(err.into()),
    }
}
