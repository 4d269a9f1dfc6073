//! Storage access traits and their Diesel implementation.
//!
//! Each trait method acquires a pooled connection, runs a single statement
//! and releases the connection before returning.

use crate::{
    db::{DbConnection, DbPool, get_connection},
    domain::{
        doctor::{Doctor, DoctorSortKey, DoctorSummary, NewDoctor, UpdateDoctor},
        patient::{NewPatient, Patient, PatientSortKey, PatientSummary, UpdatePatient},
        specialization::Specialization,
        types::{DoctorId, PatientId, RowVersion, SpecializationId},
    },
    pagination::ListQuery,
    repository::errors::RepositoryResult,
};

pub mod doctor;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod patient;
pub mod specialization;

pub use errors::RepositoryError;

/// Diesel-backed repository shared by all handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

pub trait DoctorReader {
    fn get_doctor_by_id(&self, id: DoctorId) -> RepositoryResult<Option<Doctor>>;
    fn doctor_exists(&self, id: DoctorId) -> RepositoryResult<bool>;
    fn list_doctors(
        &self,
        query: &ListQuery<DoctorSortKey>,
    ) -> RepositoryResult<Vec<DoctorSummary>>;
}

pub trait DoctorWriter {
    fn create_doctor(&self, new_doctor: &NewDoctor) -> RepositoryResult<Doctor>;
    /// Applies `updates` only if the stored row still carries `expected_version`.
    ///
    /// Returns [`RepositoryError::ConcurrencyConflict`] when no row matched.
    fn update_doctor(
        &self,
        id: DoctorId,
        expected_version: RowVersion,
        updates: &UpdateDoctor,
    ) -> RepositoryResult<Doctor>;
    /// Removes the doctor and returns its last state, or `None` if absent.
    fn delete_doctor(&self, id: DoctorId) -> RepositoryResult<Option<Doctor>>;
}

pub trait PatientReader {
    fn get_patient_by_id(&self, id: PatientId) -> RepositoryResult<Option<Patient>>;
    fn patient_exists(&self, id: PatientId) -> RepositoryResult<bool>;
    fn list_patients(
        &self,
        query: &ListQuery<PatientSortKey>,
    ) -> RepositoryResult<Vec<PatientSummary>>;
}

pub trait PatientWriter {
    fn create_patient(&self, new_patient: &NewPatient) -> RepositoryResult<Patient>;
    /// Same contract as [`DoctorWriter::update_doctor`].
    fn update_patient(
        &self,
        id: PatientId,
        expected_version: RowVersion,
        updates: &UpdatePatient,
    ) -> RepositoryResult<Patient>;
    fn delete_patient(&self, id: PatientId) -> RepositoryResult<Option<Patient>>;
}

pub trait SpecializationReader {
    fn list_specializations(&self) -> RepositoryResult<Vec<Specialization>>;
    fn get_specialization_by_id(
        &self,
        id: SpecializationId,
    ) -> RepositoryResult<Option<Specialization>>;
}
