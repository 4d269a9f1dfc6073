//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::doctor::{Doctor, DoctorSortKey, DoctorSummary, NewDoctor, UpdateDoctor};
use crate::domain::patient::{NewPatient, Patient, PatientSortKey, PatientSummary, UpdatePatient};
use crate::domain::specialization::Specialization;
use crate::domain::types::{DoctorId, PatientId, RowVersion, SpecializationId};
use crate::pagination::ListQuery;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DoctorReader, DoctorWriter, PatientReader, PatientWriter, SpecializationReader,
};

mock! {
    pub Repository {}

    impl DoctorReader for Repository {
        fn get_doctor_by_id(&self, id: DoctorId) -> RepositoryResult<Option<Doctor>>;
        fn doctor_exists(&self, id: DoctorId) -> RepositoryResult<bool>;
        fn list_doctors(
            &self,
            query: &ListQuery<DoctorSortKey>,
        ) -> RepositoryResult<Vec<DoctorSummary>>;
    }

    impl DoctorWriter for Repository {
        fn create_doctor(&self, new_doctor: &NewDoctor) -> RepositoryResult<Doctor>;
        fn update_doctor(
            &self,
            id: DoctorId,
            expected_version: RowVersion,
            updates: &UpdateDoctor,
        ) -> RepositoryResult<Doctor>;
        fn delete_doctor(&self, id: DoctorId) -> RepositoryResult<Option<Doctor>>;
    }

    impl PatientReader for Repository {
        fn get_patient_by_id(&self, id: PatientId) -> RepositoryResult<Option<Patient>>;
        fn patient_exists(&self, id: PatientId) -> RepositoryResult<bool>;
        fn list_patients(
            &self,
            query: &ListQuery<PatientSortKey>,
        ) -> RepositoryResult<Vec<PatientSummary>>;
    }

    impl PatientWriter for Repository {
        fn create_patient(&self, new_patient: &NewPatient) -> RepositoryResult<Patient>;
        fn update_patient(
            &self,
            id: PatientId,
            expected_version: RowVersion,
            updates: &UpdatePatient,
        ) -> RepositoryResult<Patient>;
        fn delete_patient(&self, id: PatientId) -> RepositoryResult<Option<Patient>>;
    }

    impl SpecializationReader for Repository {
        fn list_specializations(&self) -> RepositoryResult<Vec<Specialization>>;
        fn get_specialization_by_id(
            &self,
            id: SpecializationId,
        ) -> RepositoryResult<Option<Specialization>>;
    }
}
