//! Repository implementation for patients.

use diesel::dsl::exists;
use diesel::prelude::*;

use crate::{
    domain::{
        patient::{NewPatient, Patient, PatientSortKey, PatientSummary, UpdatePatient},
        types::{PatientId, RowVersion},
    },
    models::patient::{
        NewPatient as DbNewPatient, Patient as DbPatient, PatientSummary as DbPatientSummary,
        UpdatePatient as DbUpdatePatient,
    },
    pagination::ListQuery,
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, PatientReader, PatientWriter},
};

impl PatientReader for DieselRepository {
    fn get_patient_by_id(&self, id: PatientId) -> RepositoryResult<Option<Patient>> {
        use crate::schema::patients;

        let mut conn = self.conn()?;
        let db_patient = patients::table
            .find(id.get())
            .first::<DbPatient>(&mut conn)
            .optional()?;

        db_patient
            .map(|db_patient| Patient::try_from(db_patient).map_err(RepositoryError::from))
            .transpose()
    }

    fn patient_exists(&self, id: PatientId) -> RepositoryResult<bool> {
        use crate::schema::patients;

        let mut conn = self.conn()?;
        let found = diesel::select(exists(patients::table.find(id.get())))
            .get_result::<bool>(&mut conn)?;

        Ok(found)
    }

    fn list_patients(
        &self,
        query: &ListQuery<PatientSortKey>,
    ) -> RepositoryResult<Vec<PatientSummary>> {
        use crate::schema::{doctors, patients};

        let mut conn = self.conn()?;

        let mut items = patients::table
            .left_join(doctors::table)
            .select((
                patients::id,
                patients::first_name,
                patients::last_name,
                patients::date_of_birth,
                doctors::first_name.nullable(),
                doctors::last_name.nullable(),
            ))
            .into_boxed();

        items = match query.sort {
            PatientSortKey::FirstName => items.order_by(patients::first_name.asc()),
            PatientSortKey::LastName => items.order_by(patients::last_name.asc()),
            PatientSortKey::DateOfBirth => items.order_by(patients::date_of_birth.asc()),
        };

        let rows = items
            .then_order_by(patients::id.asc())
            .offset(query.pagination.offset())
            .limit(query.pagination.limit())
            .load::<DbPatientSummary>(&mut conn)?;

        rows.into_iter()
            .map(|row| PatientSummary::try_from(row).map_err(RepositoryError::from))
            .collect()
    }
}

impl PatientWriter for DieselRepository {
    fn create_patient(&self, new_patient: &NewPatient) -> RepositoryResult<Patient> {
        use crate::schema::patients;

        let mut conn = self.conn()?;
        let db_new_patient: DbNewPatient = new_patient.into();

        let db_patient = diesel::insert_into(patients::table)
            .values(&db_new_patient)
            .get_result::<DbPatient>(&mut conn)?;

        Patient::try_from(db_patient).map_err(RepositoryError::from)
    }

    fn update_patient(
        &self,
        id: PatientId,
        expected_version: RowVersion,
        updates: &UpdatePatient,
    ) -> RepositoryResult<Patient> {
        use crate::schema::patients;

        let mut conn = self.conn()?;
        let db_updates = DbUpdatePatient::new(updates, expected_version.next());

        let updated = diesel::update(
            patients::table
                .filter(patients::id.eq(id.get()))
                .filter(patients::version.eq(expected_version.get())),
        )
        .set(&db_updates)
        .get_result::<DbPatient>(&mut conn)
        .optional()?;

        match updated {
            Some(db_patient) => Patient::try_from(db_patient).map_err(RepositoryError::from),
            None => Err(RepositoryError::ConcurrencyConflict(format!(
                "patient {id} no longer matches version {}",
                expected_version.get()
            ))),
        }
    }

    fn delete_patient(&self, id: PatientId) -> RepositoryResult<Option<Patient>> {
        use crate::schema::patients;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(patients::table.find(id.get()))
            .get_result::<DbPatient>(&mut conn)
            .optional()?;

        deleted
            .map(|db_patient| Patient::try_from(db_patient).map_err(RepositoryError::from))
            .transpose()
    }
}
