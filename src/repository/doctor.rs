//! Repository implementation for doctors.

use diesel::dsl::exists;
use diesel::prelude::*;

use crate::{
    domain::{
        doctor::{Doctor, DoctorSortKey, DoctorSummary, NewDoctor, UpdateDoctor},
        types::{DoctorId, RowVersion},
    },
    models::doctor::{
        Doctor as DbDoctor, DoctorSummary as DbDoctorSummary, NewDoctor as DbNewDoctor,
        UpdateDoctor as DbUpdateDoctor,
    },
    pagination::ListQuery,
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, DoctorReader, DoctorWriter},
};

impl DoctorReader for DieselRepository {
    fn get_doctor_by_id(&self, id: DoctorId) -> RepositoryResult<Option<Doctor>> {
        use crate::schema::doctors;

        let mut conn = self.conn()?;
        let db_doctor = doctors::table
            .find(id.get())
            .first::<DbDoctor>(&mut conn)
            .optional()?;

        match db_doctor {
            Some(db_doctor) => Ok(Some(
                Doctor::try_from(db_doctor).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn doctor_exists(&self, id: DoctorId) -> RepositoryResult<bool> {
        use crate::schema::doctors;

        let mut conn = self.conn()?;
        let found = diesel::select(exists(doctors::table.find(id.get())))
            .get_result::<bool>(&mut conn)?;

        Ok(found)
    }

    fn list_doctors(
        &self,
        query: &ListQuery<DoctorSortKey>,
    ) -> RepositoryResult<Vec<DoctorSummary>> {
        use crate::schema::{doctors, specializations};

        let mut conn = self.conn()?;

        let mut items = doctors::table
            .inner_join(specializations::table)
            .select((
                doctors::id,
                doctors::first_name,
                doctors::last_name,
                specializations::name,
            ))
            .into_boxed();

        items = match query.sort {
            DoctorSortKey::FirstName => items.order_by(doctors::first_name.asc()),
            DoctorSortKey::LastName => items.order_by(doctors::last_name.asc()),
            DoctorSortKey::Specialization => items.order_by(specializations::name.asc()),
        };

        let rows = items
            .then_order_by(doctors::id.asc())
            .offset(query.pagination.offset())
            .limit(query.pagination.limit())
            .load::<DbDoctorSummary>(&mut conn)?;

        rows.into_iter()
            .map(|row| DoctorSummary::try_from(row).map_err(RepositoryError::from))
            .collect()
    }
}

impl DoctorWriter for DieselRepository {
    fn create_doctor(&self, new_doctor: &NewDoctor) -> RepositoryResult<Doctor> {
        use crate::schema::doctors;

        let mut conn = self.conn()?;
        let db_new_doctor: DbNewDoctor = new_doctor.into();

        let db_doctor = diesel::insert_into(doctors::table)
            .values(&db_new_doctor)
            .get_result::<DbDoctor>(&mut conn)?;

        Doctor::try_from(db_doctor).map_err(RepositoryError::from)
    }

    fn update_doctor(
        &self,
        id: DoctorId,
        expected_version: RowVersion,
        updates: &UpdateDoctor,
    ) -> RepositoryResult<Doctor> {
        use crate::schema::doctors;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateDoctor::new(updates, expected_version.next());

        let updated = diesel::update(
            doctors::table
                .filter(doctors::id.eq(id.get()))
                .filter(doctors::version.eq(expected_version.get())),
        )
        .set(&db_updates)
        .get_result::<DbDoctor>(&mut conn)
        .optional()?;

        match updated {
            Some(db_doctor) => Doctor::try_from(db_doctor).map_err(RepositoryError::from),
            None => Err(RepositoryError::ConcurrencyConflict(format!(
                "doctor {id} no longer matches version {}",
                expected_version.get()
            ))),
        }
    }

    fn delete_doctor(&self, id: DoctorId) -> RepositoryResult<Option<Doctor>> {
        use crate::schema::doctors;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(doctors::table.find(id.get()))
            .get_result::<DbDoctor>(&mut conn)
            .optional()?;

        deleted
            .map(|db_doctor| Doctor::try_from(db_doctor).map_err(RepositoryError::from))
            .transpose()
    }
}
