//! Read-only repository for specializations.

use diesel::prelude::*;

use crate::{
    domain::{specialization::Specialization, types::SpecializationId},
    models::specialization::Specialization as DbSpecialization,
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, SpecializationReader},
};

impl SpecializationReader for DieselRepository {
    fn list_specializations(&self) -> RepositoryResult<Vec<Specialization>> {
        use crate::schema::specializations;

        let mut conn = self.conn()?;
        let rows = specializations::table
            .order((specializations::name.asc(), specializations::id.asc()))
            .load::<DbSpecialization>(&mut conn)?;

        rows.into_iter()
            .map(|row| Specialization::try_from(row).map_err(RepositoryError::from))
            .collect()
    }

    fn get_specialization_by_id(
        &self,
        id: SpecializationId,
    ) -> RepositoryResult<Option<Specialization>> {
        use crate::schema::specializations;

        let mut conn = self.conn()?;
        let row = specializations::table
            .find(id.get())
            .first::<DbSpecialization>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(Some(
                Specialization::try_from(row).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }
}
