//! Diesel model for the read-only specializations table.

use diesel::prelude::*;

use crate::domain::specialization::Specialization as DomainSpecialization;
use crate::domain::types::{Name, SpecializationId, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::specializations)]
pub struct Specialization {
    pub id: i32,
    pub name: String,
}

impl TryFrom<Specialization> for DomainSpecialization {
    type Error = TypeConstraintError;

    fn try_from(specialization: Specialization) -> Result<Self, Self::Error> {
        Ok(Self {
            id: SpecializationId::try_from(specialization.id)?,
            name: Name::new(specialization.name)?,
        })
    }
}
