//! Diesel models representing doctors.

use diesel::prelude::*;

use crate::domain::doctor::{
    Doctor as DomainDoctor, DoctorSummary as DomainDoctorSummary, NewDoctor as DomainNewDoctor,
    UpdateDoctor as DomainUpdateDoctor,
};
use crate::domain::types::{DoctorId, Name, RowVersion, SpecializationId, TypeConstraintError};
use crate::models::specialization::Specialization;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::doctors)]
#[diesel(belongs_to(Specialization))]
/// Diesel model for [`crate::domain::doctor::Doctor`].
pub struct Doctor {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub specialization_id: i32,
    pub version: i32,
}

#[derive(Debug, Clone, Queryable)]
/// Row produced by the doctors list query (doctor joined with its specialization).
pub struct DoctorSummary {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub specialization_name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::doctors)]
/// Insertable form of [`Doctor`].
pub struct NewDoctor<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub specialization_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::doctors)]
/// Data used when updating a [`Doctor`] record, including the bumped version.
pub struct UpdateDoctor<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub specialization_id: i32,
    pub version: i32,
}

impl<'a> UpdateDoctor<'a> {
    pub fn new(updates: &'a DomainUpdateDoctor, next_version: RowVersion) -> Self {
        Self {
            first_name: updates.first_name.as_str(),
            last_name: updates.last_name.as_str(),
            specialization_id: updates.specialization_id.get(),
            version: next_version.get(),
        }
    }
}

impl TryFrom<Doctor> for DomainDoctor {
    type Error = TypeConstraintError;

    fn try_from(doctor: Doctor) -> Result<Self, Self::Error> {
        Ok(Self {
            id: DoctorId::try_from(doctor.id)?,
            first_name: Name::new(doctor.first_name)?,
            last_name: Name::new(doctor.last_name)?,
            specialization_id: SpecializationId::try_from(doctor.specialization_id)?,
            version: RowVersion::new(doctor.version),
        })
    }
}

impl TryFrom<DoctorSummary> for DomainDoctorSummary {
    type Error = TypeConstraintError;

    fn try_from(row: DoctorSummary) -> Result<Self, Self::Error> {
        Ok(Self {
            id: DoctorId::try_from(row.id)?,
            first_name: Name::new(row.first_name)?,
            last_name: Name::new(row.last_name)?,
            specialization_name: Name::new(row.specialization_name)?,
        })
    }
}

impl<'a> From<&'a DomainNewDoctor> for NewDoctor<'a> {
    fn from(doctor: &'a DomainNewDoctor) -> Self {
        Self {
            first_name: doctor.first_name.as_str(),
            last_name: doctor.last_name.as_str(),
            specialization_id: doctor.specialization_id.get(),
        }
    }
}
