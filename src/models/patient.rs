//! Diesel models representing patients.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::patient::{
    NewPatient as DomainNewPatient, Patient as DomainPatient,
    PatientSummary as DomainPatientSummary, UpdatePatient as DomainUpdatePatient,
};
use crate::domain::types::{DoctorId, Name, PatientId, RowVersion, TypeConstraintError};
use crate::models::doctor::Doctor;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::patients)]
#[diesel(belongs_to(Doctor))]
/// Diesel model for [`crate::domain::patient::Patient`].
pub struct Patient {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub doctor_id: i32,
    pub version: i32,
}

#[derive(Debug, Clone, Queryable)]
/// Row produced by the patients list query. Doctor columns come from a left join.
pub struct PatientSummary {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub doctor_first_name: Option<String>,
    pub doctor_last_name: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::patients)]
/// Insertable form of [`Patient`].
pub struct NewPatient<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub date_of_birth: NaiveDate,
    pub doctor_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::patients)]
/// Data used when updating a [`Patient`] record, including the bumped version.
pub struct UpdatePatient<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub date_of_birth: NaiveDate,
    pub doctor_id: i32,
    pub version: i32,
}

impl<'a> UpdatePatient<'a> {
    pub fn new(updates: &'a DomainUpdatePatient, next_version: RowVersion) -> Self {
        Self {
            first_name: updates.first_name.as_str(),
            last_name: updates.last_name.as_str(),
            date_of_birth: updates.date_of_birth,
            doctor_id: updates.doctor_id.get(),
            version: next_version.get(),
        }
    }
}

impl TryFrom<Patient> for DomainPatient {
    type Error = TypeConstraintError;

    fn try_from(patient: Patient) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PatientId::try_from(patient.id)?,
            first_name: Name::new(patient.first_name)?,
            last_name: Name::new(patient.last_name)?,
            date_of_birth: patient.date_of_birth,
            doctor_id: DoctorId::try_from(patient.doctor_id)?,
            version: RowVersion::new(patient.version),
        })
    }
}

impl TryFrom<PatientSummary> for DomainPatientSummary {
    type Error = TypeConstraintError;

    fn try_from(row: PatientSummary) -> Result<Self, Self::Error> {
        let doctor_name = match (row.doctor_first_name, row.doctor_last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            _ => None,
        };
        Ok(Self {
            id: PatientId::try_from(row.id)?,
            first_name: Name::new(row.first_name)?,
            last_name: Name::new(row.last_name)?,
            date_of_birth: row.date_of_birth,
            doctor_name,
        })
    }
}

impl<'a> From<&'a DomainNewPatient> for NewPatient<'a> {
    fn from(patient: &'a DomainNewPatient) -> Self {
        Self {
            first_name: patient.first_name.as_str(),
            last_name: patient.last_name.as_str(),
            date_of_birth: patient.date_of_birth,
            doctor_id: patient.doctor_id.get(),
        }
    }
}
