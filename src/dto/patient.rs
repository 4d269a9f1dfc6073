//! Wire shapes for the patients resource.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::patient::{Patient, PatientSummary};

/// Row of `GET /api/patients`. The doctor is shown by name when it resolves.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientListItem {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub doctor_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientEditDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub doctor_id: i32,
}

impl From<PatientSummary> for PatientListItem {
    fn from(patient: PatientSummary) -> Self {
        Self {
            id: patient.id.get(),
            first_name: patient.first_name.into_inner(),
            last_name: patient.last_name.into_inner(),
            date_of_birth: patient.date_of_birth,
            doctor_name: patient.doctor_name,
        }
    }
}

impl From<Patient> for PatientEditDto {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id.get(),
            first_name: patient.first_name.into_inner(),
            last_name: patient.last_name.into_inner(),
            date_of_birth: patient.date_of_birth,
            doctor_id: patient.doctor_id.get(),
        }
    }
}
