//! Wire shapes for the doctors resource.

use serde::Serialize;

use crate::domain::doctor::{Doctor, DoctorSummary};

/// Row of `GET /api/doctors`. Carries the specialization name, not its id.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorListItem {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub specialization_name: String,
}

/// Body of `GET /api/doctors/{id}`, shaped like the write form.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorEditDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub specialization_id: i32,
}

impl From<DoctorSummary> for DoctorListItem {
    fn from(doctor: DoctorSummary) -> Self {
        Self {
            id: doctor.id.get(),
            first_name: doctor.first_name.into_inner(),
            last_name: doctor.last_name.into_inner(),
            specialization_name: doctor.specialization_name.into_inner(),
        }
    }
}

impl From<Doctor> for DoctorEditDto {
    fn from(doctor: Doctor) -> Self {
        Self {
            id: doctor.id.get(),
            first_name: doctor.first_name.into_inner(),
            last_name: doctor.last_name.into_inner(),
            specialization_id: doctor.specialization_id.get(),
        }
    }
}
