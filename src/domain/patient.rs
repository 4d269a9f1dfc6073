use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::types::{DoctorId, Name, PatientId, RowVersion};
use crate::pagination::SortKey;

/// Stored patient record.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub first_name: Name,
    pub last_name: Name,
    pub date_of_birth: NaiveDate,
    pub doctor_id: DoctorId,
    #[serde(skip)]
    pub version: RowVersion,
}

/// Patient row projected for list views.
///
/// `doctor_name` is `None` when the referenced doctor could not be joined.
#[derive(Clone, Debug, PartialEq)]
pub struct PatientSummary {
    pub id: PatientId,
    pub first_name: Name,
    pub last_name: Name,
    pub date_of_birth: NaiveDate,
    pub doctor_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewPatient {
    pub first_name: Name,
    pub last_name: Name,
    pub date_of_birth: NaiveDate,
    pub doctor_id: DoctorId,
}

impl NewPatient {
    #[must_use]
    pub fn new(
        first_name: Name,
        last_name: Name,
        date_of_birth: NaiveDate,
        doctor_id: DoctorId,
    ) -> Self {
        Self {
            first_name,
            last_name,
            date_of_birth,
            doctor_id,
        }
    }
}

/// Full replacement of the editable patient fields.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdatePatient {
    pub first_name: Name,
    pub last_name: Name,
    pub date_of_birth: NaiveDate,
    pub doctor_id: DoctorId,
}

impl UpdatePatient {
    #[must_use]
    pub fn new(
        first_name: Name,
        last_name: Name,
        date_of_birth: NaiveDate,
        doctor_id: DoctorId,
    ) -> Self {
        Self {
            first_name,
            last_name,
            date_of_birth,
            doctor_id,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PatientSortKey {
    FirstName,
    #[default]
    LastName,
    DateOfBirth,
}

impl SortKey for PatientSortKey {
    const ALLOWED: &'static [(&'static str, Self)] = &[
        ("firstname", Self::FirstName),
        ("lastname", Self::LastName),
        ("dateofbirth", Self::DateOfBirth),
    ];
}
