use serde::Serialize;

use crate::domain::types::{DoctorId, Name, RowVersion, SpecializationId};
use crate::pagination::SortKey;

/// Stored doctor record.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: DoctorId,
    pub first_name: Name,
    pub last_name: Name,
    pub specialization_id: SpecializationId,
    #[serde(skip)]
    pub version: RowVersion,
}

/// Doctor row projected for list views, with the specialization resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct DoctorSummary {
    pub id: DoctorId,
    pub first_name: Name,
    pub last_name: Name,
    pub specialization_name: Name,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewDoctor {
    pub first_name: Name,
    pub last_name: Name,
    pub specialization_id: SpecializationId,
}

impl NewDoctor {
    #[must_use]
    pub fn new(first_name: Name, last_name: Name, specialization_id: SpecializationId) -> Self {
        Self {
            first_name,
            last_name,
            specialization_id,
        }
    }
}

/// Full replacement of the editable doctor fields.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateDoctor {
    pub first_name: Name,
    pub last_name: Name,
    pub specialization_id: SpecializationId,
}

impl UpdateDoctor {
    #[must_use]
    pub fn new(first_name: Name, last_name: Name, specialization_id: SpecializationId) -> Self {
        Self {
            first_name,
            last_name,
            specialization_id,
        }
    }
}

/// Orderings available for the doctors list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DoctorSortKey {
    FirstName,
    #[default]
    LastName,
    Specialization,
}

impl SortKey for DoctorSortKey {
    const ALLOWED: &'static [(&'static str, Self)] = &[
        ("firstname", Self::FirstName),
        ("lastname", Self::LastName),
        ("specialization", Self::Specialization),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_keys_resolve() {
        assert_eq!(DoctorSortKey::parse("FirstName"), DoctorSortKey::FirstName);
        assert_eq!(DoctorSortKey::parse("SPECIALIZATION"), DoctorSortKey::Specialization);
        assert_eq!(DoctorSortKey::parse("dateofbirth"), DoctorSortKey::LastName);
        assert_eq!(DoctorSortKey::parse(""), DoctorSortKey::LastName);
    }

    #[test]
    fn serialized_doctor_hides_version() {
        let doctor = Doctor {
            id: DoctorId::new(3).unwrap(),
            first_name: Name::new("Ann").unwrap(),
            last_name: Name::new("Lee").unwrap(),
            specialization_id: SpecializationId::new(1).unwrap(),
            version: RowVersion::new(4),
        };
        let value = serde_json::to_value(&doctor).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 3,
                "firstName": "Ann",
                "lastName": "Lee",
                "specializationId": 1
            })
        );
    }
}
