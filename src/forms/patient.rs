use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::domain::patient::{NewPatient, UpdatePatient};
use crate::domain::types::{DoctorId, Name};
use crate::forms::{FormError, id_field, name_field};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /api/patients` and `PUT /api/patients/{id}`.
pub struct PatientForm {
    pub id: Option<i32>,
    #[validate(
        required(message = "first name is required"),
        length(min = 1, max = 100, message = "first name must be 1 to 100 characters")
    )]
    pub first_name: Option<String>,
    #[validate(
        required(message = "last name is required"),
        length(min = 1, max = 100, message = "last name must be 1 to 100 characters")
    )]
    pub last_name: Option<String>,
    #[validate(required(message = "date of birth is required"))]
    pub date_of_birth: Option<NaiveDate>,
    #[validate(
        required(message = "doctor id is required"),
        range(min = 1, message = "doctor id must be positive")
    )]
    pub doctor_id: Option<i32>,
}

/// Validated patient fields.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientPayload {
    pub first_name: Name,
    pub last_name: Name,
    pub date_of_birth: NaiveDate,
    pub doctor_id: DoctorId,
}

impl TryFrom<PatientForm> for PatientPayload {
    type Error = FormError;

    fn try_from(form: PatientForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let date_of_birth = form.date_of_birth.ok_or(FormError::InvalidField {
            field: "dateOfBirth",
            message: "date of birth is required".to_string(),
        })?;
        if date_of_birth > Utc::now().date_naive() {
            return Err(FormError::InvalidField {
                field: "dateOfBirth",
                message: "date of birth cannot be in the future".to_string(),
            });
        }

        Ok(Self {
            first_name: name_field("firstName", form.first_name)?,
            last_name: name_field("lastName", form.last_name)?,
            date_of_birth,
            doctor_id: id_field("doctorId", form.doctor_id)?,
        })
    }
}

impl PatientPayload {
    pub fn into_new(self) -> NewPatient {
        NewPatient::new(self.first_name, self.last_name, self.date_of_birth, self.doctor_id)
    }

    pub fn into_update(self) -> UpdatePatient {
        UpdatePatient::new(self.first_name, self.last_name, self.date_of_birth, self.doctor_id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use super::*;

    fn form() -> PatientForm {
        PatientForm {
            id: None,
            first_name: Some("Tom".into()),
            last_name: Some("Hill".into()),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 2, 14),
            doctor_id: Some(2),
        }
    }

    #[test]
    fn valid_form_converts() {
        let payload = PatientPayload::try_from(form()).unwrap();
        assert_eq!(payload.last_name.as_str(), "Hill");
        assert_eq!(payload.doctor_id.get(), 2);
    }

    #[test]
    fn missing_date_of_birth_is_reported() {
        let err = PatientPayload::try_from(PatientForm {
            date_of_birth: None,
            ..form()
        })
        .unwrap_err();
        assert!(err.field_errors().contains_key("dateOfBirth"));
    }

    #[test]
    fn future_date_of_birth_is_rejected() {
        let tomorrow = Utc::now().date_naive().checked_add_days(Days::new(1));
        let err = PatientPayload::try_from(PatientForm {
            date_of_birth: tomorrow,
            ..form()
        })
        .unwrap_err();
        assert_eq!(
            err.field_errors().get("dateOfBirth"),
            Some(&vec!["date of birth cannot be in the future".to_string()])
        );
    }

    #[test]
    fn malformed_date_fails_deserialization() {
        let result = serde_json::from_str::<PatientForm>(
            r#"{"firstName": "Tom", "lastName": "Hill",
                "dateOfBirth": "14/02/1985", "doctorId": 2}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn iso_date_deserializes() {
        let form = serde_json::from_str::<PatientForm>(
            r#"{"firstName": "Tom", "lastName": "Hill",
                "dateOfBirth": "1985-02-14", "doctorId": 2}"#,
        )
        .unwrap();
        assert_eq!(form.date_of_birth, NaiveDate::from_ymd_opt(1985, 2, 14));
    }
}
