use serde::Deserialize;
use validator::Validate;

use crate::domain::doctor::{NewDoctor, UpdateDoctor};
use crate::domain::types::{Name, SpecializationId};
use crate::forms::{FormError, id_field, name_field};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Body of `POST /api/doctors` and `PUT /api/doctors/{id}`.
pub struct DoctorForm {
    /// Must equal the path id on update; ignored on create.
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
    #[validate(
        required(message = "specialization id is required"),
        range(min = 1, message = "specialization id must be positive")
    )]
    pub specialization_id: Option<i32>,
}

/// Validated doctor fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DoctorPayload {
    pub first_name: Name,
    pub last_name: Name,
    pub specialization_id: SpecializationId,
}

impl TryFrom<DoctorForm> for DoctorPayload {
    type Error = FormError;

    fn try_from(form: DoctorForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            first_name: name_field("firstName", form.first_name)?,
            last_name: name_field("lastName", form.last_name)?,
            specialization_id: id_field("specializationId", form.specialization_id)?,
        })
    }
}

impl DoctorPayload {
    pub fn into_new(self) -> NewDoctor {
        NewDoctor::new(self.first_name, self.last_name, self.specialization_id)
    }

    pub fn into_update(self) -> UpdateDoctor {
        UpdateDoctor::new(self.first_name, self.last_name, self.specialization_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> DoctorForm {
        DoctorForm {
            id: None,
            first_name: Some("Ann".into()),
            last_name: Some("Lee".into()),
            specialization_id: Some(1),
        }
    }

    #[test]
    fn valid_form_converts() {
        let payload = DoctorPayload::try_from(form()).unwrap();
        assert_eq!(payload.first_name.as_str(), "Ann");
        assert_eq!(payload.specialization_id.get(), 1);
    }

    #[test]
    fn missing_fields_are_reported_per_field() {
        let err = DoctorPayload::try_from(DoctorForm::default()).unwrap_err();
        let errors = err.field_errors();
        assert!(errors.contains_key("firstName"));
        assert!(errors.contains_key("lastName"));
        assert!(errors.contains_key("specializationId"));
        assert!(!errors.contains_key("id"));
    }

    #[test]
    fn non_positive_specialization_is_rejected() {
        let err = DoctorPayload::try_from(DoctorForm {
            specialization_id: Some(0),
            ..form()
        })
        .unwrap_err();
        assert_eq!(
            err.field_errors().get("specializationId"),
            Some(&vec!["specialization id must be positive".to_string()])
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = DoctorPayload::try_from(DoctorForm {
            last_name: Some("   ".into()),
            ..form()
        })
        .unwrap_err();
        assert!(err.field_errors().contains_key("lastName"));
    }

    #[test]
    fn deserializes_camel_case_body() {
        let form: DoctorForm = serde_json::from_str(
            r#"{"id": 4, "firstName": "Ann", "lastName": "Lee", "specializationId": 1}"#,
        )
        .unwrap();
        assert_eq!(form.id, Some(4));
        assert_eq!(form.specialization_id, Some(1));
    }
}
