//! Request bodies accepted by the write endpoints.
//!
//! Forms are deserialized from JSON, checked with `validator`, and converted
//! into typed payloads before any storage access happens.

use std::collections::BTreeMap;

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::{Name, TypeConstraintError};

pub mod doctor;
pub mod patient;

/// Field name (camelCase, as sent on the wire) to its error messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid {field}: {message}")]
    InvalidField { field: &'static str, message: String },
}

impl FormError {
    fn invalid(field: &'static str, err: TypeConstraintError) -> Self {
        FormError::InvalidField {
            field,
            message: err.to_string(),
        }
    }

    fn missing(field: &'static str) -> Self {
        FormError::InvalidField {
            field,
            message: format!("{field} is required"),
        }
    }

    /// Flattens the error into per-field messages keyed by wire names.
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        match self {
            FormError::Validation(validation) => {
                for (field, field_errors) in validation.field_errors() {
                    let messages = errors.entry(to_camel_case(&field)).or_default();
                    for error in field_errors.iter() {
                        let message = match &error.message {
                            Some(message) => message.to_string(),
                            None => error.code.to_string(),
                        };
                        messages.push(message);
                    }
                }
            }
            FormError::InvalidField { field, message } => {
                errors.insert((*field).to_string(), vec![message.clone()]);
            }
        }
        errors
    }
}

/// `first_name` -> `firstName`.
fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

fn name_field(field: &'static str, value: Option<String>) -> Result<Name, FormError> {
    let value = value.ok_or_else(|| FormError::missing(field))?;
    Name::new(value).map_err(|e| FormError::invalid(field, e))
}

fn id_field<T>(field: &'static str, value: Option<i32>) -> Result<T, FormError>
where
    T: TryFrom<i32, Error = TypeConstraintError>,
{
    let value = value.ok_or_else(|| FormError::missing(field))?;
    T::try_from(value).map_err(|e| FormError::invalid(field, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_conversion() {
        assert_eq!(to_camel_case("first_name"), "firstName");
        assert_eq!(to_camel_case("date_of_birth"), "dateOfBirth");
        assert_eq!(to_camel_case("id"), "id");
    }

    #[test]
    fn invalid_field_is_reported_under_its_name() {
        let err = FormError::invalid("lastName", TypeConstraintError::EmptyString);
        let errors = err.field_errors();
        assert_eq!(
            errors.get("lastName"),
            Some(&vec!["value cannot be empty".to_string()])
        );
    }
}
