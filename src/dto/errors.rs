//! Error bodies returned by the API.

use serde::Serialize;

use crate::forms::FieldErrors;

/// Problem description sent with 4xx responses.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProblemDetails {
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
}

impl ProblemDetails {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status,
            detail: None,
            errors: FieldErrors::new(),
        }
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// 400 carrying per-field messages.
    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            title: "One or more validation errors occurred.".to_string(),
            status: 400,
            detail: None,
            errors,
        }
    }
}
