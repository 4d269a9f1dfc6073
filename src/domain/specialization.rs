use serde::Serialize;

use crate::domain::types::{Name, SpecializationId};

/// Medical specialization a doctor belongs to. Read-only for the API.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Specialization {
    pub id: SpecializationId,
    pub name: Name,
}
