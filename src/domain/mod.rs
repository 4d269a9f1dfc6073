//! Domain entities exposed by the clinic service layer.

pub mod doctor;
pub mod patient;
pub mod specialization;
pub mod types;
