//! DTO modules that bridge services with the JSON API.

pub mod doctor;
pub mod errors;
pub mod patient;
