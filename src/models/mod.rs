//! Database models shared across the clinic repository.

pub mod config;
pub mod doctor;
pub mod patient;
pub mod specialization;
