//! FHIR wire/boundary support for NIC-derived demographics.
//!
//! This crate provides **wire models** and **format/translation helpers** for a small
//! FHIR-aligned `Patient` fragment carrying an NIC identifier, gender and birth date:
//! - YAML rendering and strict parsing
//! - translation between decoded NIC values and the wire struct
//! - consistency checks between the identifier and the demographics it implies
//!
//! FHIR JSON/REST transport is out of scope.

pub mod patient;

// Re-export facades
pub use patient::Patient;

// Re-export public domain-level types
pub use patient::{PatientIdentity, DEFAULT_NIC_SYSTEM};

/// Errors returned by the `fhir` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum FhirError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("translation error: {0}")]
    Translation(String),

    #[error("NIC identifier could not be decoded: {0}")]
    Decode(#[from] nic_core::DecodeError),
}

/// Type alias for Results that can fail with a [`FhirError`].
pub type FhirResult<T> = Result<T, FhirError>;
