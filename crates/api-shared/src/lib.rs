//! # API Shared
//!
//! Shared utilities and definitions for NIC APIs.
//!
//! Contains:
//! - Request/response types (`dto` module), with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and the `nic-run` server binary.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
