//! Shared types for the MediQ triage service.
//!
//! Wire contract between mediqd and mediqctl, plus the client error enum.

pub mod api;
pub mod error;

pub use api::{
    ApiError, ChatReply, ChatRequest, DepartmentMapping, DepartmentsResponse, HealthResponse,
};
pub use error::MediqError;

/// Crate version, reported by the health endpoint and the CLI banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
