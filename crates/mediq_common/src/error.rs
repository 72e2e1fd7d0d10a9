//! Error types for the MediQ CLI client.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediqError {
    #[error("Cannot reach mediqd at {0}. Is the daemon running?")]
    DaemonUnavailable(String),

    #[error("Daemon returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
