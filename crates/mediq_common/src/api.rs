//! HTTP API types for mediqd communication.

use serde::{Deserialize, Serialize};

/// Request body for POST /v1/chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Stable session identifier supplied by the caller. Without it the
    /// daemon falls back to its per-instance session token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Successful reply from POST /v1/chat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// Formatted display string from the triage engine
    pub response: String,
    /// Local time, "YYYY-MM-DD HH:MM:SS"
    pub timestamp: String,
}

/// Error body for 4xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// Response from GET /v1/health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub active_sessions: usize,
    pub symptom_categories: usize,
    pub departments_known: usize,
}

/// One symptom-category entry in the department directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentMapping {
    pub category: String,
    pub departments: Vec<String>,
}

/// Response from GET /v1/departments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentsResponse {
    pub departments: Vec<DepartmentMapping>,
}
