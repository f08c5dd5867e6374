//! Data transfer objects for HTTP message serialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use vytal_core::{ChatReply, UserContext};

// === Service Status Types ===

/// Response for the liveness root.
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub service: &'static str,
}

/// Response for the health check endpoint.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
}

// === Chat Types ===

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    pub message: String,
    /// Optional caller-supplied context overriding the demo profile.
    #[serde(default)]
    pub user_context: Option<UserContext>,
}

/// Response body for the chat endpoint.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub suggestions: Vec<String>,
}

impl From<ChatReply> for ChatResponse {
    fn from(reply: ChatReply) -> Self {
        Self {
            response: reply.response,
            suggestions: reply.suggestions,
        }
    }
}

// === Action Log Types ===

/// Completion status of a logged action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Completed,
    Pending,
    Skipped,
}

/// Request body for logging an action.
#[derive(Debug, Deserialize)]
pub struct ActionLogRequest {
    pub action_id: String,
    pub status: ActionStatus,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Acknowledgment echoed back for a logged action.
#[derive(Debug, Serialize)]
pub struct ActionLogResponse {
    pub status: &'static str,
    pub action_id: String,
    pub logged_status: ActionStatus,
    pub timestamp: String,
}

// === Progress Types ===

/// Projected biomarker movement over the current plan.
#[derive(Debug, Serialize, Deserialize)]
pub struct BiomarkerProjection {
    pub current: Number,
    pub projected: Number,
}

/// Progress summary served to the dashboard.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub days_active: u32,
    pub current_streak: u32,
    pub consistency: u32,
    pub actions_completed: u32,
    pub health_score_change: String,
    pub biomarker_projections: BTreeMap<String, BiomarkerProjection>,
}
