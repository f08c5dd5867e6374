//! Action logging handler.

use axum::extract::Path;
use axum::Json;
use chrono::Utc;
use tracing::info;

use crate::dto::{ActionLogRequest, ActionLogResponse};

/// Acknowledges a logged action.
///
/// Nothing is stored; the acknowledgment is the whole effect. The echoed
/// `action_id` comes from the path, as in the dashboard frontend contract.
pub async fn log(
    Path(action_id): Path<String>,
    Json(entry): Json<ActionLogRequest>,
) -> Json<ActionLogResponse> {
    info!(
        "Action {} logged as {:?} (value: {:?}, notes: {:?})",
        entry.action_id, entry.status, entry.value, entry.notes
    );

    Json(ActionLogResponse {
        status: "success",
        action_id,
        logged_status: entry.status,
        timestamp: Utc::now().to_rfc3339(),
    })
}
