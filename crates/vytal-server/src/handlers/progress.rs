//! Progress summary handler.

use axum::Json;

use crate::dto::ProgressSummary;

/// Returns the demo progress summary.
pub async fn summary() -> Json<ProgressSummary> {
    Json(demo_summary())
}

/// Fixed summary matching the demo profile's plan.
fn demo_summary() -> ProgressSummary {
    serde_json::from_value(serde_json::json!({
        "days_active": 7,
        "current_streak": 5,
        "consistency": 75,
        "actions_completed": 23,
        "health_score_change": "+2",
        "biomarker_projections": {
            "ldl": {"current": 145, "projected": 115},
            "hscrp": {"current": 3.2, "projected": 1.5},
            "triglycerides": {"current": 180, "projected": 130},
        },
    }))
    .expect("demo summary literal is a valid ProgressSummary")
}
