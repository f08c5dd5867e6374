//! User profile handler.

use std::sync::Arc;

use axum::{extract::State, Json};
use vytal_core::UserContext;

use crate::ServerState;

/// Returns the user's health profile.
pub async fn get(State(state): State<Arc<ServerState>>) -> Json<UserContext> {
    Json(state.profile.clone())
}
