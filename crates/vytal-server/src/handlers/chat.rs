//! Chat message handler.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use crate::dto::{ChatMessageRequest, ChatResponse};
use crate::error::AppError;
use crate::ServerState;

/// Sends a message to the health assistant and returns its reply.
///
/// The caller may supply a partial `user_context`; otherwise the demo
/// profile from the server state is used.
pub async fn message(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<ChatMessageRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    info!(
        "Chat request: {}...",
        req.message.get(..50).unwrap_or(&req.message)
    );

    let ctx = req.user_context.as_ref().unwrap_or(&state.profile);
    let reply = state
        .provider
        .respond(&req.message, ctx)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(reply.into()))
}
