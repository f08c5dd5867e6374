//! Core domain types and error definitions for the Vytal dashboard backend.
//!
//! This crate provides the fundamental types shared across the service:
//!
//! - [`AssistantError`] — Error type for assistant and LLM operations
//! - [`UserContext`], [`Biomarker`], [`Goal`], [`ActionItem`], [`Signals`] —
//!   the health profile snapshot
//! - [`ChatReply`] — an assistant answer with follow-up suggestions
//! - [`demo_profile`] — the built-in demo profile
//!
//! # Example
//!
//! ```rust
//! use vytal_core::{demo_profile, ChatReply};
//!
//! let profile = demo_profile();
//! assert_eq!(profile.name.as_deref(), Some("Ankur"));
//!
//! let reply = ChatReply {
//!     response: "Hello!".to_string(),
//!     suggestions: vec!["Explain my LDL result".to_string()],
//! };
//! assert_eq!(reply.suggestions.len(), 1);
//! ```

mod profile;

pub use profile::{demo_profile, ActionItem, Biomarker, Goal, Signals, UserContext};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while producing an assistant reply.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Upstream LLM API request failed.
    #[error("LLM request failed: {0}")]
    LlmError(String),
}

/// An assistant answer together with follow-up suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// The answer text shown to the user.
    pub response: String,
    /// Follow-up questions the user can tap next.
    pub suggestions: Vec<String>,
}
