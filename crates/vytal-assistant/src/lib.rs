//! Assistant logic for the Vytal dashboard backend.
//!
//! Everything between the HTTP layer and the model lives here:
//!
//! - [`Topic`] — closed set of message topics with keyword classification
//! - [`follow_ups`] — fixed follow-up suggestion lists per topic
//! - [`format_context`] — deterministic plain-text rendering of a profile
//! - [`fallback_reply`] — canned templated answers used without a model
//! - [`ResponseProvider`] — strategy trait with [`OpenAiProvider`] (live,
//!   degrades to canned replies on any upstream failure) and
//!   [`CannedProvider`] (no model configured)

mod context;
mod fallback;
mod provider;
mod suggestions;
mod topic;

pub use context::format_context;
pub use fallback::fallback_reply;
pub use provider::{CannedProvider, OpenAiProvider, ResponseProvider, SYSTEM_PROMPT};
pub use suggestions::follow_ups;
pub use topic::Topic;
