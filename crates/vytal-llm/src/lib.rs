//! OpenAI chat-completions client for the Vytal assistant.
//!
//! This crate wraps `async-openai` for the single non-streaming call the
//! assistant needs:
//!
//! - [`LlmClient`] — sends a system prompt, a context block, and the user
//!   message; returns the model's answer with token/latency metrics
//! - [`LlmResponse`] and [`LlmMetrics`] — call results
//!
//! The API key is read from `OPENAI_API_KEY` by the SDK's default
//! configuration; callers decide whether a client should exist at all.
//!
//! # Example
//!
//! ```rust,ignore
//! use vytal_llm::LlmClient;
//!
//! let client = LlmClient::new("gpt-4o-mini");
//! let response = client.chat("You are helpful.", "User Profile: ...", "Hi").await?;
//! println!("{}", response.content);
//! ```

mod client;

pub use client::{LlmClient, LlmMetrics, LlmResponse};
