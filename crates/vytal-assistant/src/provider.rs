//! Response provider strategy: live OpenAI or canned fallback.

use async_trait::async_trait;
use tracing::error;
use vytal_core::{AssistantError, ChatReply, UserContext};
use vytal_llm::{LlmClient, LlmResponse};

use crate::context::format_context;
use crate::fallback::fallback_reply;
use crate::suggestions::follow_ups;
use crate::topic::Topic;

/// System prompt for the live assistant.
pub const SYSTEM_PROMPT: &str = "You are Vytal, a warm and knowledgeable AI health assistant. Your role is to help users understand their health biomarkers, explain their action plans, and provide motivation and guidance.

Key principles:
1. Be empathetic and supportive, never alarming
2. Explain medical concepts in simple, accessible language
3. Connect recommendations to the user's specific biomarker values
4. Celebrate progress and encourage consistency
5. Always remind users to consult their doctor for medical decisions

User context will be provided including their biomarkers, current goals, and action plan. Use this to personalize your responses.

When explaining biomarkers:
- State their value and what's optimal
- Explain what the biomarker measures
- Connect it to their overall health picture
- Show how their action plan addresses it

Format your responses with:
- **Bold** for emphasis
- Bullet points for lists
- Clear sections with headers
- Emoji sparingly for warmth 😊

Keep responses concise but thorough. Break complex topics into digestible parts.";

/// Produces an assistant reply for a chat message.
///
/// Implementations are chosen once at startup; handlers call through the
/// trait without knowing whether a live model is configured.
#[async_trait]
pub trait ResponseProvider: Send + Sync {
    async fn respond(
        &self,
        message: &str,
        ctx: &UserContext,
    ) -> Result<ChatReply, AssistantError>;
}

/// Provider used when no model integration is configured.
pub struct CannedProvider;

#[async_trait]
impl ResponseProvider for CannedProvider {
    async fn respond(
        &self,
        message: &str,
        ctx: &UserContext,
    ) -> Result<ChatReply, AssistantError> {
        Ok(fallback_reply(message, ctx))
    }
}

/// Provider backed by the OpenAI API.
///
/// Any upstream failure is logged and answered from the canned templates
/// instead; the error never reaches the caller. No retries.
pub struct OpenAiProvider {
    client: LlmClient,
}

impl OpenAiProvider {
    /// Creates a provider for the given model, e.g. "gpt-4o-mini".
    pub fn new(model: &str) -> Self {
        Self {
            client: LlmClient::new(model),
        }
    }
}

#[async_trait]
impl ResponseProvider for OpenAiProvider {
    async fn respond(
        &self,
        message: &str,
        ctx: &UserContext,
    ) -> Result<ChatReply, AssistantError> {
        let context = format_context(ctx);
        let result = self.client.chat(SYSTEM_PROMPT, &context, message).await;
        Ok(reply_or_fallback(result, message, ctx))
    }
}

/// Pairs a successful model answer with the picker's suggestions; degrades
/// to the canned reply on any upstream error.
fn reply_or_fallback(
    result: Result<LlmResponse, AssistantError>,
    message: &str,
    ctx: &UserContext,
) -> ChatReply {
    match result {
        Ok(response) => ChatReply {
            response: response.content,
            suggestions: follow_ups(Topic::classify(message)),
        },
        Err(e) => {
            error!("OpenAI error: {}", e);
            fallback_reply(message, ctx)
        }
    }
}

#[cfg(test)]
mod tests {
    use vytal_core::demo_profile;

    use super::*;

    #[tokio::test]
    async fn canned_provider_matches_the_fallback_responder() {
        let provider = CannedProvider;
        let profile = demo_profile();

        let reply = provider
            .respond("Tell me about my LDL", &profile)
            .await
            .unwrap();
        let expected = fallback_reply("Tell me about my LDL", &profile);

        assert_eq!(reply.response, expected.response);
        assert_eq!(reply.suggestions, expected.suggestions);
    }

    #[tokio::test]
    async fn canned_provider_never_fails() {
        let provider = CannedProvider;
        let reply = provider
            .respond("", &UserContext::default())
            .await
            .unwrap();
        assert!(!reply.response.is_empty());
        assert_eq!(reply.suggestions.len(), 3);
    }

    #[test]
    fn model_answer_is_paired_with_picker_suggestions() {
        let result = Ok(LlmResponse {
            content: "Your LDL of 145 mg/dL is above the optimal range.".to_string(),
            metrics: Default::default(),
        });

        let reply = reply_or_fallback(result, "explain my ldl", &demo_profile());

        assert!(reply.response.starts_with("Your LDL of 145"));
        // The live path uses the picker list, not the canned template's list.
        assert_eq!(reply.suggestions[2], "Show me my APO-B result");
    }

    #[test]
    fn upstream_error_degrades_to_the_canned_reply() {
        let result = Err(AssistantError::LlmError("quota exceeded".to_string()));

        let reply = reply_or_fallback(result, "explain my ldl", &demo_profile());

        assert!(reply.response.contains("**Your LDL: 145 mg/dL**"));
        assert_eq!(reply.suggestions[2], "Show me my full lipid panel");
    }
}
