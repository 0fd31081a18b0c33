//! Chat-completion client.
//!
//! A thin proxy to a hosted chat-completion endpoint. The system prompt,
//! model, temperature, and token limit are fixed configuration; callers only
//! supply the conversation and (optionally) the user profile, which is
//! folded into the prompt. One request per user-initiated send, no retry,
//! no extra timeout beyond the transport default.
//!
//! The UI-facing contract never surfaces a chat failure: callers use
//! [`ChatClient::reply_or_fallback`], which substitutes [`FALLBACK_REPLY`]
//! for any error.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::ChatError;
use crate::record::Profile;
use crate::storage::ChatConfig;

/// Environment variable holding the endpoint credential.
pub const API_KEY_ENV: &str = "CALMAFIT_API_KEY";

/// Fixed apology appended to the conversation when the endpoint fails.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't respond right now. I'm still here with you \
-- try again in a moment, or start a guided breathing practice while you wait.";

const SYSTEM_PROMPT: &str = "You are the emotional-support AI of CalmaFit, a mental well-being app.

IMPORTANT: You are NOT a therapist. Your role is to:
- Listen with empathy and validate feelings
- Suggest practices from the app (breathing, trails, missions)
- Offer immediate emotional support
- Always remind the user that serious cases need a professional

Guidelines:
1. Be empathetic, welcoming, and positive
2. Use simple, accessible language
3. Validate the user's feelings
4. Suggest specific app practices when appropriate:
   - Guided breathing (for acute anxiety)
   - 7-day trails (for recurring anxiety)
   - Sleep trail (for sleep problems)
   - Movement missions (for energy and mood)
5. Keep answers concise (2-4 sentences)
6. If you detect a severe crisis, point to CVV (188) or a professional
7. Never give diagnoses or medical prescriptions

Tone: friendly, welcoming, hopeful, like a friend who cares.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Client for the hosted chat-completion endpoint.
pub struct ChatClient {
    client: reqwest::Client,
    config: ChatConfig,
    api_key: Option<String>,
}

impl ChatClient {
    /// Client with the credential taken from [`API_KEY_ENV`].
    pub fn new(config: ChatConfig) -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok();
        Self::with_api_key(config, api_key)
    }

    /// Client with an explicit credential (tests, embedding).
    pub fn with_api_key(config: ChatConfig, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            api_key,
        }
    }

    /// The system prompt, with the user's profile context folded in.
    fn system_prompt(profile: Option<&Profile>) -> String {
        match profile {
            Some(p) => format!(
                "{SYSTEM_PROMPT}\n\nUser information:\n- Name: {}\n- Main concern: {}\n- Goal: {}",
                p.name,
                p.main_concern.as_str(),
                p.goal
            ),
            None => SYSTEM_PROMPT.to_string(),
        }
    }

    /// Send the conversation and return the assistant's reply.
    ///
    /// # Errors
    /// Returns an error when the credential is missing, the transport
    /// fails, the endpoint answers with a failure status, or the response
    /// carries no message.
    pub async fn send(
        &self,
        messages: &[ChatMessage],
        profile: Option<&Profile>,
    ) -> Result<String, ChatError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ChatError::MissingCredential {
                env_var: API_KEY_ENV,
            })?;

        let mut wire_messages = vec![json!({
            "role": "system",
            "content": Self::system_prompt(profile),
        })];
        for message in messages {
            wire_messages.push(serde_json::to_value(message).unwrap_or_default());
        }

        let body = json!({
            "model": self.config.model,
            "messages": wire_messages,
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        });

        let resp = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ChatError::Endpoint {
                status: status.as_u16(),
                message,
            });
        }

        let completion: CompletionResponse = resp.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(ChatError::EmptyResponse)
    }

    /// Send the conversation; on any failure return [`FALLBACK_REPLY`]
    /// instead of an error. This is the UI-facing entry point.
    pub async fn reply_or_fallback(
        &self,
        messages: &[ChatMessage],
        profile: Option<&Profile>,
    ) -> String {
        match self.send(messages, profile).await {
            Ok(reply) => reply,
            Err(_) => FALLBACK_REPLY.to_string(),
        }
    }
}
