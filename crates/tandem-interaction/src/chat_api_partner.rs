//! ChatApiPartner - Direct REST implementation of the conversation partner.
//!
//! This partner calls the OpenAI Chat Completions API directly with the
//! full turn history as conversational context.
//! Configuration priority: ~/.config/tandem/secret.json > environment variables

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

use tandem_core::config::SecretConfig;
use tandem_core::conversation::{Role, Turn};
use tandem_core::error::{Result, TandemError};
use tandem_core::partner::ConversationPartner;
use tandem_infrastructure::FileSecretService;

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const BASE_URL: &str = "https://api.openai.com/v1/chat/completions";
/// Fixed sampling temperature for the role-play partner.
const TEMPERATURE: f32 = 0.7;
/// Output-length cap per reply.
const MAX_TOKENS: u32 = 400;

/// Conversation partner backed by the OpenAI HTTP API.
#[derive(Clone)]
pub struct ChatApiPartner {
    client: Client,
    api_key: String,
    model: String,
}

impl ChatApiPartner {
    /// Creates a new partner with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Builds a partner from already-loaded secret configuration.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the `openai` section is absent - without chat
    /// credentials the session cannot proceed.
    pub fn from_secrets(secrets: &SecretConfig) -> Result<Self> {
        let openai = secrets.openai.as_ref().ok_or_else(|| {
            TandemError::config("No OpenAI credentials configured (secret.json [openai] section)")
        })?;
        let model = openai
            .model_name
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.into());
        Ok(Self::new(openai.api_key.clone(), model))
    }

    /// Loads configuration from ~/.config/tandem/secret.json or environment
    /// variables.
    ///
    /// Priority:
    /// 1. ~/.config/tandem/secret.json
    /// 2. Environment variables (OPENAI_API_KEY, OPENAI_MODEL_NAME)
    ///
    /// Model name defaults to `gpt-4o-mini` if not specified.
    pub fn try_from_env() -> Result<Self> {
        if let Ok(service) = FileSecretService::new(None) {
            if let Ok(secrets) = service.load() {
                if secrets.openai.is_some() {
                    return Self::from_secrets(&secrets);
                }
            }
        }

        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            TandemError::config(
                "OPENAI_API_KEY not found in ~/.config/tandem/secret.json or environment variables",
            )
        })?;

        let model = env::var("OPENAI_MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL.into());
        Ok(Self::new(api_key, model))
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    async fn send_request(&self, body: &ChatCompletionRequest) -> Result<String> {
        debug!(model = %body.model, turns = body.messages.len(), "sending chat completion request");
        let response = self
            .client
            .post(BASE_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| TandemError::provider(format!("Chat API request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read chat API error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| TandemError::provider(format!("Failed to parse chat API response: {err}")))?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl ConversationPartner for ChatApiPartner {
    async fn reply(&self, turns: &[Turn]) -> Result<Turn> {
        let first = turns.first().ok_or_else(|| {
            TandemError::invalid_input("Turn history must not be empty")
        })?;
        if first.role != Role::System {
            return Err(TandemError::invalid_input(
                "Turn history must begin with the system persona turn",
            ));
        }

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: turns.iter().map(WireMessage::from).collect(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let content = self.send_request(&request).await?;
        Ok(Turn::assistant(content))
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct WireMessage {
    role: Role,
    content: String,
}

impl From<&Turn> for WireMessage {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.role,
            content: turn.content.clone(),
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
    #[allow(dead_code)]
    r#type: Option<String>,
    #[allow(dead_code)]
    code: Option<String>,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| TandemError::provider("Chat API returned no content in the response"))
}

fn map_http_error(status: StatusCode, body: String) -> TandemError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or(body);

    TandemError::provider(format!("Chat API returned {}: {}", status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini".into(),
            messages: vec![
                WireMessage::from(&Turn::system("persona")),
                WireMessage::from(&Turn::user("Hello")),
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "Hello");
        assert_eq!(json["max_tokens"], 400);
    }

    #[test]
    fn test_error_body_decoded() {
        let body = r#"{"error":{"message":"Rate limit reached","type":"rate_limit","code":null}}"#;
        let err = map_http_error(StatusCode::TOO_MANY_REQUESTS, body.to_string());
        assert!(err.to_string().contains("Rate limit reached"));
        assert!(err.to_string().contains("429"));
    }

    #[test]
    fn test_opaque_error_body_passed_through() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>".into());
        assert!(err.to_string().contains("bad gateway"));
    }

    #[test]
    fn test_extract_text_requires_content() {
        let empty = ChatCompletionResponse { choices: vec![] };
        assert!(extract_text_response(empty).is_err());

        let with_content = ChatCompletionResponse {
            choices: vec![Choice {
                message: ResponseMessage {
                    content: Some("Good day.".into()),
                },
            }],
        };
        assert_eq!(extract_text_response(with_content).unwrap(), "Good day.");
    }

    #[tokio::test]
    async fn test_reply_rejects_history_without_seed() {
        let partner = ChatApiPartner::new("key", DEFAULT_MODEL);
        assert!(partner.reply(&[]).await.is_err());
        assert!(partner.reply(&[Turn::user("hi")]).await.is_err());
    }
}
