//! HTTP plumbing shared by all adapters, and the OpenAI-compatible adapter.
//!
//! Covers: OpenRouter, Cerebras, Groq, NVIDIA NIM: all `POST {base}/chat/completions`
//! with a bearer token and a `{model, messages}` body.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use mytext_core::prompt::ChatMessage;
use mytext_core::registry::{self, ProviderSpec, API_KEY_FIELD};
use mytext_core::{Credentials, Prompt, Provider};

use crate::error::ProviderError;
use crate::traits::ProviderAdapter;

// ─────────────────────────────────────────────
// Shared request plumbing
// ─────────────────────────────────────────────

/// Build a fresh client for one attempt.
///
/// Each attempt gets its own client, so no connection state outlives a call.
pub(crate) fn build_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    let mut builder = reqwest::Client::builder();
    if !timeout.is_zero() {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| ProviderError::Transport(e.to_string()))
}

/// Send a prepared request and decode a 200/201 JSON reply into `R`.
pub(crate) async fn send_json<R: DeserializeOwned>(
    provider: &str,
    request: reqwest::RequestBuilder,
) -> Result<R, ProviderError> {
    let response = request.send().await.map_err(|e| {
        error!(provider, error = %e, "HTTP request failed");
        ProviderError::Transport(e.to_string())
    })?;

    let status = response.status();
    if status != reqwest::StatusCode::OK && status != reqwest::StatusCode::CREATED {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read error body".to_string());
        error!(provider, status = %status, body = %body, "API error");
        return Err(ProviderError::Status {
            status: status.as_u16(),
            body,
        });
    }

    response.json::<R>().await.map_err(|e| {
        error!(provider, error = %e, "Failed to parse provider response");
        ProviderError::Decode(e.to_string())
    })
}

/// Reject replies that decoded fine but carry no text.
pub(crate) fn non_empty(text: Option<String>, path: &str) -> Result<String, ProviderError> {
    match text {
        Some(t) if !t.trim().is_empty() => Ok(t),
        Some(_) => Err(ProviderError::Decode(format!("empty text at `{path}`"))),
        None => Err(ProviderError::Decode(format!("missing `{path}`"))),
    }
}

/// Join an API base and a path without doubling the slash.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

// ─────────────────────────────────────────────
// OpenAI-compatible wire format
// ─────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

// ─────────────────────────────────────────────
// OpenAiCompatProvider
// ─────────────────────────────────────────────

/// Adapter for any provider speaking the OpenAI chat completions format.
pub struct OpenAiCompatProvider {
    /// API base URL (e.g. `"https://api.groq.com/openai/v1"`).
    api_base: String,
    /// Extra headers sent with each request (e.g. OpenRouter's `X-Title`).
    extra_headers: &'static [(&'static str, &'static str)],
    spec: &'static ProviderSpec,
}

impl std::fmt::Debug for OpenAiCompatProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatProvider")
            .field("api_base", &self.api_base)
            .field("provider", &self.spec.display_name)
            .finish()
    }
}

impl OpenAiCompatProvider {
    /// Create an adapter for `provider` talking to `api_base`.
    pub fn new(provider: Provider, api_base: impl Into<String>) -> Self {
        let extra_headers: &'static [(&'static str, &'static str)] = match provider {
            Provider::OpenRouter => &[("X-Title", "MyText")],
            _ => &[],
        };
        Self {
            api_base: api_base.into(),
            extra_headers,
            spec: registry::spec(provider),
        }
    }

    /// Build the full chat completions URL.
    fn completions_url(&self) -> String {
        join_url(&self.api_base, "chat/completions")
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiCompatProvider {
    async fn complete(
        &self,
        prompt: &Prompt,
        credentials: &Credentials,
        model: &str,
        timeout: Duration,
    ) -> Result<String, ProviderError> {
        debug!(provider = self.spec.display_name, model, "Calling LLM");

        let body = ChatCompletionRequest {
            model,
            messages: prompt.to_chat_messages(),
        };

        let client = build_client(timeout)?;
        let mut request = client
            .post(self.completions_url())
            .bearer_auth(credentials.field(API_KEY_FIELD))
            .json(&body);
        for (name, value) in self.extra_headers {
            request = request.header(*name, *value);
        }

        let reply: ChatCompletionResponse = send_json(self.spec.display_name, request).await?;
        let text = reply
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content);
        non_empty(text, "choices[0].message.content")
    }

    fn display_name(&self) -> &str {
        self.spec.display_name
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn prompt() -> Prompt {
        Prompt::render("Rewrite.", "Hello")
    }

    fn chat_reply(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-test",
            "choices": [{
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        })
    }

    // ── Unit tests ──

    #[test]
    fn test_completions_url_trailing_slash() {
        let provider = OpenAiCompatProvider::new(Provider::Groq, "https://api.groq.com/openai/v1/");
        assert_eq!(
            provider.completions_url(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn test_display_name() {
        let provider = OpenAiCompatProvider::new(Provider::Nvidia, "http://x");
        assert_eq!(provider.display_name(), "NVIDIA NIM");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("ok".into()), "p").unwrap(), "ok");
        assert!(matches!(non_empty(Some("  ".into()), "p"), Err(ProviderError::Decode(_))));
        assert!(matches!(non_empty(None, "p"), Err(ProviderError::Decode(_))));
    }

    // ── Integration tests with mock server ──

    #[tokio::test]
    async fn test_complete_success_sends_model_and_bearer() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer gsk-123"))
            .and(body_partial_json(serde_json::json!({
                "model": "llama-3.1-8b-instant",
                "messages": [{ "role": "user", "content": "Rewrite.\n\nUser text:\nHello" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(chat_reply("Hi there")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = OpenAiCompatProvider::new(Provider::Groq, mock_server.uri());
        let text = provider
            .complete(&prompt(), &Credentials::api_key("gsk-123"), "llama-3.1-8b-instant", TIMEOUT)
            .await
            .unwrap();

        assert_eq!(text, "Hi there");
    }

    #[tokio::test]
    async fn test_openrouter_sends_title_header() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("X-Title", "MyText"))
            .respond_with(ResponseTemplate::new(201).set_body_json(chat_reply("ok")))
            .mount(&mock_server)
            .await;

        let provider = OpenAiCompatProvider::new(Provider::OpenRouter, mock_server.uri());
        let text = provider
            .complete(&prompt(), &Credentials::api_key("sk-or"), "m", TIMEOUT)
            .await
            .unwrap();

        // 201 counts as success too
        assert_eq!(text, "ok");
    }

    #[tokio::test]
    async fn test_complete_api_error_carries_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&mock_server)
            .await;

        let provider = OpenAiCompatProvider::new(Provider::Cerebras, mock_server.uri());
        let err = provider
            .complete(&prompt(), &Credentials::api_key("k"), "m", TIMEOUT)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ProviderError::Status {
                status: 429,
                body: "rate limited".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_complete_empty_choices_is_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&mock_server)
            .await;

        let provider = OpenAiCompatProvider::new(Provider::Nvidia, mock_server.uri());
        let err = provider
            .complete(&prompt(), &Credentials::api_key("k"), "m", TIMEOUT)
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Decode(_)));
    }

    #[tokio::test]
    async fn test_complete_non_json_is_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&mock_server)
            .await;

        let provider = OpenAiCompatProvider::new(Provider::Groq, mock_server.uri());
        let err = provider
            .complete(&prompt(), &Credentials::api_key("k"), "m", TIMEOUT)
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Decode(_)));
    }

    #[tokio::test]
    async fn test_complete_network_error() {
        // Point to a port that's not listening
        let provider = OpenAiCompatProvider::new(Provider::Groq, "http://127.0.0.1:1");
        let err = provider
            .complete(&prompt(), &Credentials::api_key("k"), "m", TIMEOUT)
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::Transport(_)));
        assert!(err.to_string().starts_with("Request failed"));
    }
}
