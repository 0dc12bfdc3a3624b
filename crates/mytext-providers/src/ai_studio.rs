//! Google AI Studio adapter (Gemini `generateContent`).
//!
//! The key travels in the query string, the model in the path:
//! `{base}/v1beta/models/{model}:generateContent?key={api_key}`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use mytext_core::prompt::StudioContent;
use mytext_core::registry::API_KEY_FIELD;
use mytext_core::{Credentials, Prompt};

use crate::error::ProviderError;
use crate::http_provider::{build_client, join_url, non_empty, send_json};
use crate::traits::ProviderAdapter;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<StudioContent>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

/// Adapter for the AI Studio `generateContent` endpoint.
#[derive(Debug)]
pub struct AiStudioProvider {
    api_base: String,
}

impl AiStudioProvider {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    fn generate_url(&self, model: &str) -> String {
        join_url(
            &self.api_base,
            &format!("v1beta/models/{model}:generateContent"),
        )
    }
}

#[async_trait]
impl ProviderAdapter for AiStudioProvider {
    async fn complete(
        &self,
        prompt: &Prompt,
        credentials: &Credentials,
        model: &str,
        timeout: Duration,
    ) -> Result<String, ProviderError> {
        debug!(provider = self.display_name(), model, "Calling LLM");

        let body = GenerateContentRequest {
            contents: prompt.to_studio_contents(),
        };

        let client = build_client(timeout)?;
        let request = client
            .post(self.generate_url(model))
            .query(&[("key", credentials.field(API_KEY_FIELD))])
            .json(&body);

        let reply: GenerateContentResponse = send_json(self.display_name(), request).await?;
        let text = reply
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text);
        non_empty(text, "candidates[0].content.parts[0].text")
    }

    fn display_name(&self) -> &str {
        "AI Studio"
    }
}
