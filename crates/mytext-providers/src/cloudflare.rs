//! Cloudflare Workers AI adapter.
//!
//! Account id and model live in the path, the key in a bearer header:
//! `{base}/client/v4/accounts/{account_id}/ai/run/{model}`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use mytext_core::prompt::ChatMessage;
use mytext_core::registry::{ACCOUNT_ID_FIELD, API_KEY_FIELD};
use mytext_core::{Credentials, Prompt};

use crate::error::ProviderError;
use crate::http_provider::{build_client, join_url, non_empty, send_json};
use crate::traits::ProviderAdapter;

#[derive(Debug, Serialize)]
struct RunRequest {
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct RunResponse {
    #[serde(default)]
    result: Option<RunOutput>,
}

#[derive(Debug, Deserialize)]
struct RunOutput {
    #[serde(default)]
    response: Option<String>,
}

/// Adapter for Workers AI `ai/run`.
#[derive(Debug)]
pub struct CloudflareProvider {
    api_base: String,
}

impl CloudflareProvider {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    fn run_url(&self, account_id: &str, model: &str) -> String {
        join_url(
            &self.api_base,
            &format!("client/v4/accounts/{account_id}/ai/run/{model}"),
        )
    }
}

#[async_trait]
impl ProviderAdapter for CloudflareProvider {
    async fn complete(
        &self,
        prompt: &Prompt,
        credentials: &Credentials,
        model: &str,
        timeout: Duration,
    ) -> Result<String, ProviderError> {
        debug!(provider = self.display_name(), model, "Calling LLM");

        let body = RunRequest {
            messages: prompt.to_chat_messages(),
        };

        let client = build_client(timeout)?;
        let request = client
            .post(self.run_url(credentials.field(ACCOUNT_ID_FIELD), model))
            .bearer_auth(credentials.field(API_KEY_FIELD))
            .json(&body);

        let reply: RunResponse = send_json(self.display_name(), request).await?;
        non_empty(reply.result.and_then(|r| r.response), "result.response")
    }

    fn display_name(&self) -> &str {
        "Cloudflare"
    }
}
