//! The request facade: validate → instruct → render → retry → result.
//!
//! [`MyText::run`] never fails: every outcome, including bad input, comes back
//! as a [`RunResult`].

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use mytext_core::config::{Config, ProvidersConfig};
use mytext_core::instructions::build_instruction;
use mytext_core::validation::{parse_request, validate_request};
use mytext_core::{MyTextError, Prompt, Provider, RunRequest, RunResult};

use crate::registry::configured_adapter;
use crate::retry::{call_with_fallback, Completion, Exhausted, RetryPolicy};
use crate::traits::ProviderAdapter;

impl From<Completion> for RunResult {
    fn from(c: Completion) -> Self {
        RunResult::success(c.text, c.model)
    }
}

impl From<Exhausted> for RunResult {
    fn from(e: Exhausted) -> Self {
        RunResult::failure(e.error, e.model)
    }
}

/// Text-rewriting client over the supported providers.
///
/// Holds no per-call state; one instance can serve any number of sequential
/// or concurrent calls.
pub struct MyText {
    policy: RetryPolicy,
    providers: ProvidersConfig,
    adapters: HashMap<Provider, Arc<dyn ProviderAdapter>>,
}

impl std::fmt::Debug for MyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MyText")
            .field("policy", &self.policy)
            .field("providers", &self.providers)
            .finish_non_exhaustive()
    }
}

impl Default for MyText {
    fn default() -> Self {
        Self::new()
    }
}

impl MyText {
    /// Client with registry defaults and the default retry policy.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Client with retry policy, API bases and default models from `config`.
    pub fn from_config(config: &Config) -> Self {
        let adapters = Provider::ALL
            .into_iter()
            .map(|p| (p, configured_adapter(p, &config.providers)))
            .collect();
        Self {
            policy: RetryPolicy::from(&config.retry),
            providers: config.providers.clone(),
            adapters,
        }
    }

    /// Replace the adapter serving `provider`.
    pub fn with_adapter(mut self, provider: Provider, adapter: Arc<dyn ProviderAdapter>) -> Self {
        self.adapters.insert(provider, adapter);
        self
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Main and fallback models for a request: request override, then
    /// configuration, then registry default.
    pub fn models_for(&self, request: &RunRequest) -> (String, String) {
        let main = request
            .main_model
            .clone()
            .unwrap_or_else(|| self.providers.main_model(request.provider).to_string());
        let fallback = request
            .fallback_model
            .clone()
            .unwrap_or_else(|| self.providers.fallback_model(request.provider).to_string());
        (main, fallback)
    }

    /// Run one request. Always returns a result.
    pub async fn run(&self, request: &RunRequest) -> RunResult {
        self.try_run(request).await.into()
    }

    /// Run a request given as loosely typed JSON (see
    /// [`parse_request`] for the accepted shape). Always returns a result.
    pub async fn run_value(&self, value: &Value) -> RunResult {
        match parse_request(value) {
            Ok(request) => self.run(&request).await,
            Err(e) => {
                debug!(error = %e, "request rejected");
                Err::<RunResult, _>(e).into()
            }
        }
    }

    async fn try_run(&self, request: &RunRequest) -> Result<RunResult, MyTextError> {
        validate_request(request)?;

        let instruction = build_instruction(request.mode, request.tone);
        let prompt = Prompt::render(&instruction, &request.text);
        let (main_model, fallback_model) = self.models_for(request);

        let adapter = match self.adapters.get(&request.provider) {
            Some(adapter) => Arc::clone(adapter),
            None => configured_adapter(request.provider, &self.providers),
        };

        info!(
            provider = %request.provider,
            mode = %request.mode,
            tone = %request.tone,
            main_model = %main_model,
            fallback_model = %fallback_model,
            "running request"
        );

        let outcome = call_with_fallback(
            adapter.as_ref(),
            &prompt,
            &request.credentials,
            &main_model,
            &fallback_model,
            &self.policy,
        )
        .await;

        Ok(match outcome {
            Ok(completion) => completion.into(),
            Err(exhausted) => exhausted.into(),
        })
    }
}

/// Run one request with a default client.
pub async fn run(request: &RunRequest) -> RunResult {
    MyText::new().run(request).await
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
