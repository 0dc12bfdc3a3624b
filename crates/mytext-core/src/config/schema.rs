//! Configuration schema.
//!
//! Hierarchy: `Config` → `RetryConfig`, `ProvidersConfig` → `ProviderSettings`.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.
//! Credentials are deliberately absent: they come from the environment or the caller.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::registry;
use crate::types::Provider;

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration: loaded from `~/.mytext/config.json` + env vars.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub retry: RetryConfig,
    pub providers: ProvidersConfig,
}

// ─────────────────────────────────────────────
// Retry
// ─────────────────────────────────────────────

/// Retry/fallback policy applied to every provider call.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RetryConfig {
    /// Per-attempt HTTP timeout, in seconds.
    pub timeout_secs: f64,
    /// Total attempts per call. The fallback model takes over at the midpoint.
    pub max_retries: u32,
    /// Sleep after the first failed attempt, in seconds.
    pub retry_delay_secs: f64,
    /// Multiplier applied to the delay after each failed attempt.
    pub backoff_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15.0,
            max_retries: 4,
            retry_delay_secs: 0.5,
            backoff_factor: 1.2,
        }
    }
}

impl RetryConfig {
    pub fn timeout(&self) -> Duration {
        secs(self.timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        secs(self.retry_delay_secs)
    }
}

/// Negative or non-finite values clamp to zero.
fn secs(value: f64) -> Duration {
    if value.is_finite() && value > 0.0 {
        Duration::from_secs_f64(value)
    } else {
        Duration::ZERO
    }
}

// ─────────────────────────────────────────────
// Providers
// ─────────────────────────────────────────────

/// Per-provider overrides. Unset fields fall back to the registry.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderSettings {
    /// Custom API base URL (overrides the registry default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_model: Option<String>,
}

/// One `ProviderSettings` per supported backend.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProvidersConfig {
    pub ai_studio: ProviderSettings,
    pub cloudflare: ProviderSettings,
    pub openrouter: ProviderSettings,
    pub cerebras: ProviderSettings,
    pub groq: ProviderSettings,
    pub nvidia: ProviderSettings,
}

impl ProvidersConfig {
    pub fn get(&self, provider: Provider) -> &ProviderSettings {
        match provider {
            Provider::AiStudio => &self.ai_studio,
            Provider::Cloudflare => &self.cloudflare,
            Provider::OpenRouter => &self.openrouter,
            Provider::Cerebras => &self.cerebras,
            Provider::Groq => &self.groq,
            Provider::Nvidia => &self.nvidia,
        }
    }

    pub fn get_mut(&mut self, provider: Provider) -> &mut ProviderSettings {
        match provider {
            Provider::AiStudio => &mut self.ai_studio,
            Provider::Cloudflare => &mut self.cloudflare,
            Provider::OpenRouter => &mut self.openrouter,
            Provider::Cerebras => &mut self.cerebras,
            Provider::Groq => &mut self.groq,
            Provider::Nvidia => &mut self.nvidia,
        }
    }

    /// Main model for `provider`: configured value, else registry default.
    pub fn main_model(&self, provider: Provider) -> &str {
        self.get(provider)
            .main_model
            .as_deref()
            .unwrap_or(registry::spec(provider).main_model)
    }

    /// Fallback model for `provider`: configured value, else registry default.
    pub fn fallback_model(&self, provider: Provider) -> &str {
        self.get(provider)
            .fallback_model
            .as_deref()
            .unwrap_or(registry::spec(provider).fallback_model)
    }

    /// API base for `provider`: configured value, else registry default.
    pub fn api_base(&self, provider: Provider) -> &str {
        self.get(provider)
            .api_base
            .as_deref()
            .unwrap_or(registry::spec(provider).default_api_base)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_defaults() {
        let retry = RetryConfig::default();
        assert_eq!(retry.max_retries, 4);
        assert_eq!(retry.timeout(), Duration::from_secs(15));
        assert_eq!(retry.retry_delay(), Duration::from_millis(500));
        assert_eq!(retry.backoff_factor, 1.2);
    }

    #[test]
    fn test_negative_delay_clamps_to_zero() {
        let retry = RetryConfig {
            retry_delay_secs: -1.0,
            timeout_secs: f64::NAN,
            ..Default::default()
        };
        assert_eq!(retry.retry_delay(), Duration::ZERO);
        assert_eq!(retry.timeout(), Duration::ZERO);
    }

    #[test]
    fn test_model_precedence() {
        let mut providers = ProvidersConfig::default();
        assert_eq!(providers.main_model(Provider::Groq), registry::spec(Provider::Groq).main_model);

        providers.groq.main_model = Some("custom-main".into());
        assert_eq!(providers.main_model(Provider::Groq), "custom-main");
        assert_eq!(
            providers.fallback_model(Provider::Groq),
            registry::spec(Provider::Groq).fallback_model
        );
    }

    #[test]
    fn test_get_mut_targets_right_provider() {
        let mut providers = ProvidersConfig::default();
        providers.get_mut(Provider::Nvidia).api_base = Some("http://localhost:9".into());
        assert_eq!(providers.api_base(Provider::Nvidia), "http://localhost:9");
        assert_eq!(
            providers.api_base(Provider::Groq),
            "https://api.groq.com/openai/v1"
        );
    }

    #[test]
    fn test_camel_case_keys() {
        let raw = serde_json::to_value(Config::default()).unwrap();
        assert!(raw["retry"].get("maxRetries").is_some());
        assert!(raw["providers"].get("aiStudio").is_some());
        assert!(raw["retry"].get("max_retries").is_none());
    }
}
