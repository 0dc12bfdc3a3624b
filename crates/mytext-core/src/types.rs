//! Core value types for MyText: provider, mode, tone, credentials, request and result.
//!
//! All of these are plain values built per call. Nothing here is shared across
//! calls or mutated after validation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::MyTextError;

// ─────────────────────────────────────────────
// Provider
// ─────────────────────────────────────────────

/// A supported LLM backend.
///
/// The set is closed: each variant has exactly one adapter, endpoint template,
/// credential field set and default model pair in [`crate::registry`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    /// Google AI Studio (Gemini `generateContent`).
    #[default]
    AiStudio,
    /// Cloudflare Workers AI.
    Cloudflare,
    /// OpenRouter aggregator.
    #[serde(rename = "openrouter")]
    OpenRouter,
    /// Cerebras inference.
    Cerebras,
    /// Groq inference.
    Groq,
    /// NVIDIA NIM.
    Nvidia,
}

impl Provider {
    /// Every provider, in automatic-selection order.
    pub const ALL: [Provider; 6] = [
        Provider::AiStudio,
        Provider::Cloudflare,
        Provider::OpenRouter,
        Provider::Cerebras,
        Provider::Groq,
        Provider::Nvidia,
    ];

    /// Wire name (e.g. `"ai_studio"`), as accepted on the CLI and in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::AiStudio => "ai_studio",
            Provider::Cloudflare => "cloudflare",
            Provider::OpenRouter => "openrouter",
            Provider::Cerebras => "cerebras",
            Provider::Groq => "groq",
            Provider::Nvidia => "nvidia",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = MyTextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Provider::ALL
            .into_iter()
            .find(|p| p.as_str() == lower)
            .ok_or(MyTextError::InvalidProvider)
    }
}

// ─────────────────────────────────────────────
// Mode
// ─────────────────────────────────────────────

/// Kind of transformation applied to the user text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Paraphrase,
    Grammar,
    Summarize,
    Simplify,
    Bulletize,
    Shorten,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Mode::Paraphrase,
        Mode::Grammar,
        Mode::Summarize,
        Mode::Simplify,
        Mode::Bulletize,
        Mode::Shorten,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Paraphrase => "paraphrase",
            Mode::Grammar => "grammar",
            Mode::Summarize => "summarize",
            Mode::Simplify => "simplify",
            Mode::Bulletize => "bulletize",
            Mode::Shorten => "shorten",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = MyTextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str() == lower)
            .ok_or(MyTextError::InvalidMode)
    }
}

// ─────────────────────────────────────────────
// Tone
// ─────────────────────────────────────────────

/// Writing register. Substituted verbatim into the instruction text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Neutral,
    Formal,
    Casual,
    Friendly,
    Professional,
    Academic,
    Creative,
}

impl Tone {
    pub const ALL: [Tone; 7] = [
        Tone::Neutral,
        Tone::Formal,
        Tone::Casual,
        Tone::Friendly,
        Tone::Professional,
        Tone::Academic,
        Tone::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Formal => "formal",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Professional => "professional",
            Tone::Academic => "academic",
            Tone::Creative => "creative",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = MyTextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or(MyTextError::InvalidTone)
    }
}

// ─────────────────────────────────────────────
// Credentials
// ─────────────────────────────────────────────

/// Credential fields keyed by name (`"api_key"`, `"account_id"`).
///
/// Supplied per call and never persisted. `Debug` masks the values.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials(BTreeMap<String, String>);

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for the common single-field case.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::new().with("api_key", key)
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Value of a field, or the empty string when absent.
    ///
    /// Adapters only run after validation, so absence there is a caller bug
    /// that surfaces as an authentication failure from the provider.
    pub fn field(&self, field: &str) -> &str {
        self.get(field).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.keys().map(|k| (k, "***")))
            .finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Credentials {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ─────────────────────────────────────────────
// Request / Result
// ─────────────────────────────────────────────

/// One logical rewrite request.
#[derive(Clone, Debug, PartialEq)]
pub struct RunRequest {
    pub text: String,
    pub credentials: Credentials,
    pub mode: Mode,
    pub tone: Tone,
    pub provider: Provider,
    /// Overrides the provider's main model.
    pub main_model: Option<String>,
    /// Overrides the provider's fallback model.
    pub fallback_model: Option<String>,
}

impl RunRequest {
    /// Request with default mode, tone and provider.
    pub fn new(text: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            text: text.into(),
            credentials,
            mode: Mode::default(),
            tone: Tone::default(),
            provider: Provider::default(),
            main_model: None,
            fallback_model: None,
        }
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    pub fn main_model(mut self, model: impl Into<String>) -> Self {
        self.main_model = Some(model.into());
        self
    }

    pub fn fallback_model(mut self, model: impl Into<String>) -> Self {
        self.fallback_model = Some(model.into());
        self
    }
}

/// Model name reported when a call fails before any provider was reached.
pub const UNKNOWN_MODEL: &str = "unknown";

/// The uniform outcome of every public call.
///
/// `succeeded == true` means `message` is the generated text;
/// otherwise `message` describes the failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub succeeded: bool,
    pub message: String,
    pub model: String,
}

impl RunResult {
    pub fn success(message: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            message: message.into(),
            model: model.into(),
        }
    }

    pub fn failure(message: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            message: message.into(),
            model: model.into(),
        }
    }
}

impl From<Result<RunResult, MyTextError>> for RunResult {
    fn from(result: Result<RunResult, MyTextError>) -> Self {
        result.unwrap_or_else(|e| RunResult::failure(e.to_string(), UNKNOWN_MODEL))
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
