//! Provider registry: static specs for the six supported backends.
//!
//! Each `ProviderSpec` describes how to reach one provider: display name,
//! credential fields and their env vars, default API base, and the default
//! main/fallback model pair.

use crate::types::Provider;

// ─────────────────────────────────────────────
// ProviderSpec: static metadata for one provider
// ─────────────────────────────────────────────

/// Static specification describing one LLM provider.
#[derive(Clone, Debug)]
pub struct ProviderSpec {
    pub provider: Provider,
    /// Human-readable name for logs and console output. E.g. `"OpenRouter"`.
    pub display_name: &'static str,
    /// Credential fields a request must carry, in message order.
    pub required_fields: &'static [&'static str],
    /// `(field, env var)` pairs read by the environment credential source.
    pub env_vars: &'static [(&'static str, &'static str)],
    /// Default API base. The adapter appends its own path.
    pub default_api_base: &'static str,
    /// Model used for the first half of the retry budget.
    pub main_model: &'static str,
    /// Model used from the midpoint of the retry budget onward.
    pub fallback_model: &'static str,
}

/// Credential field carried by every provider.
pub const API_KEY_FIELD: &str = "api_key";
/// Extra credential field for Cloudflare.
pub const ACCOUNT_ID_FIELD: &str = "account_id";

/// All provider specs, in automatic-selection order.
pub static PROVIDERS: &[ProviderSpec] = &[
    ProviderSpec {
        provider: Provider::AiStudio,
        display_name: "AI Studio",
        required_fields: &[API_KEY_FIELD],
        env_vars: &[(API_KEY_FIELD, "AI_STUDIO_API_KEY")],
        default_api_base: "https://generativelanguage.googleapis.com",
        main_model: "gemini-2.5-flash",
        fallback_model: "gemini-2.5-flash-lite",
    },
    // Account id travels in the URL path, key as a bearer token.
    ProviderSpec {
        provider: Provider::Cloudflare,
        display_name: "Cloudflare",
        required_fields: &[API_KEY_FIELD, ACCOUNT_ID_FIELD],
        env_vars: &[
            (API_KEY_FIELD, "CLOUDFLARE_API_KEY"),
            (ACCOUNT_ID_FIELD, "CLOUDFLARE_ACCOUNT_ID"),
        ],
        default_api_base: "https://api.cloudflare.com",
        main_model: "@cf/meta/llama-3.3-70b-instruct-fp8-fast",
        fallback_model: "@cf/meta/llama-3.1-8b-instruct",
    },
    ProviderSpec {
        provider: Provider::OpenRouter,
        display_name: "OpenRouter",
        required_fields: &[API_KEY_FIELD],
        env_vars: &[(API_KEY_FIELD, "OPENROUTER_API_KEY")],
        default_api_base: "https://openrouter.ai/api/v1",
        main_model: "openai/gpt-oss-20b:free",
        fallback_model: "meta-llama/llama-3.3-70b-instruct:free",
    },
    ProviderSpec {
        provider: Provider::Cerebras,
        display_name: "Cerebras",
        required_fields: &[API_KEY_FIELD],
        env_vars: &[(API_KEY_FIELD, "CEREBRAS_API_KEY")],
        default_api_base: "https://api.cerebras.ai/v1",
        main_model: "gpt-oss-120b",
        fallback_model: "llama3.1-8b",
    },
    ProviderSpec {
        provider: Provider::Groq,
        display_name: "Groq",
        required_fields: &[API_KEY_FIELD],
        env_vars: &[(API_KEY_FIELD, "GROQ_API_KEY")],
        default_api_base: "https://api.groq.com/openai/v1",
        main_model: "openai/gpt-oss-20b",
        fallback_model: "llama-3.1-8b-instant",
    },
    ProviderSpec {
        provider: Provider::Nvidia,
        display_name: "NVIDIA NIM",
        required_fields: &[API_KEY_FIELD],
        env_vars: &[(API_KEY_FIELD, "NVIDIA_API_KEY")],
        default_api_base: "https://integrate.api.nvidia.com/v1",
        main_model: "meta/llama-3.3-70b-instruct",
        fallback_model: "meta/llama-3.1-8b-instruct",
    },
];

/// Look up the spec for a provider.
pub fn spec(provider: Provider) -> &'static ProviderSpec {
    // One entry per variant, in declaration order.
    &PROVIDERS[provider as usize]
}

/// Find a provider spec by wire name.
pub fn find_by_name(name: &str) -> Option<&'static ProviderSpec> {
    PROVIDERS.iter().find(|s| s.provider.as_str() == name)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
