//! LLM provider layer for MyText.
//!
//! # Architecture
//!
//! - [`traits::ProviderAdapter`]: one HTTP call to one provider
//! - [`ai_studio`], [`cloudflare`], [`http_provider`]: the three wire formats
//! - [`registry`]: static `Provider` → adapter dispatch
//! - [`retry`]: bounded retries with exponential backoff and main → fallback switch
//! - [`client::MyText`]: the facade that always returns a `RunResult`

pub mod ai_studio;
pub mod client;
pub mod cloudflare;
pub mod error;
pub mod http_provider;
pub mod registry;
pub mod retry;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types for convenience
pub use client::{run, MyText};
pub use error::ProviderError;
pub use registry::adapter_for;
pub use retry::{call_with_fallback, RetryPolicy};
pub use traits::ProviderAdapter;
