//! Provider adapter trait: one implementation per wire format.

use std::time::Duration;

use async_trait::async_trait;
use mytext_core::{Credentials, Prompt};

use crate::error::ProviderError;

/// One provider's request/response mapping.
///
/// An adapter makes exactly one HTTP call per [`complete`](Self::complete);
/// retries and model selection belong to [`crate::retry`].
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Send `prompt` to `model` and return the generated text.
    ///
    /// # Arguments
    /// * `prompt`     : Rendered prompt; the adapter picks its payload shape.
    /// * `credentials`: Already validated for this provider.
    /// * `model`      : Model identifier for this attempt.
    /// * `timeout`    : Deadline for this single request.
    async fn complete(
        &self,
        prompt: &Prompt,
        credentials: &Credentials,
        model: &str,
        timeout: Duration,
    ) -> Result<String, ProviderError>;

    /// Display name for logging.
    fn display_name(&self) -> &str;
}
