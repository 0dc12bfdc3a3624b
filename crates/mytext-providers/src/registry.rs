//! Dispatch table: which adapter serves which provider.

use std::sync::Arc;

use mytext_core::config::ProvidersConfig;
use mytext_core::Provider;

use crate::ai_studio::AiStudioProvider;
use crate::cloudflare::CloudflareProvider;
use crate::http_provider::OpenAiCompatProvider;
use crate::traits::ProviderAdapter;

/// Build the adapter for `provider` talking to `api_base`.
pub fn adapter_for(provider: Provider, api_base: &str) -> Arc<dyn ProviderAdapter> {
    match provider {
        Provider::AiStudio => Arc::new(AiStudioProvider::new(api_base)),
        Provider::Cloudflare => Arc::new(CloudflareProvider::new(api_base)),
        Provider::OpenRouter | Provider::Cerebras | Provider::Groq | Provider::Nvidia => {
            Arc::new(OpenAiCompatProvider::new(provider, api_base))
        }
    }
}

/// Build the adapter for `provider` using its configured (or default) API base.
pub fn configured_adapter(provider: Provider, providers: &ProvidersConfig) -> Arc<dyn ProviderAdapter> {
    adapter_for(provider, providers.api_base(provider))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mytext_core::registry;

    #[test]
    fn test_every_provider_has_adapter_with_matching_name() {
        let providers = ProvidersConfig::default();
        for p in Provider::ALL {
            let adapter = configured_adapter(p, &providers);
            assert_eq!(adapter.display_name(), registry::spec(p).display_name);
        }
    }
}
