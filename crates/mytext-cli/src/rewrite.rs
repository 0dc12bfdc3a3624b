//! One rewrite from the command line: pick provider(s), run, collect the outcome.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info};

use mytext_core::credentials::{eligible_providers, CredentialSource};
use mytext_core::{Credentials, Mode, MyTextError, Provider, RunRequest, RunResult, Tone};
use mytext_providers::MyText;

/// `--provider` value: a named provider, or every provider with credentials.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProviderChoice {
    #[default]
    Auto,
    Named(Provider),
}

impl FromStr for ProviderChoice {
    type Err = MyTextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            Ok(Self::Auto)
        } else {
            s.parse().map(Self::Named)
        }
    }
}

impl fmt::Display for ProviderChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Named(p) => p.fmt(f),
        }
    }
}

/// Everything but the text, fixed for the whole session.
#[derive(Clone, Debug, Default)]
pub struct RewriteOptions {
    pub mode: Mode,
    pub tone: Tone,
    pub provider: ProviderChoice,
    pub main_model: Option<String>,
    pub fallback_model: Option<String>,
}

impl RewriteOptions {
    fn request(&self, text: &str, provider: Provider, credentials: Credentials) -> RunRequest {
        let mut request = RunRequest::new(text, credentials)
            .mode(self.mode)
            .tone(self.tone)
            .provider(provider);
        request.main_model = self.main_model.clone();
        request.fallback_model = self.fallback_model.clone();
        request
    }
}

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Rewritten { provider: Provider, result: RunResult },
    /// Auto mode found no provider with credentials.
    NoCredentials,
    /// Every tried provider failed, in the order they were tried.
    Failed(Vec<(Provider, RunResult)>),
}

/// Rewrite `text`, trying providers in fixed order until one succeeds.
pub async fn rewrite(
    client: &MyText,
    source: &dyn CredentialSource,
    options: &RewriteOptions,
    text: &str,
) -> Outcome {
    let candidates = match options.provider {
        ProviderChoice::Named(provider) => {
            vec![(provider, source.lookup(provider).unwrap_or_default())]
        }
        ProviderChoice::Auto => eligible_providers(source),
    };

    if candidates.is_empty() {
        return Outcome::NoCredentials;
    }
    debug!(
        providers = ?candidates.iter().map(|(p, _)| p.as_str()).collect::<Vec<_>>(),
        "candidate providers"
    );

    let mut failures = Vec::new();
    for (provider, credentials) in candidates {
        let request = options.request(text, provider, credentials);
        let result = client.run(&request).await;
        if result.succeeded {
            info!(provider = %provider, model = %result.model, "rewrite succeeded");
            return Outcome::Rewritten { provider, result };
        }
        failures.push((provider, result));
    }
    Outcome::Failed(failures)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
