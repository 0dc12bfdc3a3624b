//! Credential sources: where per-provider secrets come from.
//!
//! The core never reads the process environment on its own; callers hand a
//! [`CredentialSource`] to whatever needs credentials.

use std::collections::HashMap;
use std::fmt;

use crate::registry;
use crate::types::{Credentials, Provider};

/// Narrow lookup interface for provider credentials.
pub trait CredentialSource {
    /// Complete credentials for `provider`, or `None` when any required field is missing.
    fn lookup(&self, provider: Provider) -> Option<Credentials>;
}

/// Reads `{PROVIDER}_API_KEY`-style environment variables.
///
/// A provider resolves only when all of its variables are set and non-empty.
pub struct EnvCredentials {
    var: Box<dyn Fn(&str) -> Option<String> + Send + Sync>,
}

impl EnvCredentials {
    /// Source backed by the process environment.
    pub fn new() -> Self {
        Self::with_lookup(|key| std::env::var(key).ok())
    }

    /// Source backed by a custom variable lookup.
    pub fn with_lookup<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self { var: Box::new(var) }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnvCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvCredentials").finish_non_exhaustive()
    }
}

impl CredentialSource for EnvCredentials {
    fn lookup(&self, provider: Provider) -> Option<Credentials> {
        let spec = registry::spec(provider);
        spec.env_vars
            .iter()
            .map(|(field, var)| {
                (self.var)(var)
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| (*field, v))
            })
            .collect()
    }
}

/// Fixed in-memory credentials, for library callers and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticCredentials(HashMap<Provider, Credentials>);

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, provider: Provider, credentials: Credentials) -> Self {
        self.0.insert(provider, credentials);
        self
    }
}

impl CredentialSource for StaticCredentials {
    fn lookup(&self, provider: Provider) -> Option<Credentials> {
        self.0.get(&provider).cloned()
    }
}

/// Providers that `source` has credentials for, in automatic-selection order.
pub fn eligible_providers(source: &dyn CredentialSource) -> Vec<(Provider, Credentials)> {
    Provider::ALL
        .into_iter()
        .filter_map(|p| source.lookup(p).map(|c| (p, c)))
        .collect()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
