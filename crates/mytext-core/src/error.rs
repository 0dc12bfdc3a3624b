//! Input errors: everything rejected before a provider is contacted.
//!
//! `Display` output is the user-facing message carried in a failed
//! [`RunResult`](crate::types::RunResult), so the wording here is part of the
//! public contract.

use thiserror::Error;

use crate::types::{Mode, Provider, Tone};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MyTextError {
    #[error("`text` must be a string.")]
    InvalidText,

    #[error("`credentials` must be a key/value map of strings.")]
    InvalidCredentials,

    #[error("`mode` must be one of: {}", join_names(Mode::ALL.iter().map(|m| m.as_str())))]
    InvalidMode,

    #[error("`tone` must be one of: {}", join_names(Tone::ALL.iter().map(|t| t.as_str())))]
    InvalidTone,

    #[error("`provider` must be one of: {}", join_names(Provider::ALL.iter().map(|p| p.as_str())))]
    InvalidProvider,

    #[error("{} provider requires keys: {}", .provider.as_str().to_uppercase(), quote_fields(.fields))]
    MissingCredentials {
        provider: Provider,
        fields: &'static [&'static str],
    },
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

fn quote_fields(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| format!("`{f}`"))
        .collect::<Vec<_>>()
        .join(", ")
}
