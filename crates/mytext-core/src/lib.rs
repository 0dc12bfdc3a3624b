//! Core of MyText: a small text-rewriting client for hosted LLM APIs.
//!
//! # Architecture
//!
//! - [`types`]: `Provider`, `Mode`, `Tone`, `Credentials`, `RunRequest`, `RunResult`
//! - [`registry`]: static specs for the six supported providers
//! - [`instructions`] / [`prompt`]: instruction texts and the rendered prompt
//! - [`validation`]: request checks that run before any network I/O
//! - [`credentials`]: `CredentialSource` and its environment implementation
//! - [`config`]: retry policy and per-provider overrides from `~/.mytext/config.json`

pub mod config;
pub mod credentials;
pub mod error;
pub mod instructions;
pub mod prompt;
pub mod registry;
pub mod types;
pub mod utils;
pub mod validation;

pub use credentials::{eligible_providers, CredentialSource, EnvCredentials, StaticCredentials};
pub use error::MyTextError;
pub use prompt::Prompt;
pub use types::{Credentials, Mode, Provider, RunRequest, RunResult, Tone, UNKNOWN_MODEL};

/// Crate version, shared by the CLI's `--version` and `--info`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
