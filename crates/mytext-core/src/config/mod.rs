//! Configuration system: schema, loading, and env var overrides.
//!
//! # Usage
//! ```no_run
//! use mytext_core::config;
//!
//! let cfg = config::load_config(None);
//! println!("Max retries: {}", cfg.retry.max_retries);
//! ```

pub mod loader;
pub mod schema;

// Re-export key types
pub use loader::{get_config_path, load_config, save_config};
pub use schema::{Config, ProviderSettings, ProvidersConfig, RetryConfig};
