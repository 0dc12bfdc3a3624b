//! Config loader: reads `~/.mytext/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.mytext/config.json`
//! 3. Environment variables `MYTEXT_<SECTION>__<FIELD>` (override JSON)

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema::Config;
use crate::types::Provider;

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from `path` (or the default path) + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    load_config_from_path(&config_path)
}

fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return apply_env_overrides(Config::default());
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return apply_env_overrides(Config::default());
        }
    };

    let config: Config = match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to parse config JSON: {}", e);
            return apply_env_overrides(Config::default());
        }
    };

    apply_env_overrides(config)
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &Config, path: Option<&Path>) -> std::io::Result<()> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config).map_err(std::io::Error::other)?;

    std::fs::write(&config_path, json)?;
    debug!("Config saved to {}", config_path.display());
    Ok(())
}

/// Apply environment variable overrides on top of a loaded config.
///
/// Supported overrides:
/// - `MYTEXT_RETRY__TIMEOUT_SECS` → `retry.timeout_secs`
/// - `MYTEXT_RETRY__MAX_RETRIES` → `retry.max_retries`
/// - `MYTEXT_RETRY__RETRY_DELAY_SECS` → `retry.retry_delay_secs`
/// - `MYTEXT_RETRY__BACKOFF_FACTOR` → `retry.backoff_factor`
/// - `MYTEXT_PROVIDERS__<NAME>__API_BASE` → `providers.<name>.api_base`
/// - `MYTEXT_PROVIDERS__<NAME>__MAIN_MODEL` → `providers.<name>.main_model`
/// - `MYTEXT_PROVIDERS__<NAME>__FALLBACK_MODEL` → `providers.<name>.fallback_model`
///
/// Unparseable numbers are ignored.
fn apply_env_overrides(mut config: Config) -> Config {
    if let Some(t) = env_parse::<f64>("MYTEXT_RETRY__TIMEOUT_SECS") {
        config.retry.timeout_secs = t;
    }
    if let Some(n) = env_parse::<u32>("MYTEXT_RETRY__MAX_RETRIES") {
        config.retry.max_retries = n;
    }
    if let Some(d) = env_parse::<f64>("MYTEXT_RETRY__RETRY_DELAY_SECS") {
        config.retry.retry_delay_secs = d;
    }
    if let Some(f) = env_parse::<f64>("MYTEXT_RETRY__BACKOFF_FACTOR") {
        config.retry.backoff_factor = f;
    }

    for provider in Provider::ALL {
        apply_provider_env(&mut config, provider);
    }

    config
}

/// Apply env var overrides for a single provider.
fn apply_provider_env(config: &mut Config, provider: Provider) {
    let name = provider.as_str().to_uppercase();
    let settings = config.providers.get_mut(provider);
    if let Ok(val) = std::env::var(format!("MYTEXT_PROVIDERS__{name}__API_BASE")) {
        settings.api_base = Some(val);
    }
    if let Ok(val) = std::env::var(format!("MYTEXT_PROVIDERS__{name}__MAIN_MODEL")) {
        settings.main_model = Some(val);
    }
    if let Ok(val) = std::env::var(format!("MYTEXT_PROVIDERS__{name}__FALLBACK_MODEL")) {
        settings.fallback_model = Some(val);
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
