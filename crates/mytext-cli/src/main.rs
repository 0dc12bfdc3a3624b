//! MyText CLI: entry point.
//!
//! # Usage
//!
//! - `mytext --text "..." [--mode M] [--tone T] [--provider P|auto]`: one rewrite
//! - `mytext --loop`: prompt for text repeatedly
//! - `mytext --info`: banner, version and project link

mod helpers;
mod repl;
mod rewrite;

use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::debug;

use mytext_core::config::load_config;
use mytext_core::{EnvCredentials, Mode, Tone};
use mytext_providers::MyText;

use crate::rewrite::{ProviderChoice, RewriteOptions};

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// MyText: AI-powered text rewriting
#[derive(Parser, Debug)]
#[command(name = "mytext", version, about, long_about = None)]
struct Cli {
    /// The text you want to transform
    #[arg(long)]
    text: Option<String>,

    /// Processing mode: paraphrase, grammar, summarize, simplify, bulletize, shorten
    #[arg(long, default_value_t = Mode::Paraphrase)]
    mode: Mode,

    /// Writing tone: neutral, formal, casual, friendly, professional, academic, creative
    #[arg(long, default_value_t = Tone::Neutral)]
    tone: Tone,

    /// Provider name, or "auto" to try every provider with credentials
    #[arg(long, default_value_t = ProviderChoice::Auto)]
    provider: ProviderChoice,

    /// Override the provider's main model
    #[arg(long)]
    main_model: Option<String>,

    /// Override the provider's fallback model
    #[arg(long)]
    fallback_model: Option<String>,

    /// Keep prompting for new text
    #[arg(long = "loop", default_value_t = false)]
    loop_mode: bool,

    /// Show project information
    #[arg(long, default_value_t = false)]
    info: bool,

    /// Enable debug logging and show provider errors
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Config file (default: ~/.mytext/config.json)
    #[arg(long)]
    config: Option<String>,
}

impl Cli {
    fn options(&self) -> RewriteOptions {
        RewriteOptions {
            mode: self.mode,
            tone: self.tone,
            provider: self.provider,
            main_model: self.main_model.clone(),
            fallback_model: self.fallback_model.clone(),
        }
    }

    fn config_path(&self) -> Option<PathBuf> {
        self.config.as_deref().map(helpers::expand_tilde)
    }

    /// `--text` absent or empty outside loop mode.
    fn missing_text(&self) -> bool {
        !self.loop_mode && self.text.as_deref().map_or(true, str::is_empty)
    }

    /// Errors are shown for a named provider, and for auto only under `--verbose`.
    fn show_errors(&self) -> bool {
        self.verbose || matches!(self.provider, ProviderChoice::Named(_))
    }
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.info {
        helpers::print_info();
        return Ok(());
    }
    if cli.missing_text() {
        Cli::command()
            .error(ErrorKind::MissingRequiredArgument, "--text is required")
            .exit();
    }

    let config = load_config(cli.config_path().as_deref());
    let client = MyText::from_config(&config);
    let source = EnvCredentials::new();
    let options = cli.options();
    debug!(?options, "starting");

    if cli.loop_mode {
        return repl::run(&client, &source, &options, cli.text.clone(), cli.show_errors()).await;
    }

    let text = cli.text.clone().unwrap_or_default();
    let outcome = rewrite::rewrite(&client, &source, &options, &text).await;
    helpers::print_outcome(&outcome, cli.show_errors());
    Ok(())
}

/// Initialize tracing/logging.
fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("mytext=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use mytext_core::Provider;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["mytext", "--text", "hello"]).unwrap();
        assert_eq!(cli.text.as_deref(), Some("hello"));
        assert_eq!(cli.mode, Mode::Paraphrase);
        assert_eq!(cli.tone, Tone::Neutral);
        assert_eq!(cli.provider, ProviderChoice::Auto);
        assert!(!cli.loop_mode);
        assert!(!cli.show_errors());
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "mytext",
            "--text",
            "hi",
            "--mode",
            "Summarize",
            "--tone",
            "formal",
            "--provider",
            "cerebras",
            "--main-model",
            "m1",
            "--fallback-model",
            "m2",
            "--loop",
            "--verbose",
            "--config",
            "/tmp/mytext.json",
        ])
        .unwrap();

        let options = cli.options();
        assert_eq!(options.mode, Mode::Summarize);
        assert_eq!(options.tone, Tone::Formal);
        assert_eq!(options.provider, ProviderChoice::Named(Provider::Cerebras));
        assert_eq!(options.main_model.as_deref(), Some("m1"));
        assert_eq!(options.fallback_model.as_deref(), Some("m2"));
        assert!(cli.loop_mode);
        assert_eq!(cli.config_path(), Some(PathBuf::from("/tmp/mytext.json")));
    }

    #[test]
    fn empty_text_requires_loop() {
        let cli = Cli::try_parse_from(["mytext", "--text", ""]).unwrap();
        assert!(cli.missing_text());

        let cli = Cli::try_parse_from(["mytext"]).unwrap();
        assert!(cli.missing_text());

        let cli = Cli::try_parse_from(["mytext", "--text", "", "--loop"]).unwrap();
        assert!(!cli.missing_text());

        let cli = Cli::try_parse_from(["mytext", "--text", "hi"]).unwrap();
        assert!(!cli.missing_text());
    }

    #[test]
    fn named_provider_shows_errors() {
        let cli = Cli::try_parse_from(["mytext", "--text", "x", "--provider", "groq"]).unwrap();
        assert!(cli.show_errors());
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(Cli::try_parse_from(["mytext", "--text", "x", "--mode", "poem"]).is_err());
        assert!(Cli::try_parse_from(["mytext", "--text", "x", "--tone", "angry"]).is_err());
        assert!(Cli::try_parse_from(["mytext", "--text", "x", "--provider", "acme"]).is_err());
    }
}
