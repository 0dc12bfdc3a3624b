//! Shared CLI helpers: path expansion, output framing, info banner.

use std::path::PathBuf;

use colored::Colorize;

use mytext_core::registry;
use mytext_core::utils::truncate_string;
use mytext_core::{Provider, VERSION};

use crate::rewrite::Outcome;

const OVERVIEW: &str = "MyText is a minimal AI-powered text rewriting tool. It paraphrases, \
corrects grammar, summarizes, simplifies, bulletizes or shortens your text in the tone you \
choose, using hosted LLM providers with automatic retries and model fallback.";

const BANNER: &str = r"
 __  __       _____         _
|  \/  |_   _|_   _|____  _| |_
| |\/| | | | | | |/ _ \ \/ / __|
| |  | | |_| | | |  __/>  <| |_
|_|  |_|\__, | |_|\___/_/\_\\__|
        |___/";

const REPO_URL: &str = "https://github.com/sepandhaghighi/mytext";

const NO_PROVIDER_SUCCEEDED: &str =
    "No provider succeeded. Check your API keys and network connection, or run with --verbose for details.";

/// Longest provider error shown under `--verbose`.
const MAX_ERROR_LEN: usize = 300;

const FRAME_WIDTH: usize = 40;

/// Expand `~` at the start of a path to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_next::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs_next::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

/// Rewritten text between two horizontal rules.
pub fn format_output(text: &str) -> String {
    let rule = "─".repeat(FRAME_WIDTH);
    format!("{rule}\n{}\n{rule}", text.trim())
}

/// The message shown when auto mode finds no credentials at all.
pub fn no_credentials_message() -> String {
    let vars: Vec<String> = Provider::ALL
        .into_iter()
        .map(|p| {
            let names: Vec<&str> = registry::spec(p).env_vars.iter().map(|(_, var)| *var).collect();
            names.join(" + ")
        })
        .collect();
    format!(
        "No provider credentials found. Set at least one of: {}.",
        vars.join(", ")
    )
}

/// Print the outcome of one rewrite.
///
/// Provider errors are listed when `show_errors` is set.
pub fn print_outcome(outcome: &Outcome, show_errors: bool) {
    println!();
    match outcome {
        Outcome::Rewritten { provider, result } => {
            println!(
                "{} {}",
                "MyText".cyan().bold(),
                format!("({} · {})", registry::spec(*provider).display_name, result.model).dimmed()
            );
            println!("{}", format_output(&result.message));
        }
        Outcome::NoCredentials => {
            println!("{}", no_credentials_message().yellow());
        }
        Outcome::Failed(failures) => {
            println!("{}", NO_PROVIDER_SUCCEEDED.red());
            if show_errors {
                for (provider, result) in failures {
                    println!(
                        "  {} {}",
                        format!("{}:", registry::spec(*provider).display_name).bold(),
                        truncate_string(&result.message, MAX_ERROR_LEN)
                    );
                }
            }
        }
    }
    println!();
}

/// Everything `--info` shows below the banner.
fn info_body() -> String {
    format!("V:{VERSION}\n\n{OVERVIEW}\n\nRepo : {REPO_URL}")
}

/// `--info`: banner, version, overview and repository link.
pub fn print_info() {
    println!("{}", BANNER.cyan().bold());
    println!();
    println!("{}", info_body());
    println!();
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
