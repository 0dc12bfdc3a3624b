//! `--loop` mode: rewrite text after text until the user quits.
//!
//! Uses `rustyline` for readline-style editing with persistent history.

use anyhow::Result;
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{DefaultEditor, Editor};
use tracing::debug;

use mytext_core::credentials::CredentialSource;
use mytext_providers::MyText;

use crate::helpers;
use crate::rewrite::{rewrite, RewriteOptions};

const PROMPT: &str = "Enter your text: ";

/// Exit commands (case-insensitive match).
const EXIT_COMMANDS: &[&str] = &["exit", "quit", ":q"];

/// Run the loop. `first` is rewritten before the first prompt when given.
pub async fn run(
    client: &MyText,
    source: &dyn CredentialSource,
    options: &RewriteOptions,
    first: Option<String>,
    show_errors: bool,
) -> Result<()> {
    let mut editor = create_editor()?;
    let mut pending = first;

    loop {
        let input = match pending.take() {
            Some(text) => text,
            None => match editor.readline(PROMPT) {
                Ok(line) => line,
                // Ctrl-C / Ctrl-D
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => {
                    eprintln!("Input error: {e}");
                    break;
                }
            },
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            continue;
        }
        if is_exit_command(trimmed) {
            break;
        }
        let _ = editor.add_history_entry(trimmed);

        debug!(chars = trimmed.chars().count(), "rewriting input");
        let outcome = rewrite(client, source, options, trimmed).await;
        helpers::print_outcome(&outcome, show_errors);
    }

    save_history(&mut editor);
    Ok(())
}

fn create_editor() -> Result<Editor<(), DefaultHistory>> {
    let mut editor = DefaultEditor::new()?;
    editor.set_max_history_size(1000)?;

    let history_path = history_path();
    if history_path.exists() {
        let _ = editor.load_history(&history_path);
        debug!("loaded history from {}", history_path.display());
    }

    Ok(editor)
}

fn save_history(editor: &mut Editor<(), DefaultHistory>) {
    let path = history_path();
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Err(e) = editor.save_history(&path) {
        debug!("failed to save history: {e}");
    }
}

/// `~/.mytext/history/loop_history`
fn history_path() -> std::path::PathBuf {
    mytext_core::utils::get_data_path()
        .join("history")
        .join("loop_history")
}

fn is_exit_command(input: &str) -> bool {
    let lower = input.to_lowercase();
    EXIT_COMMANDS.contains(&lower.as_str())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
