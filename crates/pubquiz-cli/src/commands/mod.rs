//! Subcommand implementations.

pub mod grade;
pub mod init;
pub mod play;
pub mod show;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};

use pubquiz_core::loader;
use pubquiz_core::model::{Question, QuizMode};

/// Load the dataset, with path context on failure.
pub(crate) fn load_dataset(path: &Path) -> Result<Vec<Question>> {
    loader::load_questions(path)
        .with_context(|| format!("failed to load questions from {}", path.display()))
}

/// Parse the `--mode` flag.
pub(crate) fn parse_mode(mode: &str) -> Result<QuizMode> {
    mode.parse::<QuizMode>().map_err(|e| anyhow::anyhow!("{e}"))
}

/// Resolve the quiz date: explicit flag or today's local date.
pub(crate) fn resolve_date(date: Option<String>) -> String {
    date.unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string())
}
