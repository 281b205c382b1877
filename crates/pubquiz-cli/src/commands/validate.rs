//! The `pubquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use pubquiz_core::loader;

pub fn execute(questions_path: PathBuf) -> Result<()> {
    let questions = super::load_dataset(&questions_path)?;
    println!("Dataset: {} questions", questions.len());

    let warnings = loader::validate_questions(&questions);
    for w in &warnings {
        let prefix = w
            .question
            .as_ref()
            .map(|q| format!("  [{q}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Dataset valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
