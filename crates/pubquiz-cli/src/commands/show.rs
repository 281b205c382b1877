//! The `pubquiz show` command.

use std::path::PathBuf;

use anyhow::Result;

use pubquiz_core::sampler;

pub fn execute(questions_path: PathBuf, date: Option<String>, mode: String) -> Result<()> {
    let mode = super::parse_mode(&mode)?;
    let date = super::resolve_date(date);
    let questions = super::load_dataset(&questions_path)?;

    let selection = sampler::select_daily(&questions, mode, &date);

    println!("Quiz for {date} ({mode}): {} questions", selection.len());
    if selection.is_empty() {
        println!("No questions available for this mode.");
        return Ok(());
    }

    println!();
    for (i, q) in selection.questions.iter().enumerate() {
        println!("{}. {}", i + 1, q.question_text);
    }

    Ok(())
}
