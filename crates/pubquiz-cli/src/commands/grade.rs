//! The `pubquiz grade` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use pubquiz_core::report::QuizReport;
use pubquiz_core::{sampler, scorer};

pub fn execute(
    questions_path: PathBuf,
    date: Option<String>,
    mode: String,
    answers_path: PathBuf,
    format: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let mode = super::parse_mode(&mode)?;
    let date = super::resolve_date(date);
    let questions = super::load_dataset(&questions_path)?;

    let answers: Vec<String> = std::fs::read_to_string(&answers_path)
        .with_context(|| format!("failed to read answers from {}", answers_path.display()))?
        .lines()
        .map(str::to_string)
        .collect();

    let selection = sampler::select_daily(&questions, mode, &date);
    let results = scorer::grade(&selection, &answers);
    let report = QuizReport::new(&selection, results);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "markdown" | "md" => {
            println!("{}", report.to_markdown());
        }
        _ => {
            // text format
            for (i, r) in report.results.iter().enumerate() {
                println!(
                    "{}. [{}] {}% \"{}\" (expected \"{}\")",
                    i + 1,
                    if r.is_correct { "correct" } else { "incorrect" },
                    r.similarity,
                    r.user_answer,
                    r.correct_answer
                );
            }
            println!("\n{}", report.summary_line());
        }
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}
