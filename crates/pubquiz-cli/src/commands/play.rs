//! The `pubquiz play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use pubquiz_core::report::QuizReport;
use pubquiz_core::{sampler, scorer};

pub fn execute(
    questions_path: PathBuf,
    date: Option<String>,
    mode: String,
    details: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let mode = super::parse_mode(&mode)?;
    let date = super::resolve_date(date);
    let questions = super::load_dataset(&questions_path)?;

    let selection = sampler::select_daily(&questions, mode, &date);
    if selection.is_empty() {
        println!("No questions available for this mode.");
        return Ok(());
    }

    println!(
        "Quiz for {date} ({mode}). Answer the following {} questions:",
        selection.len()
    );
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut answers = Vec::with_capacity(selection.len());
    for (i, q) in selection.questions.iter().enumerate() {
        print!("{}. {}\n> ", i + 1, q.question_text);
        io::stdout().flush()?;
        let answer = match lines.next() {
            Some(line) => line?,
            // EOF: grade the remaining questions as blank
            None => String::new(),
        };
        answers.push(answer);
    }

    let results = scorer::grade(&selection, &answers);
    let report = QuizReport::new(&selection, results);

    println!();
    print_summary(&report);
    println!("\n{}", report.summary_line());

    if details {
        println!("\n{}", report.to_markdown());
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        println!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn print_summary(report: &QuizReport) {
    let mut table = Table::new();
    table.set_header(vec!["#", "Your Answer", "Correct Answer", "Match", "Result"]);

    for (i, r) in report.results.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&r.user_answer),
            Cell::new(&r.correct_answer),
            Cell::new(format!("{}%", r.similarity)),
            Cell::new(if r.is_correct { "correct" } else { "incorrect" }),
        ]);
    }

    println!("{table}");
}
