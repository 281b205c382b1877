//! Quiz report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{AnswerResult, QuizMode, QuizSelection};

/// A graded quiz session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// The date string the quiz was drawn for.
    pub quiz_date: String,
    /// The question pool mode.
    pub mode: QuizMode,
    /// Per-question grading results, in quiz order.
    pub results: Vec<AnswerResult>,
    /// Number of correct answers.
    pub score: usize,
    /// Number of questions asked.
    pub total: usize,
}

impl QuizReport {
    /// Build a report from a selection and its graded results.
    pub fn new(selection: &QuizSelection, results: Vec<AnswerResult>) -> Self {
        let score = results.iter().filter(|r| r.is_correct).count();
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            quiz_date: selection.quiz_date.clone(),
            mode: selection.mode,
            score,
            total: results.len(),
            results,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: QuizReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// One-line score summary, e.g. "Score: 12 / 15".
    pub fn summary_line(&self) -> String {
        format!("Score: {} / {}", self.score, self.total)
    }

    /// Format the detailed per-question breakdown as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Quiz for {} ({} mode)**\n\n{}\n\n",
            self.quiz_date,
            self.mode,
            self.summary_line()
        ));

        md.push_str("| # | Question | Your Answer | Correct Answer | Match | Result |\n");
        md.push_str("|---|----------|-------------|----------------|-------|--------|\n");
        for (i, r) in self.results.iter().enumerate() {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {}% | {} |\n",
                i + 1,
                r.question_text,
                r.user_answer,
                r.correct_answer,
                r.similarity,
                if r.is_correct { "correct" } else { "incorrect" }
            ));
        }

        md
    }
}
