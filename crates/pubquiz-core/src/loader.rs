//! CSV question dataset loading and validation.
//!
//! Loads question/answer/source records from a flat CSV file. Individual
//! broken rows are skipped with a warning; only an unreadable file or a
//! missing header column is fatal.

use std::path::Path;

use crate::error::DatasetError;
use crate::model::Question;

const REQUIRED_COLUMNS: [&str; 3] = ["question_text", "answer_text", "source"];

/// Load questions from a CSV file.
pub fn load_questions(path: &Path) -> Result<Vec<Question>, DatasetError> {
    let content = std::fs::read_to_string(path)?;
    load_questions_str(&content)
}

/// Load questions from CSV text (useful for testing).
///
/// Extra columns are ignored. Rows with an empty question or answer, or rows
/// the CSV parser rejects, are skipped with a warning.
pub fn load_questions_str(content: &str) -> Result<Vec<Question>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DatasetError::MissingColumn(col));
        }
    }
    // Positions are safe to unwrap after the check above.
    let question_idx = headers.iter().position(|h| h == "question_text").unwrap();
    let answer_idx = headers.iter().position(|h| h == "answer_text").unwrap();
    let source_idx = headers.iter().position(|h| h == "source").unwrap();

    let mut questions = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let line = i + 2; // 1-based, after the header row
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("skipping row {line}: {e}");
                continue;
            }
        };

        let question_text = record.get(question_idx).unwrap_or("").trim();
        let answer_text = record.get(answer_idx).unwrap_or("").trim();
        if question_text.is_empty() || answer_text.is_empty() {
            tracing::warn!("skipping row {line}: empty question or answer");
            continue;
        }
        let source = record.get(source_idx).unwrap_or("").trim();

        questions.push(Question {
            question_text: question_text.to_string(),
            answer_text: answer_text.to_string(),
            source: source.to_string(),
        });
    }

    Ok(questions)
}

/// A warning from dataset validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question text the warning refers to (if applicable).
    pub question: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a loaded dataset for common issues.
pub fn validate_questions(questions: &[Question]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate question text produces identical prompts in one quiz.
    let mut seen = std::collections::HashSet::new();
    for q in questions {
        if !seen.insert(q.question_text.to_lowercase()) {
            warnings.push(ValidationWarning {
                question: Some(q.question_text.clone()),
                message: "duplicate question text".into(),
            });
        }
    }

    for q in questions {
        if q.source.is_empty() {
            warnings.push(ValidationWarning {
                question: Some(q.question_text.clone()),
                message: "blank source tag".into(),
            });
        }
    }

    // Pub-only mode filters on the "pub" tag; without any such rows it
    // always yields an empty quiz.
    if !questions.is_empty() && !questions.iter().any(|q| q.source.eq_ignore_ascii_case("pub")) {
        warnings.push(ValidationWarning {
            question: None,
            message: "no questions tagged \"pub\"; pub-only mode will be empty".into(),
        });
    }

    warnings
}
