//! Core data model types for pubquiz.
//!
//! These are the fundamental types that the quiz engine uses to represent
//! questions, quiz modes, selections, and graded answers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single trivia question loaded from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question shown to the player.
    pub question_text: String,
    /// The canonical answer.
    pub answer_text: String,
    /// Where the question came from, e.g. "pub" for past pub trivia nights.
    #[serde(default)]
    pub source: String,
}

/// Which question pool a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizMode {
    /// Sample from every question in the dataset.
    All,
    /// Restrict the pool to questions whose source tag is "pub".
    PubOnly,
}

impl QuizMode {
    /// The string mixed into the daily seed for this mode.
    ///
    /// These are the labels the quiz has always hashed; changing them would
    /// change every historical (date, mode) selection.
    pub fn seed_token(&self) -> &'static str {
        match self {
            QuizMode::All => "All Questions",
            QuizMode::PubOnly => "Previous Pub Trivia Questions Only",
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizMode::All => write!(f, "all"),
            QuizMode::PubOnly => write!(f, "pub-only"),
        }
    }
}

impl FromStr for QuizMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(QuizMode::All),
            "pub-only" | "pub" | "previous" => Ok(QuizMode::PubOnly),
            other => Err(format!("unknown quiz mode: {other}")),
        }
    }
}

/// An ordered set of questions selected for one (date, mode) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSelection {
    /// The date string the selection was drawn for (YYYY-MM-DD).
    pub quiz_date: String,
    /// The question pool mode.
    pub mode: QuizMode,
    /// The selected questions, in draw order.
    pub questions: Vec<Question>,
}

impl QuizSelection {
    /// Number of questions in the selection.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns `true` if nothing was selected (empty pool).
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// The outcome of grading one answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResult {
    /// The question that was asked.
    pub question_text: String,
    /// The answer the player gave, trimmed.
    pub user_answer: String,
    /// The canonical answer.
    pub correct_answer: String,
    /// Normalized edit-distance ratio, 0-100.
    pub similarity: u8,
    /// Whether the similarity met the correctness threshold.
    pub is_correct: bool,
}
