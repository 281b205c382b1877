//! Fuzzy answer scoring.
//!
//! Answers are normalized (whitespace, case, "&" spelled out) and compared
//! with a Levenshtein ratio on a 0-100 scale. At or above the threshold an
//! answer counts as correct, so minor typos still score.

use strsim::levenshtein;

use crate::model::{AnswerResult, QuizSelection};

/// Minimum similarity for an answer to count as correct.
pub const CORRECT_THRESHOLD: u8 = 85;

/// Normalize an answer for comparison: trim, lowercase, replace the literal
/// ampersand with the word "and".
pub fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase().replace('&', "and")
}

/// Similarity between a correct answer and a user answer, 0-100.
///
/// `100 * (1 - distance / max_len)` over the normalized strings, rounded.
/// Two strings that normalize to empty are identical and score 100.
pub fn similarity(correct: &str, given: &str) -> u8 {
    let a = normalize(correct);
    let b = normalize(given);

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100;
    }

    let distance = levenshtein(&a, &b);
    let ratio = 100.0 * (1.0 - distance as f64 / max_len as f64);
    ratio.round().clamp(0.0, 100.0) as u8
}

/// Grade a single answer against the canonical one.
pub fn score_answer(question_text: &str, correct: &str, given: &str) -> AnswerResult {
    let similarity = similarity(correct, given);
    AnswerResult {
        question_text: question_text.to_string(),
        user_answer: given.trim().to_string(),
        correct_answer: correct.to_string(),
        similarity,
        is_correct: similarity >= CORRECT_THRESHOLD,
    }
}

/// Grade a full quiz.
///
/// Answers pair with questions positionally; missing answers are graded as
/// empty strings, so every question always gets a result.
pub fn grade(selection: &QuizSelection, answers: &[String]) -> Vec<AnswerResult> {
    selection
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let given = answers.get(i).map(String::as_str).unwrap_or("");
            score_answer(&q.question_text, &q.answer_text, given)
        })
        .collect()
}
