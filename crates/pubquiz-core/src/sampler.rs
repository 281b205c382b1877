//! Deterministic daily quiz selection.
//!
//! Everyone playing the same date and mode gets the same questions in the
//! same order: the date string and mode label are hashed into a 32-bit seed,
//! and the (possibly filtered) pool is sampled without replacement from a
//! PRNG seeded with it.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

use crate::model::{Question, QuizMode, QuizSelection};

/// Maximum number of questions in a daily quiz.
pub const DAILY_QUIZ_SIZE: usize = 15;

/// Derive the 32-bit seed for a (date, mode) pair.
///
/// SHA-256 over the concatenated date string and mode label, reduced mod
/// 2^32. The reduction keeps the low 32 bits of the digest read as a big
/// integer, which is the last four digest bytes big-endian.
pub fn daily_seed(date_str: &str, mode: QuizMode) -> u32 {
    let mut hasher = Sha256::new();
    hasher.update(date_str.as_bytes());
    hasher.update(mode.seed_token().as_bytes());
    let digest = hasher.finalize();
    u32::from_be_bytes([digest[28], digest[29], digest[30], digest[31]])
}

/// Select the daily quiz for a (date, mode) pair.
///
/// Filters the pool when the mode restricts it, then draws up to
/// [`DAILY_QUIZ_SIZE`] questions without replacement. A pool smaller than
/// the quiz size yields the whole pool in draw order; an empty pool yields
/// an empty selection.
pub fn select_daily(questions: &[Question], mode: QuizMode, date_str: &str) -> QuizSelection {
    select_daily_n(questions, mode, date_str, DAILY_QUIZ_SIZE)
}

/// Like [`select_daily`] with an explicit quiz size.
pub fn select_daily_n(
    questions: &[Question],
    mode: QuizMode,
    date_str: &str,
    limit: usize,
) -> QuizSelection {
    let pool: Vec<&Question> = match mode {
        QuizMode::All => questions.iter().collect(),
        QuizMode::PubOnly => questions
            .iter()
            .filter(|q| q.source.eq_ignore_ascii_case("pub"))
            .collect(),
    };

    let count = limit.min(pool.len());
    let mut rng = StdRng::seed_from_u64(u64::from(daily_seed(date_str, mode)));
    let picked = rand::seq::index::sample(&mut rng, pool.len(), count);

    QuizSelection {
        quiz_date: date_str.to_string(),
        mode,
        questions: picked.iter().map(|i| pool[i].clone()).collect(),
    }
}
