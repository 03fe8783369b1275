use std::fmt;
use std::time::Duration;

use crate::mask::{Mark, WordMask};
use crate::util::{percent, round_even};

/// Results of a finished round
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    pub chars_total: usize,
    pub chars_correct: usize,
    pub chars_correct_pct: u32,
    pub words_total: usize,
    pub words_correct: usize,
    pub words_correct_pct: u32,
    pub wpm: u32,
}

impl Stats {
    /// Reduces a fully resolved mask to the round's results.
    ///
    /// Speed counts every word of the round, typed correctly or not, over the
    /// time between the first keystroke and the end of the round.
    ///
    /// # Panics
    ///
    /// Panics if any letter of `mask` is still unset.
    pub fn compute(mask: &WordMask, elapsed: Duration) -> Self {
        assert!(mask.is_resolved(), "stats need a fully resolved mask");

        let chars_total = mask.iter().map(Vec::len).sum();
        let chars_correct = mask
            .iter()
            .flatten()
            .filter(|&&m| m == Mark::Correct)
            .count();
        let words_total = mask.len();
        let words_correct = mask
            .iter()
            .filter(|word| word.iter().all(|&m| m == Mark::Correct))
            .count();

        Self {
            chars_total,
            chars_correct,
            chars_correct_pct: percent(chars_correct, chars_total),
            words_total,
            words_correct,
            words_correct_pct: percent(words_correct, words_total),
            wpm: words_per_minute(words_total, elapsed),
        }
    }

    pub fn chars_line(&self) -> String {
        format!(
            "chars: {}/{} ({}%)",
            self.chars_correct, self.chars_total, self.chars_correct_pct
        )
    }

    pub fn words_line(&self) -> String {
        format!(
            "words: {}/{} ({}%)",
            self.words_correct, self.words_total, self.words_correct_pct
        )
    }

    pub fn wpm_line(&self) -> String {
        format!("wpm: {}", self.wpm)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}   {}   {}",
            self.chars_line(),
            self.words_line(),
            self.wpm_line()
        )
    }
}

fn words_per_minute(words: usize, elapsed: Duration) -> u32 {
    let secs = elapsed.as_secs_f64();
    if secs <= 0.0 {
        return 0;
    }
    round_even(60.0 * words as f64 / secs)
}
