use std::time::{Duration, Instant};

use crate::colors::{classify, ColorGrid};
use crate::error::{Error, Result};
use crate::mask::{update_mask, CursorPos, MaskUpdate, WordMask};
use crate::runtime::Clock;
use crate::stats::Stats;
use crate::word_source::WordSource;
use crate::wrap::{layout, WordLine};

/// Everything one round owns. Replaced wholesale when a round ends.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub words: Vec<String>,
    pub mask: WordMask,
    pub cursor: CursorPos,
    /// Field contents as last reported, for telling typing from deleting
    pub typed_so_far: String,
    pub started_at: Option<Instant>,
    pub colors: ColorGrid,
}

impl SessionState {
    pub fn new(words: Vec<String>) -> Self {
        assert!(!words.is_empty(), "a round needs words");
        let mask = WordMask::new(&words);
        let cursor = CursorPos::START;
        let colors = classify(&mask, cursor);
        Self {
            words,
            mask,
            cursor,
            typed_so_far: String::new(),
            started_at: None,
            colors,
        }
    }
}

/// What a change of the input field amounted to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// Nothing changed
    Ignored,
    Updated,
    /// The last word was committed; a fresh round is already in place
    RoundComplete(Stats),
}

/// A running game: the current round plus what it takes to start the next one
#[derive(Debug)]
pub struct Session<S: WordSource, C: Clock> {
    state: SessionState,
    source: S,
    clock: C,
    word_count: usize,
}

impl<S: WordSource, C: Clock> Session<S, C> {
    pub fn new(mut source: S, clock: C, word_count: usize) -> Result<Self> {
        if word_count == 0 {
            return Err(Error::NoWords);
        }
        let words = source.next_words(word_count);
        if words.is_empty() {
            return Err(Error::NoWords);
        }
        tracing::info!(words = words.len(), "round started");
        Ok(Self {
            state: SessionState::new(words),
            source,
            clock,
            word_count,
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current words and colors wrapped to `width` columns
    pub fn layout(&self, width: usize) -> Vec<WordLine<'_>> {
        layout(&self.state.words, &self.state.colors, width)
    }

    /// Feeds the full new contents of the input field into the round
    pub fn on_input_change(&mut self, new_text: &str) -> InputOutcome {
        let cursor = self.state.cursor;

        if new_text.is_empty() {
            self.state.typed_so_far.clear();
            return self.apply(cursor.word_start(), None);
        }

        if cursor.letter.is_none() && new_text.chars().all(|c| c == ' ') {
            return InputOutcome::Ignored;
        }

        if new_text.ends_with(' ') {
            tracing::debug!(word = cursor.word, typed = %new_text.trim_end(), "word committed");
            self.state.typed_so_far.clear();
            return self.apply(cursor.next_word(), None);
        }

        let deleting = new_text.chars().count() < self.state.typed_so_far.chars().count();
        let next = if deleting {
            cursor.retreat()
        } else {
            if cursor.word == 0 && self.state.started_at.is_none() {
                self.state.started_at = Some(self.clock.now());
            }
            cursor.advance()
        };
        self.state.typed_so_far = new_text.to_string();
        self.apply(next, new_text.chars().last())
    }

    /// Throws away the current round and starts a new one
    pub fn restart(&mut self) {
        tracing::info!("round restarted");
        self.state = self.fresh_state();
    }

    fn apply(&mut self, cursor: CursorPos, typed: Option<char>) -> InputOutcome {
        let mask = std::mem::take(&mut self.state.mask);
        match update_mask(&self.state.words, mask, cursor, typed) {
            MaskUpdate::Continue(mask) => {
                self.state.mask = mask;
                self.state.cursor = cursor;
                self.state.colors = classify(&self.state.mask, cursor);
                InputOutcome::Updated
            }
            MaskUpdate::Complete(mask) => {
                let elapsed = self
                    .state
                    .started_at
                    .map_or(Duration::ZERO, |start| self.clock.now().duration_since(start));
                let stats = Stats::compute(&mask, elapsed);
                tracing::info!(
                    chars_total = stats.chars_total,
                    chars_correct = stats.chars_correct,
                    chars_correct_pct = stats.chars_correct_pct,
                    words_total = stats.words_total,
                    words_correct = stats.words_correct,
                    words_correct_pct = stats.words_correct_pct,
                    wpm = stats.wpm,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "round complete"
                );
                self.state = self.fresh_state();
                InputOutcome::RoundComplete(stats)
            }
        }
    }

    fn fresh_state(&mut self) -> SessionState {
        let mut words = self.source.next_words(self.word_count);
        if words.is_empty() {
            words = self.state.words.clone();
        }
        tracing::info!(words = words.len(), "round started");
        SessionState::new(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::LetterStatus;
    use crate::mask::Mark::{self, Correct as C, Incorrect as I, Unset as U};
    use crate::runtime::ManualClock;
    use crate::word_source::FixedWords;
    use assert_matches::assert_matches;

    fn session(words: &[&str]) -> Session<FixedWords, ManualClock> {
        let words: Vec<&str> = words.to_vec();
        let count = words.len();
        Session::new(FixedWords::new(words), ManualClock::new(), count).unwrap()
    }

    /// Drives the session the way the input field does: one snapshot per
    /// key, plus the empty snapshot after every space
    fn type_keys<S: WordSource, C: Clock>(s: &mut Session<S, C>, keys: &str) -> Vec<InputOutcome> {
        let mut field = String::new();
        let mut outcomes = Vec::new();
        for key in keys.chars() {
            field.push(key);
            outcomes.push(s.on_input_change(&field));
            if key == ' ' {
                field.clear();
                outcomes.push(s.on_input_change(&field));
            }
        }
        outcomes
    }

    fn marks(s: &Session<FixedWords, ManualClock>) -> Vec<Vec<Mark>> {
        s.state().mask.iter().cloned().collect()
    }

    #[test]
    fn test_zero_words_is_an_error() {
        let result = Session::new(FixedWords::new(["cat"]), ManualClock::new(), 0);
        assert_matches!(result, Err(Error::NoWords));
    }

    #[test]
    fn test_empty_source_is_an_error() {
        let empty: [&str; 0] = [];
        let result = Session::new(FixedWords::new(empty), ManualClock::new(), 3);
        assert_matches!(result, Err(Error::NoWords));
    }

    #[test]
    fn test_fresh_round() {
        let s = session(&["cat", "dog"]);
        let state = s.state();

        assert_eq!(state.cursor, CursorPos::START);
        assert_eq!(marks(&s), vec![vec![U, U, U], vec![U, U, U]]);
        assert!(state.started_at.is_none());
        assert_eq!(state.colors[0][0], LetterStatus::CurrentLetter);
        assert_eq!(state.colors[1][0], LetterStatus::Default);
    }

    #[test]
    fn test_cat_dog_round() {
        let mut s = session(&["cat", "dog"]);
        let outcomes = type_keys(&mut s, "cat dxg");
        assert!(outcomes.iter().all(|o| *o == InputOutcome::Updated));
        assert_eq!(marks(&s), vec![vec![C, C, C], vec![C, I, C]]);

        let outcome = s.on_input_change("dxg ");
        let stats = assert_matches!(outcome, InputOutcome::RoundComplete(stats) => stats);
        assert_eq!(stats.words_correct, 1);
        assert_eq!(stats.words_total, 2);
        assert_eq!(stats.chars_correct, 5);
        assert_eq!(stats.chars_total, 6);
        assert_eq!(stats.chars_correct_pct, 83);
        assert_eq!(stats.words_correct_pct, 50);
    }

    #[test]
    fn test_skipped_word_resolves_incorrect() {
        let mut s = session(&["a", "bb"]);
        type_keys(&mut s, "x ");
        assert_eq!(marks(&s), vec![vec![I], vec![U, U]]);

        let outcome = s.on_input_change(" ");
        // the leading space on an untouched word is ignored, not a commit
        assert_eq!(outcome, InputOutcome::Ignored);

        s.on_input_change("b");
        s.on_input_change("");
        assert_eq!(s.on_input_change(" "), InputOutcome::Ignored);
        assert_eq!(s.state().cursor, CursorPos::new(1, None));
    }

    #[test]
    fn test_space_after_letters_commits_and_resolves() {
        let mut s = session(&["a", "bb"]);
        type_keys(&mut s, "x ");
        let outcome = s.on_input_change("q ");
        let stats = assert_matches!(outcome, InputOutcome::RoundComplete(stats) => stats);

        // "bb" was resolved to [Incorrect, Incorrect]
        assert_eq!(stats.chars_correct, 0);
        assert_eq!(stats.chars_total, 3);
        assert_eq!(stats.words_correct, 0);
    }

    #[test]
    fn test_double_space_does_not_skip_a_word() {
        let mut s = session(&["ab", "cd", "ef"]);
        type_keys(&mut s, "ab  ");
        assert_eq!(s.state().cursor, CursorPos::new(1, None));
        assert_eq!(marks(&s)[1], vec![U, U]);
    }

    #[test]
    fn test_backspace_past_start_is_floored() {
        let mut s = session(&["ab", "cd"]);
        s.on_input_change("x");
        s.on_input_change("");
        assert_eq!(s.state().cursor, CursorPos::new(0, None));
        assert_eq!(marks(&s)[0], vec![U, U]);

        s.on_input_change("a");
        s.on_input_change("ab");
        assert_eq!(marks(&s)[0], vec![C, C]);
    }

    #[test]
    fn test_backspace_then_retype() {
        let mut s = session(&["abc", "d"]);
        s.on_input_change("a");
        s.on_input_change("ax");
        assert_eq!(marks(&s)[0], vec![C, I, U]);

        s.on_input_change("a");
        assert_eq!(s.state().cursor, CursorPos::new(0, Some(0)));
        assert_eq!(marks(&s)[0], vec![C, U, U]);

        s.on_input_change("ab");
        s.on_input_change("abc");
        assert_eq!(marks(&s)[0], vec![C, C, C]);
    }

    #[test]
    fn test_overtype_is_not_scored() {
        let mut s = session(&["ab", "c"]);
        type_keys(&mut s, "abzz");
        assert_eq!(s.state().cursor, CursorPos::new(0, Some(3)));
        assert_eq!(marks(&s)[0], vec![C, C]);

        // deleting the extra letters walks back without touching the mask
        s.on_input_change("abz");
        s.on_input_change("ab");
        assert_eq!(s.state().cursor, CursorPos::new(0, Some(1)));
        assert_eq!(marks(&s)[0], vec![C, C]);
    }

    #[test]
    fn test_colors_follow_cursor() {
        let mut s = session(&["ab", "cd"]);
        s.on_input_change("a");
        let colors = &s.state().colors;

        assert_eq!(
            colors[0],
            vec![LetterStatus::CorrectCurrentWord, LetterStatus::CurrentLetter]
        );
        assert_eq!(colors[1], vec![LetterStatus::Default, LetterStatus::Default]);
    }

    #[test]
    fn test_timer_starts_on_first_letter_and_sets_wpm() {
        let clock = ManualClock::new();
        let mut s = Session::new(FixedWords::new(["ab", "cd"]), clock.clone(), 2).unwrap();

        // time spent before the first key does not count
        clock.advance(Duration::from_secs(100));
        assert!(s.state().started_at.is_none());
        type_keys(&mut s, "ab cd");
        assert!(s.state().started_at.is_some());

        clock.advance(Duration::from_secs(6));
        let stats = assert_matches!(
            s.on_input_change("cd "),
            InputOutcome::RoundComplete(stats) => stats
        );
        // 60 * 2 words / 6 seconds
        assert_eq!(stats.wpm, 20);
    }

    #[test]
    fn test_round_without_letters_has_zero_wpm() {
        let mut s = session(&["a"]);
        s.on_input_change("x");
        s.state.started_at = None;
        let stats = assert_matches!(
            s.on_input_change("x "),
            InputOutcome::RoundComplete(stats) => stats
        );
        assert_eq!(stats.wpm, 0);
    }

    #[test]
    fn test_completion_resets_the_round() {
        let mut s = session(&["a"]);
        type_keys(&mut s, "a");
        assert_matches!(s.on_input_change("a "), InputOutcome::RoundComplete(_));

        let state = s.state();
        assert_eq!(state.cursor, CursorPos::START);
        assert_eq!(state.words, vec!["a"]);
        assert!(state.typed_so_far.is_empty());
        assert!(state.started_at.is_none());
        assert!(state.mask.iter().flatten().all(|m| m.is_unset()));

        // the shell clears the field after the space; the new round absorbs it
        assert_eq!(s.on_input_change(""), InputOutcome::Updated);
        assert_eq!(s.state().cursor, CursorPos::START);
    }

    #[test]
    fn test_restart() {
        let mut s = session(&["ab", "cd"]);
        type_keys(&mut s, "ab c");
        s.restart();

        assert_eq!(s.state().cursor, CursorPos::START);
        assert!(s.state().started_at.is_none());
        assert_eq!(marks(&s), vec![vec![U, U], vec![U, U]]);
    }

    #[test]
    fn test_layout_wraps_words_and_colors_together() {
        let s = session(&["ab", "cd", "efg"]);
        let lines = s.layout(6);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].words, ["ab", "cd"]);
        assert_eq!(lines[1].first_word, 2);
        assert_eq!(lines[1].words, ["efg"]);
        assert_eq!(lines[1].colors[0].len(), 3);
    }
}
