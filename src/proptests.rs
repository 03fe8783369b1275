//! Property-based tests for the typing core.
//!
//! These tests use proptest to verify, for arbitrary words and edit sequences:
//! - The mask always has the shape of the words
//! - Words behind the cursor are fully resolved, words ahead are untouched
//! - Clearing a word and retyping it gives the same mask as typing it fresh

#![cfg(test)]

use proptest::prelude::*;

use crate::input_field::{Edit, InputField};
use crate::mask::Mark;
use crate::runtime::ManualClock;
use crate::session::{InputOutcome, Session, SessionState};
use crate::word_source::FixedWords;

// =============================================================================
// Arbitrary Generators
// =============================================================================

fn arb_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abc]{1,5}", 1..5)
}

fn arb_edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        6 => prop::sample::select(vec!['a', 'b', 'c', 'x']).prop_map(Edit::Insert),
        2 => Just(Edit::Insert(' ')),
        2 => Just(Edit::Backspace),
        1 => Just(Edit::Clear),
    ]
}

fn session(words: &[String]) -> Session<FixedWords, ManualClock> {
    Session::new(FixedWords::new(words.to_vec()), ManualClock::new(), words.len()).unwrap()
}

fn type_text(field: &mut InputField, s: &mut Session<FixedWords, ManualClock>, text: &str) {
    for c in text.chars() {
        for snapshot in field.apply(Edit::Insert(c)) {
            s.on_input_change(&snapshot);
        }
    }
}

fn check_shape(state: &SessionState) -> Result<(), TestCaseError> {
    let cursor = state.cursor;
    prop_assert!(cursor.word < state.words.len());
    prop_assert_eq!(state.mask.len(), state.words.len());
    prop_assert_eq!(state.colors.len(), state.words.len());

    for (idx, (word, marks)) in state.words.iter().zip(state.mask.iter()).enumerate() {
        prop_assert_eq!(marks.len(), word.chars().count());
        prop_assert_eq!(state.colors[idx].len(), marks.len());
        if idx < cursor.word {
            prop_assert!(marks.iter().all(|m| !m.is_unset()), "word {} left unset", idx);
        } else if idx > cursor.word {
            prop_assert!(marks.iter().all(|m| m.is_unset()), "word {} touched early", idx);
        }
    }
    Ok(())
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn mask_keeps_its_shape_under_any_edits(
        words in arb_words(),
        edits in prop::collection::vec(arb_edit(), 0..60),
    ) {
        let mut s = session(&words);
        let mut field = InputField::new();
        let total_letters: usize = words.iter().map(|w| w.chars().count()).sum();

        for edit in edits {
            for snapshot in field.apply(edit) {
                if let InputOutcome::RoundComplete(stats) = s.on_input_change(&snapshot) {
                    prop_assert_eq!(stats.chars_total, total_letters);
                    prop_assert_eq!(stats.words_total, words.len());
                    prop_assert!(stats.chars_correct <= stats.chars_total);
                    prop_assert!(stats.words_correct <= stats.words_total);
                }
                check_shape(s.state())?;
            }
        }
    }

    #[test]
    fn current_word_marks_only_typed_prefix(
        words in arb_words(),
        typed in "[abcx]{0,8}",
    ) {
        let mut s = session(&words);
        let mut field = InputField::new();
        type_text(&mut field, &mut s, &typed);

        let marks = s.state().mask.word(0).unwrap();
        let resolved = typed.chars().count().min(marks.len());
        prop_assert!(marks[..resolved].iter().all(|m| !m.is_unset()));
        prop_assert!(marks[resolved..].iter().all(|m| m.is_unset()));
        for (idx, (expected, got)) in words[0].chars().zip(typed.chars()).enumerate() {
            let mark = if expected == got { Mark::Correct } else { Mark::Incorrect };
            prop_assert_eq!(marks[idx], mark);
        }
    }

    #[test]
    fn clearing_then_retyping_matches_fresh_typing(
        words in arb_words(),
        junk in "[abcx]{1,8}",
        typed in "[abcx]{0,5}",
        clear_with_backspace in any::<bool>(),
    ) {
        let typed: String = typed.chars().take(words[0].chars().count()).collect();

        let mut fresh = session(&words);
        type_text(&mut InputField::new(), &mut fresh, &typed);

        let mut retyped = session(&words);
        let mut field = InputField::new();
        type_text(&mut field, &mut retyped, &junk);
        if clear_with_backspace {
            for _ in 0..junk.chars().count() {
                for snapshot in field.apply(Edit::Backspace) {
                    retyped.on_input_change(&snapshot);
                }
            }
        } else {
            for snapshot in field.apply(Edit::Clear) {
                retyped.on_input_change(&snapshot);
            }
        }
        type_text(&mut field, &mut retyped, &typed);

        prop_assert_eq!(&retyped.state().mask, &fresh.state().mask);
        prop_assert_eq!(retyped.state().cursor, fresh.state().cursor);
    }
}
