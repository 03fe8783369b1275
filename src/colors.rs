use crate::mask::{CursorPos, Mark, WordMask};

/// Display category of a single letter; the UI decides what it looks like
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "snake_case")]
pub enum LetterStatus {
    Default,
    Correct,
    Incorrect,
    CurrentLetter,
    DefaultCurrentWord,
    CorrectCurrentWord,
    IncorrectCurrentWord,
}

impl LetterStatus {
    fn from_mark(mark: Mark, current_word: bool) -> Self {
        match (mark, current_word) {
            (Mark::Unset, false) => LetterStatus::Default,
            (Mark::Correct, false) => LetterStatus::Correct,
            (Mark::Incorrect, false) => LetterStatus::Incorrect,
            (Mark::Unset, true) => LetterStatus::DefaultCurrentWord,
            (Mark::Correct, true) => LetterStatus::CorrectCurrentWord,
            (Mark::Incorrect, true) => LetterStatus::IncorrectCurrentWord,
        }
    }
}

/// One status per letter, one row per word
pub type ColorGrid = Vec<Vec<LetterStatus>>;

/// Classifies every letter of the mask for rendering.
///
/// Letters of the word under the cursor get the "current word" variants, and
/// the letter the player is about to type is highlighted on its own.
pub fn classify(mask: &WordMask, cursor: CursorPos) -> ColorGrid {
    mask.iter()
        .enumerate()
        .map(|(word_idx, marks)| {
            let current = word_idx == cursor.word;
            let mut row: Vec<LetterStatus> = marks
                .iter()
                .map(|&m| LetterStatus::from_mark(m, current))
                .collect();
            if current {
                if let Some(next) = row.get_mut(cursor.next_letter()) {
                    *next = LetterStatus::CurrentLetter;
                }
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::*;

    fn mask(rows: Vec<Vec<Mark>>) -> WordMask {
        WordMask::from(rows)
    }

    #[test]
    fn test_fresh_round_highlights_first_letter() {
        let m = WordMask::new(&["cat", "dog"]);
        let grid = classify(&m, CursorPos::START);
        assert_eq!(
            grid,
            vec![
                vec![CurrentLetter, DefaultCurrentWord, DefaultCurrentWord],
                vec![Default, Default, Default],
            ]
        );
    }

    #[test]
    fn test_current_word_variants_and_next_letter() {
        let m = mask(vec![
            vec![Mark::Correct, Mark::Incorrect],
            vec![Mark::Correct, Mark::Incorrect, Mark::Unset, Mark::Unset],
        ]);
        let grid = classify(&m, CursorPos::new(1, Some(1)));
        assert_eq!(grid[0], vec![Correct, Incorrect]);
        assert_eq!(
            grid[1],
            vec![
                CorrectCurrentWord,
                IncorrectCurrentWord,
                CurrentLetter,
                DefaultCurrentWord
            ]
        );
    }

    #[test]
    fn test_no_highlight_past_word_end() {
        let m = mask(vec![vec![Mark::Correct, Mark::Correct]]);
        let at_end = classify(&m, CursorPos::new(0, Some(1)));
        assert_eq!(at_end[0], vec![CorrectCurrentWord, CorrectCurrentWord]);

        let overtyped = classify(&m, CursorPos::new(0, Some(5)));
        assert_eq!(overtyped[0], vec![CorrectCurrentWord, CorrectCurrentWord]);
    }

    #[test]
    fn test_cursor_past_last_word_has_no_current_word() {
        let m = mask(vec![vec![Mark::Incorrect]]);
        let grid = classify(&m, CursorPos::new(1, None));
        assert_eq!(grid, vec![vec![Incorrect]]);
    }

    #[test]
    fn test_grid_shape_follows_mask() {
        let m = WordMask::new(&["a", "bcd", "ef"]);
        let grid = classify(&m, CursorPos::new(2, None));
        let lens: Vec<usize> = grid.iter().map(Vec::len).collect();
        assert_eq!(lens, vec![1, 3, 2]);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(CurrentLetter.to_string(), "current_letter");
        assert_eq!(IncorrectCurrentWord.to_string(), "incorrect_current_word");
    }
}
