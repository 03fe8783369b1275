/// Correctness of a single letter of a target word
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mark {
    #[default]
    Unset,
    Correct,
    Incorrect,
}

impl Mark {
    pub fn is_unset(self) -> bool {
        self == Mark::Unset
    }

    /// Unset letters become Incorrect, resolved letters keep their value
    fn resolved(self) -> Self {
        match self {
            Mark::Unset => Mark::Incorrect,
            mark => mark,
        }
    }
}

/// Position of the typing cursor within the word list.
///
/// `letter` is `None` while nothing has been typed for the current word yet,
/// otherwise it is the index of the last letter typed. It may run past the end
/// of the word while the player overtypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorPos {
    pub word: usize,
    pub letter: Option<usize>,
}

impl CursorPos {
    pub const START: CursorPos = CursorPos {
        word: 0,
        letter: None,
    };

    pub fn new(word: usize, letter: Option<usize>) -> Self {
        Self { word, letter }
    }

    /// One letter further into the current word
    pub fn advance(self) -> Self {
        Self {
            letter: Some(self.letter.map_or(0, |l| l + 1)),
            ..self
        }
    }

    /// One letter back, never further than before the first letter
    pub fn retreat(self) -> Self {
        Self {
            letter: self.letter.and_then(|l| l.checked_sub(1)),
            ..self
        }
    }

    /// Start of the following word
    pub fn next_word(self) -> Self {
        Self {
            word: self.word + 1,
            letter: None,
        }
    }

    /// Start of the current word
    pub fn word_start(self) -> Self {
        Self {
            letter: None,
            ..self
        }
    }

    /// Index of the letter the player is about to type
    pub fn next_letter(self) -> usize {
        self.letter.map_or(0, |l| l + 1)
    }
}

impl Default for CursorPos {
    fn default() -> Self {
        Self::START
    }
}

/// Per-word, per-letter correctness of a round
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordMask(Vec<Vec<Mark>>);

impl WordMask {
    /// All-unset mask shaped after `words`
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        Self(
            words
                .iter()
                .map(|w| vec![Mark::Unset; w.as_ref().chars().count()])
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn word(&self, idx: usize) -> Option<&[Mark]> {
        self.0.get(idx).map(Vec::as_slice)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<Mark>> {
        self.0.iter()
    }

    /// True once no letter anywhere is left unset
    pub fn is_resolved(&self) -> bool {
        self.0.iter().flatten().all(|m| !m.is_unset())
    }

    fn resolve_words(&mut self, upto: usize) {
        for word in self.0.iter_mut().take(upto) {
            word.iter_mut().for_each(|m| *m = m.resolved());
        }
    }
}

impl From<Vec<Vec<Mark>>> for WordMask {
    fn from(marks: Vec<Vec<Mark>>) -> Self {
        Self(marks)
    }
}

impl<'a> IntoIterator for &'a WordMask {
    type Item = &'a Vec<Mark>;
    type IntoIter = std::slice::Iter<'a, Vec<Mark>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Result of feeding one cursor move into the mask
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaskUpdate {
    /// The round goes on with the updated mask
    Continue(WordMask),
    /// The cursor moved past the last word; every letter has been resolved
    Complete(WordMask),
}

/// Applies a cursor move to the mask.
///
/// `typed` is the character the player produced at `cursor`, if any. Moving
/// the cursor past the last word finishes the round: every letter still unset
/// is marked incorrect and the final mask is returned as
/// [`MaskUpdate::Complete`].
///
/// # Panics
///
/// Panics when the mask does not match `words`, or when the mask holds
/// progress the cursor could not have produced (typed letters in later words,
/// or gaps before the cursor in the current word).
pub fn update_mask<S: AsRef<str>>(
    words: &[S],
    mut mask: WordMask,
    cursor: CursorPos,
    typed: Option<char>,
) -> MaskUpdate {
    assert_eq!(words.len(), mask.len(), "mask/word count mismatch");

    if cursor.word >= words.len() {
        mask.resolve_words(words.len());
        return MaskUpdate::Complete(mask);
    }

    // anything left unset before the cursor word was skipped with an early space
    mask.resolve_words(cursor.word);

    assert!(
        mask.0[cursor.word + 1..]
            .iter()
            .flatten()
            .all(|m| m.is_unset()),
        "words after the cursor must be untouched"
    );

    let word = words[cursor.word].as_ref();
    let letters = &mut mask.0[cursor.word];
    assert_eq!(
        word.chars().count(),
        letters.len(),
        "mask length differs from word {word:?}"
    );

    match cursor.letter {
        None => letters.iter_mut().for_each(|m| *m = Mark::Unset),
        // overtyped past the end of the word; extra keystrokes are not scored
        Some(idx) if idx >= letters.len() => {}
        Some(idx) => {
            assert!(
                letters[..idx].iter().all(|m| !m.is_unset()),
                "unset letters before the cursor in word {word:?}"
            );
            letters[idx + 1..].iter_mut().for_each(|m| *m = Mark::Unset);
            letters[idx] = if typed.is_some() && word.chars().nth(idx) == typed {
                Mark::Correct
            } else {
                Mark::Incorrect
            };
        }
    }

    MaskUpdate::Continue(mask)
}
