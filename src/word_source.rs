use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::language::Language;

/// Supplies the words for each new round
pub trait WordSource {
    fn next_words(&mut self, count: usize) -> Vec<String>;
}

/// Draws words uniformly at random from a vocabulary, repeats allowed
#[derive(Debug)]
pub struct RandomWords {
    language: Language,
    rng: StdRng,
}

impl RandomWords {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible draws for a given seed
    pub fn with_seed(language: Language, seed: u64) -> Self {
        Self {
            language,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl WordSource for RandomWords {
    fn next_words(&mut self, count: usize) -> Vec<String> {
        (0..count)
            .filter_map(|_| self.language.words.choose(&mut self.rng).cloned())
            .collect()
    }
}

/// Serves the same words every round
#[derive(Clone, Debug)]
pub struct FixedWords {
    words: Vec<String>,
}

impl FixedWords {
    pub fn new<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl WordSource for FixedWords {
    /// The fixed list is cycled or cut to `count` words
    fn next_words(&mut self, count: usize) -> Vec<String> {
        self.words.iter().cycle().take(count).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::DEFAULT_LANGUAGE;

    fn english() -> Language {
        Language::load(DEFAULT_LANGUAGE).unwrap()
    }

    #[test]
    fn test_random_words_count_and_membership() {
        let vocabulary = english().words;
        let mut source = RandomWords::new(english());
        let words = source.next_words(12);

        assert_eq!(words.len(), 12);
        assert!(words.iter().all(|w| vocabulary.contains(w)));
    }

    #[test]
    fn test_random_words_may_exceed_vocabulary_size() {
        let lang = Language::from_json(r#"{ "name": "tiny", "size": 2, "words": ["a", "b"] }"#)
            .unwrap();
        let mut source = RandomWords::new(lang);
        assert_eq!(source.next_words(10).len(), 10);
    }

    #[test]
    fn test_seeded_draws_repeat() {
        let mut a = RandomWords::with_seed(english(), 42);
        let mut b = RandomWords::with_seed(english(), 42);
        assert_eq!(a.next_words(20), b.next_words(20));
    }

    #[test]
    fn test_zero_words() {
        let mut source = RandomWords::new(english());
        assert!(source.next_words(0).is_empty());
    }

    #[test]
    fn test_fixed_words_cycle_and_truncate() {
        let mut source = FixedWords::new(["cat", "dog"]);
        assert_eq!(source.next_words(1), vec!["cat"]);
        assert_eq!(source.next_words(3), vec!["cat", "dog", "cat"]);
        assert_eq!(source.next_words(2), vec!["cat", "dog"]);
    }
}
