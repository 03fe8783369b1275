use include_dir::{include_dir, Dir};
use serde::Deserialize;

use crate::error::{Error, Result};

static LANG_DIR: Dir = include_dir!("src/lang");

pub const DEFAULT_LANGUAGE: &str = "english";

/// A vocabulary the game draws its words from
#[derive(Deserialize, Clone, Debug)]
pub struct Language {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Language {
    /// Loads one of the vocabularies bundled with the binary
    pub fn load(name: &str) -> Result<Self> {
        let file = LANG_DIR
            .get_file(format!("{name}.json"))
            .ok_or_else(|| Error::UnknownLanguage(name.to_string()))?;
        let contents = file
            .contents_utf8()
            .ok_or_else(|| Error::UnknownLanguage(name.to_string()))?;
        Self::from_json(contents)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let lang: Language = serde_json::from_str(json)?;
        lang.validate()?;
        Ok(lang)
    }

    /// Every word needs at least one letter and no whitespace, since a space
    /// is how the player moves on to the next word
    fn validate(&self) -> Result<()> {
        if self.words.is_empty() {
            return Err(Error::EmptyLanguage(self.name.clone()));
        }
        let invalid = |w: &String| w.is_empty() || w.chars().any(char::is_whitespace);
        if let Some(index) = self.words.iter().position(invalid) {
            return Err(Error::InvalidWord {
                name: self.name.clone(),
                index,
            });
        }
        Ok(())
    }
}
