use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// An edit the player can make to the input field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    Insert(char),
    Backspace,
    Clear,
}

impl Edit {
    /// Maps a key press to an edit; keys that do not edit give `None`
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Edit::Clear)
            }
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                None
            }
            KeyCode::Char(c) => Some(Edit::Insert(c)),
            KeyCode::Backspace => Some(Edit::Backspace),
            _ => None,
        }
    }
}

/// Single-line text field that empties itself once a space is typed.
///
/// Every edit yields the field contents the game has to be told about, in
/// order: the text right after the edit and, when it ended in a space, the
/// empty text after the automatic clear.
#[derive(Clone, Debug, Default)]
pub struct InputField {
    text: String,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn apply(&mut self, edit: Edit) -> Vec<String> {
        match edit {
            Edit::Insert(c) => {
                self.text.push(c);
                let mut changes = vec![self.text.clone()];
                if self.text.ends_with(' ') {
                    self.text.clear();
                    changes.push(String::new());
                }
                changes
            }
            Edit::Backspace => match self.text.pop() {
                Some(_) => vec![self.text.clone()],
                None => vec![],
            },
            Edit::Clear if self.text.is_empty() => vec![],
            Edit::Clear => {
                self.text.clear();
                vec![String::new()]
            }
        }
    }

    pub fn reset(&mut self) {
        self.text.clear();
    }
}
