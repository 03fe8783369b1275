use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("a round needs at least one word")]
    NoWords,

    #[error("unknown vocabulary `{0}`")]
    UnknownLanguage(String),

    #[error("vocabulary `{0}` has no words")]
    EmptyLanguage(String),

    #[error("vocabulary `{name}` has an empty or multi-word entry at position {index}")]
    InvalidWord { name: String, index: usize },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to set up logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
