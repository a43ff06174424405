// File: src/error.rs
use std::io;

/// A user-supplied pattern that the selected engine refused to compile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid regular expression `{pattern}`: {message}")]
pub struct PatternError {
    pub pattern: String,
    pub message: String,
}

impl PatternError {
    pub fn new(pattern: &str, message: impl ToString) -> Self {
        Self {
            pattern: pattern.to_string(),
            message: message.to_string(),
        }
    }
}

/// Errors surfaced outside the pure matching core.
#[derive(Debug, thiserror::Error)]
pub enum DictRegexError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    /// A word-list snapshot could not be written or decoded.
    #[error("word list cache error: {0}")]
    Cache(#[from] bincode::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("unknown pattern dialect `{0}` (expected `ecma` or `rust`)")]
    UnknownDialect(String),
}

pub type Result<T> = std::result::Result<T, DictRegexError>;
