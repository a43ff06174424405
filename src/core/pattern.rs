// File: src/core/pattern.rs
use crate::error::{DictRegexError, PatternError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A pattern that has already been validated by its engine.
/// Offsets are UTF-8 byte positions into `text`.
pub trait CompiledPattern: Send + Sync {
    /// Existence test; span detail is not needed.
    fn is_match(&self, text: &str) -> bool;

    /// The first match that starts at or after `from`, as `(start, end)`.
    fn find_from(&self, text: &str, from: usize) -> Option<(usize, usize)>;
}

/// Turns user text into a [`CompiledPattern`]. Dialect details belong to the engine.
pub trait PatternEngine: Send + Sync {
    fn dialect(&self) -> Dialect;
    fn compile(&self, pattern: &str) -> Result<Box<dyn CompiledPattern>, PatternError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// ECMAScript syntax, the same dialect a browser `RegExp` accepts.
    #[default]
    Ecma,
    Rust,
}

impl Dialect {
    pub fn engine(self) -> Box<dyn PatternEngine> {
        match self {
            Dialect::Ecma => Box::new(EcmaEngine),
            Dialect::Rust => Box::new(RustEngine),
        }
    }
}

impl FromStr for Dialect {
    type Err = DictRegexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ecma" | "js" | "ecmascript" => Ok(Dialect::Ecma),
            "rust" => Ok(Dialect::Rust),
            other => Err(DictRegexError::UnknownDialect(other.to_string())),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Ecma => write!(f, "ecma"),
            Dialect::Rust => write!(f, "rust"),
        }
    }
}

// --- ECMAScript engine (regress) ---

pub struct EcmaEngine;

struct EcmaPattern(regress::Regex);

impl PatternEngine for EcmaEngine {
    fn dialect(&self) -> Dialect {
        Dialect::Ecma
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn CompiledPattern>, PatternError> {
        regress::Regex::new(pattern)
            .map(|re| Box::new(EcmaPattern(re)) as Box<dyn CompiledPattern>)
            .map_err(|e| PatternError::new(pattern, e))
    }
}

impl CompiledPattern for EcmaPattern {
    fn is_match(&self, text: &str) -> bool {
        self.0.find(text).is_some()
    }

    fn find_from(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        if from > text.len() {
            return None;
        }
        self.0
            .find_from(text, from)
            .next()
            .map(|m| (m.start(), m.end()))
    }
}

// --- Rust engine (regex) ---

pub struct RustEngine;

struct RustPattern(regex::Regex);

impl PatternEngine for RustEngine {
    fn dialect(&self) -> Dialect {
        Dialect::Rust
    }

    fn compile(&self, pattern: &str) -> Result<Box<dyn CompiledPattern>, PatternError> {
        regex::Regex::new(pattern)
            .map(|re| Box::new(RustPattern(re)) as Box<dyn CompiledPattern>)
            .map_err(|e| PatternError::new(pattern, e))
    }
}

impl CompiledPattern for RustPattern {
    #[inline]
    fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }

    #[inline]
    fn find_from(&self, text: &str, from: usize) -> Option<(usize, usize)> {
        if from > text.len() {
            return None;
        }
        self.0.find_at(text, from).map(|m| (m.start(), m.end()))
    }
}
