// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One dictionary entry. Shared so that match results never copy the word list.
pub type Word = Arc<str>;

/// A half-open `[start, end)` byte range of one pattern occurrence inside a word.
/// Always non-empty and on char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubMatchSpan {
    pub start: usize,
    pub end: usize,
}

/// Every non-overlapping occurrence of the pattern inside one word,
/// in left-to-right order. Never constructed with an empty span list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub source: Word,
    pub sub_matches: Vec<SubMatchSpan>,
}

/// A single search hit. One search yields only one of the two variants,
/// decided by the colorize flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MatchResult {
    Plain { word: Word },
    Colorized(MatchInfo),
}

impl MatchResult {
    /// The matched dictionary word, whatever the variant.
    pub fn word(&self) -> &str {
        match self {
            MatchResult::Plain { word } => word,
            MatchResult::Colorized(info) => &info.source,
        }
    }

    pub fn spans(&self) -> &[SubMatchSpan] {
        match self {
            MatchResult::Plain { .. } => &[],
            MatchResult::Colorized(info) => &info.sub_matches,
        }
    }
}

/// Which dictionary is loaded. Only selects the word list and text direction;
/// the matching core is locale-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    He,
}

impl Locale {
    /// Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "he" | "iw" => Locale::He,
            _ => Locale::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::He => "he",
        }
    }

    /// Name of the word-list file backing this locale.
    pub fn word_file(self) -> &'static str {
        match self {
            Locale::En => "words.txt",
            Locale::He => "hebrew_words.txt",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::He)
    }

    /// Digit-group separator used in counts.
    pub fn thousands_separator(self) -> char {
        match self {
            Locale::En | Locale::He => ',',
        }
    }

    /// The other locale, for a two-language toggle.
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::He,
            Locale::He => Locale::En,
        }
    }
}
