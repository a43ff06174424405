// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod dictionary;
pub mod error;
pub mod logging;
pub mod presets;
pub mod render;

pub use crate::core::engine::SearchSession;
pub use crate::core::finder::MatchFinder;
pub use crate::core::pager::{PageState, ResultsView, MATCH_LIMIT};
pub use crate::core::pattern::{CompiledPattern, Dialect, PatternEngine};
pub use crate::core::types::{Locale, MatchInfo, MatchResult, SubMatchSpan, Word};
pub use crate::error::{DictRegexError, PatternError, Result};
