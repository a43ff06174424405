// File: src/core/finder.rs
use crate::core::pattern::CompiledPattern;
use crate::core::types::{MatchInfo, MatchResult, SubMatchSpan, Word};

/// Applies a compiled pattern to a word list.
pub struct MatchFinder;

impl MatchFinder {
    /// Returns the matching words in dictionary order.
    ///
    /// Without `colorize` a word is kept iff the pattern matches anywhere in it.
    /// With `colorize` each kept word carries every non-overlapping span found by
    /// resuming the search at the end of the previous match.
    /// Zero-width matches are not spans, so a word that only matches with empty
    /// width (e.g. `a*` on `"bbb"`, or a bare lookahead) is kept in plain mode but
    /// left out in colorize mode.
    /// O(total characters) for plain mode.
    pub fn find_matches(
        words: &[Word],
        pattern: &dyn CompiledPattern,
        colorize: bool,
    ) -> Vec<MatchResult> {
        if colorize {
            words
                .iter()
                .filter_map(|word| Self::match_info(word, pattern))
                .map(MatchResult::Colorized)
                .collect()
        } else {
            words
                .iter()
                .filter(|word| pattern.is_match(word))
                .map(|word| MatchResult::Plain { word: Word::clone(word) })
                .collect()
        }
    }

    /// Collects all spans of `pattern` in `word`, or `None` when there are none.
    pub fn match_info(word: &Word, pattern: &dyn CompiledPattern) -> Option<MatchInfo> {
        let sub_matches = Self::sub_matches(word, pattern);
        if sub_matches.is_empty() {
            return None;
        }
        Some(MatchInfo {
            source: Word::clone(word),
            sub_matches,
        })
    }

    /// Global-match scan. A zero-length match is not a span; the cursor then
    /// steps over one character so the scan always terminates.
    pub fn sub_matches(text: &str, pattern: &dyn CompiledPattern) -> Vec<SubMatchSpan> {
        let mut spans = Vec::new();
        let mut cursor = 0;

        while cursor <= text.len() {
            let Some((start, end)) = pattern.find_from(text, cursor) else {
                break;
            };
            if end > start {
                spans.push(SubMatchSpan { start, end });
                cursor = end;
            } else {
                // Empty match at `start`: skip the character that follows it.
                match text[start..].chars().next() {
                    Some(c) => cursor = start + c.len_utf8(),
                    None => break,
                }
            }
        }

        spans
    }
}
