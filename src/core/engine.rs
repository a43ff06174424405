use crate::core::finder::MatchFinder;
use crate::core::pager::{PageState, ResultsView};
use crate::core::pattern::{Dialect, PatternEngine};
use crate::core::types::{Locale, Word};
use crate::error::PatternError;
use std::time::Instant;
use tracing::{debug, warn};

// The search session owns the loaded word list and the current page state.
// Each search or pager action replaces the state wholesale.
pub struct SearchSession {
    words: Vec<Word>,
    locale: Locale,
    engine: Box<dyn PatternEngine>,
    colorize: bool,
    query: String,
    page: Option<PageState>,
    last_error: Option<PatternError>,
    // Set by `search`, so the empty pattern still counts as a search.
    searched: bool,
}

impl SearchSession {
    pub fn new(locale: Locale, dialect: Dialect) -> Self {
        Self {
            words: Vec::new(),
            locale,
            engine: dialect.engine(),
            colorize: false,
            query: String::new(),
            page: None,
            last_error: None,
            searched: false,
        }
    }

    pub fn with_words(locale: Locale, dialect: Dialect, words: Vec<Word>) -> Self {
        let mut session = Self::new(locale, dialect);
        session.words = words;
        session
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn dialect(&self) -> Dialect {
        self.engine.dialect()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn colorize(&self) -> bool {
        self.colorize
    }

    pub fn page(&self) -> Option<&PageState> {
        self.page.as_ref()
    }

    pub fn last_error(&self) -> Option<&PatternError> {
        self.last_error.as_ref()
    }

    /// Compiles `query` and stages its matches. Previous results are cleared
    /// first, so a rejected pattern never leaves stale results behind.
    pub fn search(&mut self, query: &str) -> Result<&PageState, PatternError> {
        self.query = query.to_string();
        self.searched = true;
        self.page = None;
        self.last_error = None;

        let pattern = match self.engine.compile(query) {
            Ok(pattern) => pattern,
            Err(e) => {
                warn!(pattern = query, error = %e.message, "rejected pattern");
                self.last_error = Some(e.clone());
                return Err(e);
            }
        };

        let started = Instant::now();
        let matches = MatchFinder::find_matches(&self.words, pattern.as_ref(), self.colorize);
        debug!(
            pattern = query,
            colorize = self.colorize,
            words = self.words.len(),
            matches = matches.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "search finished"
        );

        let page = self.page.insert(PageState::start_search(matches));
        Ok(&*page)
    }

    /// Toggles span detail and re-runs the current query.
    pub fn set_colorize(&mut self, colorize: bool) {
        if self.colorize == colorize {
            return;
        }
        self.colorize = colorize;
        self.rerun();
    }

    /// Sets span detail for the next search without repeating the current one.
    pub fn set_colorize_flag(&mut self, colorize: bool) {
        self.colorize = colorize;
    }

    pub fn set_dialect(&mut self, dialect: Dialect) {
        if self.engine.dialect() == dialect {
            return;
        }
        self.engine = dialect.engine();
        self.rerun();
    }

    /// Swaps in a new dictionary (language change) and repeats the last search.
    pub fn replace_words(&mut self, locale: Locale, words: Vec<Word>) {
        self.locale = locale;
        self.words = words;
        self.rerun();
    }

    pub fn show_limited(&mut self) {
        self.page = self.page.take().map(PageState::show_limited);
    }

    pub fn show_all(&mut self) {
        self.page = self.page.take().map(PageState::show_all);
    }

    pub fn load_remaining(&mut self) {
        self.page = self.page.take().map(PageState::load_remaining);
    }

    /// Drops the query and any results.
    pub fn clear(&mut self) {
        self.query.clear();
        self.searched = false;
        self.page = None;
        self.last_error = None;
    }

    pub fn view(&self) -> ResultsView {
        self.page
            .as_ref()
            .map(|page| page.view_model(self.locale))
            .unwrap_or_else(ResultsView::empty)
    }

    fn rerun(&mut self) {
        if !self.searched {
            return;
        }
        let query = self.query.clone();
        // A rejected pattern is already recorded in `last_error`.
        let _ = self.search(&query);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pager::MATCH_LIMIT;
    use crate::core::types::MatchResult;

    fn session(list: &[&str]) -> SearchSession {
        let words = list.iter().map(|w| Word::from(*w)).collect();
        SearchSession::with_words(Locale::En, Dialect::Ecma, words)
    }

    #[test]
    fn empty_session_has_empty_view() {
        let s = SearchSession::new(Locale::En, Dialect::Ecma);
        assert_eq!(s.view(), ResultsView::empty());
    }

    #[test]
    fn invalid_pattern_clears_previous_results() {
        let mut s = session(&["word1", "word2"]);
        assert_eq!(s.search("word").unwrap().total(), 2);

        let err = s.search("[").unwrap_err();
        assert_eq!(err.pattern, "[");
        assert!(s.page().is_none());
        assert_eq!(s.last_error(), Some(&err));
        assert_eq!(s.view().count_label, "0");
    }

    #[test]
    fn colorize_toggle_reruns_query() {
        let mut s = session(&["aa", "b"]);
        s.search("a").unwrap();
        assert!(s.view().items[0].spans().is_empty());

        s.set_colorize(true);
        assert_eq!(s.view().items[0].spans().len(), 2);
    }

    #[test]
    fn language_change_keeps_the_query() {
        let mut s = session(&["word1"]);
        s.search("ש").unwrap();
        assert_eq!(s.view().total, 0);

        s.replace_words(Locale::He, vec![Word::from("שלום"), Word::from("ספר")]);
        assert_eq!(s.locale(), Locale::He);
        assert_eq!(s.view().total, 1);
    }

    #[test]
    fn dialect_switch_recompiles_the_query() {
        let mut s = session(&["abab", "ab"]);
        // Backreferences exist only in the ECMAScript dialect.
        assert_eq!(s.search("(ab)\\1").unwrap().total(), 1);

        s.set_dialect(Dialect::Rust);
        assert_eq!(s.dialect(), Dialect::Rust);
        assert_eq!(s.query(), "(ab)\\1");
        assert!(s.last_error().is_some());
        assert!(s.page().is_none());
    }

    #[test]
    fn empty_pattern_is_repeated_on_language_change() {
        let mut s = session(&["apple", "pear"]);
        assert_eq!(s.search("").unwrap().total(), 2);

        s.replace_words(Locale::He, vec![Word::from("שלום")]);
        let words: Vec<String> = s.view().items.iter().map(|m| m.word().to_string()).collect();
        assert_eq!(words, ["שלום"]);
    }

    #[test]
    fn empty_pattern_is_repeated_on_colorize_toggle() {
        let mut s = session(&["ab"]);
        s.search("").unwrap();
        s.set_colorize(true);
        // Only empty matches, so no word carries spans.
        assert_eq!(s.page().map(PageState::total), Some(0));
    }

    #[test]
    fn cleared_session_does_not_rerun() {
        let mut s = session(&["ab"]);
        s.search("").unwrap();
        s.clear();
        s.set_colorize(true);
        assert!(s.page().is_none());
    }

    #[test]
    fn colorize_flag_waits_for_next_search() {
        let mut s = session(&["aa"]);
        s.search("a").unwrap();
        s.set_colorize_flag(true);
        assert!(s.colorize());
        assert!(matches!(s.view().items[0], MatchResult::Plain { .. }));

        s.search("a").unwrap();
        assert_eq!(s.view().items[0].spans().len(), 2);
    }

    #[test]
    fn pager_actions_without_search_are_noops() {
        let mut s = session(&["a"]);
        s.show_all();
        s.load_remaining();
        s.show_limited();
        assert!(s.page().is_none());
    }

    #[test]
    fn new_search_supersedes_pager_state() {
        let words: Vec<String> = (0..MATCH_LIMIT + 10).map(|i| format!("word{i}")).collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let mut s = session(&refs);

        s.search("word").unwrap();
        s.show_all();
        assert_eq!(s.view().items.len(), MATCH_LIMIT + 10);

        s.search("^word1$").unwrap();
        let view = s.view();
        assert_eq!(view.count_label, "1");
        assert!(!view.has_more);
        assert_eq!(view.warning_total, None);
    }
}
