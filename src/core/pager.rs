// File: src/core/pager.rs
use crate::core::format::format_count;
use crate::core::types::{Locale, MatchResult};
use serde::{Deserialize, Serialize};

/// Page size beyond which results are truncated by default.
pub const MATCH_LIMIT: usize = 5000;

/// How the displayed prefix was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageView {
    /// Everything is shown because it fit, or the rest was loaded.
    Complete,
    /// The first `MATCH_LIMIT` results.
    Limited,
    /// The user explicitly asked for the full set.
    Expanded,
}

/// Display staging for one search's results.
///
/// `displayed()` is always a prefix of `all_matches()` whose length is either
/// `min(total, MATCH_LIMIT)` or `total`. Transitions consume the state and
/// return the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    all_matches: Vec<MatchResult>,
    displayed_len: usize,
    view: PageView,
    warning: Option<usize>,
}

impl PageState {
    /// Stages fresh search results. More than `MATCH_LIMIT` results start
    /// truncated with a warning carrying the total count.
    pub fn start_search(matches: Vec<MatchResult>) -> Self {
        let total = matches.len();
        if total > MATCH_LIMIT {
            tracing::debug!(total, limit = MATCH_LIMIT, "result set truncated");
            Self {
                all_matches: matches,
                displayed_len: MATCH_LIMIT,
                view: PageView::Limited,
                warning: Some(total),
            }
        } else {
            Self {
                all_matches: matches,
                displayed_len: total,
                view: PageView::Complete,
                warning: None,
            }
        }
    }

    /// Shows at most the first `MATCH_LIMIT` results and dismisses the warning.
    pub fn show_limited(self) -> Self {
        let displayed_len = self.limited_len();
        Self {
            displayed_len,
            view: PageView::Limited,
            warning: None,
            ..self
        }
    }

    /// Shows every result and dismisses the warning.
    pub fn show_all(self) -> Self {
        Self {
            displayed_len: self.all_matches.len(),
            view: PageView::Expanded,
            warning: None,
            ..self
        }
    }

    /// Loads whatever is not displayed yet. Nothing to load is a no-op.
    pub fn load_remaining(self) -> Self {
        if !self.has_more() {
            return self;
        }
        Self {
            displayed_len: self.all_matches.len(),
            view: PageView::Complete,
            warning: None,
            ..self
        }
    }

    pub fn all_matches(&self) -> &[MatchResult] {
        &self.all_matches
    }

    pub fn displayed(&self) -> &[MatchResult] {
        &self.all_matches[..self.displayed_len]
    }

    pub fn total(&self) -> usize {
        self.all_matches.len()
    }

    pub fn view(&self) -> PageView {
        self.view
    }

    /// Total count to surface when the initial result set was cut short.
    pub fn warning(&self) -> Option<usize> {
        self.warning
    }

    pub fn is_truncated(&self) -> bool {
        self.displayed_len < self.all_matches.len()
    }

    /// Whether a "load more" affordance should be offered.
    pub fn has_more(&self) -> bool {
        self.is_truncated()
    }

    pub fn remaining(&self) -> usize {
        self.all_matches.len() - self.displayed_len
    }

    /// `"3"` when everything is listed, `"5,000 of 6,000"` otherwise.
    /// An explicit show-all keeps the "of" form.
    pub fn count_label(&self, locale: Locale) -> String {
        let total = format_count(self.total(), locale);
        if self.displayed_len == self.total() && self.view != PageView::Expanded {
            total
        } else {
            format!("{} of {}", format_count(self.displayed_len, locale), total)
        }
    }

    pub fn load_more_label(&self, locale: Locale) -> Option<String> {
        self.has_more()
            .then(|| format!("Load {} more matches", format_count(self.remaining(), locale)))
    }

    /// Snapshot handed to a renderer.
    pub fn view_model(&self, locale: Locale) -> ResultsView {
        ResultsView {
            items: self.displayed().to_vec(),
            total: self.total(),
            count_label: self.count_label(locale),
            has_more: self.has_more(),
            load_more_label: self.load_more_label(locale),
            warning_total: self.warning.map(|n| format_count(n, locale)),
        }
    }

    fn limited_len(&self) -> usize {
        self.all_matches.len().min(MATCH_LIMIT)
    }
}

/// Everything a front-end needs to draw the result list without re-deriving
/// pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsView {
    pub items: Vec<MatchResult>,
    pub total: usize,
    pub count_label: String,
    pub has_more: bool,
    pub load_more_label: Option<String>,
    pub warning_total: Option<String>,
}

impl ResultsView {
    /// The view shown before any search, or after a rejected pattern.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            count_label: "0".to_string(),
            has_more: false,
            load_more_label: None,
            warning_total: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Word;

    fn results(n: usize) -> Vec<MatchResult> {
        (0..n)
            .map(|i| MatchResult::Plain { word: Word::from(format!("word{i}")) })
            .collect()
    }

    fn assert_prefix(state: &PageState) {
        let shown = state.displayed().len();
        let total = state.total();
        assert!(shown == total || shown == total.min(MATCH_LIMIT));
        assert_eq!(state.displayed(), &state.all_matches()[..shown]);
    }

    #[test]
    fn small_result_sets_are_complete() {
        let state = PageState::start_search(results(3));
        assert_eq!(state.displayed().len(), 3);
        assert!(!state.is_truncated());
        assert_eq!(state.warning(), None);
        assert_eq!(state.count_label(Locale::En), "3");
        assert_eq!(state.load_more_label(Locale::En), None);
    }

    #[test]
    fn exactly_the_limit_is_not_truncated() {
        let state = PageState::start_search(results(MATCH_LIMIT));
        assert!(!state.is_truncated());
        assert_eq!(state.count_label(Locale::En), "5,000");
    }

    #[test]
    fn large_result_sets_start_truncated() {
        let state = PageState::start_search(results(6000));
        assert!(state.is_truncated());
        assert_eq!(state.displayed().len(), 5000);
        assert_eq!(state.warning(), Some(6000));
        assert_eq!(state.count_label(Locale::En), "5,000 of 6,000");
        assert_eq!(
            state.load_more_label(Locale::En).as_deref(),
            Some("Load 1,000 more matches")
        );
        assert_prefix(&state);
    }

    #[test]
    fn show_all_then_limit() {
        let state = PageState::start_search(results(6000)).show_all();
        assert_eq!(state.displayed().len(), 6000);
        assert_eq!(state.warning(), None);
        assert_eq!(state.count_label(Locale::En), "6,000 of 6,000");
        assert!(!state.has_more());
        assert_prefix(&state);

        let state = state.show_limited();
        assert_eq!(state.displayed().len(), 5000);
        assert_eq!(state.count_label(Locale::En), "5,000 of 6,000");
        assert_eq!(state.warning(), None);
        assert_prefix(&state);
    }

    #[test]
    fn load_remaining_is_one_shot() {
        let state = PageState::start_search(results(6000)).load_remaining();
        assert_eq!(state.displayed().len(), 6000);
        assert_eq!(state.count_label(Locale::En), "6,000");
        assert!(!state.has_more());

        let again = state.clone().load_remaining();
        assert_eq!(again, state);
    }

    #[test]
    fn transitions_are_idempotent() {
        let base = PageState::start_search(results(5001));
        let all = base.clone().show_all();
        assert_eq!(all.clone().show_all(), all);
        let limited = base.show_limited();
        assert_eq!(limited.clone().show_limited(), limited);
    }

    #[test]
    fn show_limited_under_the_limit_shows_everything() {
        let state = PageState::start_search(results(10)).show_limited();
        assert_eq!(state.displayed().len(), 10);
        assert_eq!(state.count_label(Locale::En), "10");
        assert_prefix(&state);
    }

    #[test]
    fn view_model_carries_labels() {
        let view = PageState::start_search(results(6000)).view_model(Locale::En);
        assert_eq!(view.items.len(), 5000);
        assert_eq!(view.total, 6000);
        assert!(view.has_more);
        assert_eq!(view.warning_total.as_deref(), Some("6,000"));
    }
}
