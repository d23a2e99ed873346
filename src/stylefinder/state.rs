//! # View State
//!
//! Everything the browser remembers between two user actions, as one owned
//! struct, and [`reduce`], the only way it changes. Each user action is an
//! [`Event`]; `reduce` is a pure `(state, event) -> state` function so every
//! transition can be tested without any UI.
//!
//! Favorites are not part of this struct: they have their own persisted store
//! (see [`crate::favorites`]). `Event::FavoriteToggled` passes through the
//! reducer untouched and is handled by the session.

use crate::model::{Medium, Selector};

/// Upper bound of the comparison set.
pub const MAX_COMPARE: usize = 4;

/// The compare view needs at least this many styles.
pub const MIN_COMPARE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub active_filter: Selector,
    pub search_term: String,
    pub open_style_id: Option<String>,
    pub active_purpose: Medium,
    pub applied_theme_id: Option<String>,
    /// Insertion-ordered, no duplicates, at most [`MAX_COMPARE`] entries.
    pub compare_set: Vec<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_purpose(mut self, purpose: Medium) -> Self {
        self.active_purpose = purpose;
        self
    }

    pub fn can_open_compare(&self) -> bool {
        self.compare_set.len() >= MIN_COMPARE
    }

    pub fn is_compared(&self, id: &str) -> bool {
        self.compare_set.iter().any(|c| c == id)
    }

    pub fn is_applied(&self, id: &str) -> bool {
        self.applied_theme_id.as_deref() == Some(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    FilterSelected(Selector),
    SearchChanged(String),
    SearchCleared,
    DetailOpened(String),
    DetailClosed,
    PurposeChanged(Medium),
    ThemeApplied(String),
    ThemeReset,
    CompareToggled(String),
    CompareCleared,
    FavoriteToggled(String),
}

pub fn reduce(mut state: ViewState, event: &Event) -> ViewState {
    match event {
        Event::FilterSelected(selector) => state.active_filter = *selector,
        Event::SearchChanged(term) => state.search_term = term.clone(),
        Event::SearchCleared => state.search_term.clear(),
        Event::DetailOpened(id) => state.open_style_id = Some(id.clone()),
        Event::DetailClosed => state.open_style_id = None,
        Event::PurposeChanged(medium) => state.active_purpose = *medium,
        Event::ThemeApplied(id) => {
            state.applied_theme_id = if state.is_applied(id) {
                None
            } else {
                Some(id.clone())
            };
        }
        Event::ThemeReset => state.applied_theme_id = None,
        Event::CompareToggled(id) => toggle_compare(&mut state.compare_set, id),
        Event::CompareCleared => state.compare_set.clear(),
        Event::FavoriteToggled(_) => {}
    }
    state
}

fn toggle_compare(set: &mut Vec<String>, id: &str) {
    if let Some(pos) = set.iter().position(|c| c == id) {
        set.remove(pos);
    } else if set.len() < MAX_COMPARE {
        set.push(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tone;

    fn with_compare(ids: &[&str]) -> ViewState {
        ids.iter().fold(ViewState::new(), |s, id| {
            reduce(s, &Event::CompareToggled(id.to_string()))
        })
    }

    fn compare_ids(state: &ViewState) -> Vec<&str> {
        state.compare_set.iter().map(String::as_str).collect()
    }

    #[test]
    fn defaults() {
        let s = ViewState::new();
        assert_eq!(s.active_filter, Selector::All);
        assert_eq!(s.active_purpose, Medium::Presentation);
        assert!(s.search_term.is_empty());
        assert!(s.open_style_id.is_none());
        assert!(s.applied_theme_id.is_none());
        assert!(s.compare_set.is_empty());
    }

    #[test]
    fn full_compare_set_ignores_new_ids_but_allows_removal() {
        let full = with_compare(&["a", "b", "c", "d"]);
        let same = reduce(full.clone(), &Event::CompareToggled("e".into()));
        assert_eq!(compare_ids(&same), vec!["a", "b", "c", "d"]);

        let removed = reduce(same, &Event::CompareToggled("b".into()));
        assert_eq!(compare_ids(&removed), vec!["a", "c", "d"]);
    }

    #[test]
    fn compare_toggle_is_self_inverse() {
        let start = with_compare(&["a", "b"]);
        let event = Event::CompareToggled("c".into());
        let back = reduce(reduce(start.clone(), &event), &event);
        assert_eq!(back, start);

        let event = Event::CompareToggled("a".into());
        let twice = reduce(reduce(start.clone(), &event), &event);
        // Re-adding appends, so membership is restored but order moves.
        assert_eq!(compare_ids(&twice), vec!["b", "a"]);
    }

    #[test]
    fn compare_set_never_exceeds_max() {
        let mut state = ViewState::new();
        for i in 0..20 {
            let id = format!("s{}", i % 7);
            state = reduce(state, &Event::CompareToggled(id));
            assert!(state.compare_set.len() <= MAX_COMPARE);
        }
    }

    #[test]
    fn compare_view_needs_two() {
        assert!(!with_compare(&["a"]).can_open_compare());
        assert!(with_compare(&["a", "b"]).can_open_compare());
        let cleared = reduce(with_compare(&["a", "b"]), &Event::CompareCleared);
        assert!(cleared.compare_set.is_empty());
    }

    #[test]
    fn apply_theme_toggles_and_replaces() {
        let s = reduce(ViewState::new(), &Event::ThemeApplied("a".into()));
        assert_eq!(s.applied_theme_id.as_deref(), Some("a"));

        let off = reduce(s.clone(), &Event::ThemeApplied("a".into()));
        assert_eq!(off.applied_theme_id, None);

        let replaced = reduce(s, &Event::ThemeApplied("b".into()));
        assert_eq!(replaced.applied_theme_id.as_deref(), Some("b"));

        let reset = reduce(replaced, &Event::ThemeReset);
        assert_eq!(reset.applied_theme_id, None);
    }

    #[test]
    fn opening_detail_keeps_other_state() {
        let s = ViewState::new();
        let s = reduce(s, &Event::FilterSelected(Selector::Tone(Tone::Tech)));
        let s = reduce(s, &Event::SearchChanged("ネオン".into()));
        let s = reduce(s, &Event::PurposeChanged(Medium::App));
        let s = reduce(s, &Event::DetailOpened("cyberpunk".into()));

        assert_eq!(s.open_style_id.as_deref(), Some("cyberpunk"));
        assert_eq!(s.active_filter, Selector::Tone(Tone::Tech));
        assert_eq!(s.search_term, "ネオン");
        assert_eq!(s.active_purpose, Medium::App);

        let closed = reduce(s, &Event::DetailClosed);
        assert!(closed.open_style_id.is_none());
        assert_eq!(closed.active_purpose, Medium::App);
    }

    #[test]
    fn search_clear_and_favorite_passthrough() {
        let s = reduce(ViewState::new(), &Event::SearchChanged("x".into()));
        let s = reduce(s, &Event::SearchCleared);
        assert!(s.search_term.is_empty());

        let before = s.clone();
        let after = reduce(s, &Event::FavoriteToggled("a".into()));
        assert_eq!(before, after);
    }
}
