//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every stylefinder operation, whatever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! `StyleFinderApi` owns one browsing session:
//! - the [`Catalog`] it browses,
//! - the [`ViewState`] that user actions change,
//! - the persisted [`Favorites`].
//!
//! User actions arrive as [`Event`]s through [`StyleFinderApi::dispatch`].
//! The facade validates ids against the catalog, hands the event to the pure
//! reducer (or to the favorites store) and returns a [`CmdResult`] holding the
//! projections the UI should refresh. It does no printing and no formatting.
//!
//! ## Generic Over KeyValueStore
//!
//! - Production: `StyleFinderApi<FileStore>`
//! - Testing: `StyleFinderApi<InMemoryStore>`
//!
//! ## Testing Strategy
//!
//! API tests check routing and validation. Filtering, generation and the
//! reducer are tested in their own modules.

use crate::catalog::Catalog;
use crate::commands::{self, CmdMessage, CmdResult, CompareView, DetailView, GridView, ToneCount};
use crate::commands::config::ConfigAction;
use crate::config::StyleFinderConfig;
use crate::error::{Result, StyleError};
use crate::favorites::{FavoriteSet, Favorites};
use crate::generator;
use crate::model::Medium;
use crate::state::{self, Event, ViewState, MAX_COMPARE};
use crate::store::KeyValueStore;

pub struct StyleFinderApi<S: KeyValueStore> {
    catalog: Catalog,
    state: ViewState,
    favorites: Favorites<S>,
    paths: commands::StyleFinderPaths,
}

impl<S: KeyValueStore> StyleFinderApi<S> {
    pub fn new(
        catalog: Catalog,
        store: S,
        config: &StyleFinderConfig,
        paths: commands::StyleFinderPaths,
    ) -> Self {
        tracing::debug!(
            styles = catalog.len(),
            purpose = %config.default_purpose,
            "starting session"
        );
        Self {
            state: ViewState::new().with_purpose(config.default_purpose),
            favorites: Favorites::load(store, config.favorites_key.clone()),
            catalog,
            paths,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn favorites(&self) -> &FavoriteSet {
        self.favorites.ids()
    }

    pub fn into_store(self) -> S {
        self.favorites.into_store()
    }

    /// Applies one user action and returns what changed.
    ///
    /// Opening a detail, applying a theme or toggling a favorite for an id
    /// that is not in the catalog is an error. An unknown id, or a new id
    /// while the comparison set is full, leaves the set unchanged and comes
    /// back as a warning.
    pub fn dispatch(&mut self, event: Event) -> Result<CmdResult> {
        tracing::debug!(?event, "dispatch");
        match &event {
            Event::DetailOpened(id) | Event::ThemeApplied(id) => {
                self.catalog.require(id)?;
            }
            Event::CompareToggled(id) => {
                if let Some(warning) = self.compare_rejection(id) {
                    let mut result = CmdResult::default();
                    result.add_message(warning);
                    return Ok(result);
                }
            }
            Event::FavoriteToggled(id) => {
                return commands::favorite::toggle(
                    &self.catalog,
                    &mut self.favorites,
                    std::slice::from_ref(id),
                );
            }
            _ => {}
        }

        self.state = state::reduce(std::mem::take(&mut self.state), &event);

        let mut result = CmdResult::default();
        match event {
            Event::FilterSelected(_) | Event::SearchChanged(_) | Event::SearchCleared => {
                result = self.list();
            }
            Event::DetailOpened(_) | Event::PurposeChanged(_) => {
                if let Some(detail) = self.detail() {
                    result = result.with_detail(detail);
                }
            }
            Event::ThemeApplied(_) | Event::ThemeReset => {
                result = commands::theme::report(&self.catalog, &self.state);
                if let Some(detail) = self.detail() {
                    result = result.with_detail(detail);
                }
            }
            Event::CompareToggled(_) | Event::CompareCleared => {
                result.add_message(CmdMessage::info(format!(
                    "比較: {} / {}",
                    self.state.compare_set.len(),
                    MAX_COMPARE
                )));
                if let Some(view) = self.compare() {
                    result = result.with_compare(view);
                }
            }
            Event::DetailClosed | Event::FavoriteToggled(_) => {}
        }
        Ok(result)
    }

    fn compare_rejection(&self, id: &str) -> Option<CmdMessage> {
        if !self.catalog.contains(id) {
            return Some(CmdMessage::warning(
                StyleError::StyleNotFound(id.to_string()).to_string(),
            ));
        }
        if !self.state.is_compared(id) && self.state.compare_set.len() >= MAX_COMPARE {
            return Some(CmdMessage::warning(format!(
                "比較できるのは{}件までです",
                MAX_COMPARE
            )));
        }
        None
    }

    /// The styles visible under the current search and selector.
    pub fn list(&self) -> CmdResult {
        commands::list::run(
            &self.catalog,
            self.favorites.ids(),
            &self.state.search_term,
            self.state.active_filter,
        )
    }

    pub fn grids(&self) -> GridView<'_> {
        commands::filter::grids(&self.catalog, self.favorites.ids(), &self.state.search_term)
    }

    pub fn tone_counts(&self) -> Vec<ToneCount> {
        commands::filter::tone_counts(&self.catalog, self.favorites.ids())
    }

    pub fn detail(&self) -> Option<DetailView> {
        commands::detail::open_detail(&self.catalog, &self.state, self.favorites.ids())
    }

    /// Detail panel for any style, without opening it.
    pub fn show(&self, id: &str, purpose: Medium) -> Result<CmdResult> {
        commands::detail::run(&self.catalog, &self.state, self.favorites.ids(), id, purpose)
    }

    pub fn compare(&self) -> Option<CompareView> {
        commands::compare::build(&self.catalog, &self.state)
    }

    pub fn theme_badge(&self) -> Option<String> {
        commands::theme::badge(&self.catalog, &self.state)
    }

    pub fn generate(&self, id: &str, medium: Medium) -> Result<String> {
        let style = self.catalog.require(id)?;
        Ok(generator::generate(style, medium))
    }

    pub fn toggle_favorites(&mut self, ids: &[String]) -> Result<CmdResult> {
        commands::favorite::toggle(&self.catalog, &mut self.favorites, ids)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }
}
