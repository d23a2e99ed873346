//! # Favorites
//!
//! The favorite set is loaded once when a session starts and written back
//! after every toggle. Persistence is best effort:
//!
//! - a missing key, an unreadable store or a value that is not a JSON array
//!   of strings all load as an empty set;
//! - a failed write is logged and otherwise ignored.
//!
//! The in-memory set is authoritative for the rest of the session either way.
//! The fallible [`try_load`] and [`try_save`] are exposed so the failure
//! paths can be tested directly.

use crate::error::{Result, StyleError};
use crate::store::KeyValueStore;
use std::collections::BTreeSet;

pub const DEFAULT_FAVORITES_KEY: &str = "designStyleFavorites";

pub type FavoriteSet = BTreeSet<String>;

pub fn try_load<S: KeyValueStore>(store: &S, key: &str) -> Result<FavoriteSet> {
    let Some(raw) = store.read(key)? else {
        return Ok(FavoriteSet::new());
    };
    let ids: Vec<String> = serde_json::from_str(&raw).map_err(StyleError::Serialization)?;
    Ok(ids.into_iter().collect())
}

pub fn try_save<S: KeyValueStore>(store: &mut S, key: &str, set: &FavoriteSet) -> Result<()> {
    let ids: Vec<&String> = set.iter().collect();
    let raw = serde_json::to_string(&ids).map_err(StyleError::Serialization)?;
    store.write(key, &raw)
}

pub struct Favorites<S: KeyValueStore> {
    store: S,
    key: String,
    ids: FavoriteSet,
}

impl<S: KeyValueStore> Favorites<S> {
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let ids = match try_load(&store, &key) {
            Ok(ids) => {
                tracing::debug!(key = %key, count = ids.len(), "favorites loaded");
                ids
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "could not load favorites, starting empty");
                FavoriteSet::new()
            }
        };
        Self { store, key, ids }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &FavoriteSet {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flip membership of `id` and persist. Returns whether `id` is now a
    /// favorite.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_favorite = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };
        self.save();
        now_favorite
    }

    pub fn save(&mut self) {
        if let Err(e) = try_save(&mut self.store, &self.key, &self.ids) {
            tracing::warn!(key = %self.key, error = %e, "could not persist favorites");
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
