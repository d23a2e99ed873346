//! # Catalog
//!
//! The immutable list of style records, the tone navigation entries and the
//! preview markup keyed by style id. Everything else reads from it; nothing
//! writes to it after construction.
//!
//! The built-in catalog is compiled in from `data/catalog.json`. A different
//! catalog with the same shape can be loaded from disk (see the
//! `catalog_path` config key).

use crate::error::{Result, StyleError};
use crate::model::{StyleRecord, Tone, ToneCategory};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

const BUILTIN_JSON: &str = include_str!("../../data/catalog.json");

static BUILTIN: Lazy<Catalog> = Lazy::new(|| match Catalog::from_json(BUILTIN_JSON) {
    Ok(catalog) => catalog,
    Err(e) => {
        tracing::error!(error = %e, "built-in catalog is invalid, starting with an empty catalog");
        Catalog::default()
    }
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    tones: Vec<ToneCategory>,
    styles: Vec<StyleRecord>,
    #[serde(default)]
    previews: HashMap<String, String>,
}

impl Catalog {
    pub fn new(
        styles: Vec<StyleRecord>,
        tones: Vec<ToneCategory>,
        previews: HashMap<String, String>,
    ) -> Self {
        Self {
            tones,
            styles,
            previews,
        }
    }

    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Parses a catalog document. Records with a duplicate id are dropped,
    /// keeping the first occurrence.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut catalog: Catalog = serde_json::from_str(json).map_err(StyleError::Serialization)?;
        let mut seen = HashSet::new();
        catalog.styles.retain(|s| {
            let fresh = seen.insert(s.id.clone());
            if !fresh {
                tracing::warn!(id = %s.id, "duplicate style id in catalog, ignoring");
            }
            fresh
        });
        for style in &catalog.styles {
            if style.features.is_empty() || style.colors.is_empty() {
                tracing::warn!(id = %style.id, "style has no features or colors, output will be partial");
            }
        }
        tracing::debug!(styles = catalog.styles.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(StyleError::Io)?;
        Self::from_json(&content)
    }

    pub fn styles(&self) -> &[StyleRecord] {
        &self.styles
    }

    pub fn tones(&self) -> &[ToneCategory] {
        &self.tones
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&StyleRecord> {
        self.styles.iter().find(|s| s.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&StyleRecord> {
        self.get(id)
            .ok_or_else(|| StyleError::StyleNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Preview markup for a style; empty when none is registered.
    pub fn preview(&self, id: &str) -> &str {
        self.previews.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn count_by_tone(&self, tone: Tone) -> usize {
        self.styles.iter().filter(|s| s.tone == tone).count()
    }
}
