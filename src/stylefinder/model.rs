use crate::error::StyleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse category label for a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Minimal,
    Tech,
    Casual,
    Premium,
    Creative,
    Corporate,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Minimal,
        Tone::Tech,
        Tone::Casual,
        Tone::Premium,
        Tone::Creative,
        Tone::Corporate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Minimal => "minimal",
            Tone::Tech => "tech",
            Tone::Casual => "casual",
            Tone::Premium => "premium",
            Tone::Creative => "creative",
            Tone::Corporate => "corporate",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| StyleError::UnknownTone(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub name: String,
    pub hex: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    pub label: String,
    pub name: String,
}

/// One catalog entry describing a visual design language.
///
/// `features` and `colors` are expected to be non-empty. Records that break
/// this still render, with the missing fragments left empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    pub id: String,
    pub name: String,
    pub name_jp: String,
    pub desc: String,
    pub tone: Tone,
    #[serde(default)]
    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub colors: Vec<Color>,
    #[serde(default)]
    pub fonts: Vec<Font>,
    #[serde(default)]
    pub preview_class: String,
}

impl StyleRecord {
    /// Heading used by the detail panel: `"{name} / {name_jp}"`.
    pub fn detail_title(&self) -> String {
        format!("{} / {}", self.name, self.name_jp)
    }
}

/// Entry of the tone navigation. The `all` id is part of the list; `favorites`
/// is not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneCategory {
    pub id: String,
    pub emoji: String,
    pub label: String,
}

pub const ALL_ID: &str = "all";
pub const FAVORITES_ID: &str = "favorites";

/// Which part of the catalog the grid shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selector {
    #[default]
    All,
    Tone(Tone),
    Favorites,
}

impl Selector {
    pub fn id(&self) -> &'static str {
        match self {
            Selector::All => ALL_ID,
            Selector::Tone(t) => t.as_str(),
            Selector::Favorites => FAVORITES_ID,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Selector {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ALL_ID => Ok(Selector::All),
            FAVORITES_ID => Ok(Selector::Favorites),
            other => other.parse().map(Selector::Tone),
        }
    }
}

/// Target output context for generated guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medium {
    #[default]
    Presentation,
    Website,
    App,
    Lp,
    Social,
}

impl Medium {
    pub const ALL: [Medium; 5] = [
        Medium::Presentation,
        Medium::Website,
        Medium::App,
        Medium::Lp,
        Medium::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Medium::Presentation => "presentation",
            Medium::Website => "website",
            Medium::App => "app",
            Medium::Lp => "lp",
            Medium::Social => "social",
        }
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Medium {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Medium::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| StyleError::UnknownMedium(s.to_string()))
    }
}
