use crate::catalog::Catalog;
use crate::favorites::FavoriteSet;
use crate::model::{Selector, StyleRecord, Tone, ALL_ID, FAVORITES_ID};

/// Normalized form of a search box value: trimmed and lowercased.
pub fn normalize_term(term: &str) -> String {
    term.to_lowercase().trim().to_string()
}

fn is_member(style: &StyleRecord, selector: Selector, favorites: &FavoriteSet) -> bool {
    match selector {
        Selector::All => true,
        Selector::Tone(tone) => style.tone == tone,
        Selector::Favorites => favorites.contains(&style.id),
    }
}

/// Whether `style` matches an already normalized term. The localized name is
/// compared as is; every other field is lowercased first.
pub fn matches_term(style: &StyleRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let folded = |s: &str| s.to_lowercase().contains(term);
    folded(style.name.as_str())
        || style.name_jp.contains(term)
        || folded(style.desc.as_str())
        || style.tags.iter().any(|t| folded(t.as_str()))
        || style.features.iter().any(|f| folded(f.as_str()))
}

/// The ordered subset of the catalog shown for `term` under `selector`.
pub fn filter_styles<'a>(
    catalog: &'a Catalog,
    favorites: &FavoriteSet,
    term: &str,
    selector: Selector,
) -> Vec<&'a StyleRecord> {
    let term = normalize_term(term);
    catalog
        .styles()
        .iter()
        .filter(|s| is_member(s, selector, favorites) && matches_term(s, &term))
        .collect()
}

/// `"{visible}件 / {total}件"` while a search is active, otherwise empty.
pub fn search_summary(raw_term: &str, visible: usize, total: usize) -> String {
    if raw_term.is_empty() {
        String::new()
    } else {
        format!("{}件 / {}件", visible, total)
    }
}

/// Every grid of the browser at once.
///
/// `aggregate` always reflects the search alone, whatever tone is selected;
/// the per-tone sections and `favorites` reflect both the search and their own
/// membership.
#[derive(Debug, Clone, PartialEq)]
pub struct GridView<'a> {
    pub aggregate: Vec<&'a StyleRecord>,
    pub sections: Vec<(Tone, Vec<&'a StyleRecord>)>,
    pub favorites: Vec<&'a StyleRecord>,
}

pub fn grids<'a>(catalog: &'a Catalog, favorites: &FavoriteSet, term: &str) -> GridView<'a> {
    GridView {
        aggregate: filter_styles(catalog, favorites, term, Selector::All),
        sections: Tone::ALL
            .iter()
            .map(|&tone| {
                (
                    tone,
                    filter_styles(catalog, favorites, term, Selector::Tone(tone)),
                )
            })
            .collect(),
        favorites: filter_styles(catalog, favorites, term, Selector::Favorites),
    }
}

/// One entry of the tone navigation with its badge count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneCount {
    pub id: String,
    pub emoji: String,
    pub label: String,
    pub count: usize,
}

/// Navigation counts. They do not depend on the search term: `all` counts the
/// whole catalog, each tone its own records, and the trailing favorites entry
/// the favorites that still exist in the catalog.
pub fn tone_counts(catalog: &Catalog, favorites: &FavoriteSet) -> Vec<ToneCount> {
    let mut counts: Vec<ToneCount> = catalog
        .tones()
        .iter()
        .map(|t| {
            let count = if t.id == ALL_ID {
                catalog.len()
            } else {
                t.id.parse::<Tone>()
                    .map(|tone| catalog.count_by_tone(tone))
                    .unwrap_or(0)
            };
            ToneCount {
                id: t.id.clone(),
                emoji: t.emoji.clone(),
                label: t.label.clone(),
                count,
            }
        })
        .collect();

    counts.push(ToneCount {
        id: FAVORITES_ID.to_string(),
        emoji: "★".to_string(),
        label: "お気に入り".to_string(),
        count: favorites.iter().filter(|id| catalog.contains(id)).count(),
    });
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Color;
    use std::collections::HashMap;

    fn record(id: &str, name_jp: &str, tone: Tone, tags: &[&str], features: &[&str]) -> StyleRecord {
        StyleRecord {
            id: id.into(),
            name: format!("Style {}", id.to_uppercase()),
            name_jp: name_jp.into(),
            desc: format!("{} description", id),
            tone,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            features: features.iter().map(|f| f.to_string()).collect(),
            colors: vec![Color {
                name: "c".into(),
                hex: "#000".into(),
            }],
            fonts: vec![],
            preview_class: String::new(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                record("swiss", "スイス", Tone::Minimal, &["ミニマル", "Grid"], &["余白"]),
                record("neon", "ネオン街", Tone::Tech, &["ダーク"], &["ネオングロー"]),
                record("pop", "ポップ", Tone::Casual, &["原色"], &["吹き出し"]),
                record("mono", "モノ", Tone::Minimal, &["白黒"], &["細い線"]),
            ],
            vec![],
            HashMap::new(),
        )
    }

    fn ids(styles: &[&StyleRecord]) -> Vec<String> {
        styles.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn empty_term_keeps_catalog_order() {
        let c = catalog();
        let favs = FavoriteSet::new();
        assert_eq!(
            ids(&filter_styles(&c, &favs, "  ", Selector::All)),
            vec!["swiss", "neon", "pop", "mono"]
        );
        assert_eq!(
            ids(&filter_styles(&c, &favs, "", Selector::Tone(Tone::Minimal))),
            vec!["swiss", "mono"]
        );
    }

    #[test]
    fn single_tag_match() {
        let c = catalog();
        let hits = filter_styles(&c, &FavoriteSet::new(), "ミニマル", Selector::All);
        assert_eq!(ids(&hits), vec!["swiss"]);
    }

    #[test]
    fn search_is_case_insensitive_and_trimmed() {
        let c = catalog();
        let favs = FavoriteSet::new();
        assert_eq!(ids(&filter_styles(&c, &favs, "  grid ", Selector::All)), vec!["swiss"]);
        assert_eq!(ids(&filter_styles(&c, &favs, "STYLE POP", Selector::All)), vec!["pop"]);
        assert_eq!(ids(&filter_styles(&c, &favs, "ネオン", Selector::All)), vec!["neon"]);
    }

    #[test]
    fn favorites_selector_uses_the_set() {
        let c = catalog();
        let favs: FavoriteSet = ["mono".to_string(), "gone".to_string()].into();
        assert_eq!(ids(&filter_styles(&c, &favs, "", Selector::Favorites)), vec!["mono"]);
        assert!(filter_styles(&c, &favs, "neon", Selector::Favorites).is_empty());
    }

    #[test]
    fn filter_is_idempotent_and_every_hit_matches() {
        let c = catalog();
        let favs = FavoriteSet::new();
        for term in ["", "s", "description", "モ", "x"] {
            let first = filter_styles(&c, &favs, term, Selector::All);
            let second = filter_styles(&c, &favs, term, Selector::All);
            assert_eq!(first, second);
            let norm = normalize_term(term);
            for s in first {
                let found = s.name.to_lowercase().contains(&norm)
                    || s.name_jp.contains(&norm)
                    || s.desc.to_lowercase().contains(&norm)
                    || s.tags.iter().any(|t| t.to_lowercase().contains(&norm))
                    || s.features.iter().any(|f| f.to_lowercase().contains(&norm));
                assert!(found, "{} matched {:?} without containing it", s.id, term);
            }
        }
    }

    #[test]
    fn aggregate_grid_ignores_tone() {
        let c = catalog();
        let view = grids(&c, &FavoriteSet::new(), "description");
        assert_eq!(view.aggregate.len(), 4);
        let minimal = view
            .sections
            .iter()
            .find(|(t, _)| *t == Tone::Minimal)
            .map(|(_, s)| ids(s))
            .unwrap();
        assert_eq!(minimal, vec!["swiss", "mono"]);
    }

    #[test]
    fn summary_only_while_searching() {
        assert_eq!(search_summary("", 4, 4), "");
        assert_eq!(search_summary("ネオン", 1, 18), "1件 / 18件");
    }

    #[test]
    fn tone_counts_cover_all_tones_and_favorites() {
        let c = Catalog::builtin();
        let favs: FavoriteSet = ["swiss".to_string(), "removed".to_string()].into();
        let counts = tone_counts(&c, &favs);
        assert_eq!(counts[0].id, "all");
        assert_eq!(counts[0].count, c.len());
        let per_tone: usize = counts[1..counts.len() - 1].iter().map(|t| t.count).sum();
        assert_eq!(per_tone, c.len());
        let last = counts.last().unwrap();
        assert_eq!(last.id, "favorites");
        assert_eq!(last.count, 1);
    }
}
