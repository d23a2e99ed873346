use crate::catalog::Catalog;
use crate::generator;
use crate::model::StyleRecord;
use crate::state::ViewState;

/// One column of the side-by-side comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareColumn {
    pub style: StyleRecord,
    pub tone_label: String,
    pub accent_hex: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareView {
    pub columns: Vec<CompareColumn>,
}

/// Resolves the comparison set against the catalog, in insertion order.
/// Ids that are no longer in the catalog are skipped. Returns `None` while
/// fewer than two styles resolve.
pub fn build(catalog: &Catalog, state: &ViewState) -> Option<CompareView> {
    if !state.can_open_compare() {
        return None;
    }
    let columns: Vec<CompareColumn> = state
        .compare_set
        .iter()
        .filter_map(|id| catalog.get(id))
        .map(|style| CompareColumn {
            tone_label: tone_label(catalog, style),
            accent_hex: generator::accent_color(style)
                .map(|c| c.hex.clone())
                .unwrap_or_default(),
            style: style.clone(),
        })
        .collect();

    if columns.len() < crate::state::MIN_COMPARE {
        return None;
    }
    Some(CompareView { columns })
}

fn tone_label(catalog: &Catalog, style: &StyleRecord) -> String {
    catalog
        .tones()
        .iter()
        .find(|t| t.id == style.tone.as_str())
        .map(|t| format!("{} {}", t.emoji, t.label))
        .unwrap_or_else(|| style.tone.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{reduce, Event};

    fn state_with(ids: &[&str]) -> ViewState {
        ids.iter().fold(ViewState::new(), |s, id| {
            reduce(s, &Event::CompareToggled(id.to_string()))
        })
    }

    #[test]
    fn needs_two_styles() {
        let catalog = Catalog::builtin();
        assert!(build(&catalog, &state_with(&["swiss"])).is_none());
        let view = build(&catalog, &state_with(&["swiss", "cyberpunk"])).unwrap();
        let ids: Vec<_> = view.columns.iter().map(|c| c.style.id.as_str()).collect();
        assert_eq!(ids, vec!["swiss", "cyberpunk"]);
        assert_eq!(view.columns[1].accent_hex, "#05D9E8");
        assert_eq!(view.columns[1].tone_label, "💻 テック");
    }

    #[test]
    fn skips_ids_missing_from_catalog() {
        let catalog = Catalog::builtin();
        let view = build(&catalog, &state_with(&["swiss", "ghost", "pop"])).unwrap();
        assert_eq!(view.columns.len(), 2);
        assert!(build(&catalog, &state_with(&["swiss", "ghost"])).is_none());
    }
}
