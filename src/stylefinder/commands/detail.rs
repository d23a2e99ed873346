use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::favorites::FavoriteSet;
use crate::generator;
use crate::knowledge;
use crate::model::{Medium, StyleRecord};
use crate::state::ViewState;

pub const APPLIED_LABEL: &str = "✓ 適用中";
pub const APPLY_LABEL: &str = "このスタイルを適用";

/// Everything the detail panel shows for one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub style: StyleRecord,
    pub title: String,
    pub preview: String,
    pub purpose: Medium,
    pub purpose_label: String,
    pub document: String,
    pub is_applied: bool,
    pub apply_label: &'static str,
    pub is_favorite: bool,
    pub is_compared: bool,
}

pub fn build(
    catalog: &Catalog,
    state: &ViewState,
    favorites: &FavoriteSet,
    id: &str,
    purpose: Medium,
) -> Result<DetailView> {
    let style = catalog.require(id)?;
    let is_applied = state.is_applied(id);
    Ok(DetailView {
        title: style.detail_title(),
        preview: catalog.preview(id).to_string(),
        purpose,
        purpose_label: format!("（{}）", knowledge::profile(purpose).label),
        document: generator::generate(style, purpose),
        is_applied,
        apply_label: if is_applied { APPLIED_LABEL } else { APPLY_LABEL },
        is_favorite: favorites.contains(id),
        is_compared: state.is_compared(id),
        style: style.clone(),
    })
}

/// The detail panel for the style open in `state`, if any. A stale id (no
/// longer in the catalog) renders nothing.
pub fn open_detail(
    catalog: &Catalog,
    state: &ViewState,
    favorites: &FavoriteSet,
) -> Option<DetailView> {
    let id = state.open_style_id.as_deref()?;
    build(catalog, state, favorites, id, state.active_purpose).ok()
}

pub fn run(
    catalog: &Catalog,
    state: &ViewState,
    favorites: &FavoriteSet,
    id: &str,
    purpose: Medium,
) -> Result<CmdResult> {
    let detail = build(catalog, state, favorites, id, purpose)?;
    Ok(CmdResult::default().with_detail(detail))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleError;
    use crate::state::{reduce, Event};

    #[test]
    fn detail_follows_purpose_and_theme() {
        let catalog = Catalog::builtin();
        let state = reduce(ViewState::new(), &Event::ThemeApplied("swiss".into()));
        let favs: FavoriteSet = ["swiss".to_string()].into();

        let view = build(&catalog, &state, &favs, "swiss", Medium::Lp).unwrap();
        assert_eq!(view.title, "Swiss Style / スイス・スタイル");
        assert_eq!(view.purpose_label, "（LP用）");
        assert!(view.document.starts_with("# ランディングページ用デザイン設定"));
        assert!(view.is_applied);
        assert_eq!(view.apply_label, APPLIED_LABEL);
        assert!(view.is_favorite);
        assert!(!view.is_compared);

        let other = build(&catalog, &state, &favs, "glass", Medium::App).unwrap();
        assert_eq!(other.apply_label, APPLY_LABEL);
        assert!(!other.is_favorite);
    }

    #[test]
    fn missing_preview_renders_empty() {
        let catalog = Catalog::builtin();
        let view = build(&catalog, &ViewState::new(), &FavoriteSet::new(), "editorial", Medium::App)
            .unwrap();
        assert_eq!(view.preview, "");
    }

    #[test]
    fn open_detail_uses_state() {
        let catalog = Catalog::builtin();
        let state = reduce(ViewState::new(), &Event::DetailOpened("pop".into()));
        let state = reduce(state, &Event::PurposeChanged(Medium::Social));
        let view = open_detail(&catalog, &state, &FavoriteSet::new()).unwrap();
        assert_eq!(view.style.id, "pop");
        assert_eq!(view.purpose, Medium::Social);

        let stale = reduce(state, &Event::DetailOpened("vanished".into()));
        assert!(open_detail(&catalog, &stale, &FavoriteSet::new()).is_none());
        assert!(open_detail(&catalog, &ViewState::new(), &FavoriteSet::new()).is_none());
    }

    #[test]
    fn unknown_style_is_an_error() {
        let catalog = Catalog::builtin();
        let err = run(&catalog, &ViewState::new(), &FavoriteSet::new(), "zzz", Medium::App)
            .unwrap_err();
        assert!(matches!(err, StyleError::StyleNotFound(_)));
    }
}
