use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::state::ViewState;

/// Text of the "current theme" badge: the applied style's localized name.
/// Hidden (`None`) when nothing is applied or the id is not in the catalog.
pub fn badge(catalog: &Catalog, state: &ViewState) -> Option<String> {
    let id = state.applied_theme_id.as_deref()?;
    catalog.get(id).map(|s| s.name_jp.clone())
}

/// Message describing the theme after an apply or reset.
pub fn report(catalog: &Catalog, state: &ViewState) -> CmdResult {
    let mut result = CmdResult::default();
    match badge(catalog, state) {
        Some(name) => result.add_message(CmdMessage::success(format!("適用中のテーマ: {}", name))),
        None => result.add_message(CmdMessage::info("テーマはリセットされています")),
    }
    result
}
