use crate::catalog::Catalog;
use crate::commands::filter::{filter_styles, search_summary, tone_counts};
use crate::commands::{CmdMessage, CmdResult};
use crate::favorites::FavoriteSet;
use crate::model::Selector;

pub fn run(catalog: &Catalog, favorites: &FavoriteSet, term: &str, selector: Selector) -> CmdResult {
    let visible: Vec<_> = filter_styles(catalog, favorites, term, selector)
        .into_iter()
        .cloned()
        .collect();
    let summary = search_summary(term, visible.len(), catalog.len());

    let mut result = CmdResult::default();
    if visible.is_empty() {
        let message = match selector {
            Selector::Favorites if term.is_empty() => "お気に入りはまだありません",
            _ => "該当するスタイルが見つかりません",
        };
        result.add_message(CmdMessage::info(message));
    }
    result
        .with_listed_styles(visible)
        .with_summary(summary)
        .with_tone_counts(tone_counts(catalog, favorites))
}
