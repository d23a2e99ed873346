use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::favorites::Favorites;
use crate::store::KeyValueStore;

pub fn toggle<S: KeyValueStore>(
    catalog: &Catalog,
    favorites: &mut Favorites<S>,
    ids: &[String],
) -> Result<CmdResult> {
    // Resolve everything first so an unknown id leaves the set untouched.
    let styles = ids
        .iter()
        .map(|id| catalog.require(id))
        .collect::<Result<Vec<_>>>()?;

    let mut result = CmdResult::default();
    for style in styles {
        if favorites.toggle(&style.id) {
            result.add_message(CmdMessage::success(format!(
                "★ お気に入りに追加しました: {}",
                style.name_jp
            )));
        } else {
            result.add_message(CmdMessage::info(format!(
                "☆ お気に入りから外しました: {}",
                style.name_jp
            )));
        }
    }
    Ok(result)
}
