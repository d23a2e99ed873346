use crate::commands::{CmdMessage, CmdResult, StyleFinderPaths};
use crate::config::StyleFinderConfig;
use crate::error::Result;
use crate::model::Medium;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    SetDefaultPurpose(Medium),
    SetFavoritesKey(String),
}

pub fn run(paths: &StyleFinderPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    let mut config = StyleFinderConfig::load_or_default(dir);
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            result = result.with_config(config);
        }
        ConfigAction::ShowKey(key) => match key.as_str() {
            "default-purpose" => {
                result.add_message(CmdMessage::info(format!(
                    "default-purpose = {}",
                    config.default_purpose
                )));
            }
            "favorites-key" => {
                result.add_message(CmdMessage::info(format!(
                    "favorites-key = {}",
                    config.favorites_key
                )));
            }
            other => {
                result.add_message(CmdMessage::error(format!("Unknown config key: {}", other)));
            }
        },
        ConfigAction::SetDefaultPurpose(medium) => {
            config.default_purpose = medium;
            config.save(dir)?;
            result.add_message(CmdMessage::success(format!(
                "default-purpose set to {}",
                medium
            )));
        }
        ConfigAction::SetFavoritesKey(key) => {
            config.set_favorites_key(&key)?;
            config.save(dir)?;
            result.add_message(CmdMessage::success(format!(
                "favorites-key set to {}",
                config.favorites_key
            )));
        }
    }

    Ok(result)
}
