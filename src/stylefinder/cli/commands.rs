//! # CLI Layer
//!
//! This module is **one possible UI client** for stylefinder. It is the only
//! place that parses arguments, prints to the terminal, installs the
//! `tracing` subscriber and turns errors into exit codes.
//!
//! ## Structure
//!
//! - `run()`: main dispatch logic (called by `main.rs`)
//! - `init_context()`: resolves the data directory, loads config and catalog,
//!   and builds the API over a `FileStore`
//! - `handle_*()`: per-command handlers that call the API and print results

use super::render::{
    print_messages, print_style_list, render_compare, render_detail, render_grid,
    render_tone_counts,
};
use super::session;
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use stylefinder::api::StyleFinderApi;
use stylefinder::catalog::Catalog;
use stylefinder::clipboard::copy_to_clipboard;
use stylefinder::commands::config::ConfigAction;
use stylefinder::commands::{CmdMessage, MessageLevel, StyleFinderPaths};
use stylefinder::config::StyleFinderConfig;
use stylefinder::error::{Result, StyleError};
use stylefinder::model::{Medium, Selector};
use stylefinder::state::Event;
use stylefinder::store::fs::FileStore;
use stylefinder::store::KeyValueStore;
use tracing_subscriber::EnvFilter;

/// Overrides the data directory (config, favorites).
const HOME_ENV: &str = "STYLEFINDER_HOME";

/// Log filter, in `tracing_subscriber::EnvFilter` syntax.
const LOG_ENV: &str = "STYLEFINDER_LOG";

const COMPARE_NOTICE: &str = "比較するには2つ以上のスタイルを選択してください";
const COPIED: &str = "コピー完了！";

struct AppContext {
    api: StyleFinderApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::List { tone, search }) => handle_list(&mut ctx, tone, search),
        Some(Commands::Tones) => handle_tones(&ctx),
        Some(Commands::Show { id, purpose }) => handle_show(&ctx, &id, purpose),
        Some(Commands::Generate { id, purpose, copy }) => {
            handle_generate(&ctx, &id, purpose, copy)
        }
        Some(Commands::Fav { ids }) => handle_fav(&mut ctx, &ids),
        Some(Commands::Favs) => handle_list(&mut ctx, Some(Selector::Favorites.to_string()), None),
        Some(Commands::Compare { ids }) => handle_compare(&mut ctx, &ids),
        Some(Commands::Session) => session::run(&mut ctx.api, std::io::stdin().lock()),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None, None),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("stylefinder={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "stylefinder", "stylefinder")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| StyleError::Api("Could not determine data directory".to_string()))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = StyleFinderConfig::load_or_default(&data_dir);

    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };
    tracing::debug!(data_dir = %data_dir.display(), styles = catalog.len(), "context ready");

    let store = FileStore::new(data_dir.clone());
    let paths = StyleFinderPaths { data_dir };
    let api = StyleFinderApi::new(catalog, store, &config, paths);

    Ok(AppContext { api })
}

fn parse_purpose(ctx: &AppContext, purpose: Option<String>) -> Result<Medium> {
    match purpose {
        Some(p) => p.parse(),
        None => Ok(ctx.api.state().active_purpose),
    }
}

/// Prints the browser for the current state. Under the `all` selector styles
/// are grouped into per-tone sections below the search-only total; any other
/// selector prints a flat list.
pub(super) fn print_browse<S: KeyValueStore>(api: &StyleFinderApi<S>) {
    let result = api.list();
    let applied = api.state().applied_theme_id.as_deref();
    if api.state().active_filter == Selector::All {
        let grid = api.grids();
        print!(
            "{}",
            render_grid(&grid, api.catalog().tones(), api.favorites(), applied)
        );
    } else {
        print_style_list(&result.listed_styles, api.favorites(), applied);
    }
    if !result.summary.is_empty() {
        println!("{}", result.summary);
    }
    print_messages(&result.messages);
}

fn handle_list(ctx: &mut AppContext, tone: Option<String>, search: Option<String>) -> Result<()> {
    if let Some(tone) = tone {
        let selector: Selector = tone.parse()?;
        ctx.api.dispatch(Event::FilterSelected(selector))?;
    }
    if let Some(term) = search {
        ctx.api.dispatch(Event::SearchChanged(term))?;
    }
    print_browse(&ctx.api);
    Ok(())
}

fn handle_tones(ctx: &AppContext) -> Result<()> {
    print!("{}", render_tone_counts(&ctx.api.tone_counts()));
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str, purpose: Option<String>) -> Result<()> {
    let medium = parse_purpose(ctx, purpose)?;
    let result = ctx.api.show(id, medium)?;
    if let Some(detail) = &result.detail {
        print!("{}", render_detail(detail, true));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_generate(ctx: &AppContext, id: &str, purpose: Option<String>, copy: bool) -> Result<()> {
    let medium = parse_purpose(ctx, purpose)?;
    let document = ctx.api.generate(id, medium)?;
    println!("{}", document);

    if copy {
        match copy_to_clipboard(&document) {
            Ok(()) => print_messages(&[CmdMessage::success(COPIED)]),
            Err(e) => eprintln!("Warning: Failed to copy to clipboard: {}", e),
        }
    }
    Ok(())
}

fn handle_fav(ctx: &mut AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.toggle_favorites(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_compare(ctx: &mut AppContext, ids: &[String]) -> Result<()> {
    for id in ids {
        let result = ctx.api.dispatch(Event::CompareToggled(id.clone()))?;
        let warnings: Vec<CmdMessage> = result
            .messages
            .into_iter()
            .filter(|m| m.level != MessageLevel::Info)
            .collect();
        print_messages(&warnings);
    }

    match ctx.api.compare() {
        Some(view) => print!("{}", render_compare(&view)),
        None => print_messages(&[CmdMessage::info(COMPARE_NOTICE)]),
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => match k.as_str() {
            "default-purpose" => ConfigAction::SetDefaultPurpose(v.parse()?),
            "favorites-key" => ConfigAction::SetFavoritesKey(v),
            other => return Err(StyleError::Api(format!("Unknown config key: {}", other))),
        },
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("default-purpose = {}", config.default_purpose);
        println!("favorites-key = {}", config.favorites_key);
        if let Some(path) = &config.catalog_path {
            println!("catalog-path = {}", path.display());
        }
    }
    print_messages(&result.messages);
    Ok(())
}
