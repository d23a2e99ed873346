//! # StyleFinder Architecture
//!
//! StyleFinder is a **UI-agnostic design-style browser**: a fixed catalog of
//! visual styles that can be searched, filtered by tone, compared, marked as
//! favorites and turned into a configuration document for a target medium.
//! The library owns all of that; the `stylefinder` binary is one client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session: catalog, view state, favorites         │
//! │  - Validates ids, dispatches events to the reducer          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, state.rs, generator.rs)      │
//! │  - Filtering, projections, document generation              │
//! │  - Pure functions over Rust types                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - KeyValueStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Static Data
//!
//! The catalog (`data/catalog.json`) is embedded at build time and parsed once
//! ([`catalog::Catalog::builtin`]). The layout templates and modifier tables
//! the generator draws on are plain statics in [`knowledge`]. Neither changes
//! at runtime.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes and returns regular Rust values and never
//! writes to stdout/stderr. Diagnostics go through `tracing`; the binary
//! decides where they end up.
//!
//! ## Testing Strategy
//!
//! 1. **Commands and core modules**: unit tests beside the code, with small
//!    hand-built catalogs or the built-in one.
//! 2. **API**: dispatch and validation tests over `InMemoryStore`.
//! 3. **CLI**: `tests/` drives the binary with `assert_cmd`, isolated through
//!    `STYLEFINDER_HOME`.
//!
//! ## Module Overview
//!
//! - [`api`]: session facade
//! - [`catalog`]: style records, tone categories and preview markup
//! - [`clipboard`]: copy generated documents to the system clipboard
//! - [`commands`]: filtering, detail, compare, theme, favorites, config
//! - [`config`]: `config.json` settings
//! - [`error`]: error types
//! - [`favorites`]: persisted favorite set
//! - [`generator`]: configuration document builder
//! - [`knowledge`]: media profiles, slots and modifier tables
//! - [`model`]: core data types
//! - [`state`]: view state and its reducer
//! - [`store`]: key-value storage abstraction

pub mod api;
pub mod catalog;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod favorites;
pub mod generator;
pub mod knowledge;
pub mod model;
pub mod state;
pub mod store;
