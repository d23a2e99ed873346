//! # Storage Layer
//!
//! The durable side of the app is a single key-value string store. The
//! [`KeyValueStore`] trait keeps the session independent of where that store
//! lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One file per key: `<root>/<key>.json`
//!   - Writes go to a temp file first and are renamed into place
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate read and write failures
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── designStyleFavorites.json   # Favorite style ids (JSON array)
//! └── config.json                 # Settings, see config.rs
//! ```
//!
//! Values are opaque strings here. Interpreting them (and recovering from
//! garbage) is the caller's job, see [`crate::favorites`].

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for the durable key-value store.
pub trait KeyValueStore {
    /// Read the raw value for `key`. `Ok(None)` when the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value for `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}
