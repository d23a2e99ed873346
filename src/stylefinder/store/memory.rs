use super::KeyValueStore;
use crate::error::{Result, StyleError};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default, Debug, Clone)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing `write` (and its failure simulation).
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(StyleError::Store("simulated read failure".to_string()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(StyleError::Store("simulated write failure".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
