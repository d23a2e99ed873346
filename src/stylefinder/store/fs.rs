use super::KeyValueStore;
use crate::error::{Result, StyleError};
use std::fs;
use std::path::PathBuf;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the file backing `key`. Keys are used as file stems, so any
    /// path separator in a key is replaced.
    pub fn key_path(&self, key: &str) -> PathBuf {
        let stem: String = key
            .chars()
            .map(|c| if c == '/' || c == '\\' { '_' } else { c })
            .collect();
        self.root.join(format!("{}.json", stem))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(StyleError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(StyleError::Io)?;
        Ok(Some(content))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;
        let path = self.key_path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(StyleError::Io)?;
        fs::rename(&tmp, &path).map_err(StyleError::Io)?;
        Ok(())
    }
}
