//! Key-value storage for the persisted state.

use std::{
    collections::BTreeMap,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::prelude::*;

pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: String) -> Result;
}

/// JSON file holding a string-to-string map.
#[must_use]
pub struct FileStorage {
    path: PathBuf,
    records: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the storage file.
    ///
    /// A missing file is an empty storage, and so is a file which is not a JSON map.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        let records = match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|error| {
                warn!(error = format!("{error:#}"), "Ignoring the malformed storage file");
                BTreeMap::new()
            }),
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!("No storage file yet");
                BTreeMap::new()
            }
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("failed to read `{}`", path.display()));
            }
        };
        Ok(Self { path: path.to_path_buf(), records })
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    #[instrument(skip_all, fields(path = %self.path.display(), key = key))]
    fn set(&mut self, key: &str, value: String) -> Result {
        self.records.insert(key.to_owned(), value);
        let contents = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("failed to write `{}`", self.path.display()))?;
        debug!("Saved");
        Ok(())
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage(pub BTreeMap<String, String>);

#[cfg(test)]
impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.0.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result {
        self.0.insert(key.to_owned(), value);
        Ok(())
    }
}
