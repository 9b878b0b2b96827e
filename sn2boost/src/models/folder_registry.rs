// src/models/folder_registry.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One named folder in `boostnote.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Folder {
    pub key: String,
    pub color: String,
    pub name: String,
    /// Members Boostnote may add that this tool does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Folder {
    #[inline]
    #[must_use]
    pub fn new(key: String, color: &str, name: &str) -> Self {
        Self {
            key,
            color: color.to_owned(),
            name: name.to_owned(),
            extra: Map::new(),
        }
    }
}

/// The `boostnote.json` document at the root of a Boostnote storage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FolderRegistry {
    #[serde(default)]
    pub folders: Vec<Folder>,
    #[serde(default)]
    pub version: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FolderRegistry {
    #[inline]
    #[must_use]
    pub fn folder_names(&self) -> Vec<String> {
        self.folders.iter().map(|f| f.name.clone()).collect()
    }

    #[cfg(test)]
    #[must_use]
    pub fn find_by_key(&self, key: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.key == key)
    }

    #[inline]
    pub fn push(&mut self, folder: Folder) {
        self.folders.push(folder);
    }
}
