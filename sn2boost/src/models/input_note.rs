// src/models/input_note.rs
use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;

/// One file of a Simplenote export, read fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputNote {
    pub file_name: String,
    pub content: Vec<u8>,
    pub modified: DateTime<Utc>,
}

impl InputNote {
    /// Reads the note at `path` along with its modification time.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The file metadata cannot be read
    /// * The platform does not report modification times
    /// * The file content cannot be read
    #[inline]
    pub fn read(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to read metadata: {}", path.display()))?;
        let modified = metadata
            .modified()
            .with_context(|| format!("No modification time for: {}", path.display()))?;
        let content =
            fs::read(path).with_context(|| format!("Failed to read note: {}", path.display()))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self {
            file_name,
            content,
            modified: DateTime::<Utc>::from(modified),
        })
    }
}
