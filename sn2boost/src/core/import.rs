// src/core/import.rs
use crate::core::render::{escape_content, render};
use crate::core::title::{derive_title, is_trashed};
use crate::models::{DerivedFields, ImportSummary, InputNote, NoteType};
use anyhow::{Context as _, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;
use walkdir::WalkDir;

pub const NOTES_DIR: &str = "notes";
pub const RECORD_EXTENSION: &str = "cson";

/// Builds the record fields for `note`, or `None` when it has no title.
///
/// Creation time is not available from most file systems, so both timestamps
/// use the modification time.
#[inline]
#[must_use]
pub fn derive_fields(note: &InputNote, folder: &str) -> Option<DerivedFields> {
    let title = derive_title(&note.content);
    if title.is_empty() {
        return None;
    }

    Some(DerivedFields {
        title,
        trashed: is_trashed(&note.file_name),
        created: note.modified,
        updated: note.modified,
        note_type: NoteType::Markdown,
        folder: folder.to_owned(),
        content: escape_content(&note.content),
    })
}

#[inline]
#[must_use]
pub fn record_file_name() -> String {
    format!("{}.{RECORD_EXTENSION}", Uuid::new_v4())
}

/// Writes `record` into `notes_dir` under a fresh `<uuid>.cson` name.
///
/// The file is created exclusively, so an existing record is never replaced.
///
/// # Errors
///
/// This function may return an error if the file cannot be created or written.
#[inline]
pub fn write_record(notes_dir: &Path, record: &[u8]) -> Result<PathBuf> {
    loop {
        let path = notes_dir.join(record_file_name());
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to create record: {}", path.display()));
            }
        };
        file.write_all(record)
            .with_context(|| format!("Failed to write record: {}", path.display()))?;
        return Ok(path);
    }
}

/// Imports every eligible file of a Simplenote export into Boostnote storage.
///
/// Entries are processed in file name order. Symbolic links are resolved to
/// their target. Directories, dangling links, empty files and files containing
/// only whitespace are skipped. The first failure aborts the
/// run and leaves already written records in place.
///
/// # Arguments
///
/// * `export_dir` - The Simplenote export directory
/// * `storage_root` - The Boostnote storage directory; records go to its `notes` subdirectory
/// * `folder` - Key of the Boostnote folder the notes are filed under
///
/// # Returns
///
/// * `Ok(ImportSummary)` - Counts of imported and skipped entries
///
/// # Errors
///
/// This function may return an error if:
/// * The export directory cannot be listed
/// * An export file cannot be read
/// * The notes directory cannot be created
/// * A record cannot be rendered or written
#[inline]
pub fn import_notes(export_dir: &Path, storage_root: &Path, folder: &str) -> Result<ImportSummary> {
    let notes_dir = storage_root.join(NOTES_DIR);
    fs::create_dir_all(&notes_dir)
        .with_context(|| format!("Failed to create notes directory: {}", notes_dir.display()))?;

    let mut summary = ImportSummary::new();

    for entry in WalkDir::new(export_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry
            .with_context(|| format!("Failed to list export directory: {}", export_dir.display()))?;
        let path = entry.path();

        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "skipping dangling link");
                summary.skipped = summary.skipped.saturating_add(1);
                continue;
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read metadata: {}", path.display()));
            }
        };

        if !metadata.is_file() {
            debug!(path = %path.display(), "skipping non-file entry");
            summary.skipped = summary.skipped.saturating_add(1);
            continue;
        }
        if metadata.len() == 0 {
            debug!(path = %path.display(), "skipping empty file");
            summary.skipped = summary.skipped.saturating_add(1);
            continue;
        }

        let note = InputNote::read(path)?;
        let Some(fields) = derive_fields(&note, folder) else {
            debug!(path = %path.display(), "skipping blank note");
            summary.skipped = summary.skipped.saturating_add(1);
            continue;
        };

        let record = render(&fields)?;
        let written = write_record(&notes_dir, &record)?;
        info!(
            note = %note.file_name,
            record = %written.display(),
            trashed = fields.trashed,
            "imported note"
        );
        summary.imported = summary.imported.saturating_add(1);
    }

    Ok(summary)
}
