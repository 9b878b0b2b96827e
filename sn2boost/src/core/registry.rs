// src/core/registry.rs
use crate::models::{Folder, FolderRegistry};
use crate::prompt::Prompter;
use anyhow::{Context as _, Result};
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const REGISTRY_FILE: &str = "boostnote.json";
pub const CREATE_NEW_CHOICE: &str = "Create new folder";
pub const EXIT_CHOICE: &str = "Exit";

// Folder colour options: https://github.com/BoostIO/Boostnote/blob/master/browser/lib/consts.js
pub const NEW_FOLDER_COLOR: &str = "#2BA5F7";
pub const NEW_FOLDER_NAME: &str = "Simplenote import";
pub const FOLDER_KEY_LENGTH: usize = 20;

const KEY_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// The folder chosen for imported notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderResolution {
    Existing(String),
    Created(String),
    /// The operator chose to leave without importing.
    Exit,
}

impl FolderResolution {
    #[inline]
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Existing(key) | Self::Created(key) => Some(key),
            Self::Exit => None,
        }
    }
}

#[inline]
#[must_use]
pub fn registry_path(storage_root: &Path) -> PathBuf {
    storage_root.join(REGISTRY_FILE)
}

/// Reads and parses a `boostnote.json` file.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not a valid registry document
#[inline]
pub fn load_registry(path: &Path) -> Result<FolderRegistry> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read folder registry: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse folder registry: {}", path.display()))
}

/// Overwrites `path` with the registry, indented by two spaces like Boostnote writes it.
///
/// # Errors
///
/// This function may return an error if:
/// * The registry cannot be serialized
/// * The file cannot be written
#[inline]
pub fn save_registry(path: &Path, registry: &FolderRegistry) -> Result<()> {
    let json =
        serde_json::to_string_pretty(registry).context("Failed to serialize folder registry")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write folder registry: {}", path.display()))?;
    debug!(path = %path.display(), folders = registry.folders.len(), "wrote folder registry");
    Ok(())
}

/// Generates a lowercase alphanumeric folder key.
///
/// Keys are not checked against existing folders; 20 characters from a
/// 36-symbol alphabet make a collision negligible.
#[inline]
pub fn generate_folder_key<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(KEY_CHARSET[rng.random_range(0..KEY_CHARSET.len())]))
        .collect()
}

/// Appends a new "Simplenote import" folder and returns its key.
#[inline]
pub fn create_folder<R: Rng>(registry: &mut FolderRegistry, rng: &mut R) -> String {
    let key = generate_folder_key(rng, FOLDER_KEY_LENGTH);
    registry.push(Folder::new(key.clone(), NEW_FOLDER_COLOR, NEW_FOLDER_NAME));
    key
}

/// Lets the operator pick the destination folder from `boostnote.json`.
///
/// Existing folders are offered by name, followed by [`CREATE_NEW_CHOICE`]
/// and [`EXIT_CHOICE`]. The registry file is only rewritten when a new folder
/// is created.
///
/// # Arguments
///
/// * `storage_root` - The Boostnote storage directory holding `boostnote.json`
/// * `prompter` - Source of the operator's choice
/// * `rng` - Generator for a new folder key
///
/// # Errors
///
/// This function may return an error if:
/// * The registry cannot be read, parsed or written back
/// * The operator's choice cannot be read
#[inline]
pub fn resolve_folder_id<P, R>(
    storage_root: &Path,
    prompter: &mut P,
    rng: &mut R,
) -> Result<FolderResolution>
where
    P: Prompter + ?Sized,
    R: Rng,
{
    let path = registry_path(storage_root);
    let mut registry = load_registry(&path)?;

    let mut choices = registry.folder_names();
    choices.push(CREATE_NEW_CHOICE.to_owned());
    choices.push(EXIT_CHOICE.to_owned());

    let picked = prompter.select("Select folder", &choices)?;

    if let Some(folder) = registry.folders.get(picked) {
        info!(folder = %folder.name, key = %folder.key, "using existing folder");
        return Ok(FolderResolution::Existing(folder.key.clone()));
    }

    if choices.get(picked).map(String::as_str) == Some(CREATE_NEW_CHOICE) {
        let key = create_folder(&mut registry, rng);
        save_registry(&path, &registry)?;
        info!(folder = NEW_FOLDER_NAME, key = %key, "created folder");
        return Ok(FolderResolution::Created(key));
    }

    Ok(FolderResolution::Exit)
}
