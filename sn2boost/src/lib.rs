// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;
pub mod prompt;

use anyhow::{Context as _, Result};
use chrono::Utc;
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::info;

pub use cli::Args;
pub use crate::core::import::{import_notes, write_record};
pub use crate::core::registry::{FolderResolution, resolve_folder_id};
pub use crate::core::render::{escape_content, format_timestamp, render};
pub use crate::core::title::{derive_title, is_trashed};
pub use models::{DerivedFields, Folder, FolderRegistry, ImportSummary, InputNote};
pub use prompt::{Prompter, TerminalPrompter, existing_path, expand_home};

pub const EXPORT_PROMPT: &str = "Simplenote export directory";
pub const STORAGE_PROMPT: &str = "Boost storage directory";
pub const DEFAULT_STORAGE_DIR: &str = "~/Boostnote";

/// How an import run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Imported(ImportSummary),
    /// The operator picked "Exit" at the folder prompt.
    Exited,
}

/// Builds the folder key generator, seeded from the clock unless a seed is given.
#[inline]
#[must_use]
pub fn folder_key_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| {
        Utc::now()
            .timestamp_nanos_opt()
            .map_or(0, i64::unsigned_abs)
    });
    StdRng::seed_from_u64(seed)
}

/// Runs an import, prompting on the terminal for anything not given in `args`.
///
/// # Errors
///
/// Returns an error if any step of the import fails; see [`run_with`].
#[inline]
pub fn run(args: Args) -> Result<RunOutcome> {
    let mut rng = folder_key_rng(args.seed);
    let mut prompter = TerminalPrompter::stdio();
    run_with(&args, &mut prompter, &mut rng)
}

/// Runs an import with an injected prompter and key generator.
///
/// # Errors
///
/// This function may return an error if:
/// * A path given in `args` does not exist
/// * Operator input cannot be read
/// * The folder registry cannot be read, parsed or written
/// * Any note cannot be read, rendered or written
#[inline]
pub fn run_with<P: Prompter + ?Sized>(
    args: &Args,
    prompter: &mut P,
    rng: &mut StdRng,
) -> Result<RunOutcome> {
    let export_dir = resolve_dir(prompter, args.export_dir.as_deref(), EXPORT_PROMPT, None)?;
    let storage_dir = resolve_dir(
        prompter,
        args.storage_dir.as_deref(),
        STORAGE_PROMPT,
        Some(DEFAULT_STORAGE_DIR),
    )?;

    let resolution = resolve_folder_id(&storage_dir, prompter, rng)?;
    let Some(folder) = resolution.key() else {
        return Ok(RunOutcome::Exited);
    };

    let summary = import_notes(&export_dir, &storage_dir, folder).with_context(|| {
        format!(
            "Failed to import {} into {}",
            export_dir.display(),
            storage_dir.display()
        )
    })?;
    info!(
        imported = summary.imported,
        skipped = summary.skipped,
        entries = summary.total(),
        "import finished"
    );

    Ok(RunOutcome::Imported(summary))
}

fn resolve_dir<P: Prompter + ?Sized>(
    prompter: &mut P,
    given: Option<&str>,
    label: &str,
    default: Option<&str>,
) -> Result<PathBuf> {
    match given {
        Some(path) => existing_path(path).with_context(|| format!("Invalid {label}")),
        None => prompter.path(label, default),
    }
}
