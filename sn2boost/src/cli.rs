// src/cli.rs
use clap::Parser;

/// Import a Simplenote plaintext export into a Boostnote storage directory.
///
/// Paths left out are asked for interactively.
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Simplenote export directory (supports ~)
    #[arg(short, long)]
    pub export_dir: Option<String>,

    /// Boostnote storage directory containing boostnote.json (supports ~)
    #[arg(short, long)]
    pub storage_dir: Option<String>,

    /// Seed for the new folder key generator (defaults to the current time)
    #[arg(long)]
    pub seed: Option<u64>,
}
