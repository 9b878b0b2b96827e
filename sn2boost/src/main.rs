// src/main.rs
use anyhow::Result;
use clap::Parser;
use sn2boost::{Args, RunOutcome, run};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,sn2boost=info")),
        )
        .init();

    let args = Args::parse();
    if let RunOutcome::Imported(_) = run(args)? {
        println!("Imported! Quit and reopen Boost to see your files.");
    }

    Ok(())
}
