//! Mooring - publish and resolve IPNS names through the IPFS daemon.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mooring::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("MOORING_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("mooring=debug")
        } else {
            EnvFilter::new("mooring=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli.command) {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}
