//! Command-line interface.

pub mod completions;
pub mod publish;
pub mod resolve;

use clap::{Parser, Subcommand};

/// Mooring - publish and resolve IPNS names through the IPFS daemon.
#[derive(Parser)]
#[command(
    name = "mooring",
    about = "Publish and resolve IPNS names through the IPFS daemon",
    version
)]
pub struct Cli {
    /// Enable debug logging (MOORING_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a name to its current content address
    Resolve {
        /// Registered name
        name: String,
    },

    /// Publish a content address under a name, creating its key on first use
    Publish {
        /// Name to publish under
        name: String,
        /// Content address to publish
        content: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Resolve { name } => resolve::execute(&name),
        Publish { name, content } => publish::execute(&name, &content),
        Completions { shell } => completions::execute(shell),
    }
}
