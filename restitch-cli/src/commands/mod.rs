//! CLI command implementations

use clap::Subcommand;

pub mod assemble;
pub mod check;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Assemble fragments into the reconstructed text
    Assemble(assemble::AssembleArgs),

    /// Check whether fragments assemble into a single text
    Check(check::CheckArgs),
}
