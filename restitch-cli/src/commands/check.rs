//! Check command implementation
//!
//! Runs the reduction and reports whether the fragments form a single
//! overlapping chain. "Does not assemble" is the command's negative answer,
//! signalled through the exit code rather than an error.

use super::assemble::{init_logging, load_fragments, reduce};
use anyhow::Result;
use clap::Args;
use restitch_core::AssemblyError;
use std::path::PathBuf;
use std::process::ExitCode;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Input file with one fragment per line (reads stdin when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Use the built-in demo fragment set
    #[arg(long, conflicts_with = "input")]
    pub demo: bool,

    /// Suppress pass-by-pass narration
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<ExitCode> {
        init_logging(self.quiet, self.verbose);

        let fragments = load_fragments(self.demo, self.input.as_deref())?;
        let count = fragments.len();

        match reduce(fragments, self.quiet) {
            Ok(reduction) => {
                println!(
                    "{} fragments assemble into one text of {} bytes",
                    count,
                    reduction.text.len()
                );
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => match err.downcast_ref::<AssemblyError>() {
                Some(AssemblyError::Incomplete { remaining }) => {
                    println!(
                        "{} fragments do not assemble: {} disconnected pieces remain",
                        count, remaining
                    );
                    Ok(ExitCode::FAILURE)
                }
                _ => Err(err),
            },
        }
    }
}
