//! restitch command-line entry point

use clap::Parser;
use restitch_cli::commands::Commands;
use std::process::ExitCode;

/// Reconstruct an original text from overlapping fragments
#[derive(Debug, Parser)]
#[command(name = "restitch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Assemble(args) => args.execute().map(|()| ExitCode::SUCCESS),
        Commands::Check(args) => args.execute(),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
