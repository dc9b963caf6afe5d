//! Assemble command implementation

use crate::error::CliError;
use crate::input;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::LogNarrator;
use anyhow::{Context, Result};
use clap::Args;
use restitch_core::{NoopObserver, ReduceObserver, Reducer, Reduction};
use std::fs::File;
use std::path::PathBuf;

/// Arguments for the assemble command
#[derive(Debug, Args)]
pub struct AssembleArgs {
    /// Input file with one fragment per line (reads stdin when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Use the built-in demo fragment set
    #[arg(long, conflicts_with = "input")]
    pub demo: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress pass-by-pass narration
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// The assembled text on a single line
    Text,
    /// JSON object with the text and run statistics
    Json,
}

impl AssembleArgs {
    /// Execute the assemble command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.quiet, self.verbose);

        let fragments = load_fragments(self.demo, self.input.as_deref())?;
        log::info!("assembling {} fragments", fragments.len());

        let reduction = reduce(fragments, self.quiet)?;
        self.write_output(&reduction)
    }

    fn write_output(&self, reduction: &Reduction) -> Result<()> {
        let mut formatter: Box<dyn OutputFormatter> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .map_err(|_| CliError::OutputUnwritable(path.display().to_string()))?;
                make_formatter(self.format, file)
            }
            None => make_formatter(self.format, std::io::stdout()),
        };
        formatter.write_reduction(reduction)?;
        formatter.finish()
    }
}

/// Read fragments from the selected source
pub fn load_fragments(demo: bool, input: Option<&std::path::Path>) -> Result<Vec<String>> {
    if demo {
        return Ok(input::demo_fragments());
    }
    match input {
        Some(path) => input::read_file(path),
        None => input::read_stdin(),
    }
}

/// Run the reduction, narrating unless quieted
pub fn reduce(fragments: Vec<String>, quiet: bool) -> Result<Reduction> {
    let reducer = Reducer::new();
    let mut narrator = LogNarrator::new();
    let mut noop = NoopObserver;
    let observer: &mut dyn ReduceObserver = if quiet { &mut noop } else { &mut narrator };
    reducer
        .reduce_with_observer(fragments, observer)
        .context("assembly failed")
}

/// Initialize logging based on verbosity level
pub fn init_logging(quiet: bool, verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

fn make_formatter<W: std::io::Write + 'static>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}
