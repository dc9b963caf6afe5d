//! Output formatting module

use anyhow::Result;
use restitch_core::Reduction;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and write a completed reduction
    fn write_reduction(&mut self, reduction: &Reduction) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
