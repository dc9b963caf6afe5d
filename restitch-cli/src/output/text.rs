//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use restitch_core::Reduction;
use std::io::{self, Write};

/// Plain text formatter - outputs the assembled text followed by a newline
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn write_reduction(&mut self, reduction: &Reduction) -> Result<()> {
        writeln!(self.writer, "{}", reduction.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restitch_core::Reducer;

    #[test]
    fn test_text_formatter_writes_assembled_text() {
        let reduction = Reducer::new()
            .reduce(vec!["ab".to_string(), "bc".to_string()])
            .unwrap();

        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter.write_reduction(&reduction).unwrap();
            formatter.finish().unwrap();
        }

        assert_eq!(String::from_utf8(buffer).unwrap(), "abc\n");
    }
}
