//! Fragment input sources
//!
//! Fragments arrive one per line, from a file or stdin. Blank lines are
//! skipped; everything else, including leading and trailing spaces, is kept
//! verbatim since whitespace can be part of an overlap.

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read fragments from a file, one per line
pub fn read_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read fragments from {}", path.display()))?;
    let fragments = parse_lines(&content);
    if fragments.is_empty() {
        return Err(CliError::NoFragments(path.display().to_string()).into());
    }
    Ok(fragments)
}

/// Read fragments from stdin, one per line
pub fn read_stdin() -> Result<Vec<String>> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("failed to read fragments from stdin")?;
    let fragments = parse_lines(&content);
    if fragments.is_empty() {
        return Err(CliError::NoFragments("stdin".to_string()).into());
    }
    Ok(fragments)
}

/// Built-in sample: a shredded passage for trying the tool out
pub fn demo_fragments() -> Vec<String> {
    [
        "on or eat: it was a hobbit-hole",
        "ends of worms and an ooz",
        "In a hole in the ground there lived a hobbit.",
        "hole in the ground",
        "obbit. Not a nasty dirty, wet hole, filled",
        "oozy smell, nor yet a dry, bare",
        "ole, filled with the en",
        "it-hole, and that means comfort.",
        "y, bare, sandy hole with nothing in it",
        "h nothing in it to sit down on ",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn parse_lines(content: &str) -> Vec<String> {
    let mut fragments = Vec::new();
    for line in content.lines() {
        if line.is_empty() {
            log::debug!("skipping blank input line");
            continue;
        }
        fragments.push(line.to_string());
    }
    fragments
}
