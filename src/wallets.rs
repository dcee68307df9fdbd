use std::path::Path;

use anyhow::{Context, Result};

/// Read the ordered wallet list from a text file: one address per line,
/// trimmed, blank lines skipped.
pub fn read_wallets(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(parse_wallets(&contents))
}

fn parse_wallets(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
