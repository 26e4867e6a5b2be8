use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::analyzer::FrequencyEntry;

/// Output encodings for the ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Json,
}

impl Format {
    /// Filename used when the caller does not supply one.
    pub fn default_filename(self) -> &'static str {
        match self {
            Format::Csv => "word_count.csv",
            Format::Json => "word_count.json",
        }
    }
}

/// Serialize entries as `word,count` lines joined by line feeds.
///
/// No header row and no trailing newline. Words never contain the
/// delimiter (they are word-character runs by construction), so no
/// quoting is needed.
pub fn to_csv(entries: &[FrequencyEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{},{}", e.word, e.count))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize entries as a pretty-printed JSON array.
pub fn to_json(entries: &[FrequencyEntry]) -> Result<String> {
    serde_json::to_string_pretty(entries).context("Failed to serialize entries as JSON")
}

/// Serialize entries in the requested format.
pub fn serialize(entries: &[FrequencyEntry], format: Format) -> Result<String> {
    match format {
        Format::Csv => Ok(to_csv(entries)),
        Format::Json => to_json(entries),
    }
}

/// Write serialized output to disk.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write export file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    fn entry(word: &str, count: usize) -> FrequencyEntry {
        FrequencyEntry {
            word: word.to_string(),
            count,
        }
    }

    #[test]
    fn test_csv_format() {
        let csv = to_csv(&[entry("the", 3), entry("cat", 1)]);
        assert_eq!(csv, "the,3\ncat,1");
    }

    #[test]
    fn test_csv_empty() {
        assert_eq!(to_csv(&[]), "");
    }

    #[test]
    fn test_csv_no_trailing_newline() {
        let csv = to_csv(&[entry("one", 1)]);
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_csv_round_trip_from_analysis() {
        let text = "to be or not to be";
        let ranked = analyze(text);
        let csv = to_csv(&ranked);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), ranked.len());
        for line in lines {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 2);
            assert!(!fields[0].is_empty());
            let count: usize = fields[1].parse().expect("count must be an integer");
            assert!(count >= 1);
        }
    }

    #[test]
    fn test_json_format() {
        let json = to_json(&[entry("the", 3)]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["word"], "the");
        assert_eq!(parsed[0]["count"], 3);
    }

    #[test]
    fn test_default_filenames() {
        assert_eq!(Format::Csv.default_filename(), "word_count.csv");
        assert_eq!(Format::Json.default_filename(), "word_count.json");
    }
}
