/// Word-frequency analysis: tokenize, count, rank.
///
/// A token is a maximal run of word characters (alphanumeric plus
/// underscore), lowercased. Ranking is descending by count; ties break
/// by first appearance in the text, so identical input always yields
/// an identical ranking.
use std::collections::HashMap;

use serde::Serialize;

/// Number of entries kept in a ranked list by default.
pub const TOP_WORDS: usize = 20;

/// A word and how many times it occurred in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: usize,
}

/// Tokenize text into lowercase word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

/// Count occurrences in one pass, remembering where each token first appeared.
///
/// Values are (count, first-occurrence position).
fn frequency_table(tokens: &[String]) -> HashMap<&str, (usize, usize)> {
    let mut table: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, token) in tokens.iter().enumerate() {
        table.entry(token.as_str()).or_insert((0, position)).0 += 1;
    }
    table
}

/// Rank the `top` most frequent words in `text`.
///
/// Total over all inputs: empty text, or text with no word characters,
/// yields an empty list. Words tied at the truncation boundary are
/// dropped in favor of earlier-appearing ones.
pub fn analyze_top(text: &str, top: usize) -> Vec<FrequencyEntry> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return vec![];
    }

    let mut ranked: Vec<(&str, usize, usize)> = frequency_table(&tokens)
        .into_iter()
        .map(|(word, (count, first_seen))| (word, count, first_seen))
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(top);

    ranked
        .into_iter()
        .map(|(word, count, _)| FrequencyEntry {
            word: word.to_string(),
            count,
        })
        .collect()
}

/// Rank the 20 most frequent words in `text`.
pub fn analyze(text: &str) -> Vec<FrequencyEntry> {
    analyze_top(text, TOP_WORDS)
}
