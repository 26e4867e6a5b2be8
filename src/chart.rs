use crate::analyzer::FrequencyEntry;

/// Width of the longest bar, in characters.
const MAX_BAR_WIDTH: usize = 50;

/// Render entries as a horizontal bar chart, one row per word.
///
/// Bars scale linearly from zero against the highest count, so the
/// top-ranked word always spans the full width. Every row keeps at
/// least one bar character since counts are never zero.
pub fn render(entries: &[FrequencyEntry]) -> String {
    let Some(max_count) = entries.iter().map(|e| e.count).max() else {
        return String::new();
    };
    let label_width = entries.iter().map(|e| e.word.len()).max().unwrap_or(0);
    let count_width = max_count.to_string().len();

    entries
        .iter()
        .map(|entry| {
            let bar_len = (entry.count * MAX_BAR_WIDTH / max_count).max(1);
            format!(
                "{:<label_width$}  {:>count_width$}  {}",
                entry.word,
                entry.count,
                "#".repeat(bar_len),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, count: usize) -> FrequencyEntry {
        FrequencyEntry {
            word: word.to_string(),
            count,
        }
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_top_entry_spans_full_width() {
        let chart = render(&[entry("the", 10), entry("cat", 5)]);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(&"#".repeat(MAX_BAR_WIDTH)));
    }

    #[test]
    fn test_bars_shrink_with_count() {
        let chart = render(&[entry("a", 8), entry("b", 4), entry("c", 2)]);
        let bar_lens: Vec<usize> = chart
            .lines()
            .map(|line| line.chars().filter(|&c| c == '#').count())
            .collect();
        assert_eq!(bar_lens, vec![50, 25, 12]);
    }

    #[test]
    fn test_small_counts_still_visible() {
        let chart = render(&[entry("common", 1000), entry("rare", 1)]);
        let rare_line = chart.lines().nth(1).unwrap();
        assert!(rare_line.contains('#'));
    }

    #[test]
    fn test_labels_aligned() {
        let chart = render(&[entry("longword", 3), entry("ab", 3)]);
        let starts: Vec<usize> = chart
            .lines()
            .map(|line| line.find('#').unwrap())
            .collect();
        assert_eq!(starts[0], starts[1]);
    }
}
