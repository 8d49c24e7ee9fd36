/// Output formatting: progress line, ranking table, and JSON.
use duelrank_core::{Progress, RankedRow};
use serde::Serialize;

use crate::config::Theme;

const PROGRESS_BAR_WIDTH: usize = 30;

#[derive(Serialize)]
struct JsonRankedRow {
    rank: usize,
    name: String,
    wins: u32,
}

#[derive(Serialize)]
struct JsonOutput {
    ranking: Vec<JsonRankedRow>,
    compared: usize,
    total_pairs: usize,
}

/// "Compared 3 of 21 pairs (14.3%)" — matches the live progress label.
pub fn progress_line(progress: &Progress) -> String {
    format!(
        "Compared {} of {} pairs ({:.1}%)",
        progress.done,
        progress.total,
        progress.percent(),
    )
}

/// Text progress bar, e.g. "[######........................]".
pub fn progress_bar(progress: &Progress) -> String {
    let filled = ((progress.percent() / 100.0) * PROGRESS_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(PROGRESS_BAR_WIDTH - filled))
}

/// Print the ranking as a terminal table: rank, option, wins.
pub fn print_table(rows: &[RankedRow<'_>], theme: Theme) {
    // Find the widest option name for padding
    let name_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(6).max(6);

    let rule = match theme {
        Theme::Dark => "─",
        Theme::Light => "-",
    };

    println!(" # | {:<name_width$} | Wins", "Option");
    println!("{}", rule.repeat(name_width + 11));

    for (i, r) in rows.iter().enumerate() {
        println!("{:>2} | {:<name_width$} | {:>4}", i + 1, r.name, r.wins);
    }
}

/// Print the ranking as JSON.
pub fn print_json(rows: &[RankedRow<'_>], progress: &Progress) {
    let ranking: Vec<JsonRankedRow> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| JsonRankedRow { rank: i + 1, name: r.name.to_string(), wins: r.wins })
        .collect();

    let output = JsonOutput {
        ranking,
        compared: progress.done,
        total_pairs: progress.total,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_line_formats_percent() {
        let line = progress_line(&Progress { done: 3, total: 21 });
        assert_eq!(line, "Compared 3 of 21 pairs (14.3%)");
    }

    #[test]
    fn progress_line_handles_empty_schedule() {
        let line = progress_line(&Progress { done: 0, total: 0 });
        assert_eq!(line, "Compared 0 of 0 pairs (0.0%)");
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(progress_bar(&Progress { done: 0, total: 10 }), format!("[{}]", ".".repeat(30)));
        assert_eq!(progress_bar(&Progress { done: 10, total: 10 }), format!("[{}]", "#".repeat(30)));
        let half = progress_bar(&Progress { done: 5, total: 10 });
        assert_eq!(half.matches('#').count(), 15);
    }
}
