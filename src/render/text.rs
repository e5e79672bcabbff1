//! Plain-text summary table for the terminal.

use crate::summary::Summary;
use crate::types::PassRate;

/// Column widths, in characters.
struct Columns {
    name: usize,
    count: usize,
}

impl Columns {
    fn row(&self, name: &str, count: &str, rate: &str) -> String {
        format!(
            "{:<name_w$}  {:>count_w$}  {:>9}\n",
            name,
            count,
            rate,
            name_w = self.name,
            count_w = self.count
        )
    }
}

/// One row per test plus a total row, columns padded to the widest entry.
pub fn render_table(summary: &Summary) -> String {
    let counts: Vec<String> = summary
        .entries()
        .iter()
        .map(|e| format!("{}/{}", e.passed, e.total))
        .collect();
    let (passed, total) = summary.overall();
    let overall_count = format!("{}/{}", passed, total);
    let columns = Columns {
        name: summary
            .entries()
            .iter()
            .map(|e| e.test.chars().count())
            .chain(["Test".len(), "Total".len()])
            .max()
            .unwrap_or(0),
        count: counts
            .iter()
            .map(String::len)
            .chain([overall_count.len(), "Passed".len()])
            .max()
            .unwrap_or(0),
    };

    let mut out = columns.row("Test", "Passed", "Pass rate");
    for (entry, count) in summary.entries().iter().zip(&counts) {
        out.push_str(&columns.row(&entry.test, count, &entry.pass_rate.percent()));
    }
    let overall = PassRate::from_counts(passed, total)
        .map(PassRate::percent)
        .unwrap_or_else(|| "-".to_string());
    out.push_str(&columns.row("Total", &overall_count, &overall));
    out.push_str(&format!("alpha = {}\n", summary.alpha()));
    out
}
