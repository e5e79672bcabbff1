use datatest_stable::Utf8Path;
use nist_summary::collect::read_report;
use nist_summary::render::render_table;
use nist_summary::types::Alpha;
use nist_summary::{Summary, aggregate_reports};

/// Format a colored inline diff using dissimilar
fn format_inline_diff(expected: &str, actual: &str) -> String {
    use dissimilar::Chunk;

    let mut output = String::new();
    output.push_str("\n=== Inline Diff (expected vs actual) ===\n");
    output.push_str("Legend: [-expected only-] [+actual only+] [unchanged]\n\n");

    for chunk in dissimilar::diff(expected, actual) {
        match chunk {
            Chunk::Equal(s) => output.push_str(s),
            Chunk::Delete(s) => {
                output.push_str("\x1b[31m[-");
                output.push_str(s);
                output.push_str("-]\x1b[0m");
            }
            Chunk::Insert(s) => {
                output.push_str("\x1b[32m[+");
                output.push_str(s);
                output.push_str("+]\x1b[0m");
            }
        }
    }

    output
}

/// Summarize one report on its own and compare with the `.table` next to it.
fn test_report_file(path: &Utf8Path) -> datatest_stable::Result<()> {
    let report = read_report(path)?;
    let results = aggregate_reports(std::slice::from_ref(&report))?;
    let summary = Summary::from_results(&results, Alpha::DEFAULT)?;
    let actual = render_table(&summary);

    let expected = std::fs::read_to_string(path.with_extension("table"))?;
    if actual != expected {
        panic!(
            "table mismatch for {}:\n{}",
            path,
            format_inline_diff(&expected, &actual)
        );
    }

    // A second pass over the same file must agree exactly
    let again = Summary::from_results(&aggregate_reports(&[read_report(path)?])?, Alpha::DEFAULT)?;
    assert_eq!(summary, again, "summary of {} is not stable", path);
    Ok(())
}

datatest_stable::harness! {
    { test = test_report_file, root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/reports"), pattern = r"\.txt$" },
}
