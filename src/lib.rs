//! Summarize NIST statistical test suite reports.
//!
//! The pipeline reads every report in a directory, pulls out
//! `<Test>  P-value = <value>` lines, and computes for each test the share
//! of p-values above a significance threshold:
//!
//! ```no_run
//! use nist_summary::{summarize_dir, types::Alpha};
//!
//! let summary = summarize_dir("results", "txt", Alpha::DEFAULT)?;
//! for entry in summary.entries() {
//!     println!("{}: {}", entry.test, entry.pass_rate);
//! }
//! # Ok::<(), nist_summary::errors::Error>(())
//! ```

pub mod collect;
pub mod errors;
pub mod extract;
pub mod log;
pub mod render;
pub mod summary;
pub mod types;

use std::path::Path;

pub use collect::{ReportFile, collect_reports};
pub use errors::{Error, Result};
pub use extract::{Extractor, TestResults, aggregate_lines, aggregate_reports};
pub use summary::{Summary, TestSummary};

use crate::log::{info, warn};
use crate::types::Alpha;

/// Collect, extract and summarize the reports in `dir`.
pub fn summarize_dir(dir: impl AsRef<Path>, extension: &str, alpha: Alpha) -> Result<Summary> {
    let dir = dir.as_ref();
    let reports = collect_reports(dir, extension)?;
    info!(dir = %dir.display(), reports = reports.len(), "collected reports");

    let results = aggregate_reports(&reports)?;
    if results.is_empty() {
        warn!(dir = %dir.display(), "no p-value lines found");
    }

    let summary = Summary::from_results(&results, alpha)?;
    info!(
        tests = summary.len(),
        values = results.total_values(),
        %alpha,
        "summarized"
    );
    Ok(summary)
}
