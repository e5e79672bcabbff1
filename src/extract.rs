//! P-value extraction and per-test aggregation.
//!
//! A report line is recognized by the pattern
//! `<name>  P-value = <decimal>` anywhere in the line. Everything else in
//! a report is ignored. Word, space and digit classes are Unicode-aware.

use std::collections::HashMap;
use std::ops::Range;

use regex::Regex;

use crate::collect::ReportFile;
use crate::errors::{ExtractError, SourceContext};
use crate::log::debug;
use crate::types::PValue;

/// Test name, then the decimal printed after `P-value =`.
pub const P_VALUE_PATTERN: &str = r"(\w+)\s+P-value\s+=\s+([\d.]+)";

/// A single (test name, p-value) pair read from one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub test: String,
    pub value: PValue,
}

/// Raw match before the number is parsed.
#[derive(Debug, Clone)]
struct LineMatch<'a> {
    test: &'a str,
    value: &'a str,
    /// Byte range of the value within the line
    value_range: Range<usize>,
}

/// Compiled line matcher.
#[derive(Debug, Clone)]
pub struct Extractor {
    pattern: Regex,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        // Constant pattern, covered by the tests below
        let pattern = Regex::new(P_VALUE_PATTERN).expect("p-value pattern compiles");
        Self { pattern }
    }

    fn find<'a>(&self, line: &'a str) -> Option<LineMatch<'a>> {
        let caps = self.pattern.captures(line)?;
        let test = caps.get(1)?;
        let value = caps.get(2)?;
        Some(LineMatch {
            test: test.as_str(),
            value: value.as_str(),
            value_range: value.range(),
        })
    }

    /// Extract from one line. `None` when the line does not match.
    pub fn extract_line(&self, line: &str) -> Option<Result<Observation, ExtractError>> {
        self.find(line)
            .map(|m| parse_match(m, &SourceContext::new("<input>", line), 0))
    }

    /// Extract and aggregate an arbitrary sequence of lines.
    pub fn aggregate_lines<'a, I>(&self, lines: I) -> Result<TestResults, ExtractError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut results = TestResults::new();
        for line in lines {
            if let Some(obs) = self.extract_line(line) {
                results.push(obs?);
            }
        }
        Ok(results)
    }

    /// Extract every matching line of `report` into `results`.
    ///
    /// Returns the number of lines that matched.
    pub fn extract_report(
        &self,
        report: &ReportFile,
        results: &mut TestResults,
    ) -> Result<usize, ExtractError> {
        let ctx = report.source_context();
        let mut matched = 0;
        for (offset, line) in report.line_spans() {
            if let Some(m) = self.find(line) {
                results.push(parse_match(m, &ctx, offset)?);
                matched += 1;
            }
        }
        debug!(report = report.name(), matched, "extracted p-values");
        Ok(matched)
    }
}

fn parse_match(
    m: LineMatch<'_>,
    ctx: &SourceContext,
    line_offset: usize,
) -> Result<Observation, ExtractError> {
    let invalid = |reason: String| ExtractError::InvalidPValue {
        test: m.test.to_string(),
        value: m.value.to_string(),
        reason,
        src: ctx.named_source(),
        span: (line_offset + m.value_range.start, m.value_range.len()).into(),
    };
    let raw: f64 = m.value.parse().map_err(|e| invalid(format!("{e}")))?;
    let value = PValue::try_new(raw).map_err(|e| invalid(e.to_string()))?;
    Ok(Observation {
        test: m.test.to_string(),
        value,
    })
}

/// Extract and aggregate lines with a fresh [`Extractor`].
pub fn aggregate_lines<'a, I>(lines: I) -> Result<TestResults, ExtractError>
where
    I: IntoIterator<Item = &'a str>,
{
    Extractor::new().aggregate_lines(lines)
}

/// Extract and aggregate every report, in the order given.
pub fn aggregate_reports(reports: &[ReportFile]) -> Result<TestResults, ExtractError> {
    let extractor = Extractor::new();
    let mut results = TestResults::new();
    for report in reports {
        extractor.extract_report(report, &mut results)?;
    }
    Ok(results)
}

/// P-values grouped by test name.
///
/// Only grows. Names iterate in the order they were first seen, values in
/// the order they were recorded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestResults {
    /// Test names in first-seen order
    order: Vec<String>,
    values: HashMap<String, Vec<PValue>>,
}

impl TestResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one p-value, creating the test's entry if needed.
    pub fn record(&mut self, test: impl Into<String>, value: PValue) {
        let test = test.into();
        match self.values.get_mut(&test) {
            Some(values) => values.push(value),
            None => {
                self.order.push(test.clone());
                self.values.insert(test, vec![value]);
            }
        }
    }

    pub fn push(&mut self, obs: Observation) {
        self.record(obs.test, obs.value);
    }

    pub fn get(&self, test: &str) -> Option<&[PValue]> {
        self.values.get(test).map(Vec::as_slice)
    }

    /// Number of distinct test names
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of p-values across all tests
    pub fn total_values(&self) -> usize {
        self.values.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PValue])> {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.values[name].as_slice()))
    }
}
