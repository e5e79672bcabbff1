//! Pass-rate summary per test name.

use crate::errors::SummaryError;
use crate::extract::TestResults;
use crate::types::{Alpha, PassRate};

/// Pass rate of one test name.
#[derive(Debug, Clone, PartialEq)]
pub struct TestSummary {
    pub test: String,
    /// P-values strictly above alpha
    pub passed: usize,
    pub total: usize,
    pub pass_rate: PassRate,
}

/// Pass rates for every test name, derived once from [`TestResults`].
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    alpha: Alpha,
    entries: Vec<TestSummary>,
}

impl Summary {
    /// Count passing p-values per test. Iteration order follows `results`.
    pub fn from_results(results: &TestResults, alpha: Alpha) -> Result<Summary, SummaryError> {
        let entries = results
            .iter()
            .map(|(test, values)| -> Result<TestSummary, SummaryError> {
                let total = values.len();
                let passed = values.iter().filter(|p| p.passes(alpha)).count();
                let pass_rate = PassRate::from_counts(passed, total).ok_or_else(|| {
                    SummaryError::NoValues {
                        test: test.to_string(),
                    }
                })?;
                Ok(TestSummary {
                    test: test.to_string(),
                    passed,
                    total,
                    pass_rate,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Summary { alpha, entries })
    }

    pub fn alpha(&self) -> Alpha {
        self.alpha
    }

    pub fn entries(&self) -> &[TestSummary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, test: &str) -> Option<&TestSummary> {
        self.entries.iter().find(|e| e.test == test)
    }

    pub fn test_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.test.as_str()).collect()
    }

    /// Parallel to [`Summary::test_names`].
    pub fn pass_rates(&self) -> Vec<PassRate> {
        self.entries.iter().map(|e| e.pass_rate).collect()
    }

    /// Passed and total p-values across all tests.
    pub fn overall(&self) -> (usize, usize) {
        self.entries
            .iter()
            .fold((0, 0), |(p, t), e| (p + e.passed, t + e.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PValue;

    fn results(test: &str, values: &[f64]) -> TestResults {
        let mut results = TestResults::new();
        for &v in values {
            results.record(test, PValue::try_new(v).unwrap());
        }
        results
    }

    fn rate(test: &str, values: &[f64]) -> f64 {
        let summary = Summary::from_results(&results(test, values), Alpha::DEFAULT).unwrap();
        summary.get(test).unwrap().pass_rate.raw()
    }

    #[test]
    fn mixed_values() {
        assert_eq!(rate("Frequency", &[0.5, 0.005, 0.02, 0.009]), 0.5);
    }

    #[test]
    fn all_pass() {
        assert_eq!(rate("Runs", &[0.2, 0.9, 0.011]), 1.0);
    }

    #[test]
    fn none_pass() {
        assert_eq!(rate("Rank", &[0.0, 0.001, 0.009]), 0.0);
    }

    #[test]
    fn threshold_is_strict() {
        assert_eq!(rate("Serial", &[0.01]), 0.0);
        assert_eq!(rate("Serial", &[0.01, 0.02]), 0.5);
    }

    #[test]
    fn custom_alpha() {
        let summary =
            Summary::from_results(&results("T", &[0.02, 0.04, 0.2]), Alpha::try_new(0.05).unwrap())
                .unwrap();
        assert_eq!(summary.get("T").unwrap().passed, 1);
        assert_eq!(summary.alpha().raw(), 0.05);
    }

    #[test]
    fn parallel_lists_follow_results_order() {
        let mut results = TestResults::new();
        for (test, v) in [("B", 0.5), ("A", 0.001), ("B", 0.001), ("C", 0.3)] {
            results.record(test, PValue::try_new(v).unwrap());
        }
        let summary = Summary::from_results(&results, Alpha::DEFAULT).unwrap();
        assert_eq!(summary.test_names(), ["B", "A", "C"]);
        let rates: Vec<f64> = summary.pass_rates().iter().map(|r| r.raw()).collect();
        assert_eq!(rates, [0.5, 0.0, 1.0]);
        assert_eq!(summary.overall(), (2, 4));
    }

    #[test]
    fn empty_results_give_empty_summary() {
        let summary = Summary::from_results(&TestResults::new(), Alpha::DEFAULT).unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.overall(), (0, 0));
    }
}
