//! Strongly-typed numeric primitives (zero-cost newtypes).
//!
//! - No raw `f64` crosses a stage boundary
//! - Thresholds and rates are validated on construction

use std::fmt;
use std::str::FromStr;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
    /// Value is above 1 when a fraction is required
    AboveOne,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
            NumericError::AboveOne => write!(f, "value is greater than 1"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

fn check_fraction(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val < 0.0 {
        Err(NumericError::Negative)
    } else if val > 1.0 {
        Err(NumericError::AboveOne)
    } else {
        Ok(val)
    }
}

/// One p-value read from a report line.
///
/// Reports are expected to stay within `[0, 1]`, but whatever the report
/// printed is kept. A digit run too long for `f64` becomes `+inf` and
/// passes any threshold.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct PValue(f64);

impl PValue {
    /// Create a PValue with validation (rejects NaN)
    #[inline]
    pub fn try_new(val: f64) -> Result<PValue, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else {
            Ok(PValue(val))
        }
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Strictly above the threshold. A value equal to alpha fails.
    #[inline]
    pub fn passes(self, alpha: Alpha) -> bool {
        self.0 > alpha.0
    }
}

impl fmt::Display for PValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Significance threshold. A result at or below alpha is a failure.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Alpha(f64);

impl Alpha {
    /// The customary NIST SP 800-22 level.
    pub const DEFAULT: Alpha = Alpha(0.01);

    #[inline]
    pub fn try_new(val: f64) -> Result<Alpha, NumericError> {
        check_fraction(val).map(Alpha)
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Default for Alpha {
    fn default() -> Self {
        Alpha::DEFAULT
    }
}

impl fmt::Display for Alpha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Alpha {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let val: f64 = s
            .trim()
            .parse()
            .map_err(|e| format!("invalid threshold '{}': {}", s, e))?;
        Alpha::try_new(val).map_err(|e| format!("invalid threshold '{}': {}", s, e))
    }
}

/// Fraction of passing p-values, always within `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct PassRate(f64);

impl PassRate {
    pub const ZERO: PassRate = PassRate(0.0);
    pub const ONE: PassRate = PassRate(1.0);

    /// `passed / total`, or `None` when there is nothing to divide by.
    #[inline]
    pub fn from_counts(passed: usize, total: usize) -> Option<PassRate> {
        if total == 0 || passed > total {
            None
        } else {
            Some(PassRate(passed as f64 / total as f64))
        }
    }

    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Percentage with two decimals, e.g. `50.00%`.
    pub fn percent(self) -> String {
        format!("{:.2}%", self.0 * 100.0)
    }
}

impl fmt::Display for PassRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.percent())
    }
}
