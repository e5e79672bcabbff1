//! Error types with rich diagnostics using miette
//!
//! Extraction errors carry the report's source text so a bad p-value is
//! shown in context.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (report file name or "<input>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

// ============================================================================
// Collect Errors
// ============================================================================

/// Errors that occur while scanning the results directory
#[derive(Error, Diagnostic, Debug)]
pub enum CollectError {
    #[error("cannot read results directory {path}")]
    #[diagnostic(
        code(nist::collect::read_dir),
        help("pass the directory that holds the NIST output files")
    )]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read report {path}")]
    #[diagnostic(code(nist::collect::read_file))]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("report path is not valid UTF-8: {path}")]
    #[diagnostic(code(nist::collect::non_utf8_path))]
    NonUtf8Path { path: String },
}

// ============================================================================
// Extract Errors
// ============================================================================

/// Errors that occur while pulling p-values out of report lines
#[derive(Error, Diagnostic, Debug)]
pub enum ExtractError {
    #[error("invalid p-value `{value}` for {test}: {reason}")]
    #[diagnostic(code(nist::extract::invalid_p_value))]
    InvalidPValue {
        test: String,
        value: String,
        reason: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a usable number")]
        span: SourceSpan,
    },
}

// ============================================================================
// Summary Errors
// ============================================================================

/// Errors that occur while computing pass rates
#[derive(Error, Diagnostic, Debug)]
pub enum SummaryError {
    #[error("test {test} has no p-values")]
    #[diagnostic(
        code(nist::summary::no_values),
        help("a pass rate needs at least one recorded p-value")
    )]
    NoValues { test: String },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while drawing or writing the chart
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("SVG serialization error: {message}")]
    #[diagnostic(code(nist::render::serialize))]
    Serialize { message: String },

    #[error("cannot rasterize chart: {message}")]
    #[diagnostic(code(nist::render::rasterize))]
    Rasterize { message: String },

    #[error("cannot write chart to {path}")]
    #[diagnostic(code(nist::render::write))]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// Pipeline Errors
// ============================================================================

/// Any failure of the collect, extract, summarize, render pipeline
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Collect(#[from] CollectError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Summary(#[from] SummaryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
