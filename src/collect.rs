//! Report discovery: find the result files in a directory and read them.

use std::fs;
use std::path::Path;

use camino::{Utf8Path, Utf8PathBuf};

use crate::errors::{CollectError, SourceContext};
use crate::log::debug;

/// Extension of the text reports the NIST suite writes.
pub const DEFAULT_EXTENSION: &str = "txt";

/// One report file, read fully into memory.
#[derive(Debug, Clone)]
pub struct ReportFile {
    pub path: Utf8PathBuf,
    pub contents: String,
}

impl ReportFile {
    pub fn new(path: impl Into<Utf8PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }

    /// File name for diagnostics, falling back to the whole path.
    pub fn name(&self) -> &str {
        self.path.file_name().unwrap_or(self.path.as_str())
    }

    /// Lines without their terminators. `\n`, `\r\n` and a lone `\r` all end
    /// a line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.line_spans().map(|(_, line)| line)
    }

    /// Lines paired with their byte offset in `contents`.
    pub fn line_spans(&self) -> LineSpans<'_> {
        LineSpans::new(&self.contents)
    }

    pub fn source_context(&self) -> SourceContext {
        SourceContext::new(self.name(), self.contents.clone())
    }
}

/// Iterator over the lines of a text, with byte offsets.
#[derive(Debug, Clone)]
pub struct LineSpans<'a> {
    rest: &'a str,
    offset: usize,
}

impl<'a> LineSpans<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            rest: text,
            offset: 0,
        }
    }
}

impl<'a> Iterator for LineSpans<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let start = self.offset;
        let (line, consumed) = match self.rest.find(['\r', '\n']) {
            Some(i) if self.rest[i..].starts_with("\r\n") => (&self.rest[..i], i + 2),
            Some(i) => (&self.rest[..i], i + 1),
            None => (self.rest, self.rest.len()),
        };
        self.rest = &self.rest[consumed..];
        self.offset += consumed;
        Some((start, line))
    }
}

/// True when `file_name` ends in `.<extension>`. A leading dot on the
/// extension is ignored, so `txt` and `.txt` behave the same.
pub fn has_extension(file_name: &str, extension: &str) -> bool {
    let extension = extension.trim_start_matches('.');
    file_name
        .strip_suffix(extension)
        .is_some_and(|stem| stem.ends_with('.'))
}

/// Read every report in `dir` whose name ends in `.<extension>`.
///
/// The scan is not recursive. Files come back sorted by name so repeated
/// runs over the same directory aggregate in the same order.
pub fn collect_reports(
    dir: impl AsRef<Path>,
    extension: &str,
) -> Result<Vec<ReportFile>, CollectError> {
    let dir = dir.as_ref();
    let read_dir_err = |source| CollectError::ReadDir {
        path: dir.display().to_string(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        let Some(file_name) = path.file_name() else {
            continue;
        };
        if !has_extension(&file_name.to_string_lossy(), extension) {
            continue;
        }
        if !path.is_file() {
            debug!(path = %path.display(), "skipping non-file entry");
            continue;
        }
        let path = Utf8PathBuf::try_from(path).map_err(|e| CollectError::NonUtf8Path {
            path: e.as_path().display().to_string(),
        })?;
        paths.push(path);
    }
    paths.sort();

    paths.into_iter().map(|path| read_report(&path)).collect()
}

/// Read a single report file.
pub fn read_report(path: &Utf8Path) -> Result<ReportFile, CollectError> {
    let contents = fs::read_to_string(path).map_err(|source| CollectError::ReadFile {
        path: path.to_string(),
        source,
    })?;
    debug!(path = %path, bytes = contents.len(), "read report");
    Ok(ReportFile::new(path, contents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_matching() {
        assert!(has_extension("finalAnalysisReport.txt", "txt"));
        assert!(has_extension("stats.txt", ".txt"));
        assert!(!has_extension("stats.txt.bak", "txt"));
        assert!(!has_extension("statstxt", "txt"));
        assert!(!has_extension("stats.log", "txt"));
        assert!(has_extension(".txt", "txt"));
    }

    #[test]
    fn collect_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "B").unwrap();
        fs::write(dir.path().join("a.txt"), "A").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested.txt")).unwrap();

        let reports = collect_reports(dir.path(), DEFAULT_EXTENSION).unwrap();
        let names: Vec<_> = reports.iter().map(|r| r.name()).collect();
        assert_eq!(names, ["a.txt", "b.txt"]);
        assert_eq!(reports[0].contents, "A");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = collect_reports(&missing, DEFAULT_EXTENSION).unwrap_err();
        assert!(matches!(err, CollectError::ReadDir { .. }), "{err:?}");
    }

    #[test]
    fn non_utf8_report_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0x00]).unwrap();
        let err = collect_reports(dir.path(), DEFAULT_EXTENSION).unwrap_err();
        assert!(matches!(err, CollectError::ReadFile { .. }), "{err:?}");
    }

    #[test]
    fn report_lines() {
        let report = ReportFile::new("dir/r.txt", "one\ntwo\r\nthree");
        assert_eq!(report.name(), "r.txt");
        assert_eq!(report.lines().collect::<Vec<_>>(), ["one", "two", "three"]);
    }

    #[test]
    fn every_newline_convention_ends_a_line() {
        let text = "a\rb\r\nc\n\nd\r";
        let spans: Vec<_> = LineSpans::new(text).collect();
        assert_eq!(spans, [(0, "a"), (2, "b"), (5, "c"), (7, ""), (8, "d")]);
        for (offset, line) in spans {
            assert_eq!(&text[offset..offset + line.len()], line);
        }
        assert_eq!(LineSpans::new("").count(), 0);
        assert_eq!(LineSpans::new("\r\r").collect::<Vec<_>>(), [(0, ""), (1, "")]);
    }
}
