use std::fs;
use std::path::Path;

use camino::Utf8PathBuf;
use nist_summary::errors::{CollectError, Error, ExtractError};
use nist_summary::render::{self, ChartOptions, OutputFormat};
use nist_summary::summarize_dir;
use nist_summary::types::Alpha;

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn results_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "run1.txt",
        "Frequency  P-value = 0.5\nRuns  P-value = 0.005\nnoise line\n",
    );
    write(
        dir.path(),
        "run2.txt",
        "Frequency  P-value = 0.02\nRuns  P-value = 0.3\nFrequency  P-value = 0.009\n",
    );
    write(dir.path(), "run3.log", "Frequency  P-value = 0.0001\n");
    dir
}

fn utf8(path: &Path) -> Utf8PathBuf {
    Utf8PathBuf::try_from(path.to_path_buf()).unwrap()
}

#[test]
fn summarizes_only_matching_extension() {
    let dir = results_dir();
    let summary = summarize_dir(dir.path(), "txt", Alpha::DEFAULT).unwrap();

    assert_eq!(summary.test_names(), ["Frequency", "Runs"]);
    let frequency = summary.get("Frequency").unwrap();
    assert_eq!((frequency.passed, frequency.total), (2, 3));
    let runs = summary.get("Runs").unwrap();
    assert_eq!(runs.pass_rate.raw(), 0.5);
}

#[test]
fn other_extension_selects_other_files() {
    let dir = results_dir();
    let summary = summarize_dir(dir.path(), "log", Alpha::DEFAULT).unwrap();
    assert_eq!(summary.test_names(), ["Frequency"]);
    assert_eq!(summary.get("Frequency").unwrap().pass_rate.raw(), 0.0);
}

#[test]
fn rerun_is_identical() {
    let dir = results_dir();
    let first = summarize_dir(dir.path(), "txt", Alpha::DEFAULT).unwrap();
    let second = summarize_dir(dir.path(), "txt", Alpha::DEFAULT).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = summarize_dir(dir.path().join("nope"), "txt", Alpha::DEFAULT).unwrap_err();
    assert!(
        matches!(err, Error::Collect(CollectError::ReadDir { .. })),
        "{err:?}"
    );
}

#[test]
fn malformed_p_value_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "bad.txt", "Frequency  P-value = 0.5.1\n");
    let err = summarize_dir(dir.path(), "txt", Alpha::DEFAULT).unwrap_err();
    let Error::Extract(ExtractError::InvalidPValue { src, value, .. }) = err else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!(src.name(), "bad.txt");
    assert_eq!(value, "0.5.1");
}

#[test]
fn writes_svg_chart() {
    let dir = results_dir();
    let summary = summarize_dir(dir.path(), "txt", Alpha::DEFAULT).unwrap();
    let out = utf8(&dir.path().join("chart.svg"));

    let format = render::write_chart(&summary, &ChartOptions::default(), &out).unwrap();
    assert_eq!(format, OutputFormat::Svg);
    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("Frequency"));
    assert!(svg.contains("66.67%"));
    assert!(svg.contains("50.00%"));
}

#[test]
fn writes_png_chart() {
    let dir = results_dir();
    let summary = summarize_dir(dir.path(), "txt", Alpha::DEFAULT).unwrap();
    let out = utf8(&dir.path().join("chart.png"));

    let format = render::write_chart(&summary, &ChartOptions::default(), &out).unwrap();
    assert_eq!(format, OutputFormat::Png);
    let png = fs::read(&out).unwrap();
    assert_eq!(&png[1..4], b"PNG");
}

#[test]
fn table_matches_summary() {
    let dir = results_dir();
    let summary = summarize_dir(dir.path(), "txt", Alpha::DEFAULT).unwrap();
    insta::assert_snapshot!(render::render_table(&summary), @r"
    Test       Passed  Pass rate
    Frequency     2/3     66.67%
    Runs          1/2     50.00%
    Total         3/5     60.00%
    alpha = 0.01
    ");
}
