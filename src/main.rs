use camino::Utf8PathBuf;
use clap::Parser;

use nist_summary::collect::DEFAULT_EXTENSION;
use nist_summary::render::{self, ChartOptions, defaults};
use nist_summary::summarize_dir;
use nist_summary::types::Alpha;

#[derive(Parser, Debug)]
#[command(name = "nist-summary")]
#[command(version, about = "Summarize NIST randomness test reports as per-test pass rates")]
struct Cli {
    /// Directory holding the NIST output files
    dir: Utf8PathBuf,

    /// Extension of the report files to read
    #[arg(short, long, default_value = DEFAULT_EXTENSION)]
    extension: String,

    /// Significance threshold; a p-value must be strictly above it to pass
    #[arg(short, long, default_value_t = Alpha::DEFAULT)]
    alpha: Alpha,

    /// Chart output path (.svg, or .png for a raster image)
    #[arg(short, long, default_value = "nist_summary.svg")]
    output: Utf8PathBuf,

    /// Chart title
    #[arg(long, default_value = defaults::TITLE)]
    title: String,

    /// Only print the table, do not write a chart
    #[arg(long)]
    no_chart: bool,

    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "tracing")]
fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "tracing"))]
fn init_tracing(_verbose: u8) {}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let summary = summarize_dir(&cli.dir, &cli.extension, cli.alpha)?;
    print!("{}", render::render_table(&summary));

    if !cli.no_chart {
        let options = ChartOptions {
            title: cli.title,
            ..Default::default()
        };
        render::write_chart(&summary, &options, &cli.output)?;
        eprintln!("chart written to {}", cli.output);
    }
    Ok(())
}
