use anyhow::{Context, Result};
use clap::Parser;
use regex::Regex;
use std::io::{self, BufWriter, Write};

use benchtable::aggregate::{Aggregation, Filters, MissingPolicy};
use benchtable::input::InputSource;
use benchtable::report::{self, ReportConfig};
use benchtable::table::Align;
use benchtable::telemetry;

#[derive(Parser)]
#[command(
    name = "benchtable",
    about = "Render JMH benchmark results as a markdown table",
    version
)]
struct Cli {
    /// JMH result file(s) (`-rf json`); `-` reads stdin. `.gz`/`.zst` are
    /// decompressed. Later results replace earlier ones.
    #[arg(required = true)]
    files: Vec<String>,

    /// Separator alignment marker for the score columns
    #[arg(long, value_enum, default_value_t = Align::Default)]
    align: Align,

    /// Decimal places for score and error
    #[arg(long, default_value_t = 2)]
    precision: usize,

    /// Render a blank cell when an instance has no result for a benchmark
    /// (default: fail)
    #[arg(long)]
    allow_missing: bool,

    /// Only report benchmarks whose simple name (`Class.method`) matches
    #[arg(long = "bench", value_name = "REGEX")]
    bench: Option<Regex>,

    /// Only report instances whose name matches
    #[arg(long = "instance", value_name = "REGEX")]
    instance: Option<Regex>,

    /// Don't print the `system` heading of older result files
    #[arg(long)]
    no_heading: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = telemetry::get_subscriber(telemetry::level_for_verbosity(cli.verbose));
    telemetry::init_subscriber(subscriber).context("failed to install log subscriber")?;

    let mut agg = Aggregation::new(Filters {
        benchmark: cli.bench,
        instance: cli.instance,
    });
    for arg in &cli.files {
        let source = InputSource::from_arg(arg);
        let records = source
            .load()
            .with_context(|| format!("failed to load benchmark results: {source}"))?;
        agg.extend(&records)
            .with_context(|| format!("failed to aggregate benchmark results: {source}"))?;
    }

    let config = ReportConfig {
        precision: cli.precision,
        align: cli.align,
        missing: if cli.allow_missing {
            MissingPolicy::Blank
        } else {
            MissingPolicy::Error
        },
        heading: !cli.no_heading,
    };

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    report::write_report(&mut out, &agg, &config).context("failed to build report")?;
    out.flush()?;

    Ok(())
}
