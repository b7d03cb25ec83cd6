//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::path::Path;
use std::process;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use chatstats::ChatstatsError;
use chatstats::LineParser;
use chatstats::cli::Args;
use chatstats::format::{OutputFormat, to_format_string};
use chatstats::report::Report;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr so `--format json` output stays clean. `RUST_LOG`
/// overrides the `-v` level.
fn setup_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry().with(filter).with(layer).init();
}

fn run() -> Result<(), ChatstatsError> {
    let args = <Args as ClapParser>::parse();
    setup_logging(args.log_level());

    // Validate filters before touching the file
    let filter_config = args.filter_config()?;

    let parser = LineParser::with_config(args.parser_config());
    let (store, summary) = parser.parse_store(Path::new(&args.input))?;
    info!(
        input = %args.input,
        lines = summary.lines,
        messages = summary.messages,
        orphans = summary.orphan_lines,
        "parsed export"
    );

    let store = if filter_config.is_active() {
        let filtered = store.filtered(&filter_config);
        info!(before = store.len(), after = filtered.len(), "applied filters");
        filtered
    } else {
        store
    };

    let report = Report::build(&store, &args.report_config());
    let format: OutputFormat = args.format.into();
    let output = to_format_string(&report, format)?;

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
