use std::io::{stderr, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use card_analytics_engine::analytics::DEFAULT_TOP_QUANT;
use card_analytics_engine::engine::{normalize_reference_date, AnalyticsEngine};
use card_analytics_engine::provider::{CsvDatasetProvider, DatasetProvider, SignConvention};
use card_analytics_engine::storage::FileReportSink;

#[derive(Debug, Parser)]
#[command(name = "card-analytics-engine", about = "Analytics over a bank-card operations export")]
struct Cli {
    /// Operations export in CSV form
    input: PathBuf,

    /// Log level written to stderr: error, warn, info, debug or trace
    #[arg(long, default_value = "error", value_parser = parse_log_level)]
    log_level: LevelFilter,

    /// Read every amount as its absolute value
    #[arg(long)]
    magnitude: bool,

    /// Directory receiving category spending reports
    #[arg(long, default_value = "reports")]
    reports_dir: PathBuf,

    /// File name for category spending reports instead of the dated default
    #[arg(long)]
    report_name: Option<String>,

    #[command(subcommand)]
    command: Command
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Greeting, per-card totals and top transactions for the month up to DATE (YYYY-MM-DD HH:MM:SS)
    Dashboard {
        date: String
    },
    /// Operations whose description or category contains QUERY
    Search {
        query: String
    },
    /// Spend for CATEGORY over the 90 days ending at DATE (YYYY-MM-DD[ HH:MM:SS], default now)
    Spending {
        category: String,
        date: Option<String>
    },
    /// Largest transactions of the month up to DATE (YYYY-MM-DD HH:MM:SS)
    Top {
        date: String,
        #[arg(long, default_value_t = DEFAULT_TOP_QUANT)]
        quant: usize
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.log_level);

    let sign_convention = if cli.magnitude { SignConvention::Magnitude } else { SignConvention::AsGiven };
    let dataset = CsvDatasetProvider::new(&cli.input)
        .with_sign_convention(sign_convention)
        .load()
        .with_context(|| format!("Could not load operations from {}", cli.input.display()))?;

    let sink = Arc::new(FileReportSink::new(&cli.reports_dir));
    let mut engine = AnalyticsEngine::new(sink);

    if let Some(name) = cli.report_name {
        engine = engine.with_report_name(name);
    }

    let timer = Instant::now();

    match cli.command {
        Command::Dashboard { date } => write_json(&engine.dashboard(&dataset, &date))?,
        Command::Search { query } => write_json(&engine.search(&dataset, &query))?,
        Command::Spending { category, date } => {
            let report = engine.spending_by_category(&dataset, &category, date.as_deref())?;
            write_json(&report)?
        }
        Command::Top { date, quant } => {
            let view = engine.filter_month_to_date(&dataset, &normalize_reference_date(&date)).into_dataset();
            write_json(&engine.top_transactions(&view, quant))?
        }
    }

    info!("Answered query in: {:?}", timer.elapsed());

    Ok(())
}

fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        _ => Err(format!("invalid log level '{level}', expected error, warn, info, debug or trace"))
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the JSON answer, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_json<T: Serialize>(value: &T) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    serde_json::to_writer_pretty(&mut output, value)?;
    writeln!(output)?;
    output.flush()?;

    Ok(())
}
