use std::path::PathBuf;

use analytics::{AnalyticsEngine, AnalyticsError};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use core_types::DemographicField;
use dataset::{date_bounds, filter_by_date_range, load_transactions};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;

use render::Report;

/// The main entry point for the Vantage dashboard application.
fn main() {
    // Initialize structured logging; RUST_LOG controls the filter.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => {
            if let Err(e) = handle_report(args) {
                eprintln!("Error building report: {e}");
                std::process::exit(1);
            }
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// An analytics dashboard over a static e-commerce transaction dataset.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the aggregate report for a date window of the dataset.
    Report(ReportArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// The start date of the report window (format: YYYY-MM-DD).
    /// Defaults to the configured or earliest observed order date.
    #[arg(long)]
    from: Option<NaiveDate>,

    /// The end date of the report window (format: YYYY-MM-DD).
    /// Defaults to the configured or latest observed order date.
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Path to the transaction CSV file. Overrides config.toml.
    #[arg(long)]
    data: Option<PathBuf>,

    /// How many rows the top-product and RFM ranking tables show.
    #[arg(long)]
    top: Option<usize>,

    /// Output format for the derived tables.
    #[arg(long, value_enum, default_value = "table")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Human-readable terminal tables.
    Table,
    /// The raw derived tables as pretty-printed JSON.
    Json,
}

// ==============================================================================
// Report Command Logic
// ==============================================================================

/// Handles the orchestration of the report: load, filter, aggregate, render.
fn handle_report(args: ReportArgs) -> anyhow::Result<()> {
    let config = configuration::load_config()?;
    let dashboard = config.dashboard;

    let data_path = args.data.unwrap_or(dashboard.data_path);
    let rows = load_transactions(&data_path)?;
    let (first, last) = date_bounds(&rows)
        .ok_or_else(|| anyhow::anyhow!("dataset {} holds no rows", data_path.display()))?;

    let start_date = args.from.or(dashboard.start_date).unwrap_or(first);
    let end_date = args.to.or(dashboard.end_date).unwrap_or(last);
    if start_date < first || end_date > last {
        anyhow::bail!(
            "requested window {start_date} .. {end_date} lies outside the dataset's \
             observed range {first} .. {last}"
        );
    }

    let window = filter_by_date_range(&rows, start_date, end_date)?;
    info!(
        rows = window.len(),
        %start_date,
        %end_date,
        "aggregating filtered window"
    );

    let engine = AnalyticsEngine::new();
    let rfm = match engine.rfm(&window) {
        Ok(table) => Some(table),
        Err(AnalyticsError::NoDataInRange) => None,
    };
    let report = Report {
        start_date,
        end_date,
        daily_orders: engine.daily_orders(&window),
        product_totals: engine.product_totals(&window),
        by_gender: engine.demographic_counts(&window, DemographicField::Gender),
        by_age_group: engine.demographic_counts(&window, DemographicField::AgeGroup),
        by_state: engine.demographic_counts(&window, DemographicField::State),
        rfm,
    };

    let top = args.top.unwrap_or(dashboard.top_products);
    match args.format {
        Format::Table => render::print_report(&report, top),
        Format::Json => println!("{}", render::to_json(&report)?),
    }

    Ok(())
}
