use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pigeonhole_lib::{
    aggregate::aggregate,
    category::CategorySet,
    categorizer::{Categorizer, MatchPolicy},
    config::RunConfig,
    report::{output_path, Report, SubtotalPolicy},
    statement::Statement,
    util::format_amount,
};
use slog::info;
use sloggers::{
    terminal::TerminalLoggerBuilder,
    types::{Severity, SourceLocation},
    Build,
};

/// The keyword expense categorizer
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the bank statement (xlsx or csv)
    #[arg(long)]
    statement_path: PathBuf,
    /// Path to the category config file; builtin categories when omitted
    #[arg(long)]
    categories_path: Option<PathBuf>,
    /// Path to the run config yaml
    #[arg(long)]
    config_path: Option<PathBuf>,
    /// Assign a row to the first matching category only, or to all of them
    #[arg(long)]
    match_policy: Option<MatchPolicy>,
    /// Render subtotals exact or truncated to a whole number
    #[arg(long)]
    subtotal_policy: Option<SubtotalPolicy>,
    /// Where to write the report; derived from the statement path when omitted
    #[arg(long)]
    output_path: Option<PathBuf>,
    /// Log level
    #[arg(long)]
    log_level: Option<Severity>,
    // Subcommands
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
#[command()]
enum Command {
    /// Write the grouped report next to the statement
    #[command()]
    Report,
    /// Output the aggregated breakdown yaml
    #[command()]
    Breakdown,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let logger = TerminalLoggerBuilder::new()
        .level(args.log_level.unwrap_or_default())
        .source_location(SourceLocation::None)
        .build()?;

    let mut config = match &args.config_path {
        Some(path) => RunConfig::from_yaml_file(path).context("failed to parse run config")?,
        None => RunConfig::default(),
    };
    if let Some(match_policy) = args.match_policy {
        config.match_policy = match_policy;
    }
    if let Some(subtotal_policy) = args.subtotal_policy {
        config.subtotal_policy = subtotal_policy;
    }

    let categories = match &args.categories_path {
        Some(path) => CategorySet::from_text_file(path).context("failed to parse categories")?,
        None => CategorySet::builtin(),
    };
    let statement =
        Statement::from_path(&args.statement_path).context("failed to read statement")?;
    info!(logger, "read statement";
        "rows" => statement.rows.len(), "categories" => categories.len());

    let categorizer = Categorizer::new(categories, config.match_policy);
    let assignment = categorizer
        .categorize(&statement, &config.columns)
        .context("failed to categorize statement")?;
    if assignment.unmatched > 0 {
        info!(logger, "dropped rows matching no category"; "rows" => assignment.unmatched);
    }
    let breakdowns =
        aggregate(&assignment, &config.columns).context("failed to aggregate amounts")?;
    for breakdown in &breakdowns {
        info!(logger, "category subtotal";
            "keywords" => breakdown.category.keywords.join(","),
            "subtotal" => format_amount(breakdown.subtotal));
    }

    match args.command {
        Command::Report => {
            let report = Report::render(&breakdowns, &config.columns, config.subtotal_policy)
                .context("failed to render report")?;
            let output = args
                .output_path
                .clone()
                .unwrap_or_else(|| output_path(&args.statement_path, &config.output_suffix, "csv"));
            report
                .write_csv_file(&output)
                .context("failed to write report")?;
            info!(logger, "wrote report"; "path" => %output.display());
        }
        Command::Breakdown => {
            println!("{}", serde_yaml::to_string(&breakdowns)?);
        }
    }
    Ok(())
}
