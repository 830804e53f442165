//! Process command - extract data from a single occurrence report.

use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use ocorr_core::{ReportParser, RuleBasedReportParser};

use super::{load_config, read_report_text};
use crate::export::{OutputFormat, format_record};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF, or TXT with already extracted text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (default: from configuration)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// List the fields that were not found
    #[arg(long)]
    show_missing: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let format = match args.format {
        Some(format) => format,
        None => OutputFormat::from_name(&config.output.default_format)?,
    };

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")?
            .progress_chars("##-"),
    );

    pb.set_message("Reading document...");
    pb.set_position(10);

    let text = read_report_text(&args.input, &config).await?;

    pb.set_message("Extracting occurrence data...");
    pb.set_position(60);

    let parser = RuleBasedReportParser::from_config(&config.extraction);
    let result = parser.parse(&text);

    pb.set_position(100);
    pb.finish_and_clear();

    let output = format_record(&result.record, format, &config.output)?;

    if let Some(output_path) = &args.output {
        tokio::fs::write(output_path, &output).await?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_missing {
        println!();
        if result.missing_fields.is_empty() {
            println!("{} All fields found", style("ℹ").blue());
        } else {
            println!(
                "{} {} fields not found:",
                style("ℹ").blue(),
                result.missing_fields.len()
            );
            for key in &result.missing_fields {
                println!("  - {}", key);
            }
        }
    }

    debug!(
        "Extraction took {}ms, total processing time: {:?}",
        result.processing_time_ms,
        start.elapsed()
    );

    Ok(())
}
