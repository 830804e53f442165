//! Batch processing command for multiple occurrence reports.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use ocorr_core::models::config::OcorrConfig;
use ocorr_core::{
    DocumentField, ExtractionResult, PartyField, PartyKind, ReportParser, RuleBasedReportParser,
};

use super::{is_supported, load_config, read_report_text};
use crate::export::{OutputFormat, format_record};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file (default: from configuration)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    extraction: Option<ExtractionResult>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let format = match args.format {
        Some(format) => format,
        None => OutputFormat::from_name(&config.output.default_format)?,
    };

    // Expand glob pattern
    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| is_supported(p))
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = RuleBasedReportParser::from_config(&config.extraction);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let result = process_single_file(&path, &parser, &config).await;
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(extraction) => {
                results.push(ProcessResult {
                    path,
                    extraction: Some(extraction),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        extraction: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    overall_pb.abandon();
                    anyhow::bail!("Processing failed for {}: {}", path.display(), error_msg);
                }
            }
        }

        overall_pb.inc(1);
    }

    overall_pb.finish_and_clear();

    let successful: Vec<_> = results.iter().filter(|r| r.extraction.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(output_dir) = &args.output_dir {
        for result in &successful {
            if let Some(extraction) = &result.extraction {
                let output_path = output_dir.join(output_file_name(&result.path, format));

                let content = format_record(&extraction.record, format, &config.output)?;
                fs::write(&output_path, content)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

/// Output file name for an input. The source extension is kept so that
/// `ro.pdf` and `ro.txt` in one batch do not overwrite each other.
fn output_file_name(path: &Path, format: OutputFormat) -> String {
    let source = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("ocorrencia");
    format!("{}.{}", source, format.extension())
}

async fn process_single_file(
    path: &Path,
    parser: &RuleBasedReportParser<'_>,
    config: &OcorrConfig,
) -> anyhow::Result<ExtractionResult> {
    let text = read_report_text(path, config).await?;
    let result = parser.parse(&text);

    debug!(
        "{}: {} fields not found",
        path.display(),
        result.missing_fields.len()
    );

    Ok(result)
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "numero_registro",
        "delegacia",
        "tipo_ocorrencia",
        "vitima",
        "autor",
        "missing_fields",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some(extraction) = &result.extraction {
            let record = &extraction.record;
            let party_name = |kind| {
                record
                    .party(kind)
                    .and_then(|p| p.get(PartyField::Name))
                    .unwrap_or("")
            };

            wtr.write_record([
                filename,
                "success",
                record.get(DocumentField::RegistrationNumber).unwrap_or(""),
                record.get(DocumentField::Precinct).unwrap_or(""),
                record.get(DocumentField::OccurrenceType).unwrap_or(""),
                party_name(PartyKind::Complainant),
                party_name(PartyKind::Accused),
                &extraction.missing_fields.len().to_string(),
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_names_keep_source_extension() {
        let pdf = output_file_name(Path::new("in/ro.pdf"), OutputFormat::Json);
        let txt = output_file_name(Path::new("in/ro.txt"), OutputFormat::Json);
        assert_eq!(pdf, "ro.pdf.json");
        assert_eq!(txt, "ro.txt.json");
        assert_eq!(
            output_file_name(Path::new("ro.pdf"), OutputFormat::Sheet),
            "ro.pdf.sheet.csv"
        );
    }
}
