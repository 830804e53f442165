//! CLI subcommands and the input handling they share.

pub mod batch;
pub mod config;
pub mod process;

use std::path::Path;

use tracing::debug;

use ocorr_core::models::config::OcorrConfig;
use ocorr_core::{DocumentTextProvider, PdfExtractor};

/// Load the configuration from `--config`, else from the default location if
/// it exists, else fall back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<OcorrConfig> {
    if let Some(path) = config_path {
        return Ok(OcorrConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Using configuration from {}", default_path.display());
        Ok(OcorrConfig::from_file(&default_path)?)
    } else {
        Ok(OcorrConfig::default())
    }
}

/// Whether `path` has an extension the extractor accepts.
pub fn is_supported(path: &Path) -> bool {
    matches!(extension_of(path).as_str(), "pdf" | "txt")
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Raw report text of an input file.
///
/// PDFs go through the text extractor; `.txt` files are taken as already
/// extracted text.
pub async fn read_report_text(path: &Path, config: &OcorrConfig) -> anyhow::Result<String> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let extension = extension_of(path);
    let text = match extension.as_str() {
        "pdf" => {
            let data = tokio::fs::read(path).await?;
            let mut extractor = PdfExtractor::new();
            extractor.load(&data)?;
            debug!("PDF has {} pages", extractor.page_count());
            extractor.extract_text(&config.pdf.page_separator)?
        }
        "txt" => tokio::fs::read_to_string(path).await?,
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    };

    if text.trim().chars().count() < config.pdf.min_text_length {
        anyhow::bail!("No text could be extracted from {}", path.display());
    }

    Ok(text)
}
