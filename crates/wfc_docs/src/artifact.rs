//! Download artifacts: named, typed byte streams handed to the hosting layer.
//!
//! The two artifacts are rendered independently; a failure in one leaves the
//! other path and the caller's session state untouched. Nothing is retained
//! here — the bytes go to the caller and that is the end of the record's
//! lifecycle.

use anyhow::{Context, Result};
use wfc_core::Record;

pub const CSV_FILE_NAME: &str = "blue_earth_county_experience.csv";
pub const CSV_MIME: &str = "text/csv";
pub const PDF_FILE_NAME: &str = "blue_earth_county_experience.pdf";
pub const PDF_MIME: &str = "application/octet-stream";

/// One downloadable export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Render `record` as the CSV download.
pub fn csv_artifact(record: &Record) -> Result<ExportArtifact> {
    let bytes = match crate::csv::csv_bytes(record) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("CSV export failed: {e}");
            return Err(e).context("Failed to generate CSV export");
        }
    };
    tracing::debug!(bytes = bytes.len(), "generated CSV export");

    Ok(ExportArtifact {
        filename: CSV_FILE_NAME.to_string(),
        mime: CSV_MIME.to_string(),
        bytes,
    })
}

/// Render `record` as the PDF download.
pub fn pdf_artifact(record: &Record) -> Result<ExportArtifact> {
    let bytes = match crate::pdf::generate_pdf(record) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("PDF export failed: {e}");
            return Err(e).context("Failed to generate PDF export");
        }
    };
    tracing::debug!(bytes = bytes.len(), "generated PDF export");

    Ok(ExportArtifact {
        filename: PDF_FILE_NAME.to_string(),
        mime: PDF_MIME.to_string(),
        bytes,
    })
}
