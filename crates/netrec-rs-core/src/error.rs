//! Error types for dataset loading.

use thiserror::Error;

/// Failures while reading or parsing a dataset resource.
///
/// The loader recovers from every variant by switching to fallback data;
/// only the offline converter surfaces them to the caller.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The configured file does not exist.
    #[error("dataset not found: {0}")]
    Missing(String),
    /// Reading or writing a local file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The HTTP request could not be completed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("HTTP error! Status: {status} ({url})")]
    HttpStatus { url: String, status: u16 },
    /// The JSON resource is not an array of row objects.
    #[error("invalid JSON dataset: {0}")]
    Json(#[from] serde_json::Error),
    /// The workbook could not be opened or read.
    #[error("invalid spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::Error),
    /// The workbook has no sheets.
    #[error("spreadsheet has no sheets")]
    EmptyWorkbook,
}
