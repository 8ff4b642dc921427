pub mod excel;
pub mod json;

pub use excel::*;
pub use json::*;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::{FILENAME_PREFIX, TIMESTAMP_FORMAT};
use crate::models::Minutes;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

/// Derive an output path from the meeting title and the current time:
/// `<prefix>_<safe_title>_<timestamp>.<extension>` under `dir`.
///
/// Non-alphanumeric title characters become `_`; a record without a title
/// falls back to `Meeting`.
pub fn default_output_path(minutes: &Minutes, dir: &Path, extension: &str) -> PathBuf {
    let safe_title = match minutes.meeting_title.as_deref() {
        Some(title) if !title.is_empty() => title
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect::<String>(),
        _ => "Meeting".to_string(),
    };
    let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
    dir.join(format!("{FILENAME_PREFIX}_{safe_title}_{timestamp}.{extension}"))
}
