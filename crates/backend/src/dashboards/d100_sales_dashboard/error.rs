use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn the sales spreadsheet into a table. Always fatal for the page.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset not found: {}", .path.display())]
    ResourceMissing { path: PathBuf },

    #[error("cannot read {}: {message}", .path.display())]
    Unreadable { path: PathBuf, message: String },

    #[error("sheet '{sheet}' not found (available: {})", .available.join(", "))]
    SheetMissing {
        sheet: String,
        available: Vec<String>,
    },

    #[error("header row {row} not found, the sheet has {rows} rows")]
    MissingHeader { row: usize, rows: usize },

    #[error("column '{column}' not found in the header row")]
    MissingColumn { column: &'static str },

    #[error("row {row}: time '{value}' does not match HH:MM:SS")]
    MalformedTime { row: usize, value: String },

    #[error("row {row}, column '{column}': invalid value '{value}'")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: duplicate order key '{key}'")]
    DuplicateKey { row: usize, key: String },
}
