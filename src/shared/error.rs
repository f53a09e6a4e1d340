use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a live catalog from the
/// built-in sample fallback and from hard failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - catalog built from the configured sources
    Success = 0,
    /// Every source failed; output was built from the sample dataset
    SampleDataUsed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::SampleDataUsed => write!(f, "Sample Data Used (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for catalog building.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to fetch sheet '{sheet}'\nDetails: {details}")]
    SheetUnavailable { sheet: String, details: String },

    #[error("Sheet '{sheet}' did not return a JSON array of rows\nDetails: {details}")]
    InvalidSheetPayload { sheet: String, details: String },

    #[error("All {count} sheet(s) failed to load\n\n💡 Hint: Check the spreadsheet ID and your network connection, or drop --no-sample-fallback to render the sample dataset")]
    AllSourcesUnavailable { count: usize },

    #[error("No spreadsheet ID configured\n\n💡 Hint: Pass --spreadsheet-id, set 'spreadsheet_id' in the config file, or read local files with --from-dir")]
    MissingSpreadsheetId,

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}
