use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a completed comparison from
/// one that could not be evaluated and from outright failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Comparison computed and reported
    Success = 0,
    /// The configuration was rejected; the report lists the issues
    InsufficientConfiguration = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, dataset parsing, invalid dataset, etc.)
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
            ExitCode::InsufficientConfiguration => write!(f, "Insufficient Configuration (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors raised while loading data or writing reports.
///
/// Metric computation itself never fails; anything that can go wrong there
/// is expressed as a tagged value in the result instead.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Vendor dataset not found: {path}\n\n💡 Hint: {suggestion}")]
    DatasetNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse vendor dataset: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the dataset matches the documented vendor schema")]
    DatasetParseError { path: PathBuf, details: String },

    #[error("Invalid vendor record '{vendor}': {field} {reason}\n\n💡 Hint: Fix the record in the dataset; missing or out-of-range fields are rejected at load time")]
    InvalidVendorRecord {
        vendor: String,
        field: String,
        reason: String,
    },

    #[error("Invalid vendor dataset: {reason}")]
    InvalidDataset { reason: String },

    #[error("Unsupported dataset format: {path}\n\n💡 Hint: Use a .yml, .yaml, .json or .toml file")]
    UnsupportedDatasetFormat { path: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to render {format} report\nDetails: {details}")]
    OutputGenerationError { format: String, details: String },
}
