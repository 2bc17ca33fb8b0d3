use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading a launch dataset. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("parsing JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: outcome class must be 0 or 1, got '{value}'")]
    InvalidClass { row: usize, value: String },

    #[error("row {row}: column '{column}' holds '{value}', expected a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("row {row}: column '{column}' is empty")]
    EmptyField { row: usize, column: &'static str },

    #[error("row {row}: launch site '{value}' is reserved for the all-sites option")]
    ReservedSite { row: usize, value: String },

    #[error("row {row}: invalid payload mass {value}")]
    InvalidPayload { row: usize, value: f64 },

    #[error("dataset contains no launch records")]
    Empty,

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
}

/// Failures while reading process configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address '{value}': {source}")]
    BindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}
