//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, CSV and config errors, and provides semantic variants
//! for file-name lookup, dataset shape and rendering failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No formula defined for file {file}")]
    NoFormula { file: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read {}: {source}", .file.display())]
    Read {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", .file.display())]
    Csv {
        file: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("No measurement rows in {}", .file.display())]
    EmptyDataset { file: PathBuf },

    #[error("Missing column '{column}' in {}", .file.display())]
    MissingColumn { file: PathBuf, column: &'static str },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Render error: {0}")]
    Render(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn csv(file: impl Into<PathBuf>, source: csv::Error) -> Self {
        Error::Csv {
            file: file.into(),
            source,
        }
    }

    pub fn read(file: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Read {
            file: file.into(),
            source,
        }
    }

    pub fn render<E: std::fmt::Display>(e: E) -> Self {
        Error::Render(e.to_string())
    }

    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
