// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum TreasuryError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // e.g., 404 Not Found, 503 Service Unavailable
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    /// The bond row did not hold exactly the expected number of values.
    /// Covers template changes, error pages and empty responses alike.
    #[error("invalid data returned from server: expected {expected} values, found {found}")]
    InvalidDataReturned { expected: usize, found: usize },

    #[error("table cell {column} has no content to read")]
    EmptyCell { column: usize },
}

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("could not parse {field} '{value}' of bond {serial} as a number: {source}")]
    NumericParse {
        field: &'static str,
        serial: String,
        value: String,
        source: std::num::ParseFloatError,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file not found: {0}")]
    NotFound(String),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("no bonds found in the configuration")]
    NoBonds,

    #[error("bond #{index}: denomination, serial, issue_date and series are all required")]
    Incomplete { index: usize },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("TreasuryDirect interaction failed: {0}")]
    Treasury(#[from] TreasuryError), // Automatically convert client errors

    #[error("Extraction failed for bond {serial}: {source}")]
    Extraction {
        serial: String,
        source: ExtractError,
    },

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}
