//! Unified application error type.
//! All modules (store, core, net, report, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / persistence
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Network
    // ---------------------------
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Missing field '{field}' in flight row {row}")]
    MissingField { field: &'static str, row: usize },

    #[error("Invalid price '{0}'")]
    InvalidPrice(String),

    #[error("Invalid flight label '{0}' (expected 'DD-MM-YYYY · HH:MM')")]
    InvalidLabel(String),

    // ---------------------------
    // Notification
    // ---------------------------
    #[error("Email address error: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Email build error: {0}")]
    Email(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
