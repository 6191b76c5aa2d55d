//! Unified application error type.
//! Every module (table, core, config, export, cli) returns AppError so that
//! fatal conditions surface the same way from the library and the binary.
//!
//! Data anomalies (rows with missing fields, pairing anomalies) are NOT
//! errors: they travel as data inside the validation and summary results.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    /// The source cannot be parsed as a table at all.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// One or more required columns are absent from the header.
    #[error("Missing required column: {0}")]
    Schema(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
