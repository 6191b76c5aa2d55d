//! Validation followed by summarization, the way the CLI chains them.

use crate::config::Config;
use crate::core::{summarizer, validator};
use crate::errors::AppResult;
use crate::models::{EmployeeSummary, ValidationResult};
use crate::table::{LogTable, read_log};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub validation: ValidationResult,
    pub summaries: Vec<EmployeeSummary>,
}

pub fn load_table(path: &Path, cfg: &Config) -> AppResult<LogTable> {
    read_log(path, &cfg.read_options()?)
}

pub fn validate_file(path: &Path, cfg: &Config) -> AppResult<ValidationResult> {
    validator::validate(&load_table(path, cfg)?)
}

/// Read, validate and summarize. A fatal validation error stops here,
/// so the summarizer only ever sees valid rows.
pub fn run_pipeline(path: &Path, cfg: &Config) -> AppResult<PipelineReport> {
    let validation = validate_file(path, cfg)?;
    let summaries = summarizer::summarize(&validation.valid, &cfg.pairing_rules()?);

    Ok(PipelineReport {
        validation,
        summaries,
    })
}
