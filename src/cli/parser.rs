use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rattendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate employee check-in/check-out logs and summarize attendance per employee",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Only print tables, warnings and errors
    #[arg(global = true, long = "quiet", short = 'q')]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the log for rows with missing required fields
    Validate {
        /// Input log (CSV with `Employee Name`, `Event`, `Timestamp`)
        input: String,

        /// Write the invalid rows (with `Missing Field`) to this file
        #[arg(long = "invalid-out", value_name = "FILE")]
        invalid_out: Option<String>,

        /// Write the valid rows to this file
        #[arg(long = "valid-out", value_name = "FILE")]
        valid_out: Option<String>,

        /// Output format: csv, json, xlsx (default: from file extension)
        #[arg(long, value_enum, value_name = "FORMAT")]
        format: Option<ExportFormat>,

        /// Overwrite output files without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the per-employee attendance summary
    Summary {
        /// Input log (CSV with `Employee Name`, `Event`, `Timestamp`)
        input: String,

        /// Write the summary to this file
        #[arg(long = "out", value_name = "FILE")]
        out: Option<String>,

        /// Summarize every row as-is, without dropping invalid rows first
        #[arg(long = "no-validate")]
        no_validate: bool,

        /// Output format: csv, json, xlsx (default: from file extension)
        #[arg(long, value_enum, value_name = "FORMAT")]
        format: Option<ExportFormat>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Validate, report invalid rows and write the summary
    Run {
        /// Input log (CSV with `Employee Name`, `Event`, `Timestamp`)
        input: String,

        /// Invalid rows report (default: `invalid_report` from config)
        #[arg(long = "invalid-out", value_name = "FILE")]
        invalid_out: Option<String>,

        /// Summary file (default: `summary_file` from config)
        #[arg(long = "summary-out", value_name = "FILE")]
        summary_out: Option<String>,

        /// Also write the valid rows to this file
        #[arg(long = "valid-out", value_name = "FILE")]
        valid_out: Option<String>,

        /// Output format: csv, json, xlsx (default: from file extension)
        #[arg(long, value_enum, value_name = "FORMAT")]
        format: Option<ExportFormat>,

        /// Overwrite output files without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show or create the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a configuration file with default values")]
        init: bool,

        /// Overwrite an existing configuration file (with --init)
        #[arg(long, short = 'f', requires = "init")]
        force: bool,
    },
}
