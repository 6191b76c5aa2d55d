use crate::core::calculator::pairing::PairingRules;
use crate::errors::{AppError, AppResult};
use crate::table::ReadOptions;
use crate::table::reader::DEFAULT_NA_VALUES;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_check_in")]
    pub check_in_label: String,
    #[serde(default = "default_check_out")]
    pub check_out_label: String,
    #[serde(default = "default_short_stay")]
    pub short_stay_minutes: i64,
    #[serde(default = "default_long_stay")]
    pub long_stay_minutes: i64,
    #[serde(default = "default_na_values")]
    pub na_values: Vec<String>,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default = "default_invalid_report")]
    pub invalid_report: String,
    #[serde(default = "default_summary_file")]
    pub summary_file: String,
}

fn default_check_in() -> String {
    "Check-In".to_string()
}
fn default_check_out() -> String {
    "Check-Out".to_string()
}
fn default_short_stay() -> i64 {
    30
}
fn default_long_stay() -> i64 {
    600
}
fn default_na_values() -> Vec<String> {
    DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect()
}
fn default_delimiter() -> String {
    ",".to_string()
}
fn default_invalid_report() -> String {
    "invalid_rows.csv".to_string()
}
fn default_summary_file() -> String {
    "log_summary.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            check_in_label: default_check_in(),
            check_out_label: default_check_out(),
            short_stay_minutes: default_short_stay(),
            long_stay_minutes: default_long_stay(),
            na_values: default_na_values(),
            delimiter: default_delimiter(),
            invalid_report: default_invalid_report(),
            summary_file: default_summary_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from `path`. A missing file yields the defaults;
    /// an unreadable or unparsable one is an error.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.check()?;
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = self.to_yaml()?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Reject values the pipeline cannot work with.
    pub fn check(&self) -> AppResult<()> {
        if self.short_stay_minutes < 0 || self.long_stay_minutes < 0 {
            return Err(AppError::Config(
                "stay thresholds must not be negative".to_string(),
            ));
        }
        self.stay_limit(self.short_stay_minutes)?;
        self.stay_limit(self.long_stay_minutes)?;
        if self.check_in_label == self.check_out_label {
            return Err(AppError::Config(
                "check_in_label and check_out_label must differ".to_string(),
            ));
        }
        self.delimiter_byte()?;
        Ok(())
    }

    fn stay_limit(&self, minutes: i64) -> AppResult<TimeDelta> {
        TimeDelta::try_minutes(minutes).ok_or_else(|| {
            AppError::Config(format!("stay threshold of {minutes} minutes is out of range"))
        })
    }

    fn delimiter_byte(&self) -> AppResult<u8> {
        match self.delimiter.as_bytes() {
            [b] => Ok(*b),
            _ => Err(AppError::Config(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            ))),
        }
    }

    pub fn read_options(&self) -> AppResult<ReadOptions> {
        Ok(ReadOptions {
            delimiter: self.delimiter_byte()?,
            na_values: self.na_values.clone(),
        })
    }

    pub fn pairing_rules(&self) -> AppResult<PairingRules> {
        Ok(PairingRules {
            check_in: self.check_in_label.clone(),
            check_out: self.check_out_label.clone(),
            short_stay: self.stay_limit(self.short_stay_minutes)?,
            long_stay: self.stay_limit(self.long_stay_minutes)?,
        })
    }
}
