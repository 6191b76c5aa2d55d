#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rattendance::models::Record;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh CSV log in the temp dir and return its path
pub fn write_log(name: &str, content: &str) -> String {
    let p = temp_path(name, "csv");
    fs::write(&p, content).expect("write log fixture");
    p
}

/// Config path that does not exist, so every run uses the defaults
pub fn no_config(name: &str) -> String {
    temp_path(&format!("{name}_cfg"), "conf")
}

pub fn check_in(line: u64, name: &str, ts: &str) -> Record {
    Record::new(line, Some(name), Some("Check-In"), Some(ts))
}

pub fn check_out(line: u64, name: &str, ts: &str) -> Record {
    Record::new(line, Some(name), Some("Check-Out"), Some(ts))
}

/// A small log with a clean day, an anomalous day and two broken rows.
pub const SAMPLE_LOG: &str = "\
Employee Name,Event,Timestamp
Alice,Check-In,2024-03-04 09:00:00
Bob,Check-In,2024-03-04 08:00:00
Alice,Check-Out,2024-03-04 17:30:00
,Check-Out,2024-03-04 12:00:00
Bob,Check-In,2024-03-04 08:30:00
Carol,,
";
