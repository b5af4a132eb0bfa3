use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

/// Timestamp pattern: YYYY-Mon-DD-HH:MM:SS
const TIMESTAMP_FORMAT: &str = "%Y-%b-%d-%H:%M:%S";

/// Append one pipeline milestone to the log file.
pub fn log_progress(log_path: &Path, message: &str) -> Result<()> {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    writeln!(file, "{timestamp} : {message}")
        .with_context(|| format!("Failed to write to log file {}", log_path.display()))?;

    Ok(())
}
