use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::config::FarmConfig;
use crate::error::Result;
use crate::models::LogEntry;

/// Load a farm configuration from a JSON file and validate it.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<FarmConfig> {
    let content = fs::read_to_string(path)?;
    let config: FarmConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Save a farm configuration as pretty JSON.
pub fn save_config<P: AsRef<Path>>(path: P, config: &FarmConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

/// One CSV row per log entry.
#[derive(Serialize)]
struct LogRow<'a> {
    cycle: u32,
    round: u32,
    shed: &'a str,
    kind: &'a str,
    message: String,
}

/// Write the feeding log to a CSV file.
pub fn write_log_csv<P: AsRef<Path>>(path: P, entries: &[LogEntry]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for entry in entries {
        let event = serde_json::to_value(&entry.event)?;
        let kind = event
            .get("kind")
            .and_then(|k| k.as_str())
            .unwrap_or("event")
            .to_string();
        wtr.serialize(LogRow {
            cycle: entry.cycle,
            round: entry.round,
            shed: entry.shed.as_deref().unwrap_or(""),
            kind: &kind,
            message: entry.event.to_string(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}
