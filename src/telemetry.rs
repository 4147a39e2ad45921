//! Local rejection telemetry
//!
//! Collects rejected submissions and failed fetches in JSONL format for
//! analysis. Privacy-safe: no artwork content, only rejection patterns.

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// A rejection entry for the telemetry log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectionEntry {
    /// ISO 8601 timestamp when the rejection occurred
    pub timestamp: String,
    /// The operation that was refused (e.g., "submit", "fetch")
    pub operation: String,
    /// Rejection reason as shown to the user
    pub reason: String,
    /// Artwork id involved (if one exists)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artwork_id: Option<String>,
}

impl RejectionEntry {
    /// Create a new rejection entry with the current timestamp
    pub fn new(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            timestamp: iso_now(),
            operation: operation.into(),
            reason: reason.into(),
            artwork_id: None,
        }
    }

    /// Set the artwork id involved
    pub fn with_artwork(mut self, id: impl Into<String>) -> Self {
        self.artwork_id = Some(id.into());
        self
    }
}

/// Get current timestamp in ISO 8601 format
fn iso_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let duration = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    let secs = duration.as_secs();

    let days = secs / 86400;
    let time_secs = secs % 86400;
    let hours = time_secs / 3600;
    let mins = (time_secs % 3600) / 60;
    let secs = time_secs % 60;

    // Calculate year/month/day from days since epoch (1970-01-01)
    let mut remaining_days = days as i64;
    let mut year = 1970i32;

    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let days_in_months: [i64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 1;
    for days_in_month in days_in_months.iter() {
        if remaining_days < *days_in_month {
            break;
        }
        remaining_days -= days_in_month;
        month += 1;
    }
    let day = remaining_days + 1;

    format!("{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z", year, month, day, hours, mins, secs)
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Rejection collector that appends to a JSONL file
pub struct RejectionLog {
    path: std::path::PathBuf,
    enabled: bool,
}

impl RejectionLog {
    /// Create a new rejection log
    pub fn new(path: impl AsRef<Path>, enabled: bool) -> Self {
        Self { path: path.as_ref().to_path_buf(), enabled }
    }

    /// Check if collection is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Log a rejection entry (appends to JSONL file)
    pub fn log(&self, entry: &RejectionEntry) -> std::io::Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;

        let mut writer = BufWriter::new(file);
        let json = serde_json::to_string(entry).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_roundtrip() {
        let entry = RejectionEntry::new("submit", "palette entry 2 is not a #RRGGBB color")
            .with_artwork("a1b2c3d4e5f6");
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: RejectionEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.operation, "submit");
        assert_eq!(parsed.artwork_id.as_deref(), Some("a1b2c3d4e5f6"));
    }

    #[test]
    fn test_timestamp_shape() {
        let entry = RejectionEntry::new("fetch", "not found");
        // e.g. 2026-08-26T12:00:00Z
        assert_eq!(entry.timestamp.len(), 20);
        assert!(entry.timestamp.ends_with('Z'));
        assert_eq!(&entry.timestamp[4..5], "-");
        assert_eq!(&entry.timestamp[10..11], "T");
    }

    #[test]
    fn test_disabled_log_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rejections.jsonl");
        let log = RejectionLog::new(&path, false);
        log.log(&RejectionEntry::new("submit", "reason")).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_enabled_log_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rejections.jsonl");
        let log = RejectionLog::new(&path, true);
        log.log(&RejectionEntry::new("submit", "first")).unwrap();
        log.log(&RejectionEntry::new("submit", "second")).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}
