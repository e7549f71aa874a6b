//! Session - A logged unit of welding work
//!
//! # Persisted shape
//! ```json
//! {"date": "2024-03-02 14:05:11", "hours": 3.5, "parts": 10, "notes": "brackets"}
//! ```
//! `notes` is omitted when empty.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::log_store::LogError;

/// Format used when stamping new entries
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Longest single session that can be logged
pub const MAX_SESSION_HOURS: f64 = 24.0;

const SEPARATOR: &str = "----------------------------------------";

/// One logged work session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionEntry {
    /// Local time the session was logged
    #[serde(rename = "date", alias = "timestamp")]
    pub timestamp: String,

    /// Hours worked
    pub hours: f64,

    /// Parts produced
    pub parts: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SessionEntry {
    /// Create an entry stamped with the current local time
    pub fn new(hours: f64, parts: u64, notes: Option<&str>) -> Self {
        Self::with_timestamp(
            Local::now().format(TIMESTAMP_FORMAT).to_string(),
            hours,
            parts,
            notes,
        )
    }

    pub fn with_timestamp(
        timestamp: impl Into<String>,
        hours: f64,
        parts: u64,
        notes: Option<&str>,
    ) -> Self {
        let notes = notes.map(str::trim).filter(|n| !n.is_empty()).map(String::from);
        Self {
            timestamp: timestamp.into(),
            hours,
            parts,
            notes,
        }
    }

    /// Notes text, empty when none were given
    pub fn notes(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }

    /// Parsed timestamp, used for ordering
    ///
    /// Accepts the stamped format, a bare date (midnight) or RFC 3339.
    /// Returns `None` for anything else.
    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        let raw = self.timestamp.trim();
        NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|dt| dt.naive_local())
            })
    }

    /// Hours must be finite and within `0..=MAX_SESSION_HOURS`
    pub fn is_valid(&self) -> bool {
        self.hours.is_finite() && (0.0..=MAX_SESSION_HOURS).contains(&self.hours)
    }
}

impl fmt::Display for SessionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Date: {}", self.timestamp)?;
        writeln!(f, "Hours: {}", format_hours(self.hours))?;
        writeln!(f, "Parts: {}", self.parts)?;
        if !self.notes().is_empty() {
            writeln!(f, "Notes: {}", self.notes())?;
        }
        writeln!(f, "{}", SEPARATOR)
    }
}

/// Aggregate figures over the whole log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogStats {
    pub sessions: usize,
    pub total_hours: f64,
    /// Sum of per-entry `u64` counts
    pub total_parts: u128,
    pub average_hours: f64,
}

impl LogStats {
    /// `None` for an empty log
    pub fn from_entries(entries: &[SessionEntry]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }

        let sessions = entries.len();
        let total_hours: f64 = entries.iter().map(|e| e.hours).sum();
        let total_parts: u128 = entries.iter().map(|e| u128::from(e.parts)).sum();

        Some(Self {
            sessions,
            total_hours,
            total_parts,
            average_hours: total_hours / sessions as f64,
        })
    }
}

impl fmt::Display for LogStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== WORK STATISTICS ===")?;
        writeln!(f, "Total Sessions: {}", self.sessions)?;
        writeln!(f, "Total Hours: {:.2}", self.total_hours)?;
        writeln!(f, "Total Parts: {}", self.total_parts)?;
        writeln!(f, "Average Hours/Session: {:.2}", self.average_hours)
    }
}

/// Render hours the way they were typed (`3.5`, `4.0`)
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{:.1}", hours)
    } else {
        hours.to_string()
    }
}

/// Validate user input for hours worked
pub fn parse_hours(raw: &str) -> Result<f64, LogError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LogError::InvalidArgument(
            "Please enter hours worked".to_string(),
        ));
    }

    let hours: f64 = raw.parse().map_err(|_| {
        LogError::InvalidArgument(format!(
            "Hours must be a valid number (e.g., 4.5), got '{}'",
            raw
        ))
    })?;

    if !hours.is_finite() {
        return Err(LogError::InvalidArgument(format!(
            "Hours must be a finite number, got '{}'",
            raw
        )));
    }
    if hours < 0.0 {
        return Err(LogError::InvalidArgument(
            "Hours cannot be negative".to_string(),
        ));
    }
    if hours > MAX_SESSION_HOURS {
        return Err(LogError::InvalidArgument(format!(
            "Hours cannot exceed {} per session, got '{}'",
            MAX_SESSION_HOURS, raw
        )));
    }

    Ok(hours)
}

/// Validate user input for parts produced
pub fn parse_parts(raw: &str) -> Result<u64, LogError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LogError::InvalidArgument(
            "Please enter parts made".to_string(),
        ));
    }

    raw.parse().map_err(|_| {
        LogError::InvalidArgument(format!(
            "Parts must be a non-negative whole number (e.g., 12), got '{}'",
            raw
        ))
    })
}

/// Newest first; equal timestamps keep the later append first
///
/// Entries whose timestamp cannot be parsed sort after all others.
pub fn most_recent_first(mut entries: Vec<SessionEntry>) -> Vec<SessionEntry> {
    entries.reverse();
    entries.sort_by(|a, b| b.recorded_at().cmp(&a.recorded_at()));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hours() {
        assert_eq!(parse_hours("3.5").unwrap(), 3.5);
        assert_eq!(parse_hours(" 4 ").unwrap(), 4.0);
        assert_eq!(parse_hours("0").unwrap(), 0.0);

        assert_eq!(parse_hours("24").unwrap(), 24.0);

        for bad in ["", "  ", "abc", "-1", "NaN", "inf", "24.5", "1e308"] {
            assert!(
                matches!(parse_hours(bad), Err(LogError::InvalidArgument(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_parts() {
        assert_eq!(parse_parts("10").unwrap(), 10);
        assert_eq!(parse_parts("0").unwrap(), 0);

        for bad in ["", "2.5", "-3", "ten"] {
            assert!(
                matches!(parse_parts(bad), Err(LogError::InvalidArgument(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(3.5), "3.5");
        assert_eq!(format_hours(4.0), "4.0");
        assert_eq!(format_hours(0.25), "0.25");
    }

    #[test]
    fn test_blank_notes_are_dropped() {
        let entry = SessionEntry::with_timestamp("2024-01-01 08:00:00", 1.0, 1, Some("   "));
        assert_eq!(entry.notes, None);
        assert_eq!(entry.notes(), "");
        assert!(!entry.to_string().contains("Notes"));
    }

    #[test]
    fn test_recorded_at_formats() {
        let stamped = SessionEntry::with_timestamp("2024-01-05 10:30:00", 1.0, 1, None);
        let date_only = SessionEntry::with_timestamp("2024-01-05", 1.0, 1, None);
        let rfc = SessionEntry::with_timestamp("2024-01-05T10:30:00+00:00", 1.0, 1, None);
        let junk = SessionEntry::with_timestamp("yesterday", 1.0, 1, None);

        assert!(stamped.recorded_at().is_some());
        assert!(date_only.recorded_at() < stamped.recorded_at());
        assert_eq!(rfc.recorded_at(), stamped.recorded_at());
        assert_eq!(junk.recorded_at(), None);
    }

    #[test]
    fn test_most_recent_first_tie_break() {
        let entries = vec![
            SessionEntry::with_timestamp("2024-01-01 08:00:00", 1.0, 1, Some("old")),
            SessionEntry::with_timestamp("2024-01-02 08:00:00", 2.0, 2, Some("first")),
            SessionEntry::with_timestamp("2024-01-02 08:00:00", 3.0, 3, Some("second")),
            SessionEntry::with_timestamp("garbage", 4.0, 4, Some("unparsed")),
        ];

        let notes: Vec<_> = most_recent_first(entries)
            .iter()
            .map(|e| e.notes().to_string())
            .collect();

        assert_eq!(notes, vec!["second", "first", "old", "unparsed"]);
    }

    #[test]
    fn test_stats() {
        assert!(LogStats::from_entries(&[]).is_none());

        let entries = vec![
            SessionEntry::with_timestamp("2024-01-01", 1.25, 3, None),
            SessionEntry::with_timestamp("2024-01-02", 2.25, 7, None),
        ];
        let stats = LogStats::from_entries(&entries).unwrap();
        assert_eq!(stats.sessions, 2);
        assert_eq!(stats.total_parts, 10);

        let text = stats.to_string();
        assert!(text.contains("Total Sessions: 2"));
        assert!(text.contains("Total Hours: 3.50"));
        assert!(text.contains("Average Hours/Session: 1.75"));
    }

    #[test]
    fn test_stats_parts_total_does_not_overflow() {
        let entries = vec![
            SessionEntry::with_timestamp("2024-01-01", 1.0, u64::MAX, None),
            SessionEntry::with_timestamp("2024-01-02", 1.0, u64::MAX, None),
        ];
        let stats = LogStats::from_entries(&entries).unwrap();
        assert_eq!(stats.total_parts, u128::from(u64::MAX) * 2);
        assert!(stats.to_string().contains("Total Parts: 36893488147419103230"));
    }

    #[test]
    fn test_hours_out_of_range_is_invalid() {
        assert!(SessionEntry::with_timestamp("2024-01-01", 24.0, 1, None).is_valid());
        assert!(!SessionEntry::with_timestamp("2024-01-01", 1e308, 1, None).is_valid());
        assert!(!SessionEntry::with_timestamp("2024-01-01", -0.5, 1, None).is_valid());
    }

    #[test]
    fn test_serde_shape() {
        let entry = SessionEntry::with_timestamp("2024-01-01 08:00:00", 3.5, 10, Some("brackets"));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "date": "2024-01-01 08:00:00",
                "hours": 3.5,
                "parts": 10,
                "notes": "brackets"
            })
        );

        let without_notes: SessionEntry =
            serde_json::from_str(r#"{"timestamp": "2024-01-01", "hours": 2, "parts": 1}"#).unwrap();
        assert_eq!(without_notes.notes, None);
        assert_eq!(without_notes.hours, 2.0);
    }
}
