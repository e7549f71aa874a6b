//! Log store - JSON-backed session journal
//!
//! The whole log lives in a single JSON array. Every mutation loads the
//! file, changes the in-memory copy and rewrites the file in full through
//! a sibling temp file and a rename, so the file is either fully replaced
//! or left as it was.
//!
//! # File states
//! - **absent**: empty log
//! - **parseable**: the stored entries
//! - **corrupt**: read as empty, left untouched until the next append or
//!   clear overwrites it
//!
//! There is no locking. Two processes appending at once can lose an entry.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::export::to_csv;
use super::session::{
    most_recent_first, parse_hours, parse_parts, LogStats, SessionEntry, MAX_SESSION_HOURS,
};

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "welding_log.json";

/// Session log failure
#[derive(Debug, Error)]
pub enum LogError {
    /// Bad user input; nothing was read or written
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode session log: {0}")]
    Encode(#[from] serde_json::Error),
}

/// What was found at the log path
#[derive(Debug, Clone, PartialEq)]
pub enum LogState {
    Absent,
    Loaded(Vec<SessionEntry>),
    /// Present but unreadable or not a valid log
    Corrupt { reason: String },
}

impl LogState {
    /// Entries, treating absent and corrupt logs as empty
    pub fn into_entries(self) -> Vec<SessionEntry> {
        match self {
            LogState::Loaded(entries) => entries,
            LogState::Absent | LogState::Corrupt { .. } => Vec::new(),
        }
    }
}

/// Result of an export request
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    /// Nothing logged; no file written
    Empty,
    /// Source log could not be read; no file written
    Unreadable { reason: String },
}

/// The session journal at one file path
#[derive(Debug, Clone)]
pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the backing file without ever failing
    pub fn load(&self) -> LogState {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No session log at {:?}", self.path);
                return LogState::Absent;
            }
            Err(e) => {
                warn!("Session log {:?} is unreadable: {}", self.path, e);
                return LogState::Corrupt {
                    reason: e.to_string(),
                };
            }
        };

        if content.trim().is_empty() {
            return LogState::Loaded(Vec::new());
        }

        match serde_json::from_str::<Vec<SessionEntry>>(&content) {
            Ok(entries) => {
                if let Some(bad) = entries.iter().find(|e| !e.is_valid()) {
                    warn!(
                        "Session log {:?} has an invalid entry dated {}",
                        self.path, bad.timestamp
                    );
                    return LogState::Corrupt {
                        reason: format!("invalid hours in entry dated {}", bad.timestamp),
                    };
                }
                debug!("Loaded {} session(s) from {:?}", entries.len(), self.path);
                LogState::Loaded(entries)
            }
            Err(e) => {
                warn!("Session log {:?} is not valid JSON: {}", self.path, e);
                LogState::Corrupt {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Entries in stored order (empty for absent or corrupt logs)
    pub fn entries(&self) -> Vec<SessionEntry> {
        self.load().into_entries()
    }

    /// Validate raw input, stamp it with the current time and persist it
    pub fn append(
        &self,
        hours: &str,
        parts: &str,
        notes: Option<&str>,
    ) -> Result<SessionEntry, LogError> {
        let hours = parse_hours(hours)?;
        let parts = parse_parts(parts)?;

        let entry = SessionEntry::new(hours, parts, notes);
        self.record(entry.clone())?;
        Ok(entry)
    }

    /// Persist an already-built entry at the end of the log
    pub fn record(&self, entry: SessionEntry) -> Result<(), LogError> {
        if !entry.is_valid() {
            return Err(LogError::InvalidArgument(format!(
                "Hours must be between 0 and {}",
                MAX_SESSION_HOURS
            )));
        }

        let mut entries = self.entries();
        let parts_total = entries
            .iter()
            .try_fold(entry.parts, |total, e| total.checked_add(e.parts));
        if parts_total.is_none() {
            return Err(LogError::InvalidArgument(format!(
                "Parts total would exceed {}; clear or export the log first",
                u64::MAX
            )));
        }

        entries.push(entry);
        self.save(&entries)?;

        info!("Logged session #{} to {:?}", entries.len(), self.path);
        Ok(())
    }

    /// Up to `limit` entries, newest first
    pub fn recent(&self, limit: usize) -> Vec<SessionEntry> {
        let mut entries = most_recent_first(self.entries());
        entries.truncate(limit);
        entries
    }

    /// `None` when the log is empty
    pub fn stats(&self) -> Option<LogStats> {
        LogStats::from_entries(&self.entries())
    }

    /// Replace the log with an empty one
    pub fn clear(&self) -> Result<(), LogError> {
        self.save(&[])?;
        info!("Cleared session log {:?}", self.path);
        Ok(())
    }

    /// Write the log as CSV to `dest`, in stored order
    pub fn export(&self, dest: &Path) -> Result<ExportOutcome, LogError> {
        let entries = match self.load() {
            LogState::Absent => return Ok(ExportOutcome::Empty),
            LogState::Corrupt { reason } => return Ok(ExportOutcome::Unreadable { reason }),
            LogState::Loaded(entries) if entries.is_empty() => return Ok(ExportOutcome::Empty),
            LogState::Loaded(entries) => entries,
        };

        write_atomic(dest, to_csv(&entries).as_bytes())?;
        info!("Exported {} session(s) to {:?}", entries.len(), dest);

        Ok(ExportOutcome::Written {
            path: dest.to_path_buf(),
            rows: entries.len(),
        })
    }

    fn save(&self, entries: &[SessionEntry]) -> Result<(), LogError> {
        let json = serde_json::to_string_pretty(entries)?;
        write_atomic(&self.path, json.as_bytes())
    }
}

/// Replace `path` with `contents` via a temp file in the same directory
fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), LogError> {
    let write_err = |source| LogError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let tmp = temp_path(path);
    if let Err(e) = fs::write(&tmp, contents).and_then(|_| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(e));
    }

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::tests::parse_csv;
    use tempfile::tempdir;

    fn log_in(dir: &tempfile::TempDir) -> SessionLog {
        SessionLog::new(dir.path().join("log.json"))
    }

    #[test]
    fn test_absent_file_is_empty() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);

        assert_eq!(log.load(), LogState::Absent);
        assert!(log.entries().is_empty());
        assert!(log.stats().is_none());
        assert!(!log.path().exists());
    }

    #[test]
    fn test_append_round_trips() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);

        let entry = log.append("3.5", "10", Some("brackets")).unwrap();
        assert_eq!(entry.hours, 3.5);
        assert_eq!(entry.parts, 10);

        let reopened = SessionLog::new(log.path());
        assert_eq!(reopened.load(), LogState::Loaded(vec![entry]));
    }

    #[test]
    fn test_invalid_input_touches_nothing() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);

        assert!(matches!(
            log.append("abc", "10", None),
            Err(LogError::InvalidArgument(_))
        ));
        assert!(matches!(
            log.append("2", "", None),
            Err(LogError::InvalidArgument(_))
        ));
        assert!(!log.path().exists());
    }

    #[test]
    fn test_parts_overflow_is_refused() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);
        let max = u64::MAX.to_string();

        log.append("1", &max, None).unwrap();
        assert!(matches!(
            log.append("1", &max, None),
            Err(LogError::InvalidArgument(_))
        ));
        assert!(matches!(
            log.append("1", "1", None),
            Err(LogError::InvalidArgument(_))
        ));
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn test_hours_over_limit_in_file_is_corrupt() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);
        fs::write(
            log.path(),
            r#"[{"date": "2024-01-01 08:00:00", "hours": 1e308, "parts": 1}]"#,
        )
        .unwrap();

        assert!(matches!(log.load(), LogState::Corrupt { .. }));
        assert!(log.stats().is_none());
    }

    #[test]
    fn test_corrupt_file_reads_empty_until_overwritten() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);
        fs::write(log.path(), "{not json").unwrap();

        assert!(matches!(log.load(), LogState::Corrupt { .. }));
        assert!(log.recent(5).is_empty());
        assert!(log.stats().is_none());
        // Reads leave the corrupt file alone
        assert_eq!(fs::read_to_string(log.path()).unwrap(), "{not json");

        log.append("1", "1", None).unwrap();
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn test_negative_hours_in_file_is_corrupt() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);
        fs::write(
            log.path(),
            r#"[{"date": "2024-01-01", "hours": -2.0, "parts": 1}]"#,
        )
        .unwrap();

        assert!(matches!(log.load(), LogState::Corrupt { .. }));
    }

    #[test]
    fn test_recent_orders_and_limits() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);

        for (ts, notes) in [
            ("2024-01-03 08:00:00", "c"),
            ("2024-01-01 08:00:00", "a"),
            ("2024-01-02 08:00:00", "b"),
        ] {
            log.record(SessionEntry::with_timestamp(ts, 1.0, 1, Some(notes)))
                .unwrap();
        }

        let notes = |entries: Vec<SessionEntry>| -> Vec<String> {
            entries.iter().map(|e| e.notes().to_string()).collect()
        };

        assert_eq!(notes(log.recent(2)), vec!["c", "b"]);
        assert_eq!(notes(log.recent(10)), vec!["c", "b", "a"]);
        assert!(log.recent(0).is_empty());

        // Stored order is untouched
        assert_eq!(notes(log.entries()), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_same_second_appends_newest_first() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);

        for notes in ["first", "second", "third"] {
            log.record(SessionEntry::with_timestamp(
                "2024-05-01 12:00:00",
                1.0,
                1,
                Some(notes),
            ))
            .unwrap();
        }

        let recent = log.recent(3);
        assert_eq!(recent[0].notes(), "third");
        assert_eq!(recent[2].notes(), "first");
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);
        log.append("2", "3", None).unwrap();

        log.clear().unwrap();
        assert_eq!(log.load(), LogState::Loaded(vec![]));
        assert_eq!(fs::read_to_string(log.path()).unwrap(), "[]");
    }

    #[test]
    fn test_write_failure_leaves_file_unchanged() {
        let dir = tempdir().unwrap();
        // A directory where the log file should be makes the rename fail
        let path = dir.path().join("log.json");
        fs::create_dir(&path).unwrap();
        let log = SessionLog::new(&path);

        let err = log.append("1", "1", None).unwrap_err();
        assert!(matches!(err, LogError::Write { .. }));
        assert!(path.is_dir());
        assert!(!dir.path().join("log.json.tmp").exists());
    }

    #[test]
    fn test_export_round_trip() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);
        log.append("3.5", "10", Some("brackets")).unwrap();
        log.append("0.75", "0", Some("jig, \"v2\"")).unwrap();
        log.append("8", "42", None).unwrap();

        let dest = dir.path().join("out").join("sessions.csv");
        let outcome = log.export(&dest).unwrap();
        assert_eq!(
            outcome,
            ExportOutcome::Written {
                path: dest.clone(),
                rows: 3
            }
        );

        let rows = parse_csv(&fs::read_to_string(&dest).unwrap());
        assert_eq!(rows[0], vec!["date", "hours", "parts", "notes"]);

        let entries = log.entries();
        assert_eq!(rows.len(), entries.len() + 1);
        for (row, entry) in rows[1..].iter().zip(&entries) {
            assert_eq!(row[0], entry.timestamp);
            assert_eq!(row[1].parse::<f64>().unwrap(), entry.hours);
            assert_eq!(row[2].parse::<u64>().unwrap(), entry.parts);
            assert_eq!(row[3], entry.notes());
        }
    }

    #[test]
    fn test_export_empty_or_corrupt_writes_nothing() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);
        let dest = dir.path().join("out.csv");

        assert_eq!(log.export(&dest).unwrap(), ExportOutcome::Empty);

        log.clear().unwrap();
        assert_eq!(log.export(&dest).unwrap(), ExportOutcome::Empty);

        fs::write(log.path(), "garbage").unwrap();
        assert!(matches!(
            log.export(&dest).unwrap(),
            ExportOutcome::Unreadable { .. }
        ));
        assert!(!dest.exists());
    }
}
