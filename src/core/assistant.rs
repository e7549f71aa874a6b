//! WeldingAssistant - The single entry point for front-ends
//!
//! Owns the knowledge base and the session log and turns every result into
//! display text. Nothing here returns an error: unknown keys come back as
//! "not found" messages and store failures as `Error: ...` strings.

use std::fmt::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::log_store::{ExportOutcome, SessionLog, DEFAULT_LOG_FILE};
use super::lookup::{KnowledgeBase, Process};
use super::session::{most_recent_first, LogStats};

/// Entries shown by `view_log` when no limit is given
pub const DEFAULT_VIEW_LIMIT: usize = 5;

/// Entries shown by `log_summary` when no limit is given
pub const DEFAULT_SUMMARY_LIMIT: usize = 10;

/// Returned by `view_log`, `get_stats` and `log_summary` for an empty log
pub const NO_ENTRIES: &str = "No log entries found.";

/// Returned by `clear_log` on success, and by nothing else
pub const LOG_CLEARED: &str = "Log cleared. All entries removed.";

/// Facade over lookups and the session journal
#[derive(Debug, Clone)]
pub struct WeldingAssistant {
    kb: KnowledgeBase,
    log: SessionLog,
}

impl Default for WeldingAssistant {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl WeldingAssistant {
    /// Create an assistant journaling to `log_path`
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        let log = SessionLog::new(log_path);
        debug!("Session log at {:?}", log.path());
        Self {
            kb: KnowledgeBase::new(),
            log,
        }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn session_log(&self) -> &SessionLog {
        &self.log
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    pub fn get_process_settings(
        &self,
        process: Process,
        material: &str,
        thickness: Option<&str>,
    ) -> String {
        self.kb
            .process_settings(process, material, thickness)
            .map(|r| r.to_string())
            .unwrap_or_else(|e| e.to_string())
    }

    pub fn get_wire_speed(&self, material: &str, wire_size: &str, category: &str) -> String {
        self.kb
            .wire_speed(material, wire_size, category)
            .map(|r| r.to_string())
            .unwrap_or_else(|e| e.to_string())
    }

    pub fn get_machine_info(&self, brand: Option<&str>) -> String {
        self.kb
            .machine_info(brand)
            .map(|r| r.to_string())
            .unwrap_or_else(|e| e.to_string())
    }

    pub fn get_material_info(&self, material: &str) -> String {
        self.kb
            .material_info(material)
            .map(|r| r.to_string())
            .unwrap_or_else(|e| e.to_string())
    }

    // ------------------------------------------------------------------
    // Session log
    // ------------------------------------------------------------------

    /// Log a session; accepts numbers or raw text for hours and parts
    pub fn log_session(
        &self,
        hours: impl ToString,
        parts: impl ToString,
        notes: Option<&str>,
    ) -> String {
        match self
            .log
            .append(&hours.to_string(), &parts.to_string(), notes)
        {
            Ok(entry) => format!("=== SESSION LOGGED ===\n{}", entry),
            Err(e) => {
                warn!("log_session failed: {}", e);
                format!("Error: {}", e)
            }
        }
    }

    /// Most recent entries first, `DEFAULT_VIEW_LIMIT` when `limit` is `None`
    pub fn view_log(&self, limit: Option<usize>) -> String {
        let limit = limit.unwrap_or(DEFAULT_VIEW_LIMIT);
        let entries = self.log.entries();
        if entries.is_empty() {
            return NO_ENTRIES.to_string();
        }

        let mut out = format!("=== RECENT LOG ENTRIES (last {}) ===\n", limit);
        for entry in most_recent_first(entries).iter().take(limit) {
            let _ = write!(out, "{}", entry);
        }
        out
    }

    pub fn get_stats(&self) -> String {
        match self.log.stats() {
            Some(stats) => stats.to_string(),
            None => NO_ENTRIES.to_string(),
        }
    }

    /// Structured statistics for machine-readable output
    pub fn stats(&self) -> Option<LogStats> {
        self.log.stats()
    }

    /// Returns [`LOG_CLEARED`] on success
    pub fn clear_log(&self) -> String {
        match self.log.clear() {
            Ok(()) => LOG_CLEARED.to_string(),
            Err(e) => {
                warn!("clear_log failed: {}", e);
                format!("Error: {}", e)
            }
        }
    }

    pub fn export_log(&self, dest: &Path) -> String {
        match self.log.export(dest) {
            Ok(ExportOutcome::Written { path, rows }) => {
                format!("Exported {} entries to {}", rows, path.display())
            }
            Ok(ExportOutcome::Empty) => "No log entries to export.".to_string(),
            Ok(ExportOutcome::Unreadable { reason }) => format!(
                "Session log {} could not be read ({}); nothing exported.",
                self.log.path().display(),
                reason
            ),
            Err(e) => {
                warn!("export_log failed: {}", e);
                format!("Error: {}", e)
            }
        }
    }

    /// Statistics followed by the most recent entries
    pub fn log_summary(&self, limit: Option<usize>) -> String {
        let entries = self.log.entries();
        let Some(stats) = LogStats::from_entries(&entries) else {
            return NO_ENTRIES.to_string();
        };

        let limit = limit.unwrap_or(DEFAULT_SUMMARY_LIMIT);
        let mut out = format!("{}\n=== RECENT LOG ENTRIES (last {}) ===\n", stats, limit);
        for entry in most_recent_first(entries).iter().take(limit) {
            let _ = write!(out, "{}", entry);
        }
        out
    }
}
