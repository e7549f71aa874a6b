//! CSV rendering for the session log
//!
//! Column order is fixed: `date,hours,parts,notes`. Fields containing a
//! comma, quote, CR or LF are quoted with embedded quotes doubled.

use std::fmt::Write;

use super::session::{format_hours, SessionEntry};

pub const CSV_HEADER: &str = "date,hours,parts,notes";

/// Render entries in stored order
pub fn to_csv(entries: &[SessionEntry]) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');

    for entry in entries {
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "{},{},{},{}",
            csv_field(&entry.timestamp),
            format_hours(entry.hours),
            entry.parts,
            csv_field(entry.notes())
        );
    }

    out
}

/// Quote a field when it needs it
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
