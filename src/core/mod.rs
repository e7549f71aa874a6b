//! Core module - Business logic
//!
//! Welding knowledge tables, validated lookups and the session journal.

pub mod assistant;
pub mod export;
pub mod log_store;
pub mod lookup;
pub mod report;
pub mod session;
pub mod tables;
