//! weld - Welding parameter reference and work session journal
//!
//! Answers lookups like "MIG settings for mild steel, 1/8 inch" against a
//! fixed table of welding knowledge, and keeps a small JSON journal of
//! work sessions with statistics and CSV export.
//!
//! ## Key Concepts
//!
//! - **Knowledge base**: immutable typed tables, queried through
//!   [`KnowledgeBase`]; unknown keys produce a message listing valid keys
//! - **Session log**: append-only JSON file managed by [`SessionLog`];
//!   a missing or corrupt file reads as empty
//! - **Facade**: [`WeldingAssistant`] returns display text for every call

pub mod cli;
pub mod config;
pub mod core;

pub use crate::core::assistant::{WeldingAssistant, LOG_CLEARED, NO_ENTRIES};
pub use crate::core::log_store::{LogError, SessionLog};
pub use crate::core::lookup::{KnowledgeBase, LookupError, Process};
pub use crate::core::session::{LogStats, SessionEntry};
