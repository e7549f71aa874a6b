//! CLI utility functions
//!
//! Shared by all commands:
//! - Resolving config and building the assistant (`AppContext`)
//! - Printing facade text, optionally in plain form

use std::path::PathBuf;

use anyhow::{bail, Result};

use super::Cli;
use crate::config::Config;
use crate::core::assistant::WeldingAssistant;

/// Resolved configuration plus the assistant built from it
pub struct AppContext {
    pub config: Config,
    /// File the config was read from, if any
    pub config_path: Option<PathBuf>,
    pub log_path: PathBuf,
    pub assistant: WeldingAssistant,
    pub plain: bool,
}

impl AppContext {
    /// Resolve config with priority: `--config`/`WELD_CONFIG`, local, global
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let (config, config_path) = match &cli.config {
            Some(path) => (Config::load_from(path)?, Some(path.clone())),
            None => Config::load()?,
        };

        let log_path = config.log_path(cli.log.as_deref());
        let plain = cli.plain || config.output.plain;
        if plain {
            colored::control::set_override(false);
        }

        Ok(Self {
            assistant: WeldingAssistant::new(log_path.clone()),
            log_path,
            config,
            config_path,
            plain,
        })
    }

    /// Print facade text; `Error: ...` results become command failures
    pub fn emit(&self, text: &str) -> Result<()> {
        if let Some(message) = text.strip_prefix("Error: ") {
            bail!("{}", message.trim_end());
        }

        if self.plain {
            println!("{}", plain_text(text));
        } else {
            println!("{}", text.trim_end());
        }
        Ok(())
    }
}

/// Drop `=` rules and blank lines for narrow or plain displays
///
/// Indentation of nested list lines is kept.
pub fn plain_text(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.contains('=') {
                line.replace('=', "").trim().to_string()
            } else {
                line.trim_end().to_string()
            }
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        let text = "=== MIG WELDING - MILD STEEL - 1/8\" ===\nVoltage: 17-19V\n\nGas: 100% Ar\n";
        assert_eq!(
            plain_text(text),
            "MIG WELDING - MILD STEEL - 1/8\"\nVoltage: 17-19V\nGas: 100% Ar"
        );
    }

    #[test]
    fn test_plain_text_keeps_list_indentation() {
        let text = "=== MILLER WELDING MACHINES ===\nPopular Models:\n  - Millermatic 211\n\n";
        assert_eq!(
            plain_text(text),
            "MILLER WELDING MACHINES\nPopular Models:\n  - Millermatic 211"
        );
    }
}
