//! CLI module - Command definitions and handlers
//!
//! Every command goes through [`crate::WeldingAssistant`] and prints the
//! text it returns.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod config;
pub mod log;
pub mod machine;
pub mod material;
pub mod settings;
pub mod utils;
pub mod wire;

/// weld - Welding parameter reference and work session journal
///
/// Look up MIG, TIG and Arc settings, wire speeds, machine brands and
/// material properties, and keep a log of hours worked and parts made.
#[derive(Parser, Debug)]
#[command(name = "weld")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path
    #[arg(short, long, global = true, env = "WELD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Session log file (overrides WELD_LOG and the config file)
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,

    /// Plain output without decorative rules
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// MIG settings for a material and thickness
    Mig(settings::SettingsArgs),

    /// TIG settings for a material and thickness
    Tig(settings::SettingsArgs),

    /// Arc/Stick settings (cast iron needs no thickness)
    #[command(alias = "stick")]
    Arc(settings::SettingsArgs),

    /// Wire feed speed for a material, wire size and thickness category
    Wire(wire::WireArgs),

    /// Welding machine brands
    Machine(machine::MachineArgs),

    /// Material properties
    Material(material::MaterialArgs),

    /// Work session log
    Log(log::LogArgs),

    /// Show resolved configuration
    Config(config::ConfigArgs),
}
