//! `weld config` command
//!
//! Show where settings come from, or write a starter config file.
//!
//! # Usage
//! ```bash
//! weld config                 # Show effective config
//! weld config --path          # Show config and log locations
//! weld config --init          # Write .weld/config.toml here
//! weld config --init --global # Write ~/.weld/config.toml
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use super::utils::AppContext;
use crate::config::Config;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Show config file and session log paths
    #[arg(long)]
    pub path: bool,

    /// Write a config file with default values
    #[arg(long)]
    pub init: bool,

    /// Use global config (~/.weld/config.toml) instead of local
    #[arg(short, long, requires = "init")]
    pub global: bool,

    /// Overwrite an existing config file
    #[arg(short, long, requires = "init")]
    pub force: bool,
}

pub fn run(args: ConfigArgs, ctx: &AppContext) -> Result<()> {
    if args.init {
        return init(&args);
    }

    if args.path {
        match &ctx.config_path {
            Some(path) => println!("{} Config: {}", "✓".green(), path.display()),
            None => println!("{} No config file found (using defaults)", "⚠".yellow()),
        }
        println!("  Log:    {}", ctx.log_path.display());
        return Ok(());
    }

    let content = toml::to_string_pretty(&ctx.config)?;
    println!("# log file: {}", ctx.log_path.display());
    print!("{}", content);
    Ok(())
}

fn init(args: &ConfigArgs) -> Result<()> {
    let path = if args.global {
        Config::global_config_path().context("Could not determine home directory")?
    } else {
        PathBuf::from(".weld").join("config.toml")
    };

    if path.exists() && !args.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    println!("{} Created {}", "✓".green(), path.display());
    Ok(())
}
