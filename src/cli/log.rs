//! `weld log` commands
//!
//! Work session journal.
//!
//! # Usage
//! ```bash
//! weld log add --hours 3.5 --parts 10 --notes "bracket run"
//! weld log view -n 10
//! weld log stats --json
//! weld log summary
//! weld log export sessions.csv
//! weld log clear -y
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;

use super::utils::AppContext;
use crate::core::assistant::LOG_CLEARED;

#[derive(Args, Debug)]
pub struct LogArgs {
    #[command(subcommand)]
    pub command: LogCommand,
}

#[derive(Subcommand, Debug)]
pub enum LogCommand {
    /// Log a work session
    Add(AddArgs),

    /// Show recent sessions, newest first
    View(ViewArgs),

    /// Totals and averages over the whole log
    Stats(StatsArgs),

    /// Statistics followed by recent sessions
    Summary(ViewArgs),

    /// Remove every logged session
    Clear(ClearArgs),

    /// Write the log to a CSV file
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Hours worked (e.g., 4.5)
    #[arg(long, allow_hyphen_values = true)]
    pub hours: String,

    /// Parts produced (e.g., 12)
    #[arg(long, allow_hyphen_values = true)]
    pub parts: String,

    /// What was worked on
    #[arg(short, long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Number of sessions to show (default from config)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ClearArgs {
    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Destination CSV file
    pub path: PathBuf,
}

pub fn execute(args: LogArgs, ctx: &AppContext) -> Result<()> {
    match args.command {
        LogCommand::Add(args) => add(args, ctx),
        LogCommand::View(args) => {
            let limit = args.limit.unwrap_or(ctx.config.log.view_limit);
            ctx.emit(&ctx.assistant.view_log(Some(limit)))
        }
        LogCommand::Stats(args) => stats(args, ctx),
        LogCommand::Summary(args) => {
            let limit = args.limit.unwrap_or(ctx.config.log.summary_limit);
            ctx.emit(&ctx.assistant.log_summary(Some(limit)))
        }
        LogCommand::Clear(args) => clear(args, ctx),
        LogCommand::Export(args) => {
            let result = ctx.assistant.export_log(&args.path);
            ctx.emit(&result)?;
            if result.starts_with("Exported") {
                eprintln!("{} {}", "✓".green(), args.path.display());
            }
            Ok(())
        }
    }
}

fn add(args: AddArgs, ctx: &AppContext) -> Result<()> {
    let result = ctx
        .assistant
        .log_session(&args.hours, &args.parts, args.notes.as_deref());
    ctx.emit(&result)?;
    eprintln!("{} Saved to {}", "✓".green(), ctx.log_path.display());
    Ok(())
}

fn stats(args: StatsArgs, ctx: &AppContext) -> Result<()> {
    if args.json {
        // An empty log has no statistics
        match ctx.assistant.stats() {
            Some(stats) => println!("{}", serde_json::to_string_pretty(&stats)?),
            None => println!("null"),
        }
        return Ok(());
    }

    ctx.emit(&ctx.assistant.get_stats())
}

fn clear(args: ClearArgs, ctx: &AppContext) -> Result<()> {
    // Confirm unless -y flag
    if !args.yes {
        let count = ctx.assistant.session_log().entries().len();
        print!(
            "Remove all {} session(s) from {}? [y/N] ",
            count,
            ctx.log_path.display()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let result = ctx.assistant.clear_log();
    if result == LOG_CLEARED {
        println!("{} {}", "✓".green(), result);
        Ok(())
    } else {
        ctx.emit(&result)
    }
}
