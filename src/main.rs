//! weld CLI - Entry point
//!
//! Usage: weld <command> [options]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use weld::cli::utils::AppContext;
use weld::cli::{Cli, Commands};
use weld::Process;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing; reports go to stdout, diagnostics to stderr
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let ctx = AppContext::from_cli(&cli)?;

    match cli.command {
        Commands::Mig(args) => weld::cli::settings::run(Process::Mig, args, &ctx),
        Commands::Tig(args) => weld::cli::settings::run(Process::Tig, args, &ctx),
        Commands::Arc(args) => weld::cli::settings::run(Process::Arc, args, &ctx),
        Commands::Wire(args) => weld::cli::wire::run(args, &ctx),
        Commands::Machine(args) => weld::cli::machine::run(args, &ctx),
        Commands::Material(args) => weld::cli::material::run(args, &ctx),
        Commands::Log(args) => weld::cli::log::execute(args, &ctx),
        Commands::Config(args) => weld::cli::config::run(args, &ctx),
    }
}
