//! `weld mig`, `weld tig` and `weld arc` commands
//!
//! # Usage
//! ```bash
//! weld mig mild_steel 1/8
//! weld tig "stainless steel" 3/16
//! weld arc cast_iron            # no thickness for cast iron
//! ```

use anyhow::Result;
use clap::Args;

use super::utils::AppContext;
use crate::core::lookup::Process;

#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// Material (e.g., mild_steel, "stainless steel", aluminum)
    pub material: String,

    /// Thickness in inches (e.g., 1/8, 3/16)
    pub thickness: Option<String>,
}

pub fn run(process: Process, args: SettingsArgs, ctx: &AppContext) -> Result<()> {
    let report = ctx.assistant.knowledge_base().process_settings(
        process,
        &args.material,
        args.thickness.as_deref(),
    )?;
    ctx.emit(&report.to_string())
}
