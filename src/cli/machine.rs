//! `weld machine` command
//!
//! # Usage
//! ```bash
//! weld machine            # All brands
//! weld machine miller     # One brand
//! ```

use anyhow::Result;
use clap::Args;

use super::utils::AppContext;

#[derive(Args, Debug)]
pub struct MachineArgs {
    /// Brand name (omit to list every brand)
    pub brand: Option<String>,
}

pub fn run(args: MachineArgs, ctx: &AppContext) -> Result<()> {
    let report = ctx
        .assistant
        .knowledge_base()
        .machine_info(args.brand.as_deref())?;
    ctx.emit(&report.to_string())
}
