//! `weld wire` command
//!
//! # Usage
//! ```bash
//! weld wire mild_steel 0.035 medium
//! weld wire aluminum 3/64 "very thick"
//! ```

use anyhow::Result;
use clap::Args;

use super::utils::AppContext;

#[derive(Args, Debug)]
pub struct WireArgs {
    /// Material (mild_steel, stainless_steel, aluminum)
    pub material: String,

    /// Wire diameter (e.g., 0.030, 0.035, 3/64)
    pub wire_size: String,

    /// Thickness category: thin, medium, thick, very_thick
    pub category: String,
}

pub fn run(args: WireArgs, ctx: &AppContext) -> Result<()> {
    let report = ctx
        .assistant
        .knowledge_base()
        .wire_speed(&args.material, &args.wire_size, &args.category)?;
    ctx.emit(&report.to_string())
}
