//! `weld material` command

use anyhow::Result;
use clap::Args;

use super::utils::AppContext;

#[derive(Args, Debug)]
pub struct MaterialArgs {
    /// Material (e.g., aluminum, cast_iron)
    pub material: String,
}

pub fn run(args: MaterialArgs, ctx: &AppContext) -> Result<()> {
    let report = ctx.assistant.knowledge_base().material_info(&args.material)?;
    ctx.emit(&report.to_string())
}
