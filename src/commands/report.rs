use anyhow::Result;

use crate::commands::Ctx;

/// The full report is only useful to other programs, so it is always JSON.
pub fn handle(ctx: &Ctx) -> Result<()> {
    let snapshot = ctx.snapshot()?;
    let report = ctx.engine().compute(&snapshot);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
