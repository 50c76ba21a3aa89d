//! `sgc stage-all` -- stage every change in the working tree.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::output_success;

/// Execute the `sgc stage-all` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let message = ctx.repo().stage_all()?;
    output_success(ctx, &message);
    Ok(())
}
