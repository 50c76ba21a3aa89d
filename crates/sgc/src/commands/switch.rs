//! `sgc switch` -- check out an existing branch.

use anyhow::Result;

use crate::cli::BranchNameArgs;
use crate::context::RuntimeContext;
use crate::output::output_success;

/// Execute the `sgc switch` command.
pub fn run(ctx: &RuntimeContext, args: &BranchNameArgs) -> Result<()> {
    let message = ctx.repo().switch_branch(&args.name)?;
    output_success(ctx, &message);
    Ok(())
}
