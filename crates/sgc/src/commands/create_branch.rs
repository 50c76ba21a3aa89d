//! `sgc create-branch` -- branch from the remote's default branch.

use anyhow::Result;

use crate::cli::BranchNameArgs;
use crate::context::RuntimeContext;
use crate::output::output_success;

/// Execute the `sgc create-branch` command.
pub fn run(ctx: &RuntimeContext, args: &BranchNameArgs) -> Result<()> {
    let message = ctx.repo().create_branch(&args.name, &ctx.remote)?;
    output_success(ctx, &message);
    Ok(())
}
