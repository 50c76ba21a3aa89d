//! `sgc commit` -- commit staged changes.

use anyhow::Result;

use crate::cli::CommitArgs;
use crate::context::RuntimeContext;
use crate::output::output_success;

/// Execute the `sgc commit` command.
pub fn run(ctx: &RuntimeContext, args: &CommitArgs) -> Result<()> {
    let summary = ctx.repo().commit(&args.message)?;
    output_success(ctx, &summary);
    Ok(())
}
