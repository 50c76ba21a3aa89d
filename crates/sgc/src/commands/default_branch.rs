//! `sgc get-default-branch` -- print the remote's default branch.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::{output_json, output_text};

/// Execute the `sgc get-default-branch` command.
///
/// Exits non-zero (via the returned error) when neither the cached symbolic
/// ref nor the remote query yields a branch.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let branch = ctx.repo().default_branch(&ctx.remote)?;
    if ctx.json {
        output_json(&serde_json::json!({
            "ok": true,
            "remote": ctx.remote,
            "branch": branch,
        }));
    } else {
        output_text(&branch);
    }
    Ok(())
}
