//! `sgc check-branch` -- report local and remote existence of a branch.

use anyhow::Result;
use serde::Serialize;
use sgc_git::{CommandRunner, GitRepo};
use sgc_ui::styles::render_exists;

use crate::cli::BranchNameArgs;
use crate::context::RuntimeContext;
use crate::output::{output_json, output_text};

/// Where a branch name was found.
///
/// Both flags use substring matching over git's listing, so a name that is a
/// prefix of another branch can report `true`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct BranchPresence {
    pub branch: String,
    pub remote: String,
    pub local: bool,
    pub on_remote: bool,
}

pub fn collect<R: CommandRunner>(
    repo: &GitRepo<R>,
    name: &str,
    remote: &str,
) -> sgc_git::Result<BranchPresence> {
    Ok(BranchPresence {
        branch: name.to_string(),
        remote: remote.to_string(),
        local: repo.branch_exists(name)?,
        on_remote: repo.remote_branch_exists(name, remote)?,
    })
}

pub fn render(presence: &BranchPresence) -> String {
    format!(
        "本地: {}\nRemote: {}",
        render_exists(presence.local),
        render_exists(presence.on_remote)
    )
}

/// Execute the `sgc check-branch` command. Always succeeds; existence is
/// reported, not signalled through the exit code.
pub fn run(ctx: &RuntimeContext, args: &BranchNameArgs) -> Result<()> {
    let presence = collect(&ctx.repo(), &args.name, &ctx.remote)?;
    if ctx.json {
        output_json(&presence);
    } else {
        output_text(&render(&presence));
    }
    Ok(())
}
