//! `sgc status` -- current branch, short status and file lists.

use anyhow::Result;
use serde::Serialize;
use sgc_git::{CommandRunner, GitRepo};
use sgc_ui::styles::render_section;

use crate::context::RuntimeContext;
use crate::output::{list_or, output_json, output_text};

/// Snapshot of the working tree, as printed by `sgc status`.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub branch: String,
    pub summary: String,
    pub staged: Vec<String>,
    pub unstaged: Vec<String>,
    pub untracked: Vec<String>,
}

/// Run every read-only query that makes up the report.
pub fn collect<R: CommandRunner>(repo: &GitRepo<R>) -> sgc_git::Result<StatusReport> {
    Ok(StatusReport {
        branch: repo.current_branch()?,
        summary: repo.status_summary()?,
        staged: repo.staged_files()?,
        unstaged: repo.unstaged_files()?,
        untracked: repo.untracked_files()?,
    })
}

/// Human-readable layout: one titled section per query.
pub fn render(report: &StatusReport) -> String {
    let summary = if report.summary.is_empty() {
        "無變更"
    } else {
        report.summary.as_str()
    };
    [
        (render_section("目前分支"), report.branch.clone()),
        (render_section("變更狀態"), summary.to_string()),
        (render_section("Staged 檔案"), list_or(&report.staged, "無 staged 檔案")),
        (render_section("Unstaged 檔案"), list_or(&report.unstaged, "無 unstaged 檔案")),
        (render_section("Untracked 檔案"), list_or(&report.untracked, "無 untracked 檔案")),
    ]
    .iter()
    .map(|(header, body)| format!("{header}\n{body}"))
    .collect::<Vec<_>>()
    .join("\n\n")
}

/// Execute the `sgc status` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let report = collect(&ctx.repo())?;
    if ctx.json {
        output_json(&report);
    } else {
        output_text(&render(&report));
    }
    Ok(())
}
