//! `sgc diff` -- staged and unstaged diffs.

use anyhow::Result;
use serde::Serialize;
use sgc_git::{CommandRunner, GitRepo};
use sgc_ui::styles::{render_diff, render_section};

use crate::context::RuntimeContext;
use crate::output::{output_json, output_text};

/// Both diffs plus the staged statistics.
#[derive(Debug, Serialize)]
pub struct DiffReport {
    pub staged: String,
    pub unstaged: String,
    pub stats: String,
}

pub fn collect<R: CommandRunner>(repo: &GitRepo<R>) -> sgc_git::Result<DiffReport> {
    Ok(DiffReport {
        staged: repo.staged_diff()?,
        unstaged: repo.unstaged_diff()?,
        stats: repo.diff_stats()?,
    })
}

pub fn render(report: &DiffReport) -> String {
    let mut sections = Vec::new();
    if !report.staged.is_empty() {
        sections.push(format!(
            "{}\n{}",
            render_section("Staged Diff"),
            render_diff(&report.staged)
        ));
        if !report.stats.is_empty() {
            sections.push(format!("{}\n{}", render_section("Staged Stats"), report.stats));
        }
    }
    if !report.unstaged.is_empty() {
        sections.push(format!(
            "{}\n{}",
            render_section("Unstaged Diff"),
            render_diff(&report.unstaged)
        ));
    }
    if sections.is_empty() {
        return "無 diff 內容".to_string();
    }
    sections.join("\n")
}

/// Execute the `sgc diff` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let report = collect(&ctx.repo())?;
    if ctx.json {
        output_json(&report);
    } else {
        output_text(&render(&report));
    }
    Ok(())
}
