//! `sgc push` -- push with upstream tracking and verify it.

use anyhow::Result;
use sgc_git::{PushOutcome, Tracking};
use sgc_ui::styles::render_warn_icon;

use crate::cli::BranchNameArgs;
use crate::context::RuntimeContext;
use crate::output::{output_json, output_text};

fn tracking_label(tracking: Tracking) -> &'static str {
    match tracking {
        Tracking::Verified => "verified",
        Tracking::Unverified => "unverified",
    }
}

/// JSON document for a finished push.
pub fn to_json(outcome: &PushOutcome) -> serde_json::Value {
    serde_json::json!({
        "ok": true,
        "message": outcome.to_string(),
        "remote": outcome.remote,
        "branch": outcome.branch,
        "tracking": tracking_label(outcome.tracking),
    })
}

/// Execute the `sgc push` command.
///
/// A tracking mismatch is still a successful push and exits 0.
pub fn run(ctx: &RuntimeContext, args: &BranchNameArgs) -> Result<()> {
    let outcome = ctx.repo().push(&args.name, &ctx.remote)?;

    if ctx.json {
        output_json(&to_json(&outcome));
    } else if !ctx.quiet {
        output_text(&outcome.to_string());
    } else if outcome.has_warning() {
        eprintln!(
            "{} upstream tracking for {}/{} was not recorded",
            render_warn_icon(),
            outcome.remote,
            outcome.branch
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_reports_tracking_state() {
        let outcome = PushOutcome {
            output: "To remote.git".to_string(),
            remote: "origin".to_string(),
            branch: "feat/x".to_string(),
            tracking: Tracking::Unverified,
        };
        let json = to_json(&outcome);
        assert_eq!(json["ok"], true);
        assert_eq!(json["tracking"], "unverified");
        assert!(
            json["message"]
                .as_str()
                .unwrap()
                .ends_with("⚠ 警告: Upstream tracking 未設定成功")
        );
    }
}
