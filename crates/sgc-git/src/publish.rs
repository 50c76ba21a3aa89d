//! Staging, committing and pushing.

use std::fmt;

use tracing::{debug, warn};

use crate::error::Result;
use crate::exec::CommandRunner;
use crate::repo::GitRepo;

/// Whether the upstream remote read back after a push matched the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tracking {
    /// `branch.<name>.remote` equals the remote that was pushed to.
    Verified,
    /// The readback was missing or named a different remote.
    Unverified,
}

/// A successful push, annotated with the tracking check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushOutcome {
    /// What git printed; stderr when it said anything there, else stdout.
    pub output: String,
    pub remote: String,
    pub branch: String,
    pub tracking: Tracking,
}

impl PushOutcome {
    /// `true` when a tracking warning should be surfaced.
    pub fn has_warning(&self) -> bool {
        self.tracking == Tracking::Unverified
    }
}

impl fmt::Display for PushOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tracking {
            Tracking::Verified => write!(
                f,
                "{}\n✓ Upstream tracking 已設定: {}/{}",
                self.output, self.remote, self.branch
            ),
            Tracking::Unverified => write!(f, "{}\n⚠ 警告: Upstream tracking 未設定成功", self.output),
        }
    }
}

impl<R: CommandRunner> GitRepo<R> {
    /// Stage every change in the working tree, tracked or not (`git add -A`).
    pub fn stage_all(&self) -> Result<String> {
        self.run_checked(&["add", "-A"])?;
        Ok("已將所有變更加入 staging".to_string())
    }

    /// Commit the index with `message`. Returns git's summary on success.
    pub fn commit(&self, message: &str) -> Result<String> {
        let result = self.run_checked(&["commit", "-m", message])?;
        Ok(result.stdout)
    }

    /// Push `branch` to `remote` with `-u`, then confirm the upstream was
    /// recorded.
    ///
    /// A push that succeeds but whose tracking readback disagrees is still a
    /// success; the mismatch is reported through [`PushOutcome::tracking`].
    pub fn push(&self, branch: &str, remote: &str) -> Result<PushOutcome> {
        let result = self.run_checked(&["push", "-u", remote, branch])?;

        let key = format!("branch.{branch}.remote");
        let configured = self.stdout_of(&["config", "--get", &key])?;
        let tracking = if configured == remote {
            Tracking::Verified
        } else {
            warn!(%branch, expected = %remote, found = %configured, "upstream tracking not set");
            Tracking::Unverified
        };
        debug!(%branch, %remote, ?tracking, "push finished");

        // git reports push progress on stderr even when it succeeds.
        let output = if result.stderr.is_empty() {
            result.stdout
        } else {
            result.stderr
        };

        Ok(PushOutcome {
            output,
            remote: remote.to_string(),
            branch: branch.to_string(),
            tracking,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GitError;
    use crate::testing::ScriptedRunner;
    use pretty_assertions::assert_eq;

    const PUSH_STDERR: &str = "To example.com:team/repo.git\n * [new branch]      feat/x -> feat/x";

    #[test]
    fn stage_all_success_and_failure() {
        let ok = GitRepo::with_runner(ScriptedRunner::new().ok("add -A", ""));
        assert_eq!(ok.stage_all().unwrap(), "已將所有變更加入 staging");

        let bad = GitRepo::with_runner(ScriptedRunner::new().fail(
            "add -A",
            128,
            "fatal: Unable to create '.git/index.lock': File exists.",
        ));
        assert_eq!(
            bad.stage_all().unwrap_err().to_string(),
            "fatal: Unable to create '.git/index.lock': File exists."
        );
    }

    #[test]
    fn commit_returns_stdout() {
        let r = GitRepo::with_runner(ScriptedRunner::new().ok(
            "commit -m feat: add login",
            "[feat/x 1a2b3c4] feat: add login\n 1 file changed, 3 insertions(+)",
        ));
        assert!(r.commit("feat: add login").unwrap().starts_with("[feat/x 1a2b3c4]"));
    }

    #[test]
    fn commit_with_nothing_staged_fails() {
        let r = GitRepo::with_runner(ScriptedRunner::new().respond(
            "commit -m msg",
            crate::exec::CommandResult::new(Some(1), "nothing to commit, working tree clean", ""),
        ));
        assert!(matches!(
            r.commit("msg").unwrap_err(),
            GitError::CommandFailed { code: Some(1), .. }
        ));
    }

    #[test]
    fn push_verified_tracking() {
        let r = GitRepo::with_runner(
            ScriptedRunner::new()
                .ok_with_stderr("push -u origin feat/x", "", PUSH_STDERR)
                .ok("config --get branch.feat/x.remote", "origin"),
        );
        let outcome = r.push("feat/x", "origin").unwrap();
        assert_eq!(outcome.tracking, Tracking::Verified);
        assert!(!outcome.has_warning());
        assert_eq!(
            outcome.to_string(),
            format!("{PUSH_STDERR}\n✓ Upstream tracking 已設定: origin/feat/x")
        );
    }

    #[test]
    fn push_tracking_mismatch_is_warning_not_failure() {
        let r = GitRepo::with_runner(
            ScriptedRunner::new()
                .ok_with_stderr("push -u origin feat/x", "", PUSH_STDERR)
                .ok("config --get branch.feat/x.remote", "upstream"),
        );
        let outcome = r.push("feat/x", "origin").unwrap();
        assert!(outcome.has_warning());
        assert!(outcome.to_string().ends_with("⚠ 警告: Upstream tracking 未設定成功"));
    }

    #[test]
    fn push_missing_config_is_warning() {
        let r = GitRepo::with_runner(
            ScriptedRunner::new()
                .ok_with_stderr("push -u origin feat/x", "", PUSH_STDERR)
                .fail("config --get branch.feat/x.remote", 1, ""),
        );
        assert_eq!(r.push("feat/x", "origin").unwrap().tracking, Tracking::Unverified);
    }

    #[test]
    fn push_output_falls_back_to_stdout() {
        let r = GitRepo::with_runner(
            ScriptedRunner::new()
                .ok("push -u origin main", "Everything up-to-date")
                .ok("config --get branch.main.remote", "origin"),
        );
        assert_eq!(r.push("main", "origin").unwrap().output, "Everything up-to-date");
    }

    #[test]
    fn push_failure_skips_readback() {
        let r = GitRepo::with_runner(ScriptedRunner::new().fail(
            "push -u origin feat/x",
            1,
            "error: failed to push some refs",
        ));
        let err = r.push("feat/x", "origin").unwrap_err();
        assert_eq!(err.to_string(), "error: failed to push some refs");
        assert!(!r.runner().was_called("config"));
    }
}
