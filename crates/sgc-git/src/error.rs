//! Git operation error types.

use std::fmt;

/// The step of the branch-creation pipeline that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchStep {
    /// Resolving the remote's default branch.
    ResolveDefault,
    /// Fetching `<remote>/<branch>` so the tracking ref is current.
    Fetch {
        /// The remote being fetched from.
        remote: String,
        /// The default branch being fetched.
        branch: String,
    },
    /// `checkout -b` of the new branch.
    Checkout,
}

impl fmt::Display for BranchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchStep::ResolveDefault => write!(f, "resolve default branch"),
            BranchStep::Fetch { remote, branch } => write!(f, "fetch {remote}/{branch}"),
            BranchStep::Checkout => write!(f, "checkout"),
        }
    }
}

/// Errors that can occur when running git operations.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    /// The git binary could not be found or spawned.
    #[error("failed to execute {program}")]
    Spawn {
        /// The program that was being launched.
        program: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A git command exited with a non-zero status.
    ///
    /// Displays as the raw stderr so callers can surface git's own diagnostic.
    #[error("{stderr}")]
    CommandFailed {
        /// The exit code, or `None` if the process was killed by a signal.
        code: Option<i32>,
        /// The content of stderr.
        stderr: String,
    },

    /// Neither the local symbolic ref nor the remote query yielded a default branch.
    #[error("無法取得 default branch")]
    DefaultBranchUnresolved {
        /// The remote that was queried.
        remote: String,
    },

    /// A step of the branch-creation pipeline failed.
    ///
    /// Display embeds the cause's message, so the cause is not a `source`.
    #[error("{}", render_step_failure(.step, .cause))]
    StepFailed {
        /// Which step failed.
        step: BranchStep,
        /// The underlying failure.
        cause: Box<GitError>,
    },
}

/// A specialized `Result` type for git operations.
pub type Result<T> = std::result::Result<T, GitError>;

impl GitError {
    /// The failing pipeline step, if this error came out of a pipeline.
    pub fn step(&self) -> Option<&BranchStep> {
        match self {
            GitError::StepFailed { step, .. } => Some(step),
            _ => None,
        }
    }
}

// Resolution and checkout failures pass their cause through unchanged; only
// the fetch step names itself in the message.
fn render_step_failure(step: &BranchStep, cause: &GitError) -> String {
    match step {
        BranchStep::Fetch { .. } => format!("{step} 失敗: {cause}"),
        BranchStep::ResolveDefault | BranchStep::Checkout => cause.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn failed(stderr: &str) -> GitError {
        GitError::CommandFailed {
            code: Some(128),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn command_failed_displays_raw_stderr() {
        assert_eq!(failed("fatal: boom").to_string(), "fatal: boom");
    }

    #[test]
    fn fetch_step_names_remote_and_branch() {
        let err = GitError::StepFailed {
            step: BranchStep::Fetch {
                remote: "origin".into(),
                branch: "main".into(),
            },
            cause: Box::new(failed("fatal: couldn't find remote ref main")),
        };
        assert_eq!(
            err.to_string(),
            "fetch origin/main 失敗: fatal: couldn't find remote ref main"
        );
    }

    #[test]
    fn checkout_step_passes_stderr_through() {
        let err = GitError::StepFailed {
            step: BranchStep::Checkout,
            cause: Box::new(failed("fatal: a branch named 'x' already exists")),
        };
        assert_eq!(err.to_string(), "fatal: a branch named 'x' already exists");
        assert_eq!(err.step(), Some(&BranchStep::Checkout));
    }

    #[test]
    fn resolve_step_keeps_resolution_message() {
        let err = GitError::StepFailed {
            step: BranchStep::ResolveDefault,
            cause: Box::new(GitError::DefaultBranchUnresolved {
                remote: "origin".into(),
            }),
        };
        assert_eq!(err.to_string(), "無法取得 default branch");
    }
}
