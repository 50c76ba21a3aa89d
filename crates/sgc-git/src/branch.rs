//! Branch discovery, default-branch resolution and branch creation.

use tracing::debug;

use crate::error::{BranchStep, GitError, Result};
use crate::exec::{CommandRunner, EnvOverlay};
use crate::repo::GitRepo;

/// Marker line printed by `git remote show` in the C locale.
const HEAD_BRANCH_MARKER: &str = "HEAD branch:";

/// Locale forced on `git remote show` so its output can be parsed.
pub const DEFAULT_REMOTE_LOCALE: &str = "C";

// ---------------------------------------------------------------------------
// Default-branch strategies
// ---------------------------------------------------------------------------

/// One way of answering "what is the remote's default branch?".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultBranchStrategy {
    /// Read the cached `refs/remotes/<remote>/HEAD` symbolic ref. Local and fast.
    SymbolicRef,
    /// Ask the remote with `git remote show`, with `LC_ALL` forced to `locale`.
    /// Hits the network.
    RemoteShow {
        /// Value for `LC_ALL` during the query.
        locale: String,
    },
}

impl DefaultBranchStrategy {
    /// Short identifier for logs.
    pub fn name(&self) -> &'static str {
        match self {
            DefaultBranchStrategy::SymbolicRef => "symbolic-ref",
            DefaultBranchStrategy::RemoteShow { .. } => "remote-show",
        }
    }

    /// Try this strategy. `Ok(None)` means "no answer here, try the next one".
    ///
    /// # Errors
    ///
    /// Only spawn failures are returned as errors; a failing git command is
    /// `Ok(None)`.
    pub fn resolve<R: CommandRunner>(
        &self,
        repo: &GitRepo<R>,
        remote: &str,
    ) -> Result<Option<String>> {
        match self {
            DefaultBranchStrategy::SymbolicRef => {
                let head_ref = format!("refs/remotes/{remote}/HEAD");
                let result = repo.run(&["symbolic-ref", &head_ref])?;
                if !result.success() || result.stdout.is_empty() {
                    return Ok(None);
                }
                // refs/remotes/origin/main -> main
                Ok(result
                    .stdout
                    .rsplit('/')
                    .next()
                    .filter(|name| !name.is_empty())
                    .map(str::to_string))
            }
            DefaultBranchStrategy::RemoteShow { locale } => {
                let mut env = EnvOverlay::new();
                env.insert("LC_ALL".to_string(), locale.clone());
                let result = repo.run_with_env(&["remote", "show", remote], &env)?;
                if !result.success() {
                    return Ok(None);
                }
                Ok(parse_head_branch(&result.stdout))
            }
        }
    }
}

/// Extract the branch from the `HEAD branch: <name>` line of `git remote show`.
fn parse_head_branch(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| line.contains(HEAD_BRANCH_MARKER))
        .and_then(|line| line.rsplit(':').next())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}

/// An ordered list of strategies; the first to produce a name wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultBranchResolver {
    strategies: Vec<DefaultBranchStrategy>,
}

impl Default for DefaultBranchResolver {
    fn default() -> Self {
        Self::with_locale(DEFAULT_REMOTE_LOCALE)
    }
}

impl DefaultBranchResolver {
    /// The standard two-tier order, forcing `locale` on the remote query.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self::new(vec![
            DefaultBranchStrategy::SymbolicRef,
            DefaultBranchStrategy::RemoteShow {
                locale: locale.into(),
            },
        ])
    }

    /// Use exactly `strategies`, in order.
    pub fn new(strategies: Vec<DefaultBranchStrategy>) -> Self {
        Self { strategies }
    }

    pub fn strategies(&self) -> &[DefaultBranchStrategy] {
        &self.strategies
    }

    /// Run the strategies in order against `repo`.
    ///
    /// # Errors
    ///
    /// [`GitError::DefaultBranchUnresolved`] when no strategy answers.
    pub fn resolve<R: CommandRunner>(&self, repo: &GitRepo<R>, remote: &str) -> Result<String> {
        for strategy in &self.strategies {
            match strategy.resolve(repo, remote)? {
                Some(branch) => {
                    debug!(strategy = strategy.name(), %remote, %branch, "resolved default branch");
                    return Ok(branch);
                }
                None => debug!(strategy = strategy.name(), %remote, "no default branch from strategy"),
            }
        }
        Err(GitError::DefaultBranchUnresolved {
            remote: remote.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Branch operations
// ---------------------------------------------------------------------------

impl<R: CommandRunner> GitRepo<R> {
    /// Short name of the checked-out branch, or an empty string if git
    /// cannot tell (best effort; the exit code is ignored).
    pub fn current_branch(&self) -> Result<String> {
        self.stdout_of(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    /// Whether a local branch matching `name` exists.
    ///
    /// Known limitation: this is a substring test over `git branch --list`
    /// output, so `"feature"` also matches a branch named `"feature-x"` when
    /// git lists it.
    pub fn branch_exists(&self, name: &str) -> Result<bool> {
        let listing = self.stdout_of(&["branch", "--list", name])?;
        Ok(listing.contains(name))
    }

    /// Whether `<remote>/<name>` shows up in the remote-tracking branch list.
    ///
    /// Same substring semantics as [`GitRepo::branch_exists`].
    pub fn remote_branch_exists(&self, name: &str, remote: &str) -> Result<bool> {
        let qualified = format!("{remote}/{name}");
        let listing = self.stdout_of(&["branch", "-r", "--list", &qualified])?;
        Ok(listing.contains(&qualified))
    }

    /// Resolve `remote`'s default branch: cached symbolic ref first, then a
    /// locale-forced `git remote show`.
    pub fn default_branch(&self, remote: &str) -> Result<String> {
        self.default_branch_resolver().resolve(self, remote)
    }

    /// Create `name` from `<remote>/<default>` and switch to it.
    ///
    /// Steps run in order and stop at the first failure; earlier steps are
    /// not undone. A successful fetch followed by a failed checkout leaves the
    /// fetched ref updated and the checked-out branch unchanged.
    pub fn create_branch(&self, name: &str, remote: &str) -> Result<String> {
        let default = self
            .default_branch(remote)
            .map_err(|e| step_failed(BranchStep::ResolveDefault, e))?;

        let fetch = BranchStep::Fetch {
            remote: remote.to_string(),
            branch: default.clone(),
        };
        self.run_checked(&["fetch", remote, &default])
            .map_err(|e| step_failed(fetch, e))?;

        let start_point = format!("{remote}/{default}");
        self.run_checked(&["checkout", "-b", name, &start_point])
            .map_err(|e| step_failed(BranchStep::Checkout, e))?;

        Ok(format!("已從 {start_point} 建立並切換到分支: {name}"))
    }

    /// Check out an existing branch.
    pub fn switch_branch(&self, name: &str) -> Result<String> {
        self.run_checked(&["checkout", name])?;
        Ok(format!("已切換到分支: {name}"))
    }
}

// Spawn failures are not pipeline-step failures; pass them through untagged.
fn step_failed(step: BranchStep, err: GitError) -> GitError {
    match err {
        GitError::Spawn { .. } => err,
        other => GitError::StepFailed {
            step,
            cause: Box::new(other),
        },
    }
}
