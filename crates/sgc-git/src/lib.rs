//! Git workflow operations.
//!
//! This crate drives the `git` binary to discover and create branches,
//! inspect pending changes, and stage, commit and push them. Every call runs
//! git synchronously through a [`CommandRunner`] and reports either a
//! human-readable confirmation or a [`GitError`] carrying git's diagnostic.
//!
//! ```no_run
//! use sgc_git::{GitRepo, DEFAULT_REMOTE};
//!
//! let repo = GitRepo::open(None);
//! match repo.create_branch("feat/login", DEFAULT_REMOTE) {
//!     Ok(msg) => println!("{msg}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod branch;
pub mod error;
pub mod exec;
pub mod inspect;
pub mod publish;
pub mod repo;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-exports for convenience.
pub use branch::{DEFAULT_REMOTE_LOCALE, DefaultBranchResolver, DefaultBranchStrategy};
pub use error::{BranchStep, GitError, Result};
pub use exec::{CommandResult, CommandRunner, EnvOverlay, Invocation, SystemRunner};
pub use publish::{PushOutcome, Tracking};
pub use repo::{DEFAULT_PROGRAM, DEFAULT_REMOTE, GitRepo};
