//! Read-only queries over the working tree and index.
//!
//! Output is passed through as git prints it. Exit codes are not checked:
//! a failed query reads as empty output.

use crate::error::Result;
use crate::exec::CommandRunner;
use crate::repo::{GitRepo, non_empty_lines};

impl<R: CommandRunner> GitRepo<R> {
    /// Unified diff of staged changes (`git diff --cached`).
    pub fn staged_diff(&self) -> Result<String> {
        self.stdout_of(&["diff", "--cached"])
    }

    /// Unified diff of unstaged changes (`git diff`).
    pub fn unstaged_diff(&self) -> Result<String> {
        self.stdout_of(&["diff"])
    }

    /// Paths with staged changes.
    pub fn staged_files(&self) -> Result<Vec<String>> {
        self.list(&["diff", "--cached", "--name-only"])
    }

    /// Paths with unstaged changes to tracked files.
    pub fn unstaged_files(&self) -> Result<Vec<String>> {
        self.list(&["diff", "--name-only"])
    }

    /// Untracked paths, honouring `.gitignore`.
    pub fn untracked_files(&self) -> Result<Vec<String>> {
        self.list(&["ls-files", "--others", "--exclude-standard"])
    }

    /// `git status --short`.
    pub fn status_summary(&self) -> Result<String> {
        self.stdout_of(&["status", "--short"])
    }

    /// Insertion/deletion summary of staged changes (`git diff --cached --stat`).
    pub fn diff_stats(&self) -> Result<String> {
        self.stdout_of(&["diff", "--cached", "--stat"])
    }

    fn list(&self, args: &[&str]) -> Result<Vec<String>> {
        Ok(non_empty_lines(&self.stdout_of(args)?))
    }
}
