//! Process execution.
//!
//! Every git operation funnels through a [`CommandRunner`]. The production
//! implementation, [`SystemRunner`], spawns the process with
//! `std::process::Command` and blocks until it exits; tests substitute a
//! scripted runner so no real repository is needed.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{GitError, Result};

/// Environment variables layered on top of the inherited environment for a
/// single invocation.
pub type EnvOverlay = BTreeMap<String, String>;

/// One fully described process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to run (e.g. `git`).
    pub program: String,
    /// Arguments, not including the program itself.
    pub args: Vec<String>,
    /// Working directory; `None` inherits the caller's.
    pub cwd: Option<PathBuf>,
    /// Extra environment for this invocation only.
    pub env: EnvOverlay,
}

impl Invocation {
    /// Build an invocation of `program` with `args` and no overrides.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            env: EnvOverlay::new(),
        }
    }

    /// Run in `dir` instead of the inherited working directory.
    pub fn current_dir(mut self, dir: Option<&Path>) -> Self {
        self.cwd = dir.map(Path::to_path_buf);
        self
    }

    /// Merge `overlay` into this invocation's environment.
    pub fn envs(mut self, overlay: &EnvOverlay) -> Self {
        self.env
            .extend(overlay.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// The argument list joined with spaces, for logs and assertions.
    pub fn args_line(&self) -> String {
        self.args.join(" ")
    }
}

/// Captured outcome of a finished process.
///
/// A non-zero exit is an ordinary value here, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code, or `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Stdout with leading/trailing whitespace removed.
    pub stdout: String,
    /// Stderr with leading/trailing whitespace removed.
    pub stderr: String,
}

impl CommandResult {
    /// Build a result, trimming both streams at the edges.
    pub fn new(exit_code: Option<i32>, stdout: &str, stderr: &str) -> Self {
        Self {
            exit_code,
            stdout: stdout.trim().to_string(),
            stderr: stderr.trim().to_string(),
        }
    }

    /// Returns `true` when the process exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Convert a non-zero exit into [`GitError::CommandFailed`] carrying stderr.
    pub fn into_checked(self) -> Result<CommandResult> {
        if self.success() {
            Ok(self)
        } else {
            Err(GitError::CommandFailed {
                code: self.exit_code,
                stderr: self.stderr,
            })
        }
    }
}

/// Runs external commands to completion.
pub trait CommandRunner {
    /// Execute `invocation` synchronously.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Spawn`] only when the process could not be started.
    /// A process that starts and exits non-zero is reported through
    /// [`CommandResult::exit_code`].
    fn run(&self, invocation: &Invocation) -> Result<CommandResult>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, invocation: &Invocation) -> Result<CommandResult> {
        (**self).run(invocation)
    }
}

/// Spawns real processes via `std::process::Command`.
///
/// No timeout is applied: a hung child blocks the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandResult> {
        debug!(
            program = %invocation.program,
            args = %invocation.args_line(),
            cwd = ?invocation.cwd,
            env = ?invocation.env.keys().collect::<Vec<_>>(),
            "running command"
        );

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if let Some(dir) = &invocation.cwd {
            cmd.current_dir(dir);
        }
        // `envs` adds to the inherited environment; it never clears it.
        cmd.envs(&invocation.env);

        let output = cmd.output().map_err(|source| GitError::Spawn {
            program: invocation.program.clone(),
            source,
        })?;

        let result = CommandResult::new(
            output.status.code(),
            &String::from_utf8_lossy(&output.stdout),
            &String::from_utf8_lossy(&output.stderr),
        );
        debug!(exit_code = ?result.exit_code, "command finished");
        Ok(result)
    }
}
