//! The [`GitRepo`] handle shared by every operation.

use std::path::{Path, PathBuf};

use crate::branch::DefaultBranchResolver;
use crate::error::Result;
use crate::exec::{CommandResult, CommandRunner, EnvOverlay, Invocation, SystemRunner};

/// Remote used when the caller does not name one.
pub const DEFAULT_REMOTE: &str = "origin";

/// Program launched when no other binary is configured.
pub const DEFAULT_PROGRAM: &str = "git";

/// A target repository plus the means to run git against it.
///
/// The handle holds no repository state of its own; every query goes to the
/// git binary.
#[derive(Debug, Clone)]
pub struct GitRepo<R = SystemRunner> {
    runner: R,
    program: String,
    workdir: Option<PathBuf>,
    resolver: DefaultBranchResolver,
}

impl GitRepo<SystemRunner> {
    /// Open a repository rooted at `workdir` (or the current directory when
    /// `None`), driving the real `git` binary.
    pub fn open(workdir: Option<&Path>) -> Self {
        Self::with_runner(SystemRunner).workdir(workdir)
    }
}

impl<R: CommandRunner> GitRepo<R> {
    /// Build a handle over an arbitrary runner, with default settings.
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            program: DEFAULT_PROGRAM.to_string(),
            workdir: None,
            resolver: DefaultBranchResolver::default(),
        }
    }

    /// Use `program` instead of `git`.
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Run every command in `dir`.
    pub fn workdir(mut self, dir: Option<&Path>) -> Self {
        self.workdir = dir.map(Path::to_path_buf);
        self
    }

    /// Replace the default-branch resolution strategies.
    pub fn resolver(mut self, resolver: DefaultBranchResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// The runner this handle executes through.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// The working directory commands run in, if overridden.
    pub fn dir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }

    pub(crate) fn default_branch_resolver(&self) -> &DefaultBranchResolver {
        &self.resolver
    }

    /// Run `git <args>` and return the raw result, whatever the exit code.
    pub fn run(&self, args: &[&str]) -> Result<CommandResult> {
        self.run_with_env(args, &EnvOverlay::new())
    }

    /// Run `git <args>` with `env` layered over the inherited environment.
    pub fn run_with_env(&self, args: &[&str], env: &EnvOverlay) -> Result<CommandResult> {
        let invocation = Invocation::new(self.program.as_str(), args.iter().copied())
            .current_dir(self.dir())
            .envs(env);
        self.runner.run(&invocation)
    }

    /// Run `git <args>`, turning a non-zero exit into an error carrying stderr.
    pub fn run_checked(&self, args: &[&str]) -> Result<CommandResult> {
        self.run(args)?.into_checked()
    }

    /// Run `git <args>` and return stdout, ignoring the exit code.
    pub(crate) fn stdout_of(&self, args: &[&str]) -> Result<String> {
        Ok(self.run(args)?.stdout)
    }
}

/// Split command output into lines, dropping blank ones.
pub(crate) fn non_empty_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRunner;
    use pretty_assertions::assert_eq;

    #[test]
    fn non_empty_lines_drops_blanks() {
        assert_eq!(non_empty_lines(""), Vec::<String>::new());
        assert_eq!(non_empty_lines("\n  \n\t\n"), Vec::<String>::new());
        assert_eq!(non_empty_lines("a.rs\n\nb.rs"), vec!["a.rs", "b.rs"]);
    }

    #[test]
    fn invocations_carry_program_and_workdir() {
        let repo = GitRepo::with_runner(ScriptedRunner::new())
            .program("/usr/local/bin/git")
            .workdir(Some(Path::new("/tmp/repo")));
        repo.run(&["status", "--short"]).unwrap();

        let calls = repo.runner().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "/usr/local/bin/git");
        assert_eq!(calls[0].args, vec!["status", "--short"]);
        assert_eq!(calls[0].cwd.as_deref(), Some(Path::new("/tmp/repo")));
        assert!(calls[0].env.is_empty());
    }

    #[test]
    fn run_checked_fails_on_nonzero_exit() {
        let repo = GitRepo::with_runner(ScriptedRunner::new().fail("add -A", 128, "fatal: x"));
        let err = repo.run_checked(&["add", "-A"]).unwrap_err();
        assert_eq!(err.to_string(), "fatal: x");
    }
}
