//! Clap CLI definitions for the `sgc` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// sgc -- branch, inspect, commit and push with structured results.
///
/// Wraps the git binary for automation callers: every command prints a
/// single human-readable (or JSON) result and exits 0 on success, 1 on
/// failure.
#[derive(Parser, Debug)]
#[command(
    name = "sgc",
    about = "Git workflow operations with structured results",
    long_about = "Wraps the git binary for automation callers: branch discovery and creation, change inspection, staging, committing and pushing, each reported as a single success or failure message.",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Repository directory to run git in (default: current directory).
    #[arg(short = 'C', long = "repo", global = true, value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Remote to branch from and push to (default: config, then "origin").
    #[arg(long, global = true)]
    pub remote: Option<String>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    // ===== Inspection =====
    /// Show current branch, short status, and staged/unstaged/untracked files.
    Status,

    /// Show staged and unstaged diffs.
    Diff,

    // ===== Branches =====
    /// Print the remote's default branch.
    GetDefaultBranch,

    /// Report whether a branch exists locally and on the remote.
    CheckBranch(BranchNameArgs),

    /// Create a branch from the remote's default branch and switch to it.
    CreateBranch(BranchNameArgs),

    /// Switch to an existing branch.
    Switch(BranchNameArgs),

    // ===== Commit & Push =====
    /// Stage every change in the working tree.
    StageAll,

    /// Commit staged changes.
    Commit(CommitArgs),

    /// Push a branch with upstream tracking and verify the tracking.
    Push(BranchNameArgs),

    // ===== Utilities =====
    /// Show or initialise configuration.
    Config(ConfigArgs),

    /// Generate shell completion scripts.
    Completion(CompletionArgs),

    /// Print version information.
    Version,
}

/// A single branch name argument.
#[derive(Args, Debug)]
pub struct BranchNameArgs {
    /// Branch name.
    pub name: String,
}

/// Arguments for `sgc commit`.
#[derive(Args, Debug)]
pub struct CommitArgs {
    /// Commit message.
    pub message: String,
}

/// Arguments for `sgc config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the effective configuration to `.sgc.yaml` in the repository directory.
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing `.sgc.yaml` when used with `--init`.
    #[arg(long, requires = "init")]
    pub force: bool,
}

/// Arguments for `sgc completion`.
#[derive(Args, Debug)]
pub struct CompletionArgs {
    #[command(subcommand)]
    pub command: CompletionCommands,
}

/// Supported shells.
#[derive(Subcommand, Debug)]
pub enum CompletionCommands {
    /// Generate Bash completions.
    Bash,
    /// Generate Zsh completions.
    Zsh,
    /// Generate Fish completions.
    Fish,
    /// Generate PowerShell completions.
    Powershell,
}
