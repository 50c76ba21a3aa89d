//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds everything a command handler needs: the
//! repository directory, the effective remote, output flags and the loaded
//! configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sgc_config::{CONFIG_FILE_NAME, SgcConfig, load_config};
use sgc_git::{DefaultBranchResolver, GitRepo};

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Directory git runs in; `None` means the current directory.
    pub repo_dir: Option<PathBuf>,

    /// Remote used by branch creation, existence checks and push.
    pub remote: String,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,

    /// Configuration after file and environment layering.
    pub config: SgcConfig,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// Flags override configuration: `--remote` > `SGC_REMOTE` > `.sgc.yaml`
    /// > `"origin"`.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let start = global.repo.clone().unwrap_or_else(|| PathBuf::from("."));
        let config = load_config(&start).context("failed to load configuration")?;
        Ok(Self::with_config(global, config))
    }

    /// Combine flags with an already loaded configuration.
    pub fn with_config(global: &GlobalArgs, config: SgcConfig) -> Self {
        let remote = global
            .remote
            .clone()
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| config.remote.clone());

        Self {
            repo_dir: global.repo.clone(),
            remote,
            json: global.json || config.json,
            verbose: global.verbose,
            quiet: global.quiet,
            config,
        }
    }

    /// A git handle for the target repository, honouring the configured
    /// binary and remote locale.
    pub fn repo(&self) -> GitRepo {
        GitRepo::open(self.repo_dir.as_deref())
            .program(self.config.git_binary.as_str())
            .resolver(DefaultBranchResolver::with_locale(
                self.config.remote_locale.as_str(),
            ))
    }

    /// Where `sgc config --init` writes the configuration file.
    pub fn config_file_target(&self) -> PathBuf {
        self.repo_dir
            .as_deref()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME)
    }
}
