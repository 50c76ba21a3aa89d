//! `sgc completion` -- generate shell completions.

use std::io::Write;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::{Cli, CompletionArgs, CompletionCommands};

fn shell_for(command: &CompletionCommands) -> Shell {
    match command {
        CompletionCommands::Bash => Shell::Bash,
        CompletionCommands::Zsh => Shell::Zsh,
        CompletionCommands::Fish => Shell::Fish,
        CompletionCommands::Powershell => Shell::PowerShell,
    }
}

/// Write the completion script for `command`'s shell to `out`.
pub fn write_completions(command: &CompletionCommands, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell_for(command), &mut cmd, "sgc", out);
}

/// Execute the `sgc completion` command.
pub fn run(args: &CompletionArgs) -> Result<()> {
    write_completions(&args.command, &mut std::io::stdout());
    Ok(())
}
