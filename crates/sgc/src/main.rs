//! `sgc` -- git workflow operations with structured results.
//!
//! Parses CLI arguments with clap, resolves the runtime context, and
//! dispatches to command handlers. Every handler either prints its result
//! and returns `Ok`, or returns an error that is reported here with exit
//! code 1. Usage errors are reported by clap with exit code 2.

mod cli;
mod commands;
mod context;
mod output;

use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

/// Tracks whether a Ctrl+C has already been received.
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

fn main() {
    // First Ctrl+C: exit cleanly. Second: force exit.
    let _ = ctrlc::set_handler(|| {
        if CTRLC_RECEIVED.swap(true, Ordering::SeqCst) {
            std::process::exit(1);
        }
        std::process::exit(0);
    });

    let cli = Cli::parse();

    // Completions need neither a repository nor configuration.
    if let Some(Commands::Completion(args)) = &cli.command {
        if let Err(e) = commands::completion::run(args) {
            report_error(cli.global.json, &e);
        }
        return;
    }

    let ctx = match RuntimeContext::from_global_args(&cli.global) {
        Ok(ctx) => ctx,
        Err(e) => report_error(cli.global.json, &e),
    };

    if ctx.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("sgc=debug,sgc_git=debug")
            .with_writer(std::io::stderr)
            .init();
        tracing::debug!(remote = %ctx.remote, repo = ?ctx.repo_dir, "runtime context resolved");
    }

    let result = match cli.command {
        Some(Commands::Status) => commands::status::run(&ctx),
        Some(Commands::Diff) => commands::diff_cmd::run(&ctx),
        Some(Commands::GetDefaultBranch) => commands::default_branch::run(&ctx),
        Some(Commands::CheckBranch(args)) => commands::check_branch::run(&ctx, &args),
        Some(Commands::CreateBranch(args)) => commands::create_branch::run(&ctx, &args),
        Some(Commands::Switch(args)) => commands::switch::run(&ctx, &args),
        Some(Commands::StageAll) => commands::stage_all::run(&ctx),
        Some(Commands::Commit(args)) => commands::commit::run(&ctx, &args),
        Some(Commands::Push(args)) => commands::push::run(&ctx, &args),
        Some(Commands::Config(args)) => commands::config_cmd::run(&ctx, &args),
        Some(Commands::Version) => commands::version::run(&ctx),
        Some(Commands::Completion(_)) => Ok(()),
        None => {
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    };

    if let Err(e) = result {
        report_error(ctx.json, &e);
    }
}

/// Print `e` to stderr (as JSON when requested) and exit with code 1.
fn report_error(json: bool, e: &anyhow::Error) -> ! {
    if json {
        let err_json = serde_json::json!({
            "error": format!("{:#}", e),
        });
        if let Ok(s) = serde_json::to_string_pretty(&err_json) {
            eprintln!("{}", s);
        }
    } else {
        eprintln!("Error: {:#}", e);
    }
    std::process::exit(1);
}
