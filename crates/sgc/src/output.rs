//! Output helpers for the `sgc` CLI.
//!
//! Every command ends in one of two shapes: a human-readable block on
//! stdout, or a JSON document when `--json` is set. Failures are printed by
//! `main` and never reach these helpers.

use std::io::{self, Write};

use serde::Serialize;

use crate::context::RuntimeContext;

/// JSON shape of a successful mutating operation.
#[derive(Debug, Serialize)]
pub struct OperationView<'a> {
    pub ok: bool,
    pub message: &'a str,
}

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print a block of text to stdout, ignoring broken pipes.
pub fn output_text(text: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle, "{}", text);
}

/// Report a successful operation's confirmation message.
///
/// Suppressed by `--quiet` in text mode; always emitted in JSON mode.
pub fn output_success(ctx: &RuntimeContext, message: &str) {
    if ctx.json {
        output_json(&OperationView { ok: true, message });
    } else if !ctx.quiet {
        output_text(message);
    }
}

/// Render a list for a status section, or `placeholder` when it is empty.
pub fn list_or(items: &[String], placeholder: &str) -> String {
    if items.is_empty() {
        placeholder.to_string()
    } else {
        items.join("\n")
    }
}
