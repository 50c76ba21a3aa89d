//! A scripted [`CommandRunner`] for tests.
//!
//! Responses are keyed by the space-joined argument line (the program name is
//! ignored). Every invocation is recorded, scripted or not, so tests can
//! assert which commands were issued and in what order.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Result;
use crate::exec::{CommandResult, CommandRunner, Invocation};

/// Exit code returned for commands that were never scripted.
pub const UNSCRIPTED_EXIT: i32 = 127;

/// Replays canned [`CommandResult`]s and records every call.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, CommandResult>,
    calls: RefCell<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful call with the given stdout.
    pub fn ok(self, args: &str, stdout: &str) -> Self {
        self.respond(args, CommandResult::new(Some(0), stdout, ""))
    }

    /// Script a successful call that writes to both streams.
    pub fn ok_with_stderr(self, args: &str, stdout: &str, stderr: &str) -> Self {
        self.respond(args, CommandResult::new(Some(0), stdout, stderr))
    }

    /// Script a failing call with the given exit code and stderr.
    pub fn fail(self, args: &str, code: i32, stderr: &str) -> Self {
        self.respond(args, CommandResult::new(Some(code), "", stderr))
    }

    /// Script an arbitrary result.
    pub fn respond(mut self, args: &str, result: CommandResult) -> Self {
        self.responses.insert(args.to_string(), result);
        self
    }

    /// All recorded invocations, oldest first.
    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// The recorded argument lines, oldest first.
    pub fn call_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(Invocation::args_line).collect()
    }

    /// Returns `true` if any recorded call starts with `prefix`.
    pub fn was_called(&self, prefix: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|inv| inv.args_line().starts_with(prefix))
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandResult> {
        self.calls.borrow_mut().push(invocation.clone());
        let line = invocation.args_line();
        Ok(self.responses.get(&line).cloned().unwrap_or_else(|| {
            CommandResult::new(
                Some(UNSCRIPTED_EXIT),
                "",
                &format!("unscripted command: {line}"),
            )
        }))
    }
}
