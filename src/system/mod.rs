//! External command plumbing
//!
//! [`CommandSpec`] is the value every package-manager call is built into,
//! [`runner::SystemRunner`] executes it, [`dispatch`] maps scenario actions to
//! manager-specific command lines and [`query`] captures package snapshots.

pub mod dispatch;
pub mod query;
pub mod runner;

#[cfg(test)]
pub(crate) mod fake;

use crate::error::{PkgBehaveError, Result};
use crate::traits::CommandRunner;
use crate::ui;
use std::fmt;

pub use runner::SystemRunner;

/// A program plus its argument vector, never passed through a shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        match shlex::try_join(words) {
            Ok(joined) => write!(f, "{}", joined),
            // NUL bytes cannot be quoted; fall back to a plain join for display
            Err(_) => write!(f, "{} {}", self.program, self.args.join(" ")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Run a command and fail unless it exits with 0
pub fn run_checked(runner: &dyn CommandRunner, cmd: &CommandSpec) -> Result<CommandOutput> {
    ui::verbose(&format!("$ {}", cmd));
    let output = runner.output(cmd)?;
    log_output(&output);

    if !output.success() {
        return Err(PkgBehaveError::CommandExited {
            command: cmd.to_string(),
            code: output.code,
        });
    }
    Ok(output)
}

pub(crate) fn log_output(output: &CommandOutput) {
    for line in output.stdout.lines().chain(output.stderr.lines()) {
        ui::verbose(&format!("  {}", line));
    }
}
