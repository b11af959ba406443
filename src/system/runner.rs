use crate::error::{PkgBehaveError, Result};
use crate::system::{CommandOutput, CommandSpec};
use crate::traits::CommandRunner;
use std::process::{Command, ExitStatus, Stdio};

/// Runs commands on the host. Blocks until the child exits; no timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn output(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        if which::which(&spec.program).is_err() {
            return Err(PkgBehaveError::DependencyMissing(format!(
                "'{}' not found in PATH",
                spec.program
            )));
        }

        let output = Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| PkgBehaveError::SystemCommandFailed {
                command: spec.to_string(),
                reason: e.to_string(),
            })?;

        Ok(CommandOutput {
            code: exit_code(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Exit code of the child; a signal death maps to `-signal`
#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|sig| -sig))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}
