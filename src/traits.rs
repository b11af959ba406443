//! Core traits for dependency injection and testability
//!
//! Every step and the upgrade bootstrap talk to the outside world through
//! [`CommandRunner`]. Depending on the trait rather than on `std::process`
//! directly lets the scenario logic run against an in-memory package
//! database in unit tests.

use crate::error::Result;
use crate::system::{CommandOutput, CommandSpec};
use std::fmt::Debug;

/// Trait for running external package-manager commands
pub trait CommandRunner: Debug + Send + Sync {
    /// Run the command and return its exit code. Output is not interpreted.
    fn status(&self, cmd: &CommandSpec) -> Result<i32> {
        Ok(self.output(cmd)?.code)
    }

    /// Run the command and capture its output
    fn output(&self, cmd: &CommandSpec) -> Result<CommandOutput>;
}
