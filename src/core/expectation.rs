//! Evaluation of `Then package "<names>" should be "<state>"`
//!
//! Names expected `installed` or `removed` are consumed from the matching
//! side of the diff. Whatever is left afterwards was not accounted for by the
//! scenario and fails the step, so every side effect of the operation under
//! test must be named. `absent` only checks and never consumes.

use crate::core::diff::PackageDiff;
use crate::core::types::ExpectedState;
use crate::error::{PkgBehaveError, Result};
use crate::utils::sanitize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    pub packages: Vec<String>,
    pub state: ExpectedState,
}

impl Expectation {
    pub fn new(packages: Vec<String>, state: ExpectedState) -> Self {
        Self { packages, state }
    }

    /// Parse the comma-separated list of a step
    pub fn parse(packages: &str, state: ExpectedState) -> Result<Self> {
        Ok(Self::new(sanitize::parse_package_list(packages)?, state))
    }

    pub fn evaluate(&self, mut diff: PackageDiff) -> Result<()> {
        for name in &self.packages {
            let matched = match self.state {
                ExpectedState::Installed => diff.installed.remove(name),
                ExpectedState::Removed => diff.removed.remove(name),
                ExpectedState::Absent => {
                    !diff.installed.contains(name) && !diff.removed.contains(name)
                }
            };

            if !matched {
                return Err(PkgBehaveError::ExpectationFailed {
                    package: name.clone(),
                    state: self.state.to_string(),
                });
            }
        }

        if self.state != ExpectedState::Absent {
            if !diff.installed.is_empty() {
                return Err(PkgBehaveError::UnaccountedChanges {
                    kind: ExpectedState::Installed.to_string(),
                    packages: diff.installed.into_iter().collect(),
                });
            }
            if !diff.removed.is_empty() {
                return Err(PkgBehaveError::UnaccountedChanges {
                    kind: ExpectedState::Removed.to_string(),
                    packages: diff.removed.into_iter().collect(),
                });
            }
        }

        Ok(())
    }
}
