use crate::core::Snapshot;
use crate::error::Result;
use crate::system::{CommandSpec, run_checked};
use crate::traits::CommandRunner;

/// `rpm -qa --queryformat '%{NAME}\n'`
pub fn installed_query() -> CommandSpec {
    CommandSpec::new("rpm").args(["-qa", "--queryformat", "%{NAME}\\n"])
}

/// Names of every package in the rpm database
pub fn installed_packages(runner: &dyn CommandRunner) -> Result<Snapshot> {
    let output = run_checked(runner, &installed_query())?;
    Ok(Snapshot::from_query_output(&output.stdout))
}
