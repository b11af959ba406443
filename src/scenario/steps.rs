//! Step vocabulary
//!
//! ```gherkin
//! Given I use the repository "upgrade_1"
//! When I "install" a package "TestA" with "dnf"
//! Then the return code should be "0"
//! And package "TestA, TestB" should be "installed"
//! ```

use super::PackageWorld;
use crate::error::{PkgBehaveError, Result};
use crate::ui;
use cucumber::{World, cli, given, then, when, writer::Stats as _};
use std::path::Path;

/// Cucumber reports a step as failed when it panics
fn check(result: Result<()>) {
    if let Err(e) = result {
        panic!("{}", e);
    }
}

#[given(regex = r#"^I use the repository "([^"]*)"$"#)]
async fn given_repository(world: &mut PackageWorld, repo: String) {
    check(world.use_repository(&repo));
}

#[when(regex = r#"^I "([^"]*)" a package "([^"]*)" with "([^"]*)"$"#)]
async fn when_action_package(
    world: &mut PackageWorld,
    action: String,
    packages: String,
    manager: String,
) {
    check(world.perform(&action, &packages, &manager));
}

#[then(regex = r#"^the return code should be "([^"]*)"$"#)]
async fn then_rc_is(world: &mut PackageWorld, rc: String) {
    check(world.assert_return_code(&rc, false));
}

#[then(regex = r#"^the return code should not be "([^"]*)"$"#)]
async fn then_rc_is_not(world: &mut PackageWorld, rc: String) {
    check(world.assert_return_code(&rc, true));
}

#[then(regex = r#"^package "([^"]*)" should be "([^"]*)"$"#)]
async fn then_package_state(world: &mut PackageWorld, packages: String, state: String) {
    check(world.assert_package_state(&packages, &state));
}

/// Run one feature file or directory, one scenario at a time.
/// Undefined steps count as failures.
pub fn run_features(path: &Path) -> Result<()> {
    ui::verbose(&format!("Running features from {}", path.display()));

    // Process arguments belong to our own parser, not cucumber's
    let opts = cli::Opts::<_, _, _, cli::Empty>::default();

    let summary = futures::executor::block_on(
        PackageWorld::cucumber()
            .with_cli(opts)
            .max_concurrent_scenarios(Some(1))
            .fail_on_skipped()
            .run(path.to_path_buf()),
    );

    if summary.execution_has_failed() {
        return Err(PkgBehaveError::ScenariosFailed {
            failed_steps: summary.failed_steps(),
            parse_errors: summary.parsing_errors(),
        });
    }
    Ok(())
}
