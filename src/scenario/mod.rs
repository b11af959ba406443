//! Scenario state shared by the Given/When/Then steps
//!
//! [`PackageWorld`] is the cucumber world. The step definitions in [`steps`]
//! only forward their captured arguments to the methods here, so all step
//! semantics can be exercised without a feature file.

pub mod steps;

use crate::config::HarnessConfig;
use crate::core::{Action, ExpectedState, Expectation, ManagerKind, PackageDiff, Snapshot};
use crate::error::{PkgBehaveError, Result};
use crate::repository;
use crate::system::dispatch::{self, DispatchContext};
use crate::system::{SystemRunner, query};
use crate::traits::CommandRunner;
use crate::ui;
use crate::utils::sanitize;
use cucumber::World;
use std::sync::{Arc, OnceLock};

static ACTIVE_CONFIG: OnceLock<Arc<HarnessConfig>> = OnceLock::new();

/// Make `config` the one every new world starts from. First call wins.
pub fn install_config(config: HarnessConfig) -> bool {
    ACTIVE_CONFIG.set(Arc::new(config)).is_ok()
}

fn active_config() -> Arc<HarnessConfig> {
    ACTIVE_CONFIG
        .get_or_init(|| Arc::new(HarnessConfig::default()))
        .clone()
}

#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct PackageWorld {
    config: Arc<HarnessConfig>,
    runner: Arc<dyn CommandRunner>,
    pre_packages: Option<Snapshot>,
    rc: Option<i32>,
}

impl PackageWorld {
    pub fn new() -> Self {
        Self::with_runner(active_config(), Arc::new(SystemRunner::new()))
    }

    pub fn with_runner(config: Arc<HarnessConfig>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            config,
            runner,
            pre_packages: None,
            rc: None,
        }
    }

    pub fn return_code(&self) -> Option<i32> {
        self.rc
    }

    /// Given I use the repository "<name>"
    pub fn use_repository(&mut self, name: &str) -> Result<()> {
        let linked = repository::load_fixture(
            &self.config.build_root,
            &self.config.repo_dir,
            name.trim(),
            self.config.link_mode,
        )?;
        ui::verbose(&format!("Repository '{}' ready ({} files)", name, linked));
        Ok(())
    }

    /// When I "<action>" a package "<names>" with "<manager>"
    pub fn perform(&mut self, action: &str, packages: &str, manager: &str) -> Result<()> {
        let action: Action = action.parse()?;
        let manager: ManagerKind = manager.parse()?;
        let packages = sanitize::parse_package_list(packages)?;

        let before = self.snapshot()?;
        self.pre_packages = Some(before);

        let ctx = DispatchContext {
            repo_dir: &self.config.repo_dir,
            test_repo: &self.config.test_repo,
        };
        let rc = dispatch::dispatch(
            self.runner.as_ref(),
            self.config.managers.get(manager),
            ctx,
            action,
            &packages,
        )?;
        self.rc = Some(rc);
        Ok(())
    }

    /// Then the return code should [not] be "<code>"
    pub fn assert_return_code(&self, expected: &str, negate: bool) -> Result<()> {
        let expected: i32 = expected.trim().parse().map_err(|_| {
            PkgBehaveError::InvalidStep(format!("return code '{}' is not an integer", expected))
        })?;
        let actual = self.rc.ok_or(PkgBehaveError::MissingReturnCode)?;

        if (actual == expected) == negate {
            return Err(PkgBehaveError::ReturnCodeMismatch {
                expected,
                actual,
                relation: if negate { "not to be" } else { "to be" },
            });
        }
        Ok(())
    }

    /// Then package "<names>" should be "<state>"
    pub fn assert_package_state(&self, packages: &str, state: &str) -> Result<()> {
        let state: ExpectedState = state.parse()?;
        let expectation = Expectation::parse(packages, state)?;

        let rc = self.rc.ok_or(PkgBehaveError::MissingReturnCode)?;
        if rc != 0 {
            return Err(PkgBehaveError::ReturnCodeMismatch {
                expected: 0,
                actual: rc,
                relation: "to be",
            });
        }
        let before = self
            .pre_packages
            .as_ref()
            .ok_or(PkgBehaveError::MissingReturnCode)?;

        let after = self.snapshot()?;
        let diff = PackageDiff::between(before, &after);
        ui::verbose(&diff.render());

        expectation.evaluate(diff)
    }

    fn snapshot(&self) -> Result<Snapshot> {
        let snapshot = query::installed_packages(self.runner.as_ref())?;
        if snapshot.is_empty() {
            return Err(PkgBehaveError::EmptySnapshot);
        }
        Ok(snapshot)
    }
}

impl Default for PackageWorld {
    fn default() -> Self {
        Self::new()
    }
}
