//! Upgrade the package manager to one pull-request build
//!
//! Fixed sequence, no retry and no rollback:
//! 1. write the nightly repo definition
//! 2. upgrade from nightly
//! 3. write the pull-request repo definition
//! 4. resolve the single NEVRA matching `<package>-<pattern>*`
//! 5. `upgrade-to` that NEVRA from the pull-request repo

use crate::config::BootstrapConfig;
use crate::core::Nevra;
use crate::error::{PkgBehaveError, Result};
use crate::repository::RepoDefinition;
use crate::system::{CommandSpec, SystemRunner, run_checked};
use crate::traits::CommandRunner;
use crate::ui;
use crate::utils::sanitize;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct UpgradeToOptions {
    pub pattern: String,
    pub bootstrap: BootstrapConfig,
}

pub fn run(options: UpgradeToOptions) -> Result<()> {
    ui::header(&format!("Upgrading {}", options.bootstrap.package));
    let nevra = execute(&SystemRunner::new(), &options.bootstrap, &options.pattern)?;
    ui::success(&format!("Upgraded to {}", nevra));
    Ok(())
}

pub fn execute(runner: &dyn CommandRunner, config: &BootstrapConfig, pattern: &str) -> Result<Nevra> {
    sanitize::validate_version_pattern(pattern)?;
    sanitize::validate_package_name(&config.package)
        .map_err(|e| PkgBehaveError::ConfigError(e.to_string()))?;

    let nightly = RepoDefinition::unsigned(&config.nightly_repo, &config.feed_url(&config.nightly_repo));
    let path = nightly.write_to(&config.repos_dir)?;
    ui::info(&format!("Wrote {}", path.display()));

    run_checked(runner, &upgrade_from(&config.nightly_repo))?;
    ui::success(&format!("Upgraded from {}", config.nightly_repo));

    let pull_requests = RepoDefinition::unsigned(
        &config.pull_request_repo,
        &config.feed_url(&config.pull_request_repo),
    );
    let path = pull_requests.write_to(&config.repos_dir)?;
    ui::info(&format!("Wrote {}", path.display()));

    let nevra = resolve_version(runner, &config.package, pattern)?;
    ui::keyval("Target", &nevra.to_string());

    run_checked(runner, &upgrade_to(&config.pull_request_repo, &nevra))?;
    Ok(nevra)
}

fn upgrade_from(repo: &str) -> CommandSpec {
    CommandSpec::new("dnf")
        .args(["upgrade", "-y", "--disablerepo=*"])
        .arg(format!("--enablerepo={}", repo))
}

fn upgrade_to(repo: &str, nevra: &Nevra) -> CommandSpec {
    CommandSpec::new("dnf")
        .args(["upgrade-to", "-y", "--disablerepo=*"])
        .arg(format!("--enablerepo={}", repo))
        .arg(nevra.to_string())
}

/// The single non-source build whose NEVRA matches `<package>-<pattern>*`
pub fn resolve_version(runner: &dyn CommandRunner, package: &str, pattern: &str) -> Result<Nevra> {
    let spec = format!("{}-{}*", package, pattern);
    let matcher = glob::Pattern::new(&spec)
        .map_err(|e| PkgBehaveError::ConfigError(format!("Invalid version pattern '{}': {}", pattern, e)))?;

    let query = CommandSpec::new("dnf")
        .args(["repoquery", "--quiet", "--queryformat"])
        .arg("%{name}|%{epoch}|%{version}|%{release}|%{arch}\\n")
        .arg(spec.clone());
    let output = run_checked(runner, &query)?;

    let mut candidates = BTreeSet::new();
    for line in output.stdout.lines().filter(|l| !l.trim().is_empty()) {
        let nevra = Nevra::parse_query_line(line)?;
        // Patterns may name the epoch (`1:2.0.1`) or leave it out
        let matched = matcher.matches(&nevra.to_string()) || matcher.matches(&nevra.nvra());
        if !nevra.is_source() && matched {
            candidates.insert(nevra);
        }
    }

    if candidates.len() == 1
        && let Some(nevra) = candidates.pop_first()
    {
        return Ok(nevra);
    }

    Err(PkgBehaveError::VersionResolution {
        pattern: spec,
        candidates: candidates.iter().map(ToString::to_string).collect(),
    })
}
