//! Translate a scenario action into one package-manager invocation
//!
//! The command line is always
//! `program + base_flags + repo_flag + action tokens + packages`,
//! with everything manager-specific coming from a [`ManagerProfile`].

use crate::config::settings::ManagerProfile;
use crate::core::types::Action;
use crate::error::{PkgBehaveError, Result};
use crate::system::{CommandSpec, log_output};
use crate::traits::CommandRunner;
use crate::ui;
use std::path::{Path, PathBuf};

/// Paths and ids a dispatched command depends on
#[derive(Debug, Clone, Copy)]
pub struct DispatchContext<'a> {
    pub repo_dir: &'a Path,
    pub test_repo: &'a str,
}

/// The single `<repo_dir>/<name>*.rpm` file for a package
pub fn find_package_file(repo_dir: &Path, name: &str) -> Result<PathBuf> {
    let pattern = format!(
        "{}/{}*.rpm",
        glob::Pattern::escape(&repo_dir.to_string_lossy()),
        glob::Pattern::escape(name)
    );

    let candidates: Vec<PathBuf> = glob::glob(&pattern)
        .map_err(|e| PkgBehaveError::Other(format!("Invalid glob '{}': {}", pattern, e)))?
        .filter_map(|entry| entry.ok())
        .collect();

    if candidates.is_empty() {
        ui::warning(&format!("No candidates for: '{}'", name));
    }

    match candidates.as_slice() {
        [single] => Ok(single.clone()),
        _ => Err(PkgBehaveError::PackageFileResolution {
            package: name.to_string(),
            dir: repo_dir.to_path_buf(),
            found: candidates.len(),
        }),
    }
}

/// Build the command without running it
pub fn build_command(
    profile: &ManagerProfile,
    ctx: DispatchContext<'_>,
    action: Action,
    packages: &[String],
) -> Result<CommandSpec> {
    let operands = if action == Action::Install && profile.resolve_files {
        packages
            .iter()
            .map(|name| {
                find_package_file(ctx.repo_dir, name).map(|p| p.to_string_lossy().into_owned())
            })
            .collect::<Result<Vec<_>>>()?
    } else {
        packages.to_vec()
    };

    Ok(CommandSpec::new(profile.program.clone())
        .args(profile.base_flags.iter().cloned())
        .args(profile.repo_flag_for(ctx.test_repo))
        .args(profile.action_tokens(action).iter().cloned())
        .args(operands))
}

/// Run the action and hand back the exit code untouched
pub fn dispatch(
    runner: &dyn CommandRunner,
    profile: &ManagerProfile,
    ctx: DispatchContext<'_>,
    action: Action,
    packages: &[String],
) -> Result<i32> {
    let cmd = build_command(profile, ctx, action, packages)?;
    ui::verbose(&format!("$ {}", cmd));

    let output = runner.output(&cmd)?;
    log_output(&output);
    ui::verbose(&format!("exit code {}", output.code));

    Ok(output.code)
}

#[cfg(test)]
mod tests;
