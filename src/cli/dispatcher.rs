//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers.

use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::config::{BootstrapConfig, LinkMode};
use crate::error::Result;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    match &args.command {
        Command::Run {
            features,
            config,
            build_root,
            repo_dir,
            test_repo,
            link_mode,
        } => commands::run::run(commands::run::RunOptions {
            features: features.clone(),
            config_path: config.clone(),
            build_root: build_root.clone(),
            repo_dir: repo_dir.clone(),
            test_repo: test_repo.clone(),
            link_mode: link_mode.as_deref().map(str::parse::<LinkMode>).transpose()?,
        }),

        Command::UpgradeTo {
            pattern,
            package,
            repos_dir,
            chroot,
            copr_base,
            copr_owner,
        } => commands::upgrade_to::run(commands::upgrade_to::UpgradeToOptions {
            pattern: pattern.clone(),
            bootstrap: BootstrapConfig {
                repos_dir: repos_dir.clone(),
                package: package.clone(),
                chroot: chroot.clone(),
                copr_base: copr_base.clone(),
                copr_owner: copr_owner.clone(),
                ..BootstrapConfig::default()
            },
        }),

        Command::Snapshot { format } => {
            commands::snapshot::run(commands::snapshot::SnapshotOptions {
                format: format.clone(),
            })
        }

        Command::Completions { shell } => commands::completions::run(*shell),
    }
}
