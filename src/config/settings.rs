//! Harness settings
//!
//! Everything the steps and the bootstrap used to take from process-wide
//! constants (`/build`, `/repo`, per-manager default flags) lives here and is
//! passed explicitly to the code that needs it.

use crate::core::types::{Action, ManagerKind};
use crate::error::{PkgBehaveError, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How fixture files are mirrored into the working repository.
///
/// The default is symbolic links, which is what `cp -rs` produces. Fixtures are
/// often described as hard-linked; `Hardlink` gives that layout when a manager
/// refuses to read package files through symlinks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkMode {
    /// Symbolic links, as `cp -rs` makes them
    #[default]
    Symlink,
    Hardlink,
}

impl FromStr for LinkMode {
    type Err = PkgBehaveError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "symlink" => Ok(Self::Symlink),
            "hardlink" => Ok(Self::Hardlink),
            other => Err(PkgBehaveError::ConfigError(format!(
                "Invalid link-mode '{}'. Valid: symlink, hardlink",
                other
            ))),
        }
    }
}

impl fmt::Display for LinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symlink => write!(f, "symlink"),
            Self::Hardlink => write!(f, "hardlink"),
        }
    }
}

/// Command-line shape of one package manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerProfile {
    pub program: String,
    /// Flags placed right after the program
    pub base_flags: Vec<String>,
    /// Flag enabling the test repository; `{repo}` is substituted
    pub repo_flag: Option<String>,
    /// Action lookup table: tokens placed before the package arguments
    pub actions: HashMap<Action, Vec<String>>,
    /// Install takes package files from the working repository, not names
    pub resolve_files: bool,
}

impl ManagerProfile {
    pub fn action_tokens(&self, action: Action) -> &[String] {
        self.actions.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn repo_flag_for(&self, repo: &str) -> Option<String> {
        self.repo_flag
            .as_ref()
            .map(|template| template.replace("{repo}", repo))
    }

    fn rpm() -> Self {
        Self {
            program: "rpm".to_string(),
            base_flags: vec![],
            repo_flag: None,
            actions: action_table(&["-Uvh"], &["-e"]),
            resolve_files: true,
        }
    }

    fn dnf() -> Self {
        Self {
            program: "dnf".to_string(),
            base_flags: strings(&["-y", "--disablerepo=*", "--nogpgcheck"]),
            repo_flag: Some("--enablerepo={repo}".to_string()),
            actions: action_table(&["install"], &["remove"]),
            resolve_files: false,
        }
    }

    fn pkcon() -> Self {
        Self {
            program: "pkcon".to_string(),
            base_flags: strings(&["-y", "-p"]),
            repo_flag: None,
            actions: action_table(&["install"], &["remove"]),
            resolve_files: false,
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn action_table(install: &[&str], remove: &[&str]) -> HashMap<Action, Vec<String>> {
    HashMap::from([
        (Action::Install, strings(install)),
        (Action::Remove, strings(remove)),
    ])
}

/// One profile per supported manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerTable {
    pub rpm: ManagerProfile,
    pub dnf: ManagerProfile,
    pub pkcon: ManagerProfile,
}

impl Default for ManagerTable {
    fn default() -> Self {
        Self {
            rpm: ManagerProfile::rpm(),
            dnf: ManagerProfile::dnf(),
            pkcon: ManagerProfile::pkcon(),
        }
    }
}

impl ManagerTable {
    pub fn get(&self, kind: ManagerKind) -> &ManagerProfile {
        match kind {
            ManagerKind::Rpm => &self.rpm,
            ManagerKind::Dnf => &self.dnf,
            ManagerKind::Pkcon => &self.pkcon,
        }
    }

    pub fn get_mut(&mut self, kind: ManagerKind) -> &mut ManagerProfile {
        match kind {
            ManagerKind::Rpm => &mut self.rpm,
            ManagerKind::Dnf => &mut self.dnf,
            ManagerKind::Pkcon => &mut self.pkcon,
        }
    }
}

/// Settings for the scenario steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Directory holding one subdirectory per fixture repository
    pub build_root: PathBuf,
    /// Working repository the test repo definition points at
    pub repo_dir: PathBuf,
    /// Repository id enabled for dnf operations
    pub test_repo: String,
    pub link_mode: LinkMode,
    pub managers: ManagerTable,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            build_root: PathBuf::from("/build"),
            repo_dir: PathBuf::from("/repo"),
            test_repo: "test".to_string(),
            link_mode: LinkMode::default(),
            managers: ManagerTable::default(),
        }
    }
}

/// Settings for `upgrade-to`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Where `.repo` files are written
    pub repos_dir: PathBuf,
    /// Package being upgraded, also the prefix of the version glob
    pub package: String,
    pub copr_base: String,
    pub copr_owner: String,
    pub chroot: String,
    pub nightly_repo: String,
    pub pull_request_repo: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            repos_dir: PathBuf::from("/etc/yum.repos.d"),
            package: "dnf".to_string(),
            copr_base: "https://copr-be.cloud.fedoraproject.org/results".to_string(),
            copr_owner: "rpmsoftwaremanagement".to_string(),
            chroot: "fedora-rawhide-x86_64".to_string(),
            nightly_repo: "dnf-nightly".to_string(),
            pull_request_repo: "dnf-pull-requests".to_string(),
        }
    }
}

impl BootstrapConfig {
    /// `<copr_base>/<owner>/<project>/<chroot>/`
    pub fn feed_url(&self, project: &str) -> String {
        format!(
            "{}/{}/{}/{}/",
            self.copr_base.trim_end_matches('/'),
            self.copr_owner,
            project,
            self.chroot
        )
    }
}
