pub mod kdl;
pub mod settings;

pub use settings::{BootstrapConfig, HarnessConfig, LinkMode, ManagerProfile, ManagerTable};

use crate::error::{PkgBehaveError, Result};
use crate::project_identity;
use crate::ui;
use std::fs;
use std::path::{Path, PathBuf};

/// Locate the config file: explicit path, then `$PKGBEHAVE_CONFIG`, then
/// `./pkgbehave.kdl` if present
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    let from_env = std::env::var(project_identity::env_key("CONFIG")).ok();
    config_path_from(explicit, from_env.as_deref(), Path::new("."))
}

fn config_path_from(explicit: Option<&Path>, from_env: Option<&str>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(path) = from_env
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }

    let local = cwd.join(project_identity::CONFIG_FILE_BASENAME);
    local.is_file().then_some(local)
}

/// Load harness settings; built-in defaults when no file is found
pub fn load_harness_config(explicit: Option<&Path>) -> Result<HarnessConfig> {
    let Some(path) = resolve_config_path(explicit) else {
        return Ok(HarnessConfig::default());
    };

    if !path.is_file() {
        return Err(PkgBehaveError::ConfigError(format!(
            "Config file not found at: {}",
            path.display()
        )));
    }

    ui::verbose(&format!("Using config {}", path.display()));
    let content = fs::read_to_string(&path).map_err(|e| PkgBehaveError::io(&path, e))?;
    self::kdl::parse_config_content(&content, HarnessConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let path = Path::new("/tmp/custom.kdl");
        assert_eq!(resolve_config_path(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn explicit_path_beats_env_and_local_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pkgbehave.kdl"), "").unwrap();

        let explicit = Path::new("/etc/pkgbehave/ci.kdl");
        assert_eq!(
            config_path_from(Some(explicit), Some("/from/env.kdl"), dir.path()),
            Some(explicit.to_path_buf())
        );
    }

    #[test]
    fn env_var_beats_local_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pkgbehave.kdl"), "").unwrap();

        assert_eq!(
            config_path_from(None, Some("/from/env.kdl"), dir.path()),
            Some(PathBuf::from("/from/env.kdl"))
        );
    }

    #[test]
    fn blank_env_var_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join("pkgbehave.kdl");
        fs::write(&local, "").unwrap();

        assert_eq!(config_path_from(None, Some("  "), dir.path()), Some(local));
    }

    #[test]
    fn local_file_is_used_only_when_present() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(config_path_from(None, None, dir.path()), None);

        let local = dir.path().join("pkgbehave.kdl");
        fs::write(&local, "test-repo \"local\"\n").unwrap();
        assert_eq!(config_path_from(None, None, dir.path()), Some(local));
    }

    #[test]
    fn local_directory_named_like_config_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("pkgbehave.kdl")).unwrap();
        assert_eq!(config_path_from(None, None, dir.path()), None);
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.kdl");
        assert!(load_harness_config(Some(&missing)).is_err());
    }

    #[test]
    fn explicit_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pkgbehave.kdl");
        fs::write(&path, "test-repo \"local\"\n").unwrap();

        let config = load_harness_config(Some(&path)).unwrap();
        assert_eq!(config.test_repo, "local");
        assert_eq!(config.build_root, PathBuf::from("/build"));
    }
}
