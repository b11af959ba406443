//! Populate the working repository from a prebuilt fixture
//!
//! Mirrors `<build_root>/<name>` into `repo_dir` the way `cp -rs` does:
//! directories are recreated and every file becomes a link to its source.

use crate::config::settings::LinkMode;
use crate::error::{PkgBehaveError, Result};
use crate::ui;
use crate::utils::sanitize;
use std::fs;
use std::path::Path;

/// Replace the contents of `repo_dir` with links into the named fixture.
/// Returns the number of files linked.
pub fn load_fixture(build_root: &Path, repo_dir: &Path, name: &str, mode: LinkMode) -> Result<usize> {
    sanitize::validate_fixture_name(name)?;

    let source = build_root.join(name);
    if !source.is_dir() {
        return Err(PkgBehaveError::FixtureNotFound {
            name: name.to_string(),
            path: source,
        });
    }

    clear_directory(repo_dir)?;
    let linked = link_tree(&source, repo_dir, mode)?;

    ui::verbose(&format!(
        "Linked {} file(s) from {} into {} ({})",
        linked,
        source.display(),
        repo_dir.display(),
        mode
    ));
    Ok(linked)
}

/// Remove every entry of `dir`, creating it when missing
pub fn clear_directory(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return fs::create_dir_all(dir).map_err(|e| PkgBehaveError::io(dir, e));
    }

    let entries = fs::read_dir(dir).map_err(|e| PkgBehaveError::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| PkgBehaveError::io(dir, e))?;
        let path = entry.path();
        // file_type() does not follow symlinks, so linked directories are unlinked, not emptied
        let file_type = entry.file_type().map_err(|e| PkgBehaveError::io(&path, e))?;

        let removed = if file_type.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.map_err(|e| PkgBehaveError::io(&path, e))?;
    }
    Ok(())
}

fn link_tree(source: &Path, dest: &Path, mode: LinkMode) -> Result<usize> {
    let mut linked = 0;
    let entries = fs::read_dir(source).map_err(|e| PkgBehaveError::io(source, e))?;

    for entry in entries {
        let entry = entry.map_err(|e| PkgBehaveError::io(source, e))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        // Symlinked directories are linked as entries, never walked
        let file_type = entry.file_type().map_err(|e| PkgBehaveError::io(&from, e))?;

        if file_type.is_dir() {
            fs::create_dir_all(&to).map_err(|e| PkgBehaveError::io(&to, e))?;
            linked += link_tree(&from, &to, mode)?;
        } else {
            link_file(&from, &to, mode)?;
            linked += 1;
        }
    }
    Ok(linked)
}

fn link_file(from: &Path, to: &Path, mode: LinkMode) -> Result<()> {
    let result = match mode {
        LinkMode::Hardlink => fs::hard_link(from, to),
        LinkMode::Symlink => symlink(from, to),
    };
    result.map_err(|e| PkgBehaveError::io(to, e))
}

#[cfg(unix)]
fn symlink(from: &Path, to: &Path) -> std::io::Result<()> {
    // cp -rs needs absolute sources; relative targets would resolve against `to`
    let target = fs::canonicalize(from)?;
    std::os::unix::fs::symlink(target, to)
}

#[cfg(not(unix))]
fn symlink(from: &Path, to: &Path) -> std::io::Result<()> {
    fs::hard_link(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Layout {
        _tmp: TempDir,
        build_root: std::path::PathBuf,
        repo_dir: std::path::PathBuf,
    }

    fn layout() -> Layout {
        let tmp = tempfile::tempdir().expect("tempdir");
        let build_root = tmp.path().join("build");
        let repo_dir = tmp.path().join("repo");

        let fixture = build_root.join("upgrade_1");
        fs::create_dir_all(fixture.join("repodata")).unwrap();
        fs::write(fixture.join("TestA-1.0-1.noarch.rpm"), b"a").unwrap();
        fs::write(fixture.join("TestB-1.0-1.noarch.rpm"), b"b").unwrap();
        fs::write(fixture.join("repodata/repomd.xml"), b"<repomd/>").unwrap();

        Layout {
            _tmp: tmp,
            build_root,
            repo_dir,
        }
    }

    #[test]
    fn links_every_file_and_recreates_directories() {
        let l = layout();
        let linked = load_fixture(&l.build_root, &l.repo_dir, "upgrade_1", LinkMode::Symlink).unwrap();

        assert_eq!(linked, 3);
        assert!(l.repo_dir.join("repodata").is_dir());
        let link = l.repo_dir.join("TestA-1.0-1.noarch.rpm");
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read(&link).unwrap(), b"a");
    }

    #[test]
    fn previous_contents_are_cleared() {
        let l = layout();
        fs::create_dir_all(l.repo_dir.join("stale")).unwrap();
        fs::write(l.repo_dir.join("Old-1.0-1.noarch.rpm"), b"old").unwrap();
        fs::write(l.repo_dir.join("stale/file"), b"old").unwrap();

        load_fixture(&l.build_root, &l.repo_dir, "upgrade_1", LinkMode::Hardlink).unwrap();

        assert!(!l.repo_dir.join("Old-1.0-1.noarch.rpm").exists());
        assert!(!l.repo_dir.join("stale").exists());
        let copy = l.repo_dir.join("TestB-1.0-1.noarch.rpm");
        assert!(!fs::symlink_metadata(&copy).unwrap().file_type().is_symlink());
        assert_eq!(fs::read(copy).unwrap(), b"b");
    }

    #[test]
    fn clearing_does_not_touch_fixture_through_links() {
        let l = layout();
        load_fixture(&l.build_root, &l.repo_dir, "upgrade_1", LinkMode::Symlink).unwrap();
        clear_directory(&l.repo_dir).unwrap();

        assert!(l.build_root.join("upgrade_1/TestA-1.0-1.noarch.rpm").exists());
        assert_eq!(fs::read_dir(&l.repo_dir).unwrap().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_not_walked() {
        let l = layout();
        let fixture = l.build_root.join("upgrade_1");
        std::os::unix::fs::symlink(".", fixture.join("loop")).unwrap();

        let linked = load_fixture(&l.build_root, &l.repo_dir, "upgrade_1", LinkMode::Symlink).unwrap();

        assert_eq!(linked, 4);
        let link = l.repo_dir.join("loop");
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_link(&link).unwrap(), fs::canonicalize(&fixture).unwrap());
    }

    #[test]
    fn missing_fixture_is_reported() {
        let l = layout();
        let err = load_fixture(&l.build_root, &l.repo_dir, "nope", LinkMode::Symlink).unwrap_err();
        assert!(matches!(err, PkgBehaveError::FixtureNotFound { .. }));
    }

    #[test]
    fn traversal_names_are_rejected() {
        let l = layout();
        assert!(load_fixture(&l.build_root, &l.repo_dir, "../build", LinkMode::Symlink).is_err());
    }
}
