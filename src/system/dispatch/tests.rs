use super::*;
use crate::config::settings::ManagerTable;
use crate::core::types::ManagerKind;
use crate::system::fake::FakeSystem;
use std::fs;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn repo_with(files: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for file in files {
        fs::write(dir.path().join(file), b"rpm").expect("write rpm");
    }
    dir
}

#[test]
fn test_dnf_command_enables_only_test_repo() {
    let table = ManagerTable::default();
    let ctx = DispatchContext {
        repo_dir: Path::new("/repo"),
        test_repo: "test",
    };

    let cmd = build_command(
        table.get(ManagerKind::Dnf),
        ctx,
        Action::Install,
        &names(&["TestA", "TestB"]),
    )
    .unwrap();

    assert_eq!(cmd.program, "dnf");
    assert_eq!(
        cmd.args,
        vec![
            "-y",
            "--disablerepo=*",
            "--nogpgcheck",
            "--enablerepo=test",
            "install",
            "TestA",
            "TestB"
        ]
    );
}

#[test]
fn test_rpm_erase_uses_names() {
    let table = ManagerTable::default();
    let ctx = DispatchContext {
        repo_dir: Path::new("/nonexistent"),
        test_repo: "test",
    };

    let cmd = build_command(
        table.get(ManagerKind::Rpm),
        ctx,
        Action::Remove,
        &names(&["TestA"]),
    )
    .unwrap();
    assert_eq!(cmd.to_string(), "rpm -e TestA");
}

#[test]
fn test_rpm_install_resolves_package_files() {
    let repo = repo_with(&["TestA-1.0-1.noarch.rpm", "TestB-1.0-1.noarch.rpm"]);
    let table = ManagerTable::default();
    let ctx = DispatchContext {
        repo_dir: repo.path(),
        test_repo: "test",
    };

    let cmd = build_command(
        table.get(ManagerKind::Rpm),
        ctx,
        Action::Install,
        &names(&["TestA"]),
    )
    .unwrap();

    assert_eq!(cmd.args[0], "-Uvh");
    assert_eq!(
        PathBuf::from(&cmd.args[1]),
        repo.path().join("TestA-1.0-1.noarch.rpm")
    );
}

#[test]
fn test_ambiguous_package_file_is_fatal() {
    let repo = repo_with(&["TestA-1.0-1.noarch.rpm", "TestA-2.0-1.noarch.rpm"]);
    let err = find_package_file(repo.path(), "TestA").unwrap_err();
    assert!(matches!(
        err,
        PkgBehaveError::PackageFileResolution { found: 2, .. }
    ));
}

#[test]
fn test_missing_package_file_runs_nothing() {
    let repo = repo_with(&["TestB-1.0-1.noarch.rpm"]);
    let fake = FakeSystem::with_installed(&["bash"]);
    let table = ManagerTable::default();
    let ctx = DispatchContext {
        repo_dir: repo.path(),
        test_repo: "test",
    };

    let err = dispatch(
        &fake,
        table.get(ManagerKind::Rpm),
        ctx,
        Action::Install,
        &names(&["TestA"]),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        PkgBehaveError::PackageFileResolution { found: 0, .. }
    ));
    assert!(fake.calls().is_empty());
}

#[test]
fn test_pkcon_runs_non_interactively() {
    let fake = FakeSystem::with_installed(&["bash"]);
    fake.make_available(&["TestA"]);
    let table = ManagerTable::default();
    let ctx = DispatchContext {
        repo_dir: Path::new("/repo"),
        test_repo: "test",
    };

    let rc = dispatch(
        &fake,
        table.get(ManagerKind::Pkcon),
        ctx,
        Action::Install,
        &names(&["TestA"]),
    )
    .unwrap();

    assert_eq!(rc, 0);
    assert_eq!(fake.calls()[0].to_string(), "pkcon -y -p install TestA");
    assert!(fake.installed().contains("TestA"));
}

#[test]
fn test_exit_code_is_not_translated() {
    let fake = FakeSystem::with_installed(&["bash"]);
    fake.fail_program("dnf", 3);
    let table = ManagerTable::default();
    let ctx = DispatchContext {
        repo_dir: Path::new("/repo"),
        test_repo: "test",
    };

    let rc = dispatch(
        &fake,
        table.get(ManagerKind::Dnf),
        ctx,
        Action::Remove,
        &names(&["bash"]),
    )
    .unwrap();
    assert_eq!(rc, 3);
}
