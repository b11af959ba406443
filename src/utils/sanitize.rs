//! Input validation for values taken from feature files and the CLI
//!
//! Package names end up in argument vectors and glob patterns, fixture
//! names end up in filesystem paths. Both are checked before use.

use crate::error::{PkgBehaveError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Characters RPM accepts in a package name
static SAFE_PACKAGE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._+-]+$").expect("Invalid regex pattern"));

/// Fixture directory names: one path component, no leading dot
static SAFE_FIXTURE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_+-][a-zA-Z0-9._+-]*$").expect("Invalid regex pattern"));

/// Version globs for `upgrade-to`: NEVRA characters plus glob wildcards
static SAFE_VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._+:~^*?\[\]-]+$").expect("Invalid regex pattern"));

/// Validate a package name before it reaches a command line or glob
pub fn validate_package_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(PkgBehaveError::InvalidStep(
            "Package name cannot be empty".to_string(),
        ));
    }

    if name.len() > 256 {
        return Err(PkgBehaveError::InvalidStep(format!(
            "Package name too long (max 256 chars): {}...",
            name.chars().take(50).collect::<String>()
        )));
    }

    if !SAFE_PACKAGE_NAME.is_match(name) {
        return Err(PkgBehaveError::InvalidStep(format!(
            "Package name contains invalid characters: {}",
            name
        )));
    }

    Ok(())
}

/// Split a step's comma-separated package list, trimming each entry
pub fn parse_package_list(input: &str) -> Result<Vec<String>> {
    let names: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    if names.is_empty() {
        return Err(PkgBehaveError::InvalidStep(format!(
            "No package names in '{}'",
            input
        )));
    }

    for name in &names {
        validate_package_name(name)?;
    }
    Ok(names)
}

pub fn validate_fixture_name(name: &str) -> Result<()> {
    if !SAFE_FIXTURE_NAME.is_match(name) || name.contains("..") {
        return Err(PkgBehaveError::InvalidStep(format!(
            "Invalid repository fixture name: '{}'",
            name
        )));
    }
    Ok(())
}

pub fn validate_version_pattern(pattern: &str) -> Result<()> {
    if !SAFE_VERSION_PATTERN.is_match(pattern) {
        return Err(PkgBehaveError::ConfigError(format!(
            "Version pattern contains invalid characters: '{}'",
            pattern
        )));
    }
    Ok(())
}
