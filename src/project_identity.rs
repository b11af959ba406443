//! Central project identity contract.
//!
//! This module is the single source of truth for runtime identity values.

pub const BINARY_NAME: &str = "pkgbehave";
pub const ENV_PREFIX: &str = "PKGBEHAVE";
pub const CONFIG_FILE_BASENAME: &str = "pkgbehave.kdl";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}
