use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PkgBehaveError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    YamlError(#[from] serde_yml::Error),

    #[error("Fixture repository '{name}' not found at: {path}")]
    FixtureNotFound { name: String, path: PathBuf },

    #[error("Expected exactly one package file for '{package}' in {dir}, found {found}")]
    PackageFileResolution {
        package: String,
        dir: PathBuf,
        found: usize,
    },

    #[error("Version pattern '{pattern}' must match exactly one package, found {}: [{}]", .candidates.len(), .candidates.join(", "))]
    VersionResolution {
        pattern: String,
        candidates: Vec<String>,
    },

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    #[error("Command '{command}' exited with code {code}")]
    CommandExited { command: String, code: i32 },

    #[error("System dependency missing: {0}")]
    DependencyMissing(String),

    #[error("Package query returned no installed packages")]
    EmptySnapshot,

    #[error("Invalid step argument: {0}")]
    InvalidStep(String),

    #[error("No return code recorded; run a package operation first")]
    MissingReturnCode,

    #[error("Return code is {actual}, expected it {relation} {expected}")]
    ReturnCodeMismatch {
        expected: i32,
        actual: i32,
        relation: &'static str,
    },

    #[error("Error '{package}' NOT '{state}'")]
    ExpectationFailed { package: String, state: String },

    #[error("Error '{}' NOT IN {kind}", .packages.join(", "))]
    UnaccountedChanges { kind: String, packages: Vec<String> },

    #[error("{failed_steps} step(s) failed, {parse_errors} feature parse error(s)")]
    ScenariosFailed {
        failed_steps: usize,
        parse_errors: usize,
    },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PkgBehaveError>;

impl PkgBehaveError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}
