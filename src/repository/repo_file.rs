use crate::error::{PkgBehaveError, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// One `[section]` of a yum/dnf `.repo` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoDefinition {
    pub id: String,
    pub name: String,
    pub baseurl: String,
    pub enabled: bool,
    pub gpgcheck: bool,
}

impl RepoDefinition {
    /// Enabled, unsigned repository whose name equals its id
    pub fn unsigned(id: &str, baseurl: &str) -> Self {
        Self {
            id: id.to_string(),
            name: id.to_string(),
            baseurl: baseurl.to_string(),
            enabled: true,
            gpgcheck: false,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.repo", self.id)
    }

    /// Write `<dir>/<id>.repo`, replacing any previous definition
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        fs::write(&path, self.to_string()).map_err(|e| PkgBehaveError::io(&path, e))?;
        Ok(path)
    }
}

impl fmt::Display for RepoDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.id)?;
        writeln!(f, "name={}", self.name)?;
        writeln!(f, "baseurl={}", self.baseurl)?;
        writeln!(f, "enabled={}", u8::from(self.enabled))?;
        writeln!(f, "gpgcheck={}", u8::from(self.gpgcheck))
    }
}
