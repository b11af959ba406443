use crate::error::PkgBehaveError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Package operation requested by a `When` step
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Install,
    Remove,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Install => write!(f, "install"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

impl FromStr for Action {
    type Err = PkgBehaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "install" => Ok(Self::Install),
            "remove" => Ok(Self::Remove),
            other => Err(PkgBehaveError::InvalidStep(format!(
                "unknown action '{}', expected install or remove",
                other
            ))),
        }
    }
}

// Supported package managers.
// Adding one means a variant here plus a default profile in ManagerTable.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManagerKind {
    Rpm,
    Dnf,
    Pkcon,
}

impl fmt::Display for ManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rpm => write!(f, "rpm"),
            Self::Dnf => write!(f, "dnf"),
            Self::Pkcon => write!(f, "pkcon"),
        }
    }
}

impl FromStr for ManagerKind {
    type Err = PkgBehaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "rpm" => Ok(Self::Rpm),
            "dnf" => Ok(Self::Dnf),
            "pkcon" => Ok(Self::Pkcon),
            other => Err(PkgBehaveError::InvalidStep(format!(
                "unknown package manager '{}', expected rpm, dnf or pkcon",
                other
            ))),
        }
    }
}

/// Target state named by a `Then package ... should be ...` step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpectedState {
    Installed,
    Removed,
    Absent,
}

impl fmt::Display for ExpectedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Installed => write!(f, "installed"),
            Self::Removed => write!(f, "removed"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

impl FromStr for ExpectedState {
    type Err = PkgBehaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "installed" => Ok(Self::Installed),
            "removed" => Ok(Self::Removed),
            "absent" => Ok(Self::Absent),
            other => Err(PkgBehaveError::InvalidStep(format!(
                "unknown package state '{}', expected installed, removed or absent",
                other
            ))),
        }
    }
}

/// Name, epoch, version, release and arch of one package build
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Nevra {
    pub name: String,
    pub epoch: u32,
    pub version: String,
    pub release: String,
    pub arch: String,
}

impl Nevra {
    pub fn is_source(&self) -> bool {
        self.arch == "src" || self.arch == "nosrc"
    }

    /// `name-version-release.arch`, the form version globs are written against
    pub fn nvra(&self) -> String {
        format!("{}-{}-{}.{}", self.name, self.version, self.release, self.arch)
    }

    /// Parse one `name|epoch|version|release|arch` repoquery line
    pub fn parse_query_line(line: &str) -> Result<Self, PkgBehaveError> {
        let fields: Vec<&str> = line.trim().split('|').collect();
        let [name, epoch, version, release, arch] = fields.as_slice() else {
            return Err(PkgBehaveError::Other(format!(
                "Malformed repoquery line: '{}'",
                line
            )));
        };

        // rpm prints "(none)" for a missing epoch; dnf prints 0
        let epoch = match *epoch {
            "" | "(none)" => 0,
            value => value.parse().map_err(|_| {
                PkgBehaveError::Other(format!("Invalid epoch '{}' in '{}'", value, line))
            })?,
        };

        Ok(Self {
            name: name.to_string(),
            epoch,
            version: version.to_string(),
            release: release.to_string(),
            arch: arch.to_string(),
        })
    }
}

impl fmt::Display for Nevra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epoch == 0 {
            write!(
                f,
                "{}-{}-{}.{}",
                self.name, self.version, self.release, self.arch
            )
        } else {
            write!(
                f,
                "{}-{}:{}-{}.{}",
                self.name, self.epoch, self.version, self.release, self.arch
            )
        }
    }
}
