//! Before/after package-set diff
//!
//! Set semantics on both sides: duplicate lines or a different ordering in
//! the query output never show up as a change.

use crate::core::snapshot::Snapshot;
use colored::Colorize;
use std::collections::BTreeSet;

/// Packages that disappeared (`removed`) and appeared (`installed`)
/// between two snapshots. The two sets are always disjoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageDiff {
    pub removed: BTreeSet<String>,
    pub installed: BTreeSet<String>,
}

impl PackageDiff {
    /// `removed = before - after`, `installed = after - before`
    pub fn between(before: &Snapshot, after: &Snapshot) -> Self {
        Self {
            removed: before.names().difference(after.names()).cloned().collect(),
            installed: after.names().difference(before.names()).cloned().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.installed.is_empty()
    }

    /// git-diff-like rendering, used for diagnostics
    pub fn render(&self) -> String {
        if self.is_empty() {
            return format!("{}", "No changes".bright_black());
        }

        let mut lines = vec![
            format!("{}", "--- before".red()),
            format!("{}", "+++ after".green()),
        ];

        if !self.removed.is_empty() {
            lines.push(format!(
                "{}",
                format!("@@ Removed {} packages @@", self.removed.len()).cyan()
            ));
            for pkg in &self.removed {
                lines.push(format!("{}{}", "-".red(), pkg.red()));
            }
        }

        if !self.installed.is_empty() {
            lines.push(format!(
                "{}",
                format!("@@ Installed {} packages @@", self.installed.len()).cyan()
            ));
            for pkg in &self.installed {
                lines.push(format!("{}{}", "+".green(), pkg.green()));
            }
        }

        lines.join("\n")
    }
}
