//! In-memory stand-in for rpm, dnf and pkcon used by unit tests

use crate::error::Result;
use crate::system::{CommandOutput, CommandSpec};
use crate::traits::CommandRunner;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct FakeState {
    installed: BTreeSet<String>,
    available: BTreeSet<String>,
    requires: HashMap<String, Vec<String>>,
    repoquery_lines: Vec<String>,
    forced_exit: HashMap<String, i32>,
    calls: Vec<CommandSpec>,
}

#[derive(Debug, Default)]
pub struct FakeSystem {
    state: Mutex<FakeState>,
}

impl FakeSystem {
    pub fn with_installed(names: &[&str]) -> Self {
        let fake = Self::default();
        fake.lock().installed = names.iter().map(|s| s.to_string()).collect();
        fake
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake system lock")
    }

    pub fn make_available(&self, names: &[&str]) {
        self.lock()
            .available
            .extend(names.iter().map(|s| s.to_string()));
    }

    /// Installing `pkg` also installs `deps`
    pub fn add_dependency(&self, pkg: &str, deps: &[&str]) {
        self.lock().requires.insert(
            pkg.to_string(),
            deps.iter().map(|s| s.to_string()).collect(),
        );
    }

    pub fn set_repoquery(&self, lines: &[&str]) {
        self.lock().repoquery_lines = lines.iter().map(|s| s.to_string()).collect();
    }

    /// Every invocation of `program` exits with `code`
    pub fn fail_program(&self, program: &str, code: i32) {
        self.lock().forced_exit.insert(program.to_string(), code);
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.lock().calls.clone()
    }

    pub fn installed(&self) -> BTreeSet<String> {
        self.lock().installed.clone()
    }
}

impl FakeState {
    fn install(&mut self, name: &str) {
        if !self.installed.insert(name.to_string()) {
            return;
        }
        let deps = self.requires.get(name).cloned().unwrap_or_default();
        for dep in deps {
            self.install(&dep);
        }
    }

    fn rpm(&mut self, args: &[String]) -> CommandOutput {
        match args.first().map(String::as_str) {
            Some("-qa") => CommandOutput {
                stdout: self
                    .installed
                    .iter()
                    .map(|name| format!("{}\n", name))
                    .collect(),
                ..CommandOutput::default()
            },
            Some("-Uvh") => {
                for file in &args[1..] {
                    let name = package_name_from_file(file);
                    self.install(&name);
                }
                CommandOutput::default()
            }
            Some("-e") => {
                let names = &args[1..];
                if names.iter().any(|n| !self.installed.contains(n)) {
                    return exit(1);
                }
                for name in names {
                    self.installed.remove(name);
                }
                CommandOutput::default()
            }
            _ => exit(1),
        }
    }

    fn frontend(&mut self, args: &[String]) -> CommandOutput {
        let mut words = args.iter().filter(|a| !a.starts_with('-'));
        let verb = words.next().map(String::as_str);
        let operands: Vec<String> = words.cloned().collect();

        match verb {
            Some("install") => {
                if operands.iter().any(|n| !self.available.contains(n)) {
                    return exit(1);
                }
                for name in &operands {
                    self.install(name);
                }
                CommandOutput::default()
            }
            Some("remove") => {
                if operands.iter().any(|n| !self.installed.contains(n)) {
                    return exit(1);
                }
                for name in &operands {
                    self.installed.remove(name);
                }
                CommandOutput::default()
            }
            Some("repoquery") => CommandOutput {
                stdout: self
                    .repoquery_lines
                    .iter()
                    .map(|line| format!("{}\n", line))
                    .collect(),
                ..CommandOutput::default()
            },
            Some("upgrade") | Some("upgrade-to") => CommandOutput::default(),
            _ => exit(1),
        }
    }
}

impl CommandRunner for FakeSystem {
    fn output(&self, cmd: &CommandSpec) -> Result<CommandOutput> {
        let mut state = self.lock();
        state.calls.push(cmd.clone());

        if let Some(code) = state.forced_exit.get(&cmd.program) {
            return Ok(exit(*code));
        }

        Ok(match cmd.program.as_str() {
            "rpm" => state.rpm(&cmd.args),
            "dnf" | "pkcon" => state.frontend(&cmd.args),
            _ => exit(127),
        })
    }
}

fn exit(code: i32) -> CommandOutput {
    CommandOutput {
        code,
        ..CommandOutput::default()
    }
}

/// `/repo/TestA-1.0-1.noarch.rpm` -> `TestA`
pub fn package_name_from_file(file: &str) -> String {
    let base = Path::new(file)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = base.trim_end_matches(".rpm");
    let parts: Vec<&str> = stem.rsplitn(3, '-').collect();
    parts.last().copied().unwrap_or(stem).to_string()
}
