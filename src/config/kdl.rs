use crate::config::settings::{HarnessConfig, ManagerProfile};
use crate::core::types::{Action, ManagerKind};
use crate::error::{PkgBehaveError, Result};
use kdl::{KdlDocument, KdlNode};
use std::path::PathBuf;

/// Apply a KDL harness config on top of `base`
///
/// ```kdl
/// build-root "/build"
/// repo-dir "/repo"
/// test-repo "test"
/// link-mode "symlink"
/// manager "dnf" {
///     flags "-y" "--disablerepo=*" "--nogpgcheck"
///     repo-flag "--enablerepo={repo}"
/// }
/// ```
pub fn parse_config_content(content: &str, base: HarnessConfig) -> Result<HarnessConfig> {
    let doc: KdlDocument = content.parse().map_err(|e: kdl::KdlError| {
        let err_msg = e.to_string();
        let hint = if err_msg.contains("unexpected end of file") {
            "\nHint: You might be missing a closing brace '}'."
        } else if err_msg.contains("expected") {
            "\nHint: Check that your KDL syntax follows the format: node-name \"value\" { ... }"
        } else {
            ""
        };

        PkgBehaveError::ConfigError(format!("KDL parsing error: {}{}", err_msg, hint))
    })?;

    let mut config = base;

    for node in doc.nodes() {
        match node.name().value() {
            "build-root" => config.build_root = PathBuf::from(first_string(node)?),
            "repo-dir" => config.repo_dir = PathBuf::from(first_string(node)?),
            "test-repo" => config.test_repo = first_string(node)?,
            "link-mode" => config.link_mode = first_string(node)?.parse()?,
            "manager" => {
                let kind: ManagerKind = first_string(node)?
                    .parse()
                    .map_err(|e: PkgBehaveError| PkgBehaveError::ConfigError(e.to_string()))?;
                apply_manager_node(node, config.managers.get_mut(kind))?;
            }
            "description" => {}
            other => {
                return Err(PkgBehaveError::ConfigError(format!(
                    "Unknown config node '{}'",
                    other
                )));
            }
        }
    }

    Ok(config)
}

fn apply_manager_node(node: &KdlNode, profile: &mut ManagerProfile) -> Result<()> {
    let Some(children) = node.children() else {
        return Ok(());
    };

    for child in children.nodes() {
        match child.name().value() {
            "program" => profile.program = first_string(child)?,
            "flags" => profile.base_flags = all_strings(child),
            "repo-flag" => profile.repo_flag = Some(first_string(child)?),
            "no-repo-flag" => profile.repo_flag = None,
            "install" => {
                profile.actions.insert(Action::Install, all_strings(child));
            }
            "remove" => {
                profile.actions.insert(Action::Remove, all_strings(child));
            }
            "resolve-files" => profile.resolve_files = first_bool(child)?,
            other => {
                return Err(PkgBehaveError::ConfigError(format!(
                    "Unknown manager setting '{}'",
                    other
                )));
            }
        }
    }

    Ok(())
}

fn all_strings(node: &KdlNode) -> Vec<String> {
    node.entries()
        .iter()
        .filter_map(|entry| entry.value().as_string())
        .map(str::to_string)
        .collect()
}

fn first_string(node: &KdlNode) -> Result<String> {
    node.entries()
        .first()
        .and_then(|entry| entry.value().as_string())
        .map(str::to_string)
        .ok_or_else(|| {
            PkgBehaveError::ConfigError(format!(
                "'{}' expects a string argument",
                node.name().value()
            ))
        })
}

fn first_bool(node: &KdlNode) -> Result<bool> {
    node.entries()
        .first()
        .and_then(|entry| entry.value().as_bool())
        .ok_or_else(|| {
            PkgBehaveError::ConfigError(format!(
                "'{}' expects #true or #false",
                node.name().value()
            ))
        })
}
