use crate::config::{self, HarnessConfig, LinkMode};
use crate::error::{PkgBehaveError, Result};
use crate::scenario::{self, steps};
use crate::ui;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub features: Vec<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub build_root: Option<PathBuf>,
    pub repo_dir: Option<PathBuf>,
    pub test_repo: Option<String>,
    pub link_mode: Option<LinkMode>,
}

/// Config file first, then command-line overrides
pub fn resolve_config(options: &RunOptions) -> Result<HarnessConfig> {
    let mut config = config::load_harness_config(options.config_path.as_deref())?;

    if let Some(path) = &options.build_root {
        config.build_root = path.clone();
    }
    if let Some(path) = &options.repo_dir {
        config.repo_dir = path.clone();
    }
    if let Some(repo) = &options.test_repo {
        config.test_repo = repo.clone();
    }
    if let Some(mode) = options.link_mode {
        config.link_mode = mode;
    }

    Ok(config)
}

pub fn run(options: RunOptions) -> Result<()> {
    let config = resolve_config(&options)?;

    let features = if options.features.is_empty() {
        vec![PathBuf::from("features")]
    } else {
        options.features.clone()
    };

    if let Some(missing) = features.iter().find(|p| !p.exists()) {
        return Err(PkgBehaveError::ConfigError(format!(
            "Feature path not found: {}",
            missing.display()
        )));
    }

    ui::header("Package scenarios");
    ui::keyval("Build root", &config.build_root.display().to_string());
    ui::keyval("Repository", &config.repo_dir.display().to_string());
    ui::keyval("Test repo", &config.test_repo);

    if !scenario::install_config(config) {
        ui::warning("Scenario config already installed; keeping the first one");
    }

    let mut failed_steps = 0;
    let mut parse_errors = 0;
    for path in &features {
        match steps::run_features(path) {
            Ok(()) => {}
            Err(PkgBehaveError::ScenariosFailed {
                failed_steps: f,
                parse_errors: p,
            }) => {
                failed_steps += f;
                parse_errors += p;
            }
            Err(e) => return Err(e),
        }
    }

    if failed_steps > 0 || parse_errors > 0 {
        return Err(PkgBehaveError::ScenariosFailed {
            failed_steps,
            parse_errors,
        });
    }

    ui::success("All scenarios passed");
    Ok(())
}
