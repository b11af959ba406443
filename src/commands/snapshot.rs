use crate::error::Result;
use crate::system::{SystemRunner, query};
use crate::ui;
use crate::utils::machine_output;

#[derive(Debug, Clone)]
pub struct SnapshotOptions {
    /// `text`, `json` or `yaml`
    pub format: String,
}

pub fn run(options: SnapshotOptions) -> Result<()> {
    let snapshot = query::installed_packages(&SystemRunner::new())?;

    if options.format != "text" {
        return machine_output::emit_v1("snapshot", &snapshot, vec![], &options.format);
    }

    for name in snapshot.iter() {
        println!("{}", name);
    }
    ui::verbose(&format!("{} packages installed", snapshot.len()));
    Ok(())
}
