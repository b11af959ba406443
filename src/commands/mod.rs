pub mod completions;
pub mod run;
pub mod snapshot;
pub mod upgrade_to;
