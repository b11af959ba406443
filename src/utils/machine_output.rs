use crate::error::{PkgBehaveError, Result};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MachineEnvelope<T>
where
    T: Serialize,
{
    pub version: String,
    pub command: String,
    pub ok: bool,
    pub data: T,
    pub warnings: Vec<String>,
    pub meta: MachineMeta,
}

#[derive(Debug, Serialize)]
pub struct MachineMeta {
    pub generated_at: String,
    pub host: Option<String>,
}

impl MachineMeta {
    pub fn now() -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            host: hostname::get()
                .ok()
                .map(|h| h.to_string_lossy().into_owned()),
        }
    }
}

pub fn render_v1<T>(command: &str, data: T, warnings: Vec<String>, format: &str) -> Result<String>
where
    T: Serialize,
{
    let envelope = MachineEnvelope {
        version: "v1".to_string(),
        command: command.to_string(),
        ok: true,
        data,
        warnings,
        meta: MachineMeta::now(),
    };

    match format {
        "json" => Ok(serde_json::to_string_pretty(&envelope)?),
        "yaml" => Ok(serde_yml::to_string(&envelope)?),
        other => Err(PkgBehaveError::ConfigError(format!(
            "Unsupported machine output format '{}'",
            other
        ))),
    }
}

pub fn emit_v1<T>(command: &str, data: T, warnings: Vec<String>, format: &str) -> Result<()>
where
    T: Serialize,
{
    println!("{}", render_v1(command, data, warnings, format)?);
    Ok(())
}
