//! Mission configuration loading for the driver.

use std::fs;
use std::path::Path;

use anyhow::Context;

use spacetd_core::config::MissionConfig;

/// Load a mission config from a JSON file, or the defaults when no file is given.
/// Fields missing from the file keep their default values.
pub fn load_mission_config(path: Option<&Path>) -> anyhow::Result<MissionConfig> {
    let Some(path) = path else {
        return Ok(MissionConfig::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read mission config {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse mission config {}", path.display()))
}
