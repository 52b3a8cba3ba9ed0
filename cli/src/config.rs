use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chembal::BalanceConfig;
use log::debug;

/// Reads solver settings from `path`, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<BalanceConfig> {
    let Some(path) = path else {
        return Ok(BalanceConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = BalanceConfig::from_toml_str(&text)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    debug!("loaded {config:?} from {}", path.display());
    Ok(config)
}
