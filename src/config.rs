// src/config.rs
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::error::ConfigError;

/// One bond to look up on TreasuryDirect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondRequest {
    /// Face value in dollars.
    #[serde(default)]
    pub denomination: i64,
    #[serde(default)]
    pub serial: String,
    /// Month and year of issue, passed to the site as written (e.g. "01/2000").
    #[serde(default)]
    pub issue_date: String,
    /// Series code such as "EE" or "I".
    #[serde(default)]
    pub series: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub bonds: Vec<BondRequest>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    bonds: Option<Vec<BondRequest>>,
}

/// Reads and validates the YAML bond list at `config_path`.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<Config, ConfigError> {
    let path = config_path.as_ref();
    tracing::info!("Reading configuration from {}", path.display());

    let contents = std::fs::read_to_string(path).map_err(|e| {
        tracing::debug!("Could not read {}: {}", path.display(), e);
        ConfigError::NotFound(path.display().to_string())
    })?;

    if contents.trim().is_empty() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }

    let config = parse_config(&contents)?;
    tracing::info!("Loaded {} bonds", config.bonds.len());
    Ok(config)
}

/// Parses and validates configuration text. Unknown keys are ignored.
pub fn parse_config(yaml: &str) -> Result<Config, ConfigError> {
    let raw: Option<RawConfig> = serde_yaml::from_str(yaml)?;

    let bonds = raw
        .and_then(|raw| raw.bonds)
        .filter(|bonds| !bonds.is_empty())
        .ok_or(ConfigError::NoBonds)?;

    for (index, bond) in bonds.iter().enumerate() {
        validate_bond(index, bond)?;
    }

    Ok(Config { bonds })
}

fn validate_bond(index: usize, bond: &BondRequest) -> Result<(), ConfigError> {
    if bond.denomination <= 0
        || bond.serial.trim().is_empty()
        || bond.issue_date.trim().is_empty()
        || bond.series.trim().is_empty()
    {
        return Err(ConfigError::Incomplete { index });
    }

    Ok(())
}
