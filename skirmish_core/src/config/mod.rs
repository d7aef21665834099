//! Configuration loading from TOML files

mod constants;
mod roster;

pub use constants::RuleConstants;
pub use roster::{demo_encounter, load_encounter, parse_encounter, CombatantDef, EncounterConfig};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load and validate rule constants from a TOML file
pub fn load_rules(path: &Path) -> Result<RuleConstants, ConfigError> {
    let rules: RuleConstants = load_toml(path)?;
    rules.validate()?;
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_roundtrip() {
        let rules: RuleConstants = parse_toml("evasion_die = 12\nround_cap = 10").unwrap();
        assert_eq!(rules.evasion_die, 12);
        assert_eq!(rules.round_cap, 10);
    }

    #[test]
    fn test_parse_toml_rejects_garbage() {
        let result: Result<RuleConstants, _> = parse_toml("evasion_die = \"many\"");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}
