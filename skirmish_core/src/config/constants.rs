//! Tunable rule constants

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// The rule knobs of the resolver
///
/// Every field has a default matching the original encounter rules, so a
/// partial TOML file (or none at all) yields the canonical game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleConstants {
    /// Size of the evasion die; rolls are drawn from `[0, evasion_die)`
    #[serde(default = "default_evasion_die")]
    pub evasion_die: i32,
    /// Round count at which an unresolving combat aborts
    #[serde(default = "default_round_cap")]
    pub round_cap: u32,
    /// Fraction of max hp below which an ally triggers an area heal
    #[serde(default = "default_heal_threshold")]
    pub heal_threshold: f64,
    /// Flat base of the area nuke, before caster intellect
    #[serde(default = "default_nuke_base_damage")]
    pub nuke_base_damage: i32,
    /// Whether an area heal also rests the caster itself
    #[serde(default = "default_heal_includes_caster")]
    pub heal_includes_caster: bool,
}

impl Default for RuleConstants {
    fn default() -> Self {
        RuleConstants {
            evasion_die: 20,
            round_cap: 100,
            heal_threshold: 0.5,
            nuke_base_damage: 3,
            heal_includes_caster: true,
        }
    }
}

impl RuleConstants {
    /// Check the constants are internally consistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.evasion_die < 1 {
            return Err(ConfigError::ValidationError(
                "evasion_die must be at least 1".to_string(),
            ));
        }
        if self.round_cap < 1 {
            return Err(ConfigError::ValidationError(
                "round_cap must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.heal_threshold) {
            return Err(ConfigError::ValidationError(
                "heal_threshold must be within [0, 1]".to_string(),
            ));
        }
        if self.nuke_base_damage < 0 {
            return Err(ConfigError::ValidationError(
                "nuke_base_damage must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_evasion_die() -> i32 {
    20
}
fn default_round_cap() -> u32 {
    100
}
fn default_heal_threshold() -> f64 {
    0.5
}
fn default_nuke_base_damage() -> i32 {
    3
}
fn default_heal_includes_caster() -> bool {
    true
}
