//! Core types shared across the combat resolver

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two damage schools; each is absorbed by its matching mitigation pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    /// Absorbed by armor rating, scales with strength
    Physical,
    /// Absorbed by barrier rating, scales with intellect
    Magical,
}

impl DamageType {
    /// Display name for logs and reports
    pub fn name(&self) -> &'static str {
        match self {
            DamageType::Physical => "physical",
            DamageType::Magical => "magical",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Optional abilities a combatant can carry on top of its basic attack
///
/// Checked at decision time by the combat loop; a combatant may hold zero,
/// one, or both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Can cast an area heal on its own roster
    #[serde(default)]
    pub heal: bool,
    /// Can cast an area nuke against the enemy roster
    #[serde(default)]
    pub nuke: bool,
}

impl Capabilities {
    /// No special abilities
    pub fn none() -> Self {
        Capabilities::default()
    }
}

/// Which side of the encounter a roster belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamId {
    Team1,
    Team2,
}

impl TeamId {
    /// The opposing side
    pub fn opponent(&self) -> TeamId {
        match self {
            TeamId::Team1 => TeamId::Team2,
            TeamId::Team2 => TeamId::Team1,
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamId::Team1 => f.write_str("team 1"),
            TeamId::Team2 => f.write_str("team 2"),
        }
    }
}
