//! Structured outcomes of attack and ability resolution

use crate::types::DamageType;
use serde::{Deserialize, Serialize};

/// Terminal outcome of a single attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackOutcome {
    /// Damage was applied and the target survived
    Hit,
    /// The evasion roll landed under the target's dodge rating; no state change
    Dodged,
    /// The target's hp reached 0 during this attack
    Killed,
}

/// Breakdown of one resolved attack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackReport {
    pub attacker: String,
    pub target: String,
    pub outcome: AttackOutcome,
    pub damage_type: DamageType,

    /// The evasion roll that was drawn
    pub roll: i32,
    /// Total damage before mitigation
    pub raw_damage: i32,
    /// Points absorbed by the target's armor rating
    pub absorbed_by_armor: i32,
    /// Points absorbed by the target's barrier rating
    pub absorbed_by_barrier: i32,
    /// Points that reached the health pool
    pub hp_damage: i32,

    pub hp_before: i32,
    pub hp_after: i32,
}

impl AttackReport {
    /// Total points soaked by mitigation pools
    pub fn total_absorbed(&self) -> i32 {
        self.absorbed_by_armor + self.absorbed_by_barrier
    }

    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        match self.outcome {
            AttackOutcome::Dodged => {
                format!("{} dodged {}'s attack", self.target, self.attacker)
            }
            AttackOutcome::Hit => format!(
                "{} hit {} for {} ({} absorbed, {} to hp)",
                self.attacker,
                self.target,
                self.raw_damage,
                self.total_absorbed(),
                self.hp_damage,
            ),
            AttackOutcome::Killed => format!(
                "{} slew {} ({} damage, {} absorbed)",
                self.attacker,
                self.target,
                self.raw_damage,
                self.total_absorbed(),
            ),
        }
    }
}

/// Damage breakdown for one target of an area nuke
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NukeHit {
    pub target: String,
    /// Points absorbed by the target's barrier rating
    pub absorbed_by_barrier: i32,
    /// Points that reached the health pool
    pub hp_damage: i32,
    pub killed: bool,
}

/// Outcome of an area nuke against a roster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NukeReport {
    /// Per-target breakdown, in roster order
    pub hits: Vec<NukeHit>,
    /// Arena indices of targets whose hp reached 0 during this action
    pub killed: Vec<usize>,
}

impl NukeReport {
    /// Total points that reached health pools across all targets
    pub fn total_hp_damage(&self) -> i32 {
        self.hits.iter().map(|h| h.hp_damage).sum()
    }
}
