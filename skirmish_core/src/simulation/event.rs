//! Combat event log
//!
//! The observable side effects of a combat (dodge callouts, heals, kills)
//! are recorded as structured events in the report; rendering them is the
//! caller's business.

use super::Winner;
use crate::combat::{AttackReport, NukeReport};
use crate::types::TeamId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One observable step of a combat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CombatEvent {
    RoundStarted {
        round: u32,
    },
    /// A single-target attack, whatever its outcome
    Attacked {
        report: AttackReport,
    },
    /// An area heal cast on the caster's roster
    Healed {
        caster: String,
        team: TeamId,
    },
    /// An area nuke against the enemy roster
    Nuked {
        caster: String,
        report: NukeReport,
    },
    Finished {
        winner: Winner,
        rounds: u32,
    },
}

impl fmt::Display for CombatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatEvent::RoundStarted { round } => write!(f, "--- round {round} ---"),
            CombatEvent::Attacked { report } => f.write_str(&report.summary()),
            CombatEvent::Healed { caster, team } => {
                write!(f, "{caster} heals {team}")
            }
            CombatEvent::Nuked { caster, report } => {
                write!(
                    f,
                    "{caster} nukes {} enemies ({} hp damage, {} killed)",
                    report.hits.len(),
                    report.total_hp_damage(),
                    report.killed.len(),
                )
            }
            CombatEvent::Finished { winner, rounds } => match winner {
                Winner::Team1 => write!(f, "team 1 wins after {rounds} rounds"),
                Winner::Team2 => write!(f, "team 2 wins after {rounds} rounds"),
                Winner::Aborted => {
                    write!(f, "combat not resolving, aborted after {rounds} rounds")
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        let started = CombatEvent::RoundStarted { round: 3 };
        assert_eq!(started.to_string(), "--- round 3 ---");

        let healed = CombatEvent::Healed {
            caster: "Mira".to_string(),
            team: TeamId::Team1,
        };
        assert_eq!(healed.to_string(), "Mira heals team 1");

        let finished = CombatEvent::Finished {
            winner: Winner::Aborted,
            rounds: 100,
        };
        assert!(finished.to_string().contains("not resolving"));
    }
}
