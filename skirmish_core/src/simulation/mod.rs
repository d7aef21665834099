//! Combat simulation - Turn order, rounds, and termination
//!
//! Combatants from both teams live in one arena vector; each roster is an
//! ordered list of live arena indices. Death removes an index from its
//! roster, never an element from the arena, so the turn order stays valid
//! and every participant survives into the final report.
//!
//! A single turn order is drawn once per combat by shuffling all arena
//! indices; combatants who die mid-combat are skipped when their turn
//! comes because they no longer appear on either roster.

mod event;

pub use event::CombatEvent;

use crate::combat::{
    ally_needs_healing, area_heal, area_nuke, resolve_attack_with_rng, AttackOutcome,
};
use crate::combatant::Combatant;
use crate::config::RuleConstants;
use crate::targeting::{select_weakest_enemy, TargetingError};
use crate::types::TeamId;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a combat ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Team1,
    Team2,
    /// Round cap reached with both teams standing; a designed safety
    /// valve, not a bug signal
    Aborted,
}

/// Simulation setup or invariant failure
#[derive(Error, Debug)]
pub enum CombatError {
    #[error("{0} has no combatants")]
    EmptyTeam(TeamId),
    #[error(transparent)]
    Targeting(#[from] TargetingError),
}

/// Terminal state of one participant, kept for every original member of
/// both teams, dead or alive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalState {
    pub name: String,
    pub hp: i32,
    pub armor_rating: i32,
    pub barrier_rating: i32,
}

impl From<&Combatant> for FinalState {
    fn from(c: &Combatant) -> Self {
        FinalState {
            name: c.name.clone(),
            hp: c.hp,
            armor_rating: c.armor_rating,
            barrier_rating: c.barrier_rating,
        }
    }
}

/// Complete record of one resolved combat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatReport {
    pub winner: Winner,
    /// Rounds counted when combat ended
    pub rounds: u32,
    /// All original participants in arena order (team 1 first)
    pub final_states: Vec<FinalState>,
    pub events: Vec<CombatEvent>,
}

/// Run a combat to completion using the thread-local RNG
pub fn simulate_combat(
    team1: Vec<Combatant>,
    team2: Vec<Combatant>,
    rules: &RuleConstants,
) -> Result<CombatReport, CombatError> {
    let mut rng = rand::thread_rng();
    simulate_combat_with_rng(team1, team2, rules, &mut rng)
}

/// Run a combat to completion with a provided RNG (for deterministic
/// testing)
///
/// Per round, every living combatant in turn-order sequence takes one
/// action, first match wins: area heal if it can heal and a living ally
/// has fallen below the heal threshold; area nuke if it can nuke; else a
/// single attack on the weakest enemy. Combat ends when a roster empties
/// or the round counter reaches the cap.
pub fn simulate_combat_with_rng(
    team1: Vec<Combatant>,
    team2: Vec<Combatant>,
    rules: &RuleConstants,
    rng: &mut impl Rng,
) -> Result<CombatReport, CombatError> {
    if team1.is_empty() {
        return Err(CombatError::EmptyTeam(TeamId::Team1));
    }
    if team2.is_empty() {
        return Err(CombatError::EmptyTeam(TeamId::Team2));
    }

    let split = team1.len();
    let mut arena = team1;
    arena.extend(team2);

    let mut roster1: Vec<usize> = (0..split).collect();
    let mut roster2: Vec<usize> = (split..arena.len()).collect();

    // Drawn once per combat, never re-shuffled
    let mut turn_order: Vec<usize> = (0..arena.len()).collect();
    turn_order.shuffle(rng);

    let mut events = Vec::new();
    let mut rounds: u32 = 0;
    let mut winner: Option<Winner> = None;

    'combat: while !roster1.is_empty() && !roster2.is_empty() {
        rounds += 1;
        if rounds >= rules.round_cap {
            winner = Some(Winner::Aborted);
            break;
        }
        events.push(CombatEvent::RoundStarted { round: rounds });

        for &idx in &turn_order {
            if roster1.is_empty() || roster2.is_empty() {
                break 'combat;
            }

            // Dead combatants sit on neither roster and are skipped
            let side = if roster1.contains(&idx) {
                TeamId::Team1
            } else if roster2.contains(&idx) {
                TeamId::Team2
            } else {
                continue;
            };
            let (allies, enemies) = match side {
                TeamId::Team1 => (&mut roster1, &mut roster2),
                TeamId::Team2 => (&mut roster2, &mut roster1),
            };

            let capabilities = arena[idx].capabilities;

            if capabilities.heal && ally_needs_healing(&arena, idx, allies, rules) {
                area_heal(&mut arena, idx, allies, rules);
                events.push(CombatEvent::Healed {
                    caster: arena[idx].name.clone(),
                    team: side,
                });
                continue;
            }

            if capabilities.nuke {
                let living: Vec<usize> = enemies
                    .iter()
                    .copied()
                    .filter(|&e| arena[e].is_alive())
                    .collect();
                let report = area_nuke(&mut arena, idx, &living, rules);
                enemies.retain(|i| !report.killed.contains(i));
                events.push(CombatEvent::Nuked {
                    caster: arena[idx].name.clone(),
                    report,
                });
                continue;
            }

            let damage_type = arena[idx].weapon.damage_type;
            let (pos, target_idx) = select_weakest_enemy(enemies, &arena, damage_type)?;
            let (attacker, target) = pair_mut(&mut arena, idx, target_idx);
            let report = resolve_attack_with_rng(attacker, target, rules, rng);
            let killed = report.outcome == AttackOutcome::Killed;
            events.push(CombatEvent::Attacked { report });
            if killed {
                enemies.remove(pos);
            }
        }
    }

    let winner = winner.unwrap_or(if roster1.is_empty() {
        Winner::Team2
    } else {
        Winner::Team1
    });
    events.push(CombatEvent::Finished { winner, rounds });

    Ok(CombatReport {
        winner,
        rounds,
        final_states: arena.iter().map(FinalState::from).collect(),
        events,
    })
}

/// Disjoint mutable borrows of two arena slots
fn pair_mut(arena: &mut [Combatant], a: usize, b: usize) -> (&mut Combatant, &mut Combatant) {
    debug_assert_ne!(a, b, "attacker and target share an arena slot");
    if a < b {
        let (left, right) = arena.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = arena.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
