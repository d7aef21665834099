//! skirmish_core - Deterministic party-vs-party combat resolution
//!
//! This library provides:
//! - Combatant: stat/weapon/armor records with derived combat state
//! - Attack resolution: point-by-point mitigation with evasion rolls
//! - Special actions: area heal and area nuke capabilities
//! - Targeting: weakest-enemy selection
//! - Simulation: the turn-ordered combat loop with loop-safety abort

pub mod combat;
pub mod combatant;
pub mod config;
pub mod prelude;
pub mod simulation;
pub mod targeting;
pub mod types;

// Re-export core types for convenience
pub use combat::{AttackOutcome, AttackReport, NukeReport};
pub use combatant::{Armor, Combatant, CombatantError, Stats, Weapon};
pub use config::{ConfigError, EncounterConfig, RuleConstants};
pub use simulation::{
    simulate_combat, simulate_combat_with_rng, CombatError, CombatEvent, CombatReport, FinalState,
    Winner,
};
pub use targeting::{select_weakest_enemy, TargetingError};
pub use types::{Capabilities, DamageType, TeamId};
