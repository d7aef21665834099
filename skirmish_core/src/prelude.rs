//! Prelude module for convenient imports
//!
//! ```rust
//! use skirmish_core::prelude::*;
//! ```

// Entity model
pub use crate::combatant::{Armor, Combatant, CombatantError, Stats, Weapon};
pub use crate::types::{Capabilities, DamageType, TeamId};

// Combat resolution
pub use crate::combat::{
    area_heal, area_nuke, resolve_attack, resolve_attack_with_rng, AttackOutcome, AttackReport,
    NukeReport,
};

// Targeting
pub use crate::targeting::{select_weakest_enemy, TargetingError};

// Simulation
pub use crate::simulation::{
    simulate_combat, simulate_combat_with_rng, CombatError, CombatEvent, CombatReport, FinalState,
    Winner,
};

// Config
pub use crate::config::{parse_encounter, ConfigError, EncounterConfig, RuleConstants};
