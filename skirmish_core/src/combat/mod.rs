//! Combat resolution - Attacks and special actions against combatants

mod abilities;
mod attack;
mod result;

pub use abilities::{ally_needs_healing, area_heal, area_nuke};
pub use attack::{resolve_attack, resolve_attack_with_rng};
pub use result::{AttackOutcome, AttackReport, NukeHit, NukeReport};
