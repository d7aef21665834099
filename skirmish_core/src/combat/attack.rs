//! Attack resolution - One attack from an attacker against a target
//!
//! Damage is applied one point at a time: the mitigation pool matching the
//! damage type absorbs points while it lasts, then the health pool takes
//! the remainder. The granularity matters for correctness - death is
//! detected mid-application and stops the loop - not for performance.

use super::result::{AttackOutcome, AttackReport};
use crate::combatant::Combatant;
use crate::config::RuleConstants;
use crate::types::DamageType;
use rand::Rng;

/// Resolve one attack using the thread-local RNG
pub fn resolve_attack(
    attacker: &Combatant,
    target: &mut Combatant,
    rules: &RuleConstants,
) -> AttackReport {
    let mut rng = rand::thread_rng();
    resolve_attack_with_rng(attacker, target, rules, &mut rng)
}

/// Resolve one attack with a provided RNG (for deterministic testing)
///
/// 1. Draw an evasion roll from `[0, evasion_die)`; a roll under the
///    target's dodge rating means a dodge and no state change.
/// 2. Otherwise apply `weapon damage + matching attribute` point by point
///    through the matching mitigation pool, then hp.
/// 3. Killed takes precedence over Hit whenever hp reached 0 in the loop.
pub fn resolve_attack_with_rng(
    attacker: &Combatant,
    target: &mut Combatant,
    rules: &RuleConstants,
    rng: &mut impl Rng,
) -> AttackReport {
    let damage_type = attacker.weapon.damage_type;
    let hp_before = target.hp;

    let roll = rng.gen_range(0..rules.evasion_die);
    if roll < target.dodge_rating {
        return AttackReport {
            attacker: attacker.name.clone(),
            target: target.name.clone(),
            outcome: AttackOutcome::Dodged,
            damage_type,
            roll,
            raw_damage: 0,
            absorbed_by_armor: 0,
            absorbed_by_barrier: 0,
            hp_damage: 0,
            hp_before,
            hp_after: hp_before,
        };
    }

    let raw_damage = attacker.attack_damage();
    let mut report = AttackReport {
        attacker: attacker.name.clone(),
        target: target.name.clone(),
        outcome: AttackOutcome::Hit,
        damage_type,
        roll,
        raw_damage,
        absorbed_by_armor: 0,
        absorbed_by_barrier: 0,
        hp_damage: 0,
        hp_before,
        hp_after: hp_before,
    };

    let mut damage = raw_damage;
    while damage > 0 {
        // Already down, including mid-loop: stop over-applying
        if target.hp <= 0 {
            break;
        }

        match damage_type {
            DamageType::Physical if target.armor_rating > 0 => {
                target.armor_rating -= 1;
                report.absorbed_by_armor += 1;
            }
            DamageType::Magical if target.barrier_rating > 0 => {
                target.barrier_rating -= 1;
                report.absorbed_by_barrier += 1;
            }
            _ => {
                target.hp -= 1;
                report.hp_damage += 1;
            }
        }
        damage -= 1;
    }

    report.hp_after = target.hp;
    report.outcome = if target.hp <= 0 {
        AttackOutcome::Killed
    } else {
        AttackOutcome::Hit
    };
    report
}
