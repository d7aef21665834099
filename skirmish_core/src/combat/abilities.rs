//! Special actions - Area heal and area nuke
//!
//! Both operate on the arena storage (`&mut [Combatant]`) addressed by
//! roster index lists, so no roster is spliced while it is being iterated.

use super::result::{NukeHit, NukeReport};
use crate::combatant::Combatant;
use crate::config::RuleConstants;

/// Rest every member of the caster's roster
///
/// Whether the caster itself is included is the `heal_includes_caster`
/// rule; the original encounter healed the whole roster, caster and all.
pub fn area_heal(
    arena: &mut [Combatant],
    caster: usize,
    roster: &[usize],
    rules: &RuleConstants,
) {
    for &idx in roster {
        if idx == caster && !rules.heal_includes_caster {
            continue;
        }
        arena[idx].rest();
    }
}

/// Whether some living roster member other than the caster has dropped
/// below the heal threshold of its own max hp
pub fn ally_needs_healing(
    arena: &[Combatant],
    caster: usize,
    roster: &[usize],
    rules: &RuleConstants,
) -> bool {
    roster.iter().any(|&idx| {
        if idx == caster {
            return false;
        }
        let ally = &arena[idx];
        ally.is_alive() && (ally.hp as f64) < ally.max_hp() as f64 * rules.heal_threshold
    })
}

/// Apply a fixed magical pool to every living target
///
/// Pool = `nuke_base_damage + caster intellect`, absorbed by barrier then
/// hp, point by point. The nuke is inherently magical: armor never applies.
/// A target already at 0 hp when reached is recorded as killed with no
/// further application. Returns exactly the arena indices whose hp reached
/// 0 during this action.
pub fn area_nuke(
    arena: &mut [Combatant],
    caster: usize,
    targets: &[usize],
    rules: &RuleConstants,
) -> NukeReport {
    let pool = rules.nuke_base_damage + arena[caster].stats.intellect;
    let mut report = NukeReport::default();

    for &idx in targets {
        let target = &mut arena[idx];
        let mut hit = NukeHit {
            target: target.name.clone(),
            absorbed_by_barrier: 0,
            hp_damage: 0,
            killed: false,
        };

        let mut damage = pool;
        while damage > 0 {
            if target.hp <= 0 {
                break;
            }
            if target.barrier_rating > 0 {
                target.barrier_rating -= 1;
                hit.absorbed_by_barrier += 1;
            } else {
                target.hp -= 1;
                hit.hp_damage += 1;
            }
            damage -= 1;
        }

        if target.hp <= 0 {
            hit.killed = true;
            report.killed.push(idx);
        }
        report.hits.push(hit);
    }

    report
}
