//! Targeting policy - Weakest-enemy selection
//!
//! The "weakest" enemy is the one with the lowest effective health pool
//! against the attacker's damage type: hp plus the matching mitigation
//! rating. Ties go to the earliest roster position, so selection is stable.

use crate::combatant::Combatant;
use crate::types::DamageType;
use thiserror::Error;

/// Targeting invoked against an empty roster; a caller invariant violation
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TargetingError {
    #[error("no enemies alive")]
    NoEnemies,
}

/// Select the weakest enemy for an attacker of the given damage type
///
/// Returns `(position in roster, arena index)` of the enemy minimizing
/// `hp + relevant rating`.
pub fn select_weakest_enemy(
    roster: &[usize],
    arena: &[Combatant],
    damage_type: DamageType,
) -> Result<(usize, usize), TargetingError> {
    roster
        .iter()
        .enumerate()
        .map(|(pos, &idx)| {
            let enemy = &arena[idx];
            (pos, idx, enemy.hp + enemy.mitigation_pool(damage_type))
        })
        // min_by_key keeps the first of equal scores, giving the stable tie-break
        .min_by_key(|&(_, _, score)| score)
        .map(|(pos, idx, _)| (pos, idx))
        .ok_or(TargetingError::NoEnemies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{Armor, Stats, Weapon};

    fn enemy(name: &str, hp: i32, armor_rating: i32, barrier_rating: i32) -> Combatant {
        let weapon = Weapon {
            name: "Claw".to_string(),
            damage: 1,
            damage_type: DamageType::Physical,
        };
        let mut c = Combatant::new(name, Stats::default(), weapon, Armor::default()).unwrap();
        c.hp = hp;
        c.armor_rating = armor_rating;
        c.barrier_rating = barrier_rating;
        c
    }

    #[test]
    fn test_empty_roster_is_an_error() {
        let arena: Vec<Combatant> = Vec::new();
        let result = select_weakest_enemy(&[], &arena, DamageType::Physical);
        assert_eq!(result.unwrap_err(), TargetingError::NoEnemies);
    }

    #[test]
    fn test_minimum_effective_pool_wins() {
        let arena = vec![
            enemy("A", 10, 5, 0), // physical score 15
            enemy("B", 8, 3, 9),  // physical score 11
            enemy("C", 12, 0, 0), // physical score 12
        ];
        let roster = vec![0, 1, 2];

        let (pos, idx) = select_weakest_enemy(&roster, &arena, DamageType::Physical).unwrap();
        assert_eq!((pos, idx), (1, 1));
    }

    #[test]
    fn test_score_uses_attacker_damage_type() {
        let arena = vec![
            enemy("A", 5, 10, 0), // physical 15, magical 5
            enemy("B", 6, 0, 0),  // physical 6, magical 6
        ];
        let roster = vec![0, 1];

        let physical = select_weakest_enemy(&roster, &arena, DamageType::Physical).unwrap();
        assert_eq!(physical.1, 1);

        let magical = select_weakest_enemy(&roster, &arena, DamageType::Magical).unwrap();
        assert_eq!(magical.1, 0);
    }

    #[test]
    fn test_tie_goes_to_earliest_roster_position() {
        let arena = vec![
            enemy("A", 7, 3, 0),
            enemy("B", 5, 5, 0),
            enemy("C", 4, 6, 0),
        ];
        // All score 10 physical; roster order decides
        let roster = vec![2, 0, 1];

        let (pos, idx) = select_weakest_enemy(&roster, &arena, DamageType::Physical).unwrap();
        assert_eq!(pos, 0);
        assert_eq!(idx, 2);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        prop_compose! {
            fn arb_pools()(hp in 1i32..100, armor in 0i32..30, barrier in 0i32..30)
                -> (i32, i32, i32) {
                (hp, armor, barrier)
            }
        }

        proptest! {
            #[test]
            fn selected_enemy_minimizes_score(pools in prop::collection::vec(arb_pools(), 1..12)) {
                let arena: Vec<Combatant> = pools
                    .iter()
                    .enumerate()
                    .map(|(i, &(hp, a, b))| enemy(&format!("E{i}"), hp, a, b))
                    .collect();
                let roster: Vec<usize> = (0..arena.len()).collect();

                for damage_type in [DamageType::Physical, DamageType::Magical] {
                    let (pos, idx) = select_weakest_enemy(&roster, &arena, damage_type).unwrap();
                    prop_assert_eq!(pos, idx);

                    let score = |c: &Combatant| c.hp + c.mitigation_pool(damage_type);
                    let winner = score(&arena[idx]);

                    // No enemy scores lower, and no earlier enemy ties
                    for (other_pos, other) in arena.iter().enumerate() {
                        prop_assert!(score(other) >= winner);
                        if other_pos < pos {
                            prop_assert!(score(other) > winner);
                        }
                    }
                }
            }
        }
    }
}
