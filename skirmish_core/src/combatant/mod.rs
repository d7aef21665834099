//! Combatant - The entity model: stats, gear, and derived combat state
//!
//! Stats, weapon, and armor are assigned once at construction and never
//! replaced. The derived counters (hp and the mitigation pools) are the
//! only mutable combat state; `rest()` restores them to their construction
//! formulas.

use crate::types::{Capabilities, DamageType};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hp per point of constitution
pub const HP_PER_CONSTITUTION: i32 = 5;

/// Construction error for malformed combatant input
#[derive(Error, Debug)]
pub enum CombatantError {
    #[error("invalid stats for {name}: {reason}")]
    InvalidStats { name: String, reason: String },
}

/// The six base attributes, immutable once assigned to a combatant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub strength: i32,
    pub constitution: i32,
    pub agility: i32,
    pub cunning: i32,
    pub intellect: i32,
    pub willpower: i32,
}

impl Stats {
    fn first_negative(&self) -> Option<&'static str> {
        [
            ("strength", self.strength),
            ("constitution", self.constitution),
            ("agility", self.agility),
            ("cunning", self.cunning),
            ("intellect", self.intellect),
            ("willpower", self.willpower),
        ]
        .into_iter()
        .find(|(_, v)| *v < 0)
        .map(|(name, _)| name)
    }
}

/// A weapon: flat base damage of a single damage type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    /// Display only
    pub name: String,
    pub damage: i32,
    pub damage_type: DamageType,
}

/// Armor: optional flat modifiers to the mitigation pools and dodge
///
/// An absent modifier contributes 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    /// Display only
    pub name: String,
    #[serde(default)]
    pub armor_mod: i32,
    #[serde(default)]
    pub barrier_mod: i32,
    #[serde(default)]
    pub dodge_mod: i32,
}

/// A party member: identity and gear plus mutable combat state
///
/// The derived counters never increase during combat except via `rest()`.
/// A combatant with `hp <= 0` is dead; dead combatants leave their roster
/// but the value itself survives for end-of-combat reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub stats: Stats,
    pub weapon: Weapon,
    pub armor: Armor,
    #[serde(default)]
    pub capabilities: Capabilities,

    /// Current health pool
    pub hp: i32,
    /// Physical-mitigation pool
    pub armor_rating: i32,
    /// Magical-mitigation pool
    pub barrier_rating: i32,
    /// Evasion threshold; never depleted, never reset
    pub dodge_rating: i32,
}

impl Combatant {
    /// Build a combatant and compute its derived combat state
    ///
    /// Rejects negative stats, armor modifiers, or weapon damage. The type
    /// system already rules out non-numeric input, so the defensive check
    /// is a range check.
    pub fn new(
        name: impl Into<String>,
        stats: Stats,
        weapon: Weapon,
        armor: Armor,
    ) -> Result<Self, CombatantError> {
        let name = name.into();

        if let Some(stat) = stats.first_negative() {
            return Err(CombatantError::InvalidStats {
                name,
                reason: format!("{stat} is negative"),
            });
        }
        if weapon.damage < 0 {
            return Err(CombatantError::InvalidStats {
                name,
                reason: "weapon damage is negative".to_string(),
            });
        }
        if armor.armor_mod < 0 || armor.barrier_mod < 0 || armor.dodge_mod < 0 {
            return Err(CombatantError::InvalidStats {
                name,
                reason: "armor modifier is negative".to_string(),
            });
        }

        let mut combatant = Combatant {
            name,
            stats,
            weapon,
            armor,
            capabilities: Capabilities::none(),
            hp: 0,
            armor_rating: 0,
            barrier_rating: 0,
            dodge_rating: 0,
        };
        combatant.rest();
        combatant.dodge_rating = stats.agility + combatant.armor.dodge_mod;
        Ok(combatant)
    }

    /// Grant the area-heal capability
    pub fn with_heal(mut self) -> Self {
        self.capabilities.heal = true;
        self
    }

    /// Grant the area-nuke capability
    pub fn with_nuke(mut self) -> Self {
        self.capabilities.nuke = true;
        self
    }

    /// Maximum health pool: `constitution * 5`, floored at 1
    ///
    /// A combatant can never start with 0 hp.
    pub fn max_hp(&self) -> i32 {
        let hp = self.stats.constitution * HP_PER_CONSTITUTION;
        if hp == 0 {
            1
        } else {
            hp
        }
    }

    /// Restore hp and the mitigation pools to their construction formulas
    ///
    /// Dodge rating is untouched; it is never depleted. Idempotent.
    pub fn rest(&mut self) {
        self.hp = self.max_hp();
        self.armor_rating = self.stats.strength + self.armor.armor_mod;
        self.barrier_rating = self.stats.willpower + self.armor.barrier_mod;
    }

    /// Whether this combatant can still act
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// The mitigation pool matching an incoming damage type
    pub fn mitigation_pool(&self, damage_type: DamageType) -> i32 {
        match damage_type {
            DamageType::Physical => self.armor_rating,
            DamageType::Magical => self.barrier_rating,
        }
    }

    /// Attack damage dealt by this combatant's weapon
    ///
    /// Weapon base damage plus strength for physical weapons, intellect for
    /// magical ones.
    pub fn attack_damage(&self) -> i32 {
        let attribute = match self.weapon.damage_type {
            DamageType::Physical => self.stats.strength,
            DamageType::Magical => self.stats.intellect,
        };
        self.weapon.damage + attribute
    }
}
