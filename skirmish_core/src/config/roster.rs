//! Encounter and roster definitions loaded from TOML

use super::ConfigError;
use crate::combatant::{Armor, Combatant, Stats, Weapon};
use crate::types::Capabilities;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One combatant as written in an encounter file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatantDef {
    pub name: String,
    pub stats: Stats,
    pub weapon: Weapon,
    pub armor: Armor,
    #[serde(default)]
    pub capabilities: Capabilities,
}

impl CombatantDef {
    /// Build the validated combatant this definition describes
    pub fn into_combatant(self) -> Result<Combatant, ConfigError> {
        let capabilities = self.capabilities;
        let mut combatant = Combatant::new(self.name, self.stats, self.weapon, self.armor)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        combatant.capabilities = capabilities;
        Ok(combatant)
    }
}

/// A two-party encounter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncounterConfig {
    pub team1: Vec<CombatantDef>,
    pub team2: Vec<CombatantDef>,
}

impl EncounterConfig {
    /// Build both validated rosters
    pub fn into_teams(self) -> Result<(Vec<Combatant>, Vec<Combatant>), ConfigError> {
        let team1 = self
            .team1
            .into_iter()
            .map(CombatantDef::into_combatant)
            .collect::<Result<Vec<_>, _>>()?;
        let team2 = self
            .team2
            .into_iter()
            .map(CombatantDef::into_combatant)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((team1, team2))
    }
}

/// Load an encounter from a TOML file
pub fn load_encounter(path: &Path) -> Result<EncounterConfig, ConfigError> {
    super::load_toml(path)
}

/// Load an encounter from a TOML string
pub fn parse_encounter(content: &str) -> Result<EncounterConfig, ConfigError> {
    super::parse_toml(content)
}

/// The built-in demo encounter: Liara and Mira against two goblins
pub fn demo_encounter() -> Result<EncounterConfig, ConfigError> {
    parse_encounter(include_str!("../../config/demo_encounter.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DamageType;

    const ENCOUNTER: &str = r#"
[[team1]]
name = "Liara"

[team1.stats]
strength = 1
constitution = 2
agility = 3
cunning = 3
intellect = 0
willpower = 0

[team1.weapon]
name = "Longbow"
damage = 2
damage_type = "physical"

[team1.armor]
name = "Chainmail"
armor_mod = 2
dodge_mod = 1

[[team2]]
name = "G0BL-2"

[team2.stats]
strength = 1
constitution = 2
agility = 3
cunning = 2
intellect = 4
willpower = 1

[team2.weapon]
name = "Magic Staff"
damage = 2
damage_type = "magical"

[team2.armor]
name = "Robe of Power"
barrier_mod = 2
dodge_mod = 1

[team2.capabilities]
nuke = true
"#;

    #[test]
    fn test_parse_encounter() {
        let encounter = parse_encounter(ENCOUNTER).unwrap();
        assert_eq!(encounter.team1.len(), 1);
        assert_eq!(encounter.team2.len(), 1);

        let (team1, team2) = encounter.into_teams().unwrap();
        let liara = &team1[0];
        assert_eq!(liara.name, "Liara");
        assert_eq!(liara.hp, 10);
        assert_eq!(liara.armor_rating, 3); // strength 1 + armor_mod 2
        assert_eq!(liara.dodge_rating, 4); // agility 3 + dodge_mod 1
        assert_eq!(liara.weapon.damage_type, DamageType::Physical);
        assert!(!liara.capabilities.nuke);

        let goblin = &team2[0];
        assert_eq!(goblin.barrier_rating, 3); // willpower 1 + barrier_mod 2
        assert!(goblin.capabilities.nuke);
        assert!(!goblin.capabilities.heal);
    }

    #[test]
    fn test_demo_encounter_loads() {
        let encounter = demo_encounter().unwrap();
        assert_eq!(encounter.team1.len(), 2);
        assert_eq!(encounter.team2.len(), 2);

        let (team1, team2) = encounter.into_teams().unwrap();
        assert!(team1[1].capabilities.heal, "Mira heals");
        assert!(team2[1].capabilities.nuke, "G0BL-2 nukes");
    }

    #[test]
    fn test_absent_armor_mods_default_to_zero() {
        let source = r#"
name = "Plain"

[stats]
strength = 1
constitution = 1
agility = 0
cunning = 0
intellect = 0
willpower = 0

[weapon]
name = "Stick"
damage = 1
damage_type = "physical"

[armor]
name = "Rags"
"#;
        let def: CombatantDef = toml::from_str(source).unwrap();
        let c = def.into_combatant().unwrap();
        assert_eq!(c.armor_rating, 1); // strength only
        assert_eq!(c.barrier_rating, 0);
        assert_eq!(c.dodge_rating, 0);
    }

    #[test]
    fn test_invalid_stats_surface_as_validation_error() {
        let source = r#"
name = "Broken"

[stats]
strength = -3
constitution = 1
agility = 0
cunning = 0
intellect = 0
willpower = 0

[weapon]
name = "Stick"
damage = 1
damage_type = "physical"

[armor]
name = "Rags"
"#;
        let def: CombatantDef = toml::from_str(source).unwrap();
        let err = def.into_combatant().unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }
}
