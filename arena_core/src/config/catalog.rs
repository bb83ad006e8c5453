//! Weapon and monster catalogs

use super::{load_toml, parse_toml, ConfigError};
use crate::entity::{Monster, MonsterTemplate, Weapon};
use crate::types::{MonsterKind, WeaponType};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::error;

const DEFAULT_WEAPONS: &str = include_str!("../../config/weapons.toml");
const DEFAULT_MONSTERS: &str = include_str!("../../config/monsters.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WeaponsConfig {
    weapons: Vec<Weapon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MonstersConfig {
    monsters: Vec<MonsterTemplate>,
}

/// Validated set of weapons and monster templates
#[derive(Debug, Clone)]
pub struct Catalog {
    weapons: Vec<Weapon>,
    monsters: Vec<MonsterTemplate>,
}

impl Catalog {
    /// Build a catalog, checking names, stats and reward references
    pub fn new(weapons: Vec<Weapon>, monsters: Vec<MonsterTemplate>) -> Result<Self, ConfigError> {
        let catalog = Catalog { weapons, monsters };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from the contents of `weapons.toml` and `monsters.toml`
    pub fn parse(weapons: &str, monsters: &str) -> Result<Self, ConfigError> {
        let weapons: WeaponsConfig = parse_toml(weapons)?;
        let monsters: MonstersConfig = parse_toml(monsters)?;
        Self::new(weapons.weapons, monsters.monsters)
    }

    /// Load `weapons.toml` and `monsters.toml` from a directory
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let weapons: WeaponsConfig = load_toml(&dir.join("weapons.toml"))?;
        let monsters: MonstersConfig = load_toml(&dir.join("monsters.toml"))?;
        Self::new(weapons.weapons, monsters.monsters)
    }

    /// The catalog shipped with the crate
    pub fn default_catalog() -> Self {
        Self::parse(DEFAULT_WEAPONS, DEFAULT_MONSTERS).unwrap_or_else(|e| {
            error!("embedded catalog failed to load: {}", e);
            Self::fallback()
        })
    }

    fn fallback() -> Self {
        Catalog {
            weapons: vec![
                Weapon::new("Sword", 3, WeaponType::Slashing),
                Weapon::new("Club", 3, WeaponType::Blunt),
                Weapon::new("Dagger", 2, WeaponType::Piercing),
            ],
            monsters: vec![MonsterTemplate {
                kind: MonsterKind::Goblin,
                name: "Goblin".to_string(),
                health: 5,
                weapon_damage: 2,
                strength: 1,
                agility: 1,
                stamina: 1,
                special: String::new(),
                reward: "Dagger".to_string(),
            }],
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.weapons.is_empty() || self.monsters.is_empty() {
            return Err(ConfigError::ValidationError(
                "catalog needs at least one weapon and one monster".to_string(),
            ));
        }

        let mut names = HashSet::new();
        for weapon in &self.weapons {
            if !names.insert(weapon.name.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate weapon '{}'",
                    weapon.name
                )));
            }
            if weapon.damage < 0 {
                return Err(ConfigError::ValidationError(format!(
                    "weapon '{}' has negative damage",
                    weapon.name
                )));
            }
        }

        for monster in &self.monsters {
            let stats = [monster.health, monster.strength, monster.agility, monster.stamina];
            if stats.iter().any(|s| *s < 1) || monster.weapon_damage < 0 {
                return Err(ConfigError::ValidationError(format!(
                    "monster '{}' has stats below 1",
                    monster.name
                )));
            }
            if self.weapon(&monster.reward).is_none() {
                return Err(ConfigError::UnknownWeapon(monster.reward.clone()));
            }
        }

        Ok(())
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn monsters(&self) -> &[MonsterTemplate] {
        &self.monsters
    }

    /// Look up a weapon by name
    pub fn weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.name == name)
    }

    pub fn template(&self, kind: MonsterKind) -> Option<&MonsterTemplate> {
        self.monsters.iter().find(|m| m.kind == kind)
    }

    /// Instantiate a monster from a template, resolving its reward weapon
    pub fn spawn_template(&self, template: &MonsterTemplate) -> Result<Monster, ConfigError> {
        let reward = self
            .weapon(&template.reward)
            .ok_or_else(|| ConfigError::UnknownWeapon(template.reward.clone()))?;
        Ok(Monster::from_template(template, reward.clone()))
    }

    /// Instantiate a monster of the given kind
    pub fn spawn(&self, kind: MonsterKind) -> Result<Monster, ConfigError> {
        let template = self
            .template(kind)
            .ok_or(ConfigError::UnknownMonster(kind))?;
        self.spawn_template(template)
    }

    /// Draw a monster uniformly from the catalog
    pub fn random_monster(&self, rng: &mut impl Rng) -> Result<Monster, ConfigError> {
        let template = self.monsters.choose(rng).ok_or_else(|| {
            ConfigError::ValidationError("monster catalog is empty".to_string())
        })?;
        self.spawn_template(template)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::default_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Combatant;
    use rand::SeedableRng;

    #[test]
    fn test_default_catalog_loads_all() {
        let catalog = Catalog::parse(DEFAULT_WEAPONS, DEFAULT_MONSTERS).unwrap();
        assert_eq!(catalog.weapons().len(), 6);
        assert_eq!(catalog.monsters().len(), 6);

        for kind in MonsterKind::all() {
            assert!(catalog.template(*kind).is_some(), "Missing monster: {:?}", kind);
        }
        for name in ["Sword", "Club", "Dagger", "Axe", "Spear", "Legendary Sword"] {
            assert!(catalog.weapon(name).is_some(), "Missing weapon: {}", name);
        }
    }

    #[test]
    fn test_spawn_resolves_reward() {
        let catalog = Catalog::default_catalog();
        let slime = catalog.spawn(MonsterKind::Slime).unwrap();

        assert_eq!(slime.reward().name, "Spear");
        assert_eq!(slime.reward().weapon_type, WeaponType::Piercing);
        assert_eq!(slime.base_damage(), 4);
        assert!(!slime.special.is_empty());
    }

    #[test]
    fn test_goblin_has_no_special() {
        let goblin = Catalog::default_catalog().spawn(MonsterKind::Goblin).unwrap();
        assert!(goblin.special.is_empty());
    }

    #[test]
    fn test_rejects_unknown_reward() {
        let weapons = r#"
[[weapons]]
name = "Dagger"
damage = 2
type = "piercing"
"#;
        let monsters = r#"
[[monsters]]
kind = "goblin"
name = "Goblin"
health = 5
weapon_damage = 2
strength = 1
agility = 1
stamina = 1
reward = "Spoon"
"#;
        match Catalog::parse(weapons, monsters) {
            Err(ConfigError::UnknownWeapon(name)) => assert_eq!(name, "Spoon"),
            other => panic!("expected unknown weapon, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_zero_agility() {
        let weapons = r#"
[[weapons]]
name = "Dagger"
damage = 2
type = "piercing"
"#;
        let monsters = r#"
[[monsters]]
kind = "goblin"
name = "Goblin"
health = 5
weapon_damage = 2
strength = 1
agility = 0
stamina = 1
reward = "Dagger"
"#;
        assert!(matches!(
            Catalog::parse(weapons, monsters),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_random_monster_draws_every_kind() {
        let catalog = Catalog::default_catalog();
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let mut seen = HashSet::new();
        for _ in 0..300 {
            seen.insert(catalog.random_monster(&mut rng).unwrap().kind);
        }
        assert_eq!(seen.len(), 6);
    }
}
