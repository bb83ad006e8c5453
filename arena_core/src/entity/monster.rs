//! Monster - a fresh opponent spawned from a catalog template

use super::{Attributes, Combatant, Weapon};
use crate::types::MonsterKind;
use serde::{Deserialize, Serialize};

/// Monster definition as stored in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterTemplate {
    pub kind: MonsterKind,
    pub name: String,
    pub health: i32,
    pub weapon_damage: i32,
    pub strength: i32,
    pub agility: i32,
    pub stamina: i32,
    /// Flavor text describing the monster's special rule
    #[serde(default)]
    pub special: String,
    /// Catalog name of the weapon dropped on defeat
    pub reward: String,
}

/// A monster instance that lives for a single fight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    pub kind: MonsterKind,
    pub name: String,
    pub attributes: Attributes,
    /// Weapon damage used for this monster's own attacks
    pub weapon_damage: i32,
    pub special: String,
    /// Reward weapon, also the weapon the monster carries
    pub weapon: Weapon,
}

impl Monster {
    /// Spawn a monster at full health carrying its resolved reward weapon
    pub fn from_template(template: &MonsterTemplate, reward: Weapon) -> Self {
        Monster {
            kind: template.kind,
            name: template.name.clone(),
            attributes: Attributes::new(
                template.health,
                template.strength,
                template.agility,
                template.stamina,
            ),
            weapon_damage: template.weapon_damage,
            special: template.special.clone(),
            weapon: reward,
        }
    }

    /// The weapon handed to the player on victory
    pub fn reward(&self) -> &Weapon {
        &self.weapon
    }
}

impl Combatant for Monster {
    fn name(&self) -> &str {
        &self.name
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    fn weapon_damage(&self) -> i32 {
        self.weapon_damage
    }
}
