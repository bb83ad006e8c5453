//! Entity model - attributes and weapons shared by both sides of a fight

mod character;
mod monster;

pub use character::{Character, ClassLevels};
pub use monster::{Monster, MonsterTemplate};

use crate::types::WeaponType;
use serde::{Deserialize, Serialize};

/// Immutable weapon record from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage: i32,
    #[serde(rename = "type")]
    pub weapon_type: WeaponType,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: i32, weapon_type: WeaponType) -> Self {
        Weapon {
            name: name.into(),
            damage,
            weapon_type,
        }
    }
}

/// Health and the three core attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// Current health, may drop below zero during a fight
    pub health: i32,
    pub max_health: i32,
    pub strength: i32,
    pub agility: i32,
    pub stamina: i32,
}

impl Attributes {
    /// Create attributes at full health
    pub fn new(max_health: i32, strength: i32, agility: i32, stamina: i32) -> Self {
        Attributes {
            health: max_health,
            max_health,
            strength,
            agility,
            stamina,
        }
    }
}

/// Capabilities every fighter exposes to the combat engine
pub trait Combatant {
    /// Display name
    fn name(&self) -> &str;

    fn attributes(&self) -> &Attributes;

    fn attributes_mut(&mut self) -> &mut Attributes;

    /// The weapon carried (its type drives defender-side rules)
    fn weapon(&self) -> &Weapon;

    /// Weapon damage contributing to base damage
    fn weapon_damage(&self) -> i32 {
        self.weapon().damage
    }

    /// Weapon damage plus strength, before any modifier
    fn base_damage(&self) -> i32 {
        self.weapon_damage() + self.attributes().strength
    }

    fn health(&self) -> i32 {
        self.attributes().health
    }

    fn agility(&self) -> i32 {
        self.attributes().agility
    }

    fn strength(&self) -> i32 {
        self.attributes().strength
    }

    fn is_alive(&self) -> bool {
        self.attributes().health > 0
    }

    /// Subtract damage from health without flooring
    fn take_damage(&mut self, amount: i32) {
        self.attributes_mut().health -= amount;
    }

    /// Health clamped at zero, for display
    fn display_health(&self) -> i32 {
        self.attributes().health.max(0)
    }
}
