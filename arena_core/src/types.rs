//! Core enums shared across the arena

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of a fight is acting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Monster,
}

impl Side {
    /// The side that acts after this one
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Monster,
            Side::Monster => Side::Player,
        }
    }
}

/// Character classes available for (multi)classing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassName {
    Rogue,
    Warrior,
    Barbarian,
}

impl ClassName {
    /// Get all classes in menu order
    pub fn all() -> &'static [ClassName] {
        &[ClassName::Rogue, ClassName::Warrior, ClassName::Barbarian]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ClassName::Rogue => "Rogue",
            ClassName::Warrior => "Warrior",
            ClassName::Barbarian => "Barbarian",
        }
    }

    /// Base health granted when this is the first class a character takes
    pub fn base_health(&self) -> i32 {
        match self {
            ClassName::Rogue => 4,
            ClassName::Warrior => 5,
            ClassName::Barbarian => 6,
        }
    }

    /// Catalog name of the weapon a fresh character of this class starts with
    pub fn starting_weapon(&self) -> &'static str {
        match self {
            ClassName::Rogue => "Dagger",
            ClassName::Warrior => "Sword",
            ClassName::Barbarian => "Club",
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Damage type of a weapon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponType {
    Slashing,
    Piercing,
    Blunt,
}

impl WeaponType {
    pub fn name(&self) -> &'static str {
        match self {
            WeaponType::Slashing => "Slashing",
            WeaponType::Piercing => "Piercing",
            WeaponType::Blunt => "Blunt",
        }
    }
}

impl fmt::Display for WeaponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Monster identity, which selects the defender-side and breath rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonsterKind {
    Goblin,
    Skeleton,
    Slime,
    Ghost,
    Golem,
    Dragon,
}

impl MonsterKind {
    pub fn all() -> &'static [MonsterKind] {
        &[
            MonsterKind::Goblin,
            MonsterKind::Skeleton,
            MonsterKind::Slime,
            MonsterKind::Ghost,
            MonsterKind::Golem,
            MonsterKind::Dragon,
        ]
    }
}
