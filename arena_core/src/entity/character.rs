//! Character - the player's persisting fighter

use super::{Attributes, Combatant, Weapon};
use crate::types::ClassName;
use serde::{Deserialize, Serialize};

/// Class levels in the order the classes were acquired
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassLevels(Vec<(ClassName, u32)>);

impl ClassLevels {
    /// Start with a single class at level 1
    pub fn starting(class: ClassName) -> Self {
        ClassLevels(vec![(class, 1)])
    }

    /// Level in a class (0 if never taken)
    pub fn level(&self, class: ClassName) -> u32 {
        self.0
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, lvl)| *lvl)
            .unwrap_or(0)
    }

    /// Sum of levels across all classes
    pub fn total(&self) -> u32 {
        self.0.iter().map(|(_, lvl)| lvl).sum()
    }

    /// The first class ever assigned
    pub fn first(&self) -> Option<ClassName> {
        self.0.first().map(|(c, _)| *c)
    }

    /// Add one level, appending the class if new. Returns the new level.
    pub fn increment(&mut self, class: ClassName) -> u32 {
        if let Some(entry) = self.0.iter_mut().find(|(c, _)| *c == class) {
            entry.1 += 1;
            entry.1
        } else {
            self.0.push((class, 1));
            1
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClassName, u32)> + '_ {
        self.0.iter().copied()
    }

    /// e.g. "Warrior 2, Rogue 1"
    pub fn display(&self) -> String {
        self.0
            .iter()
            .map(|(c, lvl)| format!("{} {}", c, lvl))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub attributes: Attributes,
    pub classes: ClassLevels,
    pub weapon: Weapon,
}

impl Character {
    /// Create a level 1 character; max health comes from the class and stamina
    pub fn new(class: ClassName, strength: i32, agility: i32, stamina: i32, weapon: Weapon) -> Self {
        assert!(
            strength >= 1 && agility >= 1 && stamina >= 1,
            "character attributes must be at least 1"
        );
        let max_health = class.base_health() + stamina;
        Character {
            attributes: Attributes::new(max_health, strength, agility, stamina),
            classes: ClassLevels::starting(class),
            weapon,
        }
    }

    /// The class chosen at creation
    pub fn primary_class(&self) -> ClassName {
        // ClassLevels is never empty for a character
        self.classes.first().unwrap_or(ClassName::Rogue)
    }

    pub fn total_level(&self) -> u32 {
        self.classes.total()
    }

    /// Restore health to max between fights
    pub fn restore_health(&mut self) {
        self.attributes.health = self.attributes.max_health;
    }
}

impl Combatant for Character {
    fn name(&self) -> &str {
        "Player"
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WeaponType;

    fn sword() -> Weapon {
        Weapon::new("Sword", 3, WeaponType::Slashing)
    }

    #[test]
    fn test_max_health_from_first_class() {
        let mut character = Character::new(ClassName::Rogue, 1, 2, 3, sword());
        assert_eq!(character.attributes.max_health, 7);
        assert_eq!(character.health(), 7);

        // Later classes do not change the base
        character.classes.increment(ClassName::Barbarian);
        assert_eq!(character.primary_class(), ClassName::Rogue);
        assert_eq!(character.attributes.max_health, 7);
    }

    #[test]
    fn test_base_damage() {
        let character = Character::new(ClassName::Warrior, 2, 1, 2, sword());
        assert_eq!(character.base_damage(), 5);
    }

    #[test]
    fn test_class_levels_keep_acquisition_order() {
        let mut levels = ClassLevels::starting(ClassName::Warrior);
        assert_eq!(levels.increment(ClassName::Rogue), 1);
        assert_eq!(levels.increment(ClassName::Warrior), 2);

        let order: Vec<_> = levels.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec![ClassName::Warrior, ClassName::Rogue]);
        assert_eq!(levels.total(), 3);
        assert_eq!(levels.level(ClassName::Barbarian), 0);
        assert_eq!(levels.display(), "Warrior 2, Rogue 1");
    }

    #[test]
    fn test_restore_health() {
        let mut character = Character::new(ClassName::Barbarian, 1, 1, 1, sword());
        character.take_damage(10);
        assert!(!character.is_alive());
        assert_eq!(character.display_health(), 0);

        character.restore_health();
        assert_eq!(character.health(), 7);
    }
}
