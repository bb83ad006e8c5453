//! Defender-side monster specials and Dragon breath

use super::constants::*;
use crate::entity::{Combatant, Monster};
use crate::types::{MonsterKind, WeaponType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A monster special that changed the damage of a confirmed hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DefenderEffect {
    /// Slime shrugs off slashing weapons entirely
    SlashImmune,
    /// Skeleton takes multiplied damage from blunt weapons
    BluntVulnerable { multiplier: i32 },
    /// Ghost takes extra damage from more agile attackers
    GhostSneak { amount: i32 },
    /// Golem stone skin soaks damage from stronger attackers
    StoneSkin { reduction: i32 },
}

impl fmt::Display for DefenderEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefenderEffect::SlashImmune => write!(f, "Slime ignores slashing damage!"),
            DefenderEffect::BluntVulnerable { multiplier } => write!(
                f,
                "Skeleton takes x{} damage from blunt weapons!",
                multiplier
            ),
            DefenderEffect::GhostSneak { amount } => {
                write!(f, "Ghost: +{} damage (sneak attack)", amount)
            }
            DefenderEffect::StoneSkin { reduction } => {
                write!(f, "Golem: damage reduced by {} (stone skin)", reduction)
            }
        }
    }
}

/// Apply the defending monster's special to the damage of a confirmed hit
///
/// Returns the adjusted damage and the effect that fired, if any. The Slime
/// override zeroes the whole total, class bonuses included.
pub fn apply_defender_modifier(
    attacker: &impl Combatant,
    defender: &Monster,
    damage: i32,
) -> (i32, Option<DefenderEffect>) {
    match defender.kind {
        MonsterKind::Slime if attacker.weapon().weapon_type == WeaponType::Slashing => {
            (0, Some(DefenderEffect::SlashImmune))
        }
        MonsterKind::Skeleton if attacker.weapon().weapon_type == WeaponType::Blunt => (
            damage * SKELETON_BLUNT_MULTIPLIER,
            Some(DefenderEffect::BluntVulnerable {
                multiplier: SKELETON_BLUNT_MULTIPLIER,
            }),
        ),
        MonsterKind::Ghost if attacker.agility() > defender.agility() => (
            damage + GHOST_SNEAK_BONUS,
            Some(DefenderEffect::GhostSneak {
                amount: GHOST_SNEAK_BONUS,
            }),
        ),
        MonsterKind::Golem if attacker.strength() > defender.strength() => {
            let reduction = defender.attributes.stamina;
            (
                (damage - reduction).max(0),
                Some(DefenderEffect::StoneSkin { reduction }),
            )
        }
        _ => (damage, None),
    }
}

/// Breath damage a monster deals on top of its attack this turn, if any
pub fn breath_damage(attacker: &Monster, turn: u32) -> Option<i32> {
    if attacker.kind == MonsterKind::Dragon && turn != 0 && turn % BREATH_INTERVAL == 0 {
        Some(BREATH_DAMAGE)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Character, MonsterTemplate, Weapon};
    use crate::types::ClassName;

    fn monster(kind: MonsterKind, strength: i32, agility: i32, stamina: i32) -> Monster {
        let template = MonsterTemplate {
            kind,
            name: format!("{:?}", kind),
            health: 10,
            weapon_damage: 1,
            strength,
            agility,
            stamina,
            special: String::new(),
            reward: "Dagger".to_string(),
        };
        Monster::from_template(&template, Weapon::new("Dagger", 2, WeaponType::Piercing))
    }

    fn attacker(weapon_type: WeaponType, strength: i32, agility: i32) -> Character {
        Character::new(
            ClassName::Warrior,
            strength,
            agility,
            1,
            Weapon::new("Test", 3, weapon_type),
        )
    }

    #[test]
    fn test_slime_zeroes_slashing() {
        let slime = monster(MonsterKind::Slime, 3, 1, 2);
        let (damage, effect) = apply_defender_modifier(&attacker(WeaponType::Slashing, 3, 1), &slime, 12);
        assert_eq!(damage, 0);
        assert_eq!(effect, Some(DefenderEffect::SlashImmune));

        let (damage, effect) = apply_defender_modifier(&attacker(WeaponType::Piercing, 3, 1), &slime, 12);
        assert_eq!(damage, 12);
        assert_eq!(effect, None);
    }

    #[test]
    fn test_skeleton_doubles_blunt() {
        let skeleton = monster(MonsterKind::Skeleton, 2, 2, 1);
        let (damage, _) = apply_defender_modifier(&attacker(WeaponType::Blunt, 1, 1), &skeleton, 7);
        assert_eq!(damage, 14);

        let (damage, _) = apply_defender_modifier(&attacker(WeaponType::Slashing, 1, 1), &skeleton, 7);
        assert_eq!(damage, 7);
    }

    #[test]
    fn test_ghost_punished_by_agility() {
        let ghost = monster(MonsterKind::Ghost, 3, 1, 3);
        let (damage, effect) = apply_defender_modifier(&attacker(WeaponType::Piercing, 1, 2), &ghost, 4);
        assert_eq!(damage, 5);
        assert_eq!(effect, Some(DefenderEffect::GhostSneak { amount: 1 }));

        let (damage, _) = apply_defender_modifier(&attacker(WeaponType::Piercing, 1, 1), &ghost, 4);
        assert_eq!(damage, 4);
    }

    #[test]
    fn test_golem_stone_skin_floors_at_zero() {
        let golem = monster(MonsterKind::Golem, 1, 3, 5);
        let (damage, effect) = apply_defender_modifier(&attacker(WeaponType::Blunt, 2, 1), &golem, 3);
        assert_eq!(damage, 0);
        assert_eq!(effect, Some(DefenderEffect::StoneSkin { reduction: 5 }));

        let (damage, _) = apply_defender_modifier(&attacker(WeaponType::Blunt, 2, 1), &golem, 9);
        assert_eq!(damage, 4);

        // Equal strength does not trigger
        let (damage, effect) = apply_defender_modifier(&attacker(WeaponType::Blunt, 1, 1), &golem, 9);
        assert_eq!(damage, 9);
        assert_eq!(effect, None);
    }

    #[test]
    fn test_breath_every_third_turn() {
        let dragon = monster(MonsterKind::Dragon, 4, 3, 3);
        let turns: Vec<u32> = (0..10).filter(|t| breath_damage(&dragon, *t).is_some()).collect();
        assert_eq!(turns, vec![3, 6, 9]);
        assert_eq!(breath_damage(&dragon, 6), Some(3));

        let goblin = monster(MonsterKind::Goblin, 1, 1, 1);
        assert_eq!(breath_damage(&goblin, 3), None);
    }

    #[test]
    fn test_effect_display() {
        assert_eq!(
            DefenderEffect::StoneSkin { reduction: 2 }.to_string(),
            "Golem: damage reduced by 2 (stone skin)"
        );
    }
}
