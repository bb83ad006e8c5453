//! Attacker-side class bonuses

use super::constants::*;
use crate::entity::{Character, Combatant};
use crate::types::ClassName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Turn information an attack is computed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackContext {
    /// Global turn number, 1-based and shared by both sides
    pub turn: u32,
}

impl AttackContext {
    pub fn new(turn: u32) -> Self {
        AttackContext { turn }
    }

    /// Only the opening attack of a fight counts as the first turn
    pub fn is_first_turn(&self) -> bool {
        self.turn == 1
    }
}

/// A single class bonus that contributed to a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BonusReason {
    SneakAttack { level: u32, amount: i32 },
    Poison { level: u32, amount: i32 },
    ActionSurge { level: u32, amount: i32 },
    WarriorStrength { level: u32, amount: i32 },
    Rage { level: u32, amount: i32 },
}

impl BonusReason {
    /// Bonus damage this reason added
    pub fn amount(&self) -> i32 {
        match *self {
            BonusReason::SneakAttack { amount, .. }
            | BonusReason::Poison { amount, .. }
            | BonusReason::ActionSurge { amount, .. }
            | BonusReason::WarriorStrength { amount, .. }
            | BonusReason::Rage { amount, .. } => amount,
        }
    }

    pub fn class(&self) -> ClassName {
        match self {
            BonusReason::SneakAttack { .. } | BonusReason::Poison { .. } => ClassName::Rogue,
            BonusReason::ActionSurge { .. } | BonusReason::WarriorStrength { .. } => {
                ClassName::Warrior
            }
            BonusReason::Rage { .. } => ClassName::Barbarian,
        }
    }
}

impl fmt::Display for BonusReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BonusReason::SneakAttack { level, amount } => {
                write!(f, "Rogue L{}: +{} damage (sneak attack)", level, amount)
            }
            BonusReason::Poison { level, amount } => {
                write!(f, "Rogue L{}: poison (+{} damage)", level, amount)
            }
            BonusReason::ActionSurge { level, amount } => {
                write!(f, "Warrior L{}: action surge (+{} damage)", level, amount)
            }
            BonusReason::WarriorStrength { level, amount } => {
                write!(f, "Warrior L{}: strength +{}", level, amount)
            }
            BonusReason::Rage { level, amount } => {
                write!(f, "Barbarian L{}: rage (+{} damage)", level, amount)
            }
        }
    }
}

/// Damage of a character hit before defender-side rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageBreakdown {
    pub total: i32,
    pub base: i32,
    pub bonus: i32,
    pub reasons: Vec<BonusReason>,
}

impl DamageBreakdown {
    /// Reasons rendered for display
    pub fn reason_strings(&self) -> Vec<String> {
        self.reasons.iter().map(|r| r.to_string()).collect()
    }
}

/// Calculate a character's hit damage including every class bonus held
///
/// Classes are evaluated in acquisition order and their bonuses summed.
pub fn calculate_attack_damage(
    attacker: &Character,
    defender: &impl Combatant,
    context: AttackContext,
) -> DamageBreakdown {
    let base = attacker.base_damage();
    let mut reasons = Vec::new();

    for (class, level) in attacker.classes.iter() {
        if level == 0 {
            continue;
        }
        match class {
            ClassName::Rogue => {
                if attacker.agility() > defender.agility() {
                    reasons.push(BonusReason::SneakAttack {
                        level,
                        amount: SNEAK_ATTACK_BONUS,
                    });
                }
                if level >= POISON_MIN_LEVEL {
                    reasons.push(BonusReason::Poison {
                        level,
                        amount: (level - POISON_LEVEL_OFFSET) as i32,
                    });
                }
            }
            ClassName::Warrior => {
                if context.is_first_turn() {
                    reasons.push(BonusReason::ActionSurge {
                        level,
                        amount: attacker.weapon.damage,
                    });
                }
                if level >= WARRIOR_STRENGTH_LEVEL {
                    reasons.push(BonusReason::WarriorStrength {
                        level,
                        amount: WARRIOR_STRENGTH_BONUS,
                    });
                }
            }
            ClassName::Barbarian => {
                reasons.push(BonusReason::Rage {
                    level,
                    amount: RAGE_BONUS,
                });
            }
        }
    }

    let bonus: i32 = reasons.iter().map(BonusReason::amount).sum();

    DamageBreakdown {
        total: base + bonus,
        base,
        bonus,
        reasons,
    }
}
