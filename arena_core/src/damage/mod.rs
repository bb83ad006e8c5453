//! Damage modifiers - class bonuses on offense, monster specials on defense

mod attacker;
mod defender;

pub use attacker::{calculate_attack_damage, AttackContext, BonusReason, DamageBreakdown};
pub use defender::{apply_defender_modifier, breath_damage, DefenderEffect};

/// Rule constants for the damage engine
pub mod constants {
    /// Rogue bonus when out-agilitying the target
    pub const SNEAK_ATTACK_BONUS: i32 = 1;

    /// Rogue level at which poison starts
    pub const POISON_MIN_LEVEL: u32 = 3;

    /// Poison bonus is (rogue level - POISON_LEVEL_OFFSET)
    pub const POISON_LEVEL_OFFSET: u32 = 2;

    /// Warrior level granting the flat strength bonus
    pub const WARRIOR_STRENGTH_LEVEL: u32 = 3;

    pub const WARRIOR_STRENGTH_BONUS: i32 = 1;

    /// Barbarian bonus on every hit
    pub const RAGE_BONUS: i32 = 2;

    /// Ghost bonus when the attacker is more agile
    pub const GHOST_SNEAK_BONUS: i32 = 1;

    /// Skeleton multiplier against blunt weapons
    pub const SKELETON_BLUNT_MULTIPLIER: i32 = 2;

    /// Flat damage of a Dragon breath
    pub const BREATH_DAMAGE: i32 = 3;

    /// Dragon breathes on every turn divisible by this
    pub const BREATH_INTERVAL: u32 = 3;
}
