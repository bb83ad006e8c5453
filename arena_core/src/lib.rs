//! arena_core - Combat engine for a single-player arena autobattler
//!
//! This library provides:
//! - Entity model: Character and Monster sharing base attributes and base damage
//! - Damage modifiers: class bonuses on offense, monster specials on defense
//! - Turn resolution and the fight loop, with an injectable random source
//! - Run progression: levels, weapon rewards and the victory streak
//! - Weapon/monster catalogs and run constants loaded from TOML

pub mod combat;
pub mod config;
pub mod damage;
pub mod entity;
pub mod prelude;
pub mod progression;
pub mod types;

// Re-export core types for convenience
pub use combat::{run_combat, run_combat_with_rng, CombatReport, Dice, Encounter, LoadedDice, TurnResult};
pub use config::{Catalog, ConfigError, GameConstants};
pub use damage::{calculate_attack_damage, BonusReason, DamageBreakdown, DefenderEffect};
pub use entity::{Character, Combatant, Monster, Weapon};
pub use progression::{play_run, AutoPolicy, ProgressionPolicy, Run, RunOutcome};
pub use types::{ClassName, MonsterKind, Side, WeaponType};
