//! Prelude module for convenient imports
//!
//! ```rust
//! use arena_core::prelude::*;
//! ```

// Core types
pub use crate::entity::{Attributes, Character, ClassLevels, Combatant, Monster, Weapon};
pub use crate::types::{ClassName, MonsterKind, Side, WeaponType};

// Combat
pub use crate::combat::{CombatReport, Dice, Encounter, LoadedDice, Strike, TurnResult};

// Damage
pub use crate::damage::{BonusReason, DamageBreakdown, DefenderEffect};

// Progression
pub use crate::progression::{AutoPolicy, ProgressionPolicy, Run, RunOutcome};

// Config
pub use crate::config::{Catalog, GameConstants};
