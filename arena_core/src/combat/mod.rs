//! Combat resolution - turn order, hit checks and the fight loop

mod dice;
mod encounter;
mod resolution;
mod result;

pub use dice::{Dice, LoadedDice};
pub use encounter::{run_combat, run_combat_with_rng, Encounter};
pub use resolution::{initiative, resolve_turn, roll_to_hit};
pub use result::{CombatReport, HitRoll, Strike, TurnResult};
