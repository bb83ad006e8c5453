//! Decision policies for post-victory choices

use crate::entity::{Character, Weapon};
use crate::types::ClassName;

/// Source of the player's decisions between fights
pub trait ProgressionPolicy {
    /// Class to gain a level in, or None to skip
    fn choose_level_up(&mut self, character: &Character) -> Option<ClassName>;

    /// Whether to swap the current weapon for the offered reward
    fn accept_weapon(&mut self, current: &Weapon, offered: &Weapon) -> bool;
}

/// Greedy policy for headless runs: deepen the first class, take stronger weapons
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoPolicy;

impl ProgressionPolicy for AutoPolicy {
    fn choose_level_up(&mut self, character: &Character) -> Option<ClassName> {
        Some(character.primary_class())
    }

    fn accept_weapon(&mut self, current: &Weapon, offered: &Weapon) -> bool {
        offered.damage > current.damage
    }
}
