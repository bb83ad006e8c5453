//! Dice - the random source injected into turn resolution

use rand::Rng;

/// Rolls a uniform integer in `1..=sides`
pub trait Dice {
    fn roll(&mut self, sides: i32) -> i32;
}

impl<R: Rng> Dice for R {
    fn roll(&mut self, sides: i32) -> i32 {
        self.gen_range(1..=sides)
    }
}

/// Dice that replay a fixed sequence of rolls (for deterministic tests and replays)
///
/// The sequence repeats once exhausted and every roll is clamped into `1..=sides`.
#[derive(Debug, Clone)]
pub struct LoadedDice {
    rolls: Vec<i32>,
    next: usize,
}

impl LoadedDice {
    pub fn new(rolls: impl Into<Vec<i32>>) -> Self {
        LoadedDice {
            rolls: rolls.into(),
            next: 0,
        }
    }

    /// Dice that always land on the same face
    pub fn always(value: i32) -> Self {
        Self::new(vec![value])
    }

    /// Number of rolls made so far
    pub fn rolls_made(&self) -> usize {
        self.next
    }
}

impl Dice for LoadedDice {
    fn roll(&mut self, sides: i32) -> i32 {
        if self.rolls.is_empty() {
            return sides;
        }
        let value = self.rolls[self.next % self.rolls.len()];
        self.next += 1;
        value.clamp(1, sides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_rng_rolls_stay_in_range() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let roll = rng.roll(4);
            assert!((1..=4).contains(&roll));
        }
    }

    #[test]
    fn test_loaded_dice_cycle_and_clamp() {
        let mut dice = LoadedDice::new(vec![1, 9]);
        assert_eq!(dice.roll(6), 1);
        assert_eq!(dice.roll(6), 6);
        assert_eq!(dice.roll(6), 1);
        assert_eq!(dice.rolls_made(), 3);
    }
}
