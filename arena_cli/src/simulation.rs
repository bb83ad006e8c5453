//! Headless run simulation

use arena_core::progression::{create_character, play_run, ProgressionError};
use arena_core::{AutoPolicy, Catalog, ClassName, GameConstants, MonsterKind, Run};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Aggregate results of many auto-played runs
pub struct RunSimulation {
    pub runs: u32,
    pub champions: u32,
    pub total_victories: u64,
    pub fights: u64,
    pub total_turns: u64,
    pub deaths_by: HashMap<MonsterKind, u32>,
}

impl RunSimulation {
    /// Play `runs` runs with the greedy policy
    ///
    /// With no class given, each run picks one at random.
    pub fn run(
        runs: u32,
        class: Option<ClassName>,
        catalog: &Catalog,
        constants: &GameConstants,
        rng: &mut impl Rng,
    ) -> Result<Self, ProgressionError> {
        let mut result = RunSimulation {
            runs,
            champions: 0,
            total_victories: 0,
            fights: 0,
            total_turns: 0,
            deaths_by: HashMap::new(),
        };

        for _ in 0..runs {
            let class = match class {
                Some(class) => class,
                None => *ClassName::all()
                    .choose(rng)
                    .unwrap_or(&ClassName::Warrior),
            };
            let character = create_character(class, catalog, constants, rng)?;
            let mut run = Run::new(character, constants.clone());
            let summary = play_run(&mut run, catalog, &mut AutoPolicy, rng)?;

            if summary.outcome.is_champion() {
                result.champions += 1;
            }
            result.total_victories += summary.outcome.victories() as u64;
            result.fights += summary.fights.len() as u64;
            result.total_turns += summary.fights.iter().map(|f| f.turns as u64).sum::<u64>();

            if let Some(kind) = summary.killed_by() {
                *result.deaths_by.entry(kind).or_insert(0) += 1;
            }
        }

        Ok(result)
    }

    /// Champion percentage
    pub fn win_rate(&self) -> f64 {
        if self.runs > 0 {
            self.champions as f64 / self.runs as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Mean victories per run
    pub fn avg_streak(&self) -> f64 {
        if self.runs > 0 {
            self.total_victories as f64 / self.runs as f64
        } else {
            0.0
        }
    }

    pub fn avg_turns_per_fight(&self) -> f64 {
        if self.fights > 0 {
            self.total_turns as f64 / self.fights as f64
        } else {
            0.0
        }
    }

    /// Report lines, deaths listed in catalog order
    pub fn report(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Runs: {}", self.runs),
            format!("Champions: {} ({:.1}%)", self.champions, self.win_rate()),
            format!("Average streak: {:.2}", self.avg_streak()),
            format!("Average turns per fight: {:.2}", self.avg_turns_per_fight()),
            "Deaths by monster:".to_string(),
        ];
        for kind in MonsterKind::all() {
            let count = self.deaths_by.get(kind).copied().unwrap_or(0);
            lines.push(format!("  {:?}: {}", kind, count));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_run_simulation() {
        let catalog = Catalog::default_catalog();
        let constants = GameConstants::default();
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);

        let result = RunSimulation::run(200, None, &catalog, &constants, &mut rng).unwrap();

        assert_eq!(result.runs, 200);
        assert!(result.fights >= 200);
        assert!(result.total_turns >= result.fights);
        let deaths: u32 = result.deaths_by.values().sum();
        assert_eq!(deaths + result.champions, 200);
        assert!(result.avg_streak() <= 5.0);
    }

    #[test]
    fn test_empty_simulation() {
        let catalog = Catalog::default_catalog();
        let constants = GameConstants::default();
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);

        let result = RunSimulation::run(0, Some(ClassName::Rogue), &catalog, &constants, &mut rng).unwrap();
        assert_eq!(result.win_rate(), 0.0);
        assert_eq!(result.report()[0], "Runs: 0");
    }
}
