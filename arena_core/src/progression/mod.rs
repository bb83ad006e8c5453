//! Run progression - character creation, rewards between fights and the victory streak

mod policy;

pub use policy::{AutoPolicy, ProgressionPolicy};

use crate::combat::{run_combat_with_rng, CombatReport, Dice};
use crate::config::{Catalog, ConfigError, GameConstants};
use crate::entity::{Character, Monster, Weapon};
use crate::types::{ClassName, MonsterKind};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Progression error
#[derive(Error, Debug)]
pub enum ProgressionError {
    #[error("Total class level is already at the cap of {max}")]
    LevelCapReached { max: u32 },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Roll a fresh level 1 character of the given class
pub fn create_character(
    class: ClassName,
    catalog: &Catalog,
    constants: &GameConstants,
    rng: &mut impl Rng,
) -> Result<Character, ProgressionError> {
    let range = constants.stat_roll.min..=constants.stat_roll.max;
    let strength = rng.gen_range(range.clone());
    let agility = rng.gen_range(range.clone());
    let stamina = rng.gen_range(range);

    let weapon = catalog
        .weapon(class.starting_weapon())
        .cloned()
        .ok_or_else(|| ConfigError::UnknownWeapon(class.starting_weapon().to_string()))?;

    Ok(Character::new(class, strength, agility, stamina, weapon))
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Reached the required number of consecutive victories
    Champion { victories: u32 },
    /// The character died
    Defeated { victories: u32 },
}

impl RunOutcome {
    pub fn victories(&self) -> u32 {
        match *self {
            RunOutcome::Champion { victories } | RunOutcome::Defeated { victories } => victories,
        }
    }

    pub fn is_champion(&self) -> bool {
        matches!(self, RunOutcome::Champion { .. })
    }
}

/// Rewards granted after a won fight
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryRewards {
    /// Class levelled and its new level
    pub level_up: Option<(ClassName, u32)>,
    /// Weapon given up for the reward, if the swap was taken
    pub replaced_weapon: Option<Weapon>,
}

/// Short record of one fight in a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightRecord {
    pub monster: MonsterKind,
    pub won: bool,
    pub turns: usize,
}

/// Result of a fully played run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub outcome: RunOutcome,
    pub fights: Vec<FightRecord>,
}

impl RunSummary {
    /// Monster that ended the run, if it ended in defeat
    pub fn killed_by(&self) -> Option<MonsterKind> {
        if self.outcome.is_champion() {
            return None;
        }
        self.fights.last().filter(|f| !f.won).map(|f| f.monster)
    }
}

/// One character's sequence of fights
#[derive(Debug, Clone)]
pub struct Run {
    character: Character,
    victories: u32,
    constants: GameConstants,
}

impl Run {
    pub fn new(character: Character, constants: GameConstants) -> Self {
        Run {
            character,
            victories: 0,
            constants,
        }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Mutable access for driving an `Encounter` step by step
    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    pub fn victories(&self) -> u32 {
        self.victories
    }

    pub fn constants(&self) -> &GameConstants {
        &self.constants
    }

    pub fn is_champion(&self) -> bool {
        self.victories >= self.constants.victories_to_win
    }

    /// Final outcome once the run is over
    pub fn outcome(&self) -> Option<RunOutcome> {
        if self.is_champion() {
            Some(RunOutcome::Champion {
                victories: self.victories,
            })
        } else if self.character.attributes.health <= 0 {
            Some(RunOutcome::Defeated {
                victories: self.victories,
            })
        } else {
            None
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Whether the character can still gain a class level
    pub fn can_level_up(&self) -> bool {
        self.character.total_level() < self.constants.max_total_level
    }

    /// Fight a monster to the end, recording the victory if won
    pub fn fight(&mut self, monster: &mut Monster, dice: &mut impl Dice) -> CombatReport {
        let report = run_combat_with_rng(&mut self.character, monster, dice);
        if report.player_won {
            self.record_victory();
        }
        report
    }

    /// Count a won fight and restore the character to full health
    pub fn record_victory(&mut self) {
        self.victories += 1;
        self.character.restore_health();
        info!("victory {} of {}", self.victories, self.constants.victories_to_win);
    }

    /// Add one level in a class, appending it if new. Returns the new level.
    pub fn level_up(&mut self, class: ClassName) -> Result<u32, ProgressionError> {
        if !self.can_level_up() {
            return Err(ProgressionError::LevelCapReached {
                max: self.constants.max_total_level,
            });
        }
        let level = self.character.classes.increment(class);
        info!("{} raised to level {}", class, level);
        Ok(level)
    }

    /// Replace the character's weapon, returning the old one
    pub fn equip(&mut self, weapon: Weapon) -> Weapon {
        info!("equipped {}", weapon.name);
        std::mem::replace(&mut self.character.weapon, weapon)
    }

    /// Apply the post-victory choices of a policy: one level, then the weapon offer
    pub fn claim_rewards(
        &mut self,
        reward: &Weapon,
        policy: &mut impl ProgressionPolicy,
    ) -> Result<VictoryRewards, ProgressionError> {
        let mut rewards = VictoryRewards::default();

        if self.can_level_up() {
            if let Some(class) = policy.choose_level_up(&self.character) {
                let level = self.level_up(class)?;
                rewards.level_up = Some((class, level));
            }
        }

        if policy.accept_weapon(&self.character.weapon, reward) {
            rewards.replaced_weapon = Some(self.equip(reward.clone()));
        }

        Ok(rewards)
    }
}

/// Play a whole run with a policy making every decision
pub fn play_run<R: Rng>(
    run: &mut Run,
    catalog: &Catalog,
    policy: &mut impl ProgressionPolicy,
    rng: &mut R,
) -> Result<RunSummary, ProgressionError> {
    let mut fights = Vec::new();

    loop {
        if let Some(outcome) = run.outcome() {
            info!("run finished: {:?}", outcome);
            return Ok(RunSummary { outcome, fights });
        }

        let mut monster = catalog.random_monster(rng)?;
        let report = run.fight(&mut monster, rng);
        fights.push(FightRecord {
            monster: monster.kind,
            won: report.player_won,
            turns: report.turn_count(),
        });

        if report.player_won {
            run.claim_rewards(monster.reward(), policy)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::LoadedDice;
    use crate::entity::Combatant;
    use crate::types::WeaponType;
    use rand::SeedableRng;

    fn warrior_run() -> Run {
        let character = Character::new(
            ClassName::Warrior,
            2,
            1,
            2,
            Weapon::new("Sword", 3, WeaponType::Slashing),
        );
        Run::new(character, GameConstants::default())
    }

    struct Scripted {
        level: Option<ClassName>,
        take: bool,
    }

    impl ProgressionPolicy for Scripted {
        fn choose_level_up(&mut self, _character: &Character) -> Option<ClassName> {
            self.level
        }

        fn accept_weapon(&mut self, _current: &Weapon, _offered: &Weapon) -> bool {
            self.take
        }
    }

    #[test]
    fn test_create_character_rolls_in_range() {
        let catalog = Catalog::default_catalog();
        let constants = GameConstants::default();
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);

        for _ in 0..50 {
            let character = create_character(ClassName::Barbarian, &catalog, &constants, &mut rng).unwrap();
            let attrs = &character.attributes;
            for stat in [attrs.strength, attrs.agility, attrs.stamina] {
                assert!((1..=3).contains(&stat));
            }
            assert_eq!(attrs.max_health, 6 + attrs.stamina);
            assert_eq!(character.weapon.name, "Club");
        }
    }

    #[test]
    fn test_victory_restores_health() {
        let mut run = warrior_run();
        run.character_mut().take_damage(5);
        run.record_victory();

        assert_eq!(run.victories(), 1);
        assert_eq!(run.character().health(), 7);
        assert!(run.outcome().is_none());
    }

    #[test]
    fn test_level_cap() {
        let mut run = warrior_run();
        assert_eq!(run.level_up(ClassName::Rogue).unwrap(), 1);
        assert_eq!(run.level_up(ClassName::Warrior).unwrap(), 2);
        assert!(!run.can_level_up());
        assert!(matches!(
            run.level_up(ClassName::Barbarian),
            Err(ProgressionError::LevelCapReached { max: 3 })
        ));
        assert_eq!(run.character().total_level(), 3);
    }

    #[test]
    fn test_claim_rewards() {
        let mut run = warrior_run();
        let axe = Weapon::new("Axe", 4, WeaponType::Slashing);
        let mut policy = Scripted {
            level: Some(ClassName::Barbarian),
            take: true,
        };

        let rewards = run.claim_rewards(&axe, &mut policy).unwrap();

        assert_eq!(rewards.level_up, Some((ClassName::Barbarian, 1)));
        assert_eq!(rewards.replaced_weapon.map(|w| w.name), Some("Sword".to_string()));
        assert_eq!(run.character().weapon, axe);
    }

    #[test]
    fn test_claim_rewards_skips_level_at_cap() {
        let mut run = warrior_run();
        run.level_up(ClassName::Warrior).unwrap();
        run.level_up(ClassName::Warrior).unwrap();

        let mut policy = Scripted {
            level: Some(ClassName::Rogue),
            take: false,
        };
        let rewards = run
            .claim_rewards(&Weapon::new("Club", 3, WeaponType::Blunt), &mut policy)
            .unwrap();

        assert_eq!(rewards, VictoryRewards::default());
        assert_eq!(run.character().classes.level(ClassName::Rogue), 0);
        assert_eq!(run.character().weapon.name, "Sword");
    }

    #[test]
    fn test_champion_after_required_victories() {
        let mut run = warrior_run();
        for _ in 0..5 {
            run.record_victory();
        }
        assert_eq!(run.outcome(), Some(RunOutcome::Champion { victories: 5 }));
    }

    #[test]
    fn test_fight_against_goblin() {
        let catalog = Catalog::default_catalog();
        let mut run = warrior_run();
        let mut goblin = catalog.spawn(MonsterKind::Goblin).unwrap();

        let report = run.fight(&mut goblin, &mut LoadedDice::always(2));

        assert!(report.player_won);
        assert_eq!(run.victories(), 1);
    }

    #[test]
    fn test_play_run_ends() {
        let catalog = Catalog::default_catalog();
        let mut rng = rand::rngs::StdRng::seed_from_u64(99);

        for _ in 0..20 {
            let character =
                create_character(ClassName::Rogue, &catalog, &GameConstants::default(), &mut rng).unwrap();
            let mut run = Run::new(character, GameConstants::default());
            let summary = play_run(&mut run, &catalog, &mut AutoPolicy, &mut rng).unwrap();

            let wins = summary.fights.iter().filter(|f| f.won).count() as u32;
            assert_eq!(wins, summary.outcome.victories());
            if summary.outcome.is_champion() {
                assert_eq!(wins, 5);
                assert_eq!(summary.killed_by(), None);
            } else {
                assert!(summary.killed_by().is_some());
            }
            assert!(run.character().total_level() <= 3);
        }
    }
}
