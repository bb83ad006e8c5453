//! Interactive game session

use crate::input::{InputError, Prompter};
use crate::record::BestRun;
use crate::render;
use anyhow::Result;
use arena_core::progression::create_character;
use arena_core::{Catalog, Encounter, GameConstants, Monster, Run, RunOutcome};
use crossterm::style::Stylize;
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use tracing::warn;

/// Front-end switches
#[derive(Debug, Clone, Copy, Default)]
pub struct GameOptions {
    /// Skip the pauses between combat lines
    pub fast: bool,
    pub skip_tutorial: bool,
}

pub struct Game<R, W, G> {
    prompter: Prompter<R, W>,
    rng: G,
    catalog: Catalog,
    constants: GameConstants,
    record: BestRun,
    record_path: PathBuf,
    options: GameOptions,
}

impl<R: BufRead, W: Write, G: Rng> Game<R, W, G> {
    pub fn new(
        prompter: Prompter<R, W>,
        rng: G,
        catalog: Catalog,
        constants: GameConstants,
        record_path: PathBuf,
        options: GameOptions,
    ) -> Self {
        let record = BestRun::load_or_default(&record_path);
        Game {
            prompter,
            rng,
            catalog,
            constants,
            record,
            record_path,
            options,
        }
    }

    /// Play until the player stops or the input closes
    pub fn run(&mut self) -> Result<()> {
        match self.session() {
            Err(e) if matches!(e.downcast_ref::<InputError>(), Some(InputError::Closed)) => {
                self.say("\nInput closed.")?;
                Ok(())
            }
            other => other,
        }
    }

    fn session(&mut self) -> Result<()> {
        self.say(&"=== AUTOBATTLER ===".bold().to_string())?;

        if !self.options.skip_tutorial
            && self.prompter.confirm("Would you like a tutorial? (y/n): ")?
        {
            self.say_all(render::tutorial())?;
            self.prompter.wait_for_enter("\nPress Enter to start...")?;
        }

        let banner = format!("Best run: {} wins in a row", self.record.best_run);
        self.say(&banner.yellow().to_string())?;

        loop {
            let outcome = self.play_one_run()?;
            let new_record = self.record.submit(outcome.victories());
            if new_record {
                if let Err(e) = self.record.save(&self.record_path) {
                    warn!("failed to save record to {}: {}", self.record_path.display(), e);
                }
            }

            match outcome {
                RunOutcome::Champion { .. } => {
                    self.say(&"\n=== YOU ARE THE CHAMPION! ===".green().bold().to_string())?;
                    if new_record {
                        self.say("New record!")?;
                    }
                    break;
                }
                RunOutcome::Defeated { victories } => {
                    self.say(&"\nYou were defeated...".red().to_string())?;
                    self.say(&format!("Wins in a row: {}", victories))?;
                    if new_record {
                        self.say(&format!("New record: {} wins!", victories))?;
                    }
                    if !self.prompter.confirm("\nCreate a new hero? (y/n): ")? {
                        break;
                    }
                }
            }
        }

        self.say("\nThanks for playing!")?;
        Ok(())
    }

    fn play_one_run(&mut self) -> Result<RunOutcome> {
        let class = self.prompter.choose_class()?;
        let character = create_character(class, &self.catalog, &self.constants, &mut self.rng)?;
        let mut run = Run::new(character, self.constants.clone());

        self.say_all(render::character_sheet(run.character()))?;

        loop {
            if let Some(outcome) = run.outcome() {
                return Ok(outcome);
            }

            let mut monster = self.catalog.random_monster(&mut self.rng)?;

            self.say(&format!("\n=== Fight #{} ===", run.victories() + 1))?;
            self.say_all(render::monster_sheet(&monster))?;
            self.prompter.wait_for_enter("\nPress Enter to fight...")?;

            if self.fight(&mut run, &mut monster)? {
                self.say(&"\nVictory! Health restored.".green().to_string())?;
                self.rewards(&mut run, &monster)?;
                self.say_all(render::character_sheet(run.character()))?;
            }
        }
    }

    /// Step the encounter turn by turn. Returns true on victory.
    fn fight(&mut self, run: &mut Run, monster: &mut Monster) -> Result<bool, InputError> {
        let mut encounter = Encounter::new(run.character(), monster);
        self.say_all(render::fight_banner(run.character(), monster, encounter.first()))?;
        self.pause(700);

        while !Encounter::is_over(run.character(), monster) {
            self.say_all(render::turn_header(encounter.turn() + 1, run.character(), monster))?;
            self.pause(400);

            let Some(turn) = encounter.step(run.character_mut(), monster, &mut self.rng) else {
                break;
            };
            self.say_all(render::turn_lines(&turn, monster))?;
            self.pause(800);
        }

        let won = run.character().attributes.health > 0;
        if won {
            run.record_victory();
        }
        Ok(won)
    }

    /// Level-up menu then the weapon offer
    fn rewards(&mut self, run: &mut Run, monster: &Monster) -> Result<(), InputError> {
        if run.can_level_up() {
            let class = self.prompter.choose_level_up(run.character())?;
            match run.level_up(class) {
                Ok(level) => self.say(&format!("{} is now level {}", class, level))?,
                Err(e) => self.say(&e.to_string())?,
            }
        } else {
            self.say("\nMaximum level reached.")?;
        }

        let reward = monster.reward();
        self.say(&format!(
            "\nThe monster dropped: {} ({}) (damage: {})",
            reward.name, reward.weapon_type, reward.damage
        ))?;
        self.say(&format!(
            "Your weapon: {} ({}) (damage: {})",
            run.character().weapon.name,
            run.character().weapon.weapon_type,
            run.character().weapon.damage
        ))?;
        if self.prompter.confirm("Swap weapons? (y/n): ")? {
            run.equip(reward.clone());
            self.say(&format!("You now wield: {}", reward.name))?;
        }
        Ok(())
    }

    fn say(&mut self, line: &str) -> Result<(), InputError> {
        writeln!(self.prompter.output(), "{}", line)?;
        Ok(())
    }

    fn say_all(&mut self, lines: Vec<String>) -> Result<(), InputError> {
        for line in lines {
            self.say(&line)?;
        }
        Ok(())
    }

    fn pause(&self, millis: u64) {
        if !self.options.fast {
            thread::sleep(Duration::from_millis(millis));
        }
    }
}
