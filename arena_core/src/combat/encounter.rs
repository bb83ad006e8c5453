//! Encounter - the combat loop driving turns until one side drops

use super::dice::Dice;
use super::resolution::{initiative, resolve_turn};
use super::result::{CombatReport, TurnResult};
use crate::entity::{Character, Combatant, Monster};
use crate::types::Side;
use tracing::info;

/// Turn counter and alternation state of a single fight
///
/// Holds no entity state, so each fight starts from a fresh `Encounter`.
#[derive(Debug, Clone)]
pub struct Encounter {
    first: Side,
    next: Side,
    turn: u32,
}

impl Encounter {
    /// Start a fight, rolling initiative from the combatants' agility
    pub fn new(player: &Character, monster: &Monster) -> Self {
        assert!(
            player.health() >= 0 && monster.health() >= 0,
            "combat cannot start with negative health"
        );
        let first = initiative(player, monster);
        Encounter {
            first,
            next: first,
            turn: 0,
        }
    }

    /// Side that won initiative
    pub fn first(&self) -> Side {
        self.first
    }

    /// Number of turns resolved so far
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Side that attacks on the next step
    pub fn next_attacker(&self) -> Side {
        self.next
    }

    /// The fight is over once either side is at or below zero health
    pub fn is_over(player: &Character, monster: &Monster) -> bool {
        !player.is_alive() || !monster.is_alive()
    }

    /// Resolve the next turn, or None when the fight is already over
    pub fn step(
        &mut self,
        player: &mut Character,
        monster: &mut Monster,
        dice: &mut impl Dice,
    ) -> Option<TurnResult> {
        if Self::is_over(player, monster) {
            return None;
        }
        self.turn += 1;
        let result = resolve_turn(player, monster, self.next, self.turn, dice);
        self.next = self.next.opponent();
        Some(result)
    }
}

/// Fight to the end using the thread RNG
pub fn run_combat(player: &mut Character, monster: &mut Monster) -> CombatReport {
    let mut rng = rand::thread_rng();
    run_combat_with_rng(player, monster, &mut rng)
}

/// Fight to the end with a provided random source (for deterministic testing)
///
/// The player wins iff their health is above zero at the end, so a
/// simultaneous knockout counts as a loss.
pub fn run_combat_with_rng(
    player: &mut Character,
    monster: &mut Monster,
    dice: &mut impl Dice,
) -> CombatReport {
    let mut encounter = Encounter::new(player, monster);
    let mut turns = Vec::new();

    while let Some(result) = encounter.step(player, monster, dice) {
        turns.push(result);
    }

    let report = CombatReport {
        first: encounter.first(),
        turns,
        player_health: player.health(),
        monster_health: monster.health(),
        player_won: player.is_alive(),
    };
    info!("{} vs {}: {}", player.primary_class(), monster.name, report.summary());
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::LoadedDice;
    use crate::config::Catalog;
    use crate::entity::Weapon;
    use crate::types::{ClassName, MonsterKind, WeaponType};
    use rand::SeedableRng;

    fn spawn(kind: MonsterKind) -> Monster {
        Catalog::default_catalog().spawn(kind).unwrap()
    }

    #[test]
    fn test_warrior_vs_goblin_scenario() {
        let mut player = Character::new(
            ClassName::Warrior,
            2,
            1,
            2,
            Weapon::new("Sword", 3, WeaponType::Slashing),
        );
        let mut goblin = spawn(MonsterKind::Goblin);

        let report = run_combat_with_rng(&mut player, &mut goblin, &mut LoadedDice::always(2));

        assert_eq!(report.first, Side::Player);
        assert_eq!(report.turn_count(), 1);
        assert_eq!(report.damage_dealt_by(Side::Player), 8);
        assert!(report.player_won);
        assert_eq!(player.health(), 7);
    }

    #[test]
    fn test_sides_alternate_and_turns_count_up() {
        let mut player = Character::new(
            ClassName::Rogue,
            1,
            1,
            3,
            Weapon::new("Dagger", 2, WeaponType::Piercing),
        );
        let mut skeleton = spawn(MonsterKind::Skeleton);

        let report = run_combat_with_rng(&mut player, &mut skeleton, &mut LoadedDice::always(1));

        assert_eq!(report.first, Side::Monster);
        for (i, turn) in report.turns.iter().enumerate() {
            assert_eq!(turn.turn, i as u32 + 1);
            let expected = if i % 2 == 0 { Side::Monster } else { Side::Player };
            assert_eq!(turn.attacker, expected);
        }
        // Every roll misses: the skeleton deals 4 a turn and kills 7 health in two attacks
        assert_eq!(report.turn_count(), 3);
        assert!(!report.player_won);
    }

    #[test]
    fn test_both_sides_down_is_a_loss() {
        // Both sides already down: no turns resolve and only player health decides
        let mut player = Character::new(
            ClassName::Barbarian,
            1,
            3,
            1,
            Weapon::new("Club", 3, WeaponType::Blunt),
        );
        let mut dragon = spawn(MonsterKind::Dragon);
        dragon.attributes.health = 0;
        player.attributes.health = 0;

        let report = run_combat_with_rng(&mut player, &mut dragon, &mut LoadedDice::always(1));
        assert_eq!(report.turn_count(), 0);
        assert!(!report.player_won);
    }

    #[test]
    fn test_step_stops_when_fight_is_over() {
        let mut player = Character::new(
            ClassName::Warrior,
            2,
            1,
            2,
            Weapon::new("Sword", 3, WeaponType::Slashing),
        );
        let mut goblin = spawn(MonsterKind::Goblin);
        let mut dice = LoadedDice::always(2);
        let mut encounter = Encounter::new(&player, &goblin);

        assert_eq!(encounter.next_attacker(), Side::Player);
        assert!(encounter.step(&mut player, &mut goblin, &mut dice).is_some());
        assert!(encounter.step(&mut player, &mut goblin, &mut dice).is_none());
        assert_eq!(encounter.turn(), 1);
    }

    #[test]
    fn test_every_monster_fight_terminates() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for kind in MonsterKind::all() {
            for class in ClassName::all() {
                let mut player = Character::new(
                    *class,
                    1,
                    1,
                    1,
                    Weapon::new("Sword", 3, WeaponType::Slashing),
                );
                let mut monster = spawn(*kind);
                let report = run_combat_with_rng(&mut player, &mut monster, &mut rng);
                assert!(report.player_health <= 0 || report.monster_health <= 0);
                assert_eq!(report.player_won, report.player_health > 0);
            }
        }
    }
}
