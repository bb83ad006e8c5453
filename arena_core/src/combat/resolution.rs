//! Turn resolution - one attack exchange between the player and a monster

use super::dice::Dice;
use super::result::{HitRoll, Strike, TurnResult};
use crate::damage::{apply_defender_modifier, breath_damage, calculate_attack_damage, AttackContext};
use crate::entity::{Character, Combatant, Monster};
use crate::types::Side;
use tracing::debug;

/// Side that acts first; ties go to the player
pub fn initiative(player: &Character, monster: &Monster) -> Side {
    if player.agility() >= monster.agility() {
        Side::Player
    } else {
        Side::Monster
    }
}

/// Roll the hit check: uniform in `1..=attacker + defender` agility, hit iff above defender agility
pub fn roll_to_hit(attacker_agility: i32, defender_agility: i32, dice: &mut impl Dice) -> HitRoll {
    assert!(
        attacker_agility >= 1 && defender_agility >= 1,
        "agility must be at least 1 (got {} vs {})",
        attacker_agility,
        defender_agility
    );
    HitRoll {
        roll: dice.roll(attacker_agility + defender_agility),
        threshold: defender_agility,
    }
}

/// Resolve a single attack by `attacker` on the given global turn
///
/// Health is deducted in place with no floor:
/// 1. Roll to hit against the defender's agility
/// 2. A miss deals the attacker's base damage with no modifiers
/// 3. A player hit adds class bonuses, then the monster's defender special
/// 4. A monster hit deals its base damage
/// 5. A Dragon breathes on every third turn regardless of the roll
pub fn resolve_turn(
    player: &mut Character,
    monster: &mut Monster,
    attacker: Side,
    turn: u32,
    dice: &mut impl Dice,
) -> TurnResult {
    let result = match attacker {
        Side::Player => player_attack(player, monster, turn, dice),
        Side::Monster => monster_attack(monster, player, turn, dice),
    };
    debug!("{}", result.summary());
    result
}

fn player_attack(
    player: &Character,
    monster: &mut Monster,
    turn: u32,
    dice: &mut impl Dice,
) -> TurnResult {
    let roll = roll_to_hit(player.agility(), monster.agility(), dice);

    let strike = if roll.is_hit() {
        let breakdown = calculate_attack_damage(player, monster, AttackContext::new(turn));
        let (damage, effect) = apply_defender_modifier(player, monster, breakdown.total);
        Strike::Hit {
            breakdown: Some(breakdown),
            effect,
            damage,
        }
    } else {
        Strike::Miss {
            damage: player.base_damage(),
        }
    };

    let defender_health_before = monster.health();
    monster.take_damage(strike.damage());

    TurnResult {
        turn,
        attacker: Side::Player,
        roll,
        strike,
        breath: None,
        defender_health_before,
        defender_health_after_attack: monster.health(),
    }
}

fn monster_attack(
    monster: &Monster,
    player: &mut Character,
    turn: u32,
    dice: &mut impl Dice,
) -> TurnResult {
    let roll = roll_to_hit(monster.agility(), player.agility(), dice);
    let damage = monster.base_damage();

    // Defender specials only belong to monsters, so a hit on the player is unmodified
    let strike = if roll.is_hit() {
        Strike::Hit {
            breakdown: None,
            effect: None,
            damage,
        }
    } else {
        Strike::Miss { damage }
    };

    let defender_health_before = player.health();
    player.take_damage(strike.damage());
    let defender_health_after_attack = player.health();

    let breath = breath_damage(monster, turn);
    if let Some(amount) = breath {
        player.take_damage(amount);
    }

    TurnResult {
        turn,
        attacker: Side::Monster,
        roll,
        strike,
        breath,
        defender_health_before,
        defender_health_after_attack,
    }
}
