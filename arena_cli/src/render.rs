//! Colored text for character sheets, fights and turns

use arena_core::combat::Strike;
use arena_core::{Character, Combatant, Monster, Side, TurnResult};
use crossterm::style::Stylize;

fn side_name(side: Side, monster: &Monster) -> String {
    match side {
        Side::Player => "Player".to_string(),
        Side::Monster => monster.name.clone(),
    }
}

pub fn character_sheet(character: &Character) -> Vec<String> {
    let attrs = &character.attributes;
    let weapon = &character.weapon;
    vec![
        "\n=== Character ===".bold().to_string(),
        format!("Classes: {}", character.classes.display()),
        format!("Health: {}/{}", character.display_health(), attrs.max_health),
        format!(
            "Strength: {} | Agility: {} | Stamina: {}",
            attrs.strength, attrs.agility, attrs.stamina
        ),
        format!(
            "Weapon: {} ({}) (damage: {})",
            weapon.name, weapon.weapon_type, weapon.damage
        ),
        format!("Base damage: {}", character.base_damage()),
    ]
}

pub fn monster_sheet(monster: &Monster) -> Vec<String> {
    let attrs = &monster.attributes;
    let weapon = &monster.weapon;
    let special = if monster.special.is_empty() {
        "None"
    } else {
        monster.special.as_str()
    };
    vec![
        format!("\n{}", monster.name).red().bold().to_string(),
        format!("Health: {}/{}", monster.display_health(), attrs.max_health),
        format!(
            "Strength: {} | Agility: {} | Stamina: {}",
            attrs.strength, attrs.agility, attrs.stamina
        ),
        format!(
            "Weapon: {} ({}) (damage: {})",
            weapon.name, weapon.weapon_type, weapon.damage
        ),
        format!("Special: {}", special),
    ]
}

pub fn fight_banner(character: &Character, monster: &Monster, first: Side) -> Vec<String> {
    vec![
        format!(
            "\n=== FIGHT: {} vs {} ===",
            character.primary_class(),
            monster.name
        )
        .cyan()
        .to_string(),
        format!("First to act: {}", side_name(first, monster))
            .yellow()
            .to_string(),
    ]
}

pub fn turn_header(turn: u32, character: &Character, monster: &Monster) -> Vec<String> {
    vec![
        format!("\n--- Turn {} ---", turn).green().to_string(),
        format!(
            "Player: {}/{} HP",
            character.display_health(),
            character.attributes.max_health
        ),
        format!(
            "{}: {}/{} HP",
            monster.name,
            monster.display_health(),
            monster.attributes.max_health
        ),
    ]
}

/// Lines describing one resolved turn
pub fn turn_lines(turn: &TurnResult, monster: &Monster) -> Vec<String> {
    let attacker = side_name(turn.attacker, monster);
    let defender = side_name(turn.defender(), monster);
    let mut lines = vec![
        format!("\n{} attacks!", attacker).magenta().to_string(),
        format!(
            "Roll: {} (hits if > {})",
            turn.roll.roll, turn.roll.threshold
        )
        .blue()
        .to_string(),
    ];

    match &turn.strike {
        Strike::Miss { damage } => {
            lines.push("Miss!".dark_grey().to_string());
            lines.push(format!("But base damage still lands: {}", damage).red().to_string());
        }
        Strike::Hit {
            breakdown,
            effect,
            damage,
        } => {
            match breakdown {
                Some(breakdown) => {
                    lines.push(format!("Hit! Base damage: {}", breakdown.base).red().to_string());
                    for reason in &breakdown.reasons {
                        lines.push(format!("   + {}", reason).yellow().to_string());
                    }
                }
                None => lines.push(format!("Hit! Dealt {} damage", damage).red().to_string()),
            }
            if let Some(effect) = effect {
                lines.push(effect.to_string().blue().to_string());
            }
            lines.push(format!("-> Total: {} damage", damage).red().to_string());
        }
    }

    lines.push(
        format!(
            "{} has {} HP left",
            defender,
            turn.defender_health_after_attack.max(0)
        )
        .green()
        .to_string(),
    );

    if let Some(breath) = turn.breath {
        lines.push(
            format!("{} breathes fire! Deals an extra {} damage!", attacker, breath)
                .red()
                .to_string(),
        );
        lines.push(
            format!(
                "{} has {} HP left",
                defender,
                turn.defender_health_after().max(0)
            )
            .green()
            .to_string(),
        );
    }

    lines
}

pub fn tutorial() -> Vec<String> {
    [
        "\nHOW TO PLAY",
        "\n1. Pick a class: Rogue, Warrior or Barbarian.",
        "   - Rogue: +1 damage when more agile than the target. Poison from level 3.",
        "   - Warrior: the opening attack of a fight adds weapon damage again. +1 damage from level 3.",
        "   - Barbarian: +2 damage on every hit.",
        "\n2. Weapons are Slashing, Piercing or Blunt.",
        "   - Some monsters resist or fear certain weapon types.",
        "\n3. Fights play out automatically turn by turn.",
        "   - Even a miss deals base damage.",
        "\n4. After a victory:",
        "   - Health is fully restored.",
        "   - Level up ANY class (multiclassing!), up to 3 levels in total.",
        "   - You may swap your weapon for the monster's drop.",
        "\n5. Win 5 fights in a row to become champion!",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
