//! Turn and fight records handed to the presentation layer

use crate::damage::{DamageBreakdown, DefenderEffect};
use crate::types::Side;
use serde::{Deserialize, Serialize};

/// Hit check of a single attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitRoll {
    /// Value rolled in `1..=attacker.agility + defender.agility`
    pub roll: i32,
    /// Defender agility; the roll must exceed it to hit
    pub threshold: i32,
}

impl HitRoll {
    pub fn is_hit(&self) -> bool {
        self.roll > self.threshold
    }
}

/// How the main attack of a turn landed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Strike {
    /// A miss still deals the attacker's unmodified base damage
    Miss { damage: i32 },
    Hit {
        /// Class bonus breakdown, present when the player attacked
        breakdown: Option<DamageBreakdown>,
        /// Monster special that fired on the defender
        effect: Option<DefenderEffect>,
        damage: i32,
    },
}

impl Strike {
    /// Damage dealt by the main attack
    pub fn damage(&self) -> i32 {
        match self {
            Strike::Miss { damage } | Strike::Hit { damage, .. } => *damage,
        }
    }
}

/// Result of one attack exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Global turn number (1-based)
    pub turn: u32,
    pub attacker: Side,
    pub roll: HitRoll,
    pub strike: Strike,
    /// Dragon breath applied after the main attack
    pub breath: Option<i32>,
    pub defender_health_before: i32,
    /// Defender health after the main attack, before breath
    pub defender_health_after_attack: i32,
}

impl TurnResult {
    pub fn defender(&self) -> Side {
        self.attacker.opponent()
    }

    pub fn is_hit(&self) -> bool {
        self.roll.is_hit()
    }

    /// Damage from the attack and breath combined
    pub fn total_damage(&self) -> i32 {
        self.strike.damage() + self.breath.unwrap_or(0)
    }

    /// Defender health at the end of the turn
    pub fn defender_health_after(&self) -> i32 {
        self.defender_health_after_attack - self.breath.unwrap_or(0)
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        let mut parts = vec![format!(
            "turn {}: {:?} rolls {} vs {}",
            self.turn, self.attacker, self.roll.roll, self.roll.threshold
        )];

        match &self.strike {
            Strike::Miss { damage } => parts.push(format!("miss for {} base", damage)),
            Strike::Hit { damage, .. } => parts.push(format!("hit for {}", damage)),
        }

        if let Some(breath) = self.breath {
            parts.push(format!("breath {}", breath));
        }

        parts.join(", ")
    }
}

/// Outcome of a whole fight
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatReport {
    /// Side that won initiative
    pub first: Side,
    pub turns: Vec<TurnResult>,
    pub player_health: i32,
    pub monster_health: i32,
    /// True iff the player ended with health above zero
    pub player_won: bool,
}

impl CombatReport {
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Total damage dealt by one side across the fight
    pub fn damage_dealt_by(&self, side: Side) -> i32 {
        self.turns
            .iter()
            .filter(|t| t.attacker == side)
            .map(TurnResult::total_damage)
            .sum()
    }

    /// Number of attacks by a side that passed the hit check
    pub fn hits_by(&self, side: Side) -> usize {
        self.turns
            .iter()
            .filter(|t| t.attacker == side && t.is_hit())
            .count()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} after {} turns (player {}, monster {})",
            if self.player_won { "Victory" } else { "Defeat" },
            self.turn_count(),
            self.player_health.max(0),
            self.monster_health.max(0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn(attacker: Side, roll: i32, threshold: i32, strike: Strike, breath: Option<i32>) -> TurnResult {
        TurnResult {
            turn: 1,
            attacker,
            roll: HitRoll { roll, threshold },
            defender_health_before: 10,
            defender_health_after_attack: 10 - strike.damage(),
            strike,
            breath,
        }
    }

    #[test]
    fn test_hit_requires_roll_above_threshold() {
        assert!(HitRoll { roll: 3, threshold: 2 }.is_hit());
        assert!(!HitRoll { roll: 2, threshold: 2 }.is_hit());
    }

    #[test]
    fn test_breath_counts_toward_total() {
        let result = turn(Side::Monster, 1, 2, Strike::Miss { damage: 8 }, Some(3));
        assert_eq!(result.total_damage(), 11);
        assert_eq!(result.defender_health_after(), -1);
        assert_eq!(result.defender(), Side::Player);
        assert!(result.summary().contains("breath 3"));
    }

    #[test]
    fn test_report_totals() {
        let report = CombatReport {
            first: Side::Player,
            turns: vec![
                turn(Side::Player, 2, 1, Strike::Hit { breakdown: None, effect: None, damage: 4 }, None),
                turn(Side::Monster, 1, 1, Strike::Miss { damage: 3 }, None),
                turn(Side::Player, 1, 1, Strike::Miss { damage: 2 }, None),
            ],
            player_health: 5,
            monster_health: -2,
            player_won: true,
        };

        assert_eq!(report.damage_dealt_by(Side::Player), 6);
        assert_eq!(report.hits_by(Side::Player), 1);
        assert_eq!(report.hits_by(Side::Monster), 0);
        assert_eq!(report.summary(), "Victory after 3 turns (player 5, monster 0)");
    }
}
