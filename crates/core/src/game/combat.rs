//! Attack rolls shared by player and enemy melee.
//!
//! Miss and critical checks read the same uniform draw: below 0.05 the blow
//! misses, below 0.15 it crits. Crits therefore land on 10% of all swings.

use crate::rng::GameRng;

const MISS_BELOW: f64 = 0.05;
const CRIT_BELOW: f64 = 0.15;
const DAMAGE_SPREAD: i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct AttackOutcome {
    pub(super) damage: i32,
    pub(super) missed: bool,
    pub(super) critical: bool,
}

pub(super) fn roll_attack(rng: &mut GameRng, power: i32, defense: i32) -> AttackOutcome {
    let roll = rng.unit();
    if roll < MISS_BELOW {
        return AttackOutcome { damage: 0, missed: true, critical: false };
    }
    let spread = rng.range_i32(-DAMAGE_SPREAD, DAMAGE_SPREAD);
    let base = (power - defense + spread).max(1);
    let critical = roll < CRIT_BELOW;
    let damage = if critical { base * 3 / 2 } else { base };
    AttackOutcome { damage, missed: false, critical }
}

pub(super) fn describe_player_attack(target: &str, outcome: &AttackOutcome) -> String {
    if outcome.missed {
        format!("You miss the {target}.")
    } else if outcome.critical {
        format!("Critical hit! You strike the {target} for {}.", outcome.damage)
    } else {
        format!("You hit the {target} for {}.", outcome.damage)
    }
}

pub(super) fn describe_enemy_attack(attacker: &str, outcome: &AttackOutcome) -> String {
    if outcome.missed {
        format!("The {attacker} misses you.")
    } else if outcome.critical {
        format!("The {attacker} lands a critical hit for {}!", outcome.damage)
    } else {
        format!("The {attacker} hits you for {}.", outcome.damage)
    }
}
