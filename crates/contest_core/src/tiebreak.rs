//! Winner/loser ordering for a contest.

use rand::Rng;

use crate::types::Combatant;

/// Result of ordering two combatants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision<Id> {
    pub winner: Combatant<Id>,
    pub loser: Combatant<Id>,
    /// Strengths were equal and a coin flip decided
    pub coin_flip: bool,
}

/// Orders two combatants by strength, flipping a coin on ties.
///
/// The coin is drawn from the caller's random source so the whole run stays
/// reproducible under one seed. No draw happens when strengths differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct TieBreaker;

impl TieBreaker {
    pub fn decide<Id, R>(&self, a: Combatant<Id>, b: Combatant<Id>, rng: &mut R) -> Decision<Id>
    where
        R: Rng + ?Sized,
    {
        if a.strength > b.strength {
            Decision { winner: a, loser: b, coin_flip: false }
        } else if b.strength > a.strength {
            Decision { winner: b, loser: a, coin_flip: false }
        } else if rng.gen_bool(0.5) {
            Decision { winner: a, loser: b, coin_flip: true }
        } else {
            Decision { winner: b, loser: a, coin_flip: true }
        }
    }
}

#[cfg(test)]
#[path = "tiebreak_tests.rs"]
mod tiebreak_tests;
