//! Opponent selection under ownership exclusion.
//!
//! Each call filters the pool live and draws uniformly from what is left.
//! Already-used opponents are not filtered out; a draw that hits one is
//! retried until the attempt budget runs out, at which point the slot is
//! reported as exhausted.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::error::{GenerationError, Result};
use crate::ownership::OwnershipIndex;
use crate::types::Identifier;

/// Redraws allowed after the first draw before a slot counts as exhausted
pub const DEFAULT_ATTEMPT_BUDGET: u32 = 100;

/// Outcome of filling one opponent slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<Id> {
    Found(Id),
    /// No fresh eligible opponent within the attempt budget
    Exhausted,
}

impl<Id> Selection<Id> {
    pub fn found(self) -> Option<Id> {
        match self {
            Selection::Found(id) => Some(id),
            Selection::Exhausted => None,
        }
    }
}

/// Draws eligible opponents for a base combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpponentSelector {
    attempt_budget: u32,
}

impl Default for OpponentSelector {
    fn default() -> Self {
        Self::new(DEFAULT_ATTEMPT_BUDGET)
    }
}

impl OpponentSelector {
    pub fn new(attempt_budget: u32) -> Self {
        Self { attempt_budget }
    }

    pub fn attempt_budget(&self) -> u32 {
        self.attempt_budget
    }

    /// Candidates for `base`: owned, not `base` itself, different owner.
    pub fn candidates<'a, Id: Identifier>(
        base: &Id,
        pool: &'a [Id],
        ownership: &OwnershipIndex<Id>,
    ) -> Vec<&'a Id> {
        let base_owner = ownership.owner_of(base);
        pool.iter()
            .filter(|&c| c != base)
            .filter(|&c| match ownership.owner_of(c) {
                Some(owner) => base_owner != Some(owner),
                None => false,
            })
            .collect()
    }

    /// Pick an opponent for `base` from `pool`, avoiding `exclude`.
    ///
    /// Fails only when the pool cannot form any contest at all; running
    /// out of fresh opponents is [`Selection::Exhausted`].
    pub fn select<Id, R>(
        &self,
        base: &Id,
        pool: &[Id],
        ownership: &OwnershipIndex<Id>,
        exclude: &HashSet<Id>,
        rng: &mut R,
    ) -> Result<Selection<Id>>
    where
        Id: Identifier,
        R: Rng + ?Sized,
    {
        if pool.len() < 2 {
            return Err(GenerationError::InsufficientCombatants { found: pool.len() });
        }

        let candidates = Self::candidates(base, pool, ownership);
        let Some(mut drawn) = candidates.choose(rng).copied() else {
            return Ok(Selection::Exhausted);
        };

        let mut attempts = 0;
        while exclude.contains(drawn) && attempts < self.attempt_budget {
            // Non-empty: the first draw succeeded
            if let Some(&next) = candidates.choose(rng) {
                drawn = next;
            }
            attempts += 1;
        }

        if exclude.contains(drawn) {
            Ok(Selection::Exhausted)
        } else {
            Ok(Selection::Found(drawn.clone()))
        }
    }
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod selector_tests;
