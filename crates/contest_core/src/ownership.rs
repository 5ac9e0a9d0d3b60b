//! Ownership index: which owner holds each combatant.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::warn;

use crate::error::{GenerationError, Result};
use crate::types::Identifier;

/// What to do when the same combatant is listed under two different owners
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateOwnership {
    /// Keep the last pair seen (order-dependent on the input layout)
    #[default]
    LastWins,
    /// Abort with [`GenerationError::DuplicateOwnership`]
    Reject,
}

/// Immutable mapping from combatant id to owner id.
///
/// A combatant without an entry is unowned and never takes part in a
/// contest.
#[derive(Debug, Clone)]
pub struct OwnershipIndex<Id> {
    owners: HashMap<Id, Id>,
}

impl<Id: Identifier> OwnershipIndex<Id> {
    /// Build the index from `(combatant_id, owner_id)` pairs.
    ///
    /// Repeating an identical pair is harmless. Conflicting pairs follow
    /// `policy`.
    pub fn from_pairs<I>(pairs: I, policy: DuplicateOwnership) -> Result<Self>
    where
        I: IntoIterator<Item = (Id, Id)>,
    {
        let mut owners: HashMap<Id, Id> = HashMap::new();

        for (combatant, owner) in pairs {
            match owners.entry(combatant) {
                Entry::Vacant(slot) => {
                    slot.insert(owner);
                }
                Entry::Occupied(mut slot) => {
                    if *slot.get() == owner {
                        continue;
                    }
                    match policy {
                        DuplicateOwnership::LastWins => {
                            warn!(
                                combatant = %slot.key(),
                                previous = %slot.get(),
                                owner = %owner,
                                "combatant listed under several owners, keeping the last"
                            );
                            slot.insert(owner);
                        }
                        DuplicateOwnership::Reject => {
                            return Err(GenerationError::DuplicateOwnership {
                                combatant: slot.key().to_string(),
                                first: slot.get().to_string(),
                                second: owner.to_string(),
                            });
                        }
                    }
                }
            }
        }

        Ok(Self { owners })
    }

    /// Owner of `combatant`, if it has one
    pub fn owner_of(&self, combatant: &Id) -> Option<&Id> {
        self.owners.get(combatant)
    }

    pub fn is_owned(&self, combatant: &Id) -> bool {
        self.owners.contains_key(combatant)
    }

    /// True only when both combatants are owned and share the same owner
    pub fn same_owner(&self, a: &Id, b: &Id) -> bool {
        match (self.owner_of(a), self.owner_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Number of owned combatants
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

#[cfg(test)]
#[path = "ownership_tests.rs"]
mod ownership_tests;
