//! Data registry: the immutable collections a generation run works on.

use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use crate::error::{GenerationError, Result};
use crate::ownership::{DuplicateOwnership, OwnershipIndex};
use crate::types::{Combatant, Identifier, Venue};

/// Anything that can hand over the three input collections.
///
/// Implemented by the format adapters (CSV tables, JSON documents) so the
/// engine never sees where the data came from.
pub trait DatasetSource<Id> {
    type Error;

    fn combatants(&mut self) -> std::result::Result<Vec<Combatant<Id>>, Self::Error>;

    fn venues(&mut self) -> std::result::Result<Vec<Venue<Id>>, Self::Error>;

    /// `(combatant_id, owner_id)` pairs in input order
    fn ownership_pairs(&mut self) -> std::result::Result<Vec<(Id, Id)>, Self::Error>;
}

/// Combatants, venues and ownership, loaded once and read-only afterwards.
#[derive(Debug, Clone)]
pub struct DataRegistry<Id> {
    combatants: Vec<Combatant<Id>>,
    venues: Vec<Venue<Id>>,
    ownership: OwnershipIndex<Id>,
    strengths: HashMap<Id, i64>,
}

impl<Id: Identifier> DataRegistry<Id> {
    /// Build a registry, rejecting inputs no run could use.
    ///
    /// Duplicate combatant ids keep their first occurrence.
    pub fn new(
        combatants: Vec<Combatant<Id>>,
        venues: Vec<Venue<Id>>,
        ownership: OwnershipIndex<Id>,
    ) -> Result<Self> {
        let mut seen = HashSet::with_capacity(combatants.len());
        let mut unique = Vec::with_capacity(combatants.len());
        for combatant in combatants {
            if seen.insert(combatant.id.clone()) {
                unique.push(combatant);
            } else {
                warn!(combatant = %combatant.id, "duplicate combatant id, keeping the first entry");
            }
        }

        if unique.len() < 2 {
            return Err(GenerationError::InsufficientCombatants { found: unique.len() });
        }
        if venues.is_empty() {
            return Err(GenerationError::NoVenues);
        }
        if ownership.is_empty() {
            return Err(GenerationError::NoOwnership);
        }

        let strengths = unique
            .iter()
            .map(|c| (c.id.clone(), c.strength))
            .collect();

        debug!(
            combatants = unique.len(),
            venues = venues.len(),
            owned = ownership.len(),
            "registry loaded"
        );

        Ok(Self {
            combatants: unique,
            venues,
            ownership,
            strengths,
        })
    }

    /// Pull all three collections from `source` and build the registry.
    pub fn load<S, E>(source: &mut S, policy: DuplicateOwnership) -> std::result::Result<Self, E>
    where
        S: DatasetSource<Id, Error = E>,
        E: From<GenerationError>,
    {
        let combatants = source.combatants()?;
        let venues = source.venues()?;
        let pairs = source.ownership_pairs()?;
        if pairs.is_empty() {
            return Err(GenerationError::NoOwnership.into());
        }
        let ownership = OwnershipIndex::from_pairs(pairs, policy)?;
        Ok(Self::new(combatants, venues, ownership)?)
    }

    /// All combatants in input order
    pub fn combatants(&self) -> &[Combatant<Id>] {
        &self.combatants
    }

    pub fn venues(&self) -> &[Venue<Id>] {
        &self.venues
    }

    pub fn ownership(&self) -> &OwnershipIndex<Id> {
        &self.ownership
    }

    pub fn combatant(&self, id: &Id) -> Option<Combatant<Id>> {
        self.strengths
            .get(id)
            .map(|&strength| Combatant::new(id.clone(), strength))
    }

    /// Ids of owned combatants, in input order.
    ///
    /// This is both the list of base combatants and the opponent pool.
    pub fn owned_ids(&self) -> Vec<Id> {
        self.combatants
            .iter()
            .filter(|c| self.ownership.is_owned(&c.id))
            .map(|c| c.id.clone())
            .collect()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
