//! Random ownership assignment for datasets that ship without one.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

use crate::error::{GenerationError, Result};

/// Give every combatant exactly one owner, drawn uniformly at random.
///
/// Ids are deduplicated and visited in sorted order, so the output depends
/// only on the id sets and the random stream. Owners may end up with no
/// combatants. The returned `(combatant, owner)` pairs feed
/// [`OwnershipIndex::from_pairs`](crate::OwnershipIndex::from_pairs) directly.
pub fn assign_owners<Id, R>(combatants: &[Id], owners: &[Id], rng: &mut R) -> Result<Vec<(Id, Id)>>
where
    Id: Ord + Clone,
    R: Rng + ?Sized,
{
    let owners: Vec<&Id> = owners.iter().collect::<BTreeSet<_>>().into_iter().collect();
    if owners.is_empty() {
        return Err(GenerationError::NoOwnership);
    }

    let combatants: BTreeSet<&Id> = combatants.iter().collect();
    let mut pairs = Vec::with_capacity(combatants.len());
    for combatant in combatants {
        if let Some(&owner) = owners.choose(rng) {
            pairs.push((combatant.clone(), owner.clone()));
        }
    }
    Ok(pairs)
}

/// Number of distinct ids, as `assign_owners` sees them after dedup
pub fn distinct_count<Id: Ord>(ids: &[Id]) -> usize {
    ids.iter().collect::<BTreeSet<_>>().len()
}

#[cfg(test)]
#[path = "assign_tests.rs"]
mod assign_tests;
