//! Entity and record types shared by every generation component.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Opaque identifier for combatants, owners and venues.
///
/// Both integer-keyed and string-keyed datasets run through the same engine,
/// so anything comparable, hashable and printable qualifies.
pub trait Identifier: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> Identifier for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

/// An entity that can take part in a contest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant<Id> {
    pub id: Id,
    /// Scalar strength; the strictly greater value wins a contest
    pub strength: i64,
}

impl<Id> Combatant<Id> {
    pub fn new(id: Id, strength: i64) -> Self {
        Self { id, strength }
    }
}

/// Location attached to a contest record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue<Id> {
    pub id: Id,
}

impl<Id> Venue<Id> {
    pub fn new(id: Id) -> Self {
        Self { id }
    }
}

/// One side of a contest: the combatant and the owner it was resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant<Id> {
    pub owner_id: Id,
    pub combatant_id: Id,
}

/// A single synthesized contest outcome.
///
/// Records are immutable once built; the engine only appends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContestRecord<Id> {
    /// Prefix + sequence number, e.g. `b17`
    pub id: String,
    /// Global position of this record in the run, starting at 1
    #[serde(skip)]
    pub sequence: u64,
    #[serde(with = "utc_seconds")]
    pub date: DateTime<Utc>,
    pub venue_id: Id,
    /// Combatant whose slot produced this record
    #[serde(skip)]
    pub base_combatant_id: Id,
    pub winner: Participant<Id>,
    pub loser: Participant<Id>,
}

impl<Id: Identifier> ContestRecord<Id> {
    /// The combatant drawn as opponent for the base combatant
    pub fn opponent_id(&self) -> &Id {
        if self.winner.combatant_id == self.base_combatant_id {
            &self.loser.combatant_id
        } else {
            &self.winner.combatant_id
        }
    }
}

/// `YYYY-MM-DDTHH:MM:SSZ`, no fractional seconds.
pub mod utc_seconds {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }
}
