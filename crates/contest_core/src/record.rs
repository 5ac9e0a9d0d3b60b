//! Contest record assembly: id, date, venue and resolved owners.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GenerationError, Result};
use crate::ownership::OwnershipIndex;
use crate::types::{Combatant, ContestRecord, Identifier, Participant, Venue};

/// Prefix for record ids (`b1`, `b2`, ...)
pub const DEFAULT_ID_PREFIX: &str = "b";

/// Inclusive calendar span that contest dates are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Default for DateRange {
    /// The full 2025 calendar year
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or_default(),
        }
    }
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<()> {
        if self.end < self.start {
            return Err(GenerationError::InvalidDateRange {
                start: self.start.to_string(),
                end: self.end.to_string(),
            });
        }
        Ok(())
    }

    /// Number of days covered, both ends included
    pub fn days(&self) -> u64 {
        (self.end - self.start).num_days().max(0) as u64 + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Uniform draw over every day in the range
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDate {
        let offset = rng.gen_range(0..self.days());
        self.start
            .checked_add_days(Days::new(offset))
            .unwrap_or(self.end)
    }
}

/// Builds complete contest records
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    id_prefix: String,
    date_range: DateRange,
    time_of_day: NaiveTime,
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_ID_PREFIX, DateRange::default(), default_time_of_day())
    }
}

/// Every record carries 10:00:00 UTC
pub fn default_time_of_day() -> NaiveTime {
    NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default()
}

impl RecordBuilder {
    pub fn new(id_prefix: impl Into<String>, date_range: DateRange, time_of_day: NaiveTime) -> Self {
        Self {
            id_prefix: id_prefix.into(),
            date_range,
            time_of_day,
        }
    }

    /// Assemble record number `sequence`.
    ///
    /// Draws the venue, then the date. Both participants must resolve to an
    /// owner; a miss here means the ownership index changed under the run.
    pub fn build<Id, R>(
        &self,
        sequence: u64,
        base_id: &Id,
        winner: &Combatant<Id>,
        loser: &Combatant<Id>,
        ownership: &OwnershipIndex<Id>,
        venues: &[Venue<Id>],
        rng: &mut R,
    ) -> Result<ContestRecord<Id>>
    where
        Id: Identifier,
        R: Rng + ?Sized,
    {
        let venue = venues.choose(rng).ok_or(GenerationError::NoVenues)?;
        let day = self.date_range.sample(rng);
        let date: DateTime<Utc> = day.and_time(self.time_of_day).and_utc();

        let resolve = |combatant: &Combatant<Id>| -> Result<Participant<Id>> {
            let owner = ownership
                .owner_of(&combatant.id)
                .ok_or_else(|| GenerationError::MissingOwner {
                    combatant: combatant.id.to_string(),
                    winner: winner.id.to_string(),
                    loser: loser.id.to_string(),
                })?;
            Ok(Participant {
                owner_id: owner.clone(),
                combatant_id: combatant.id.clone(),
            })
        };

        Ok(ContestRecord {
            id: format!("{}{}", self.id_prefix, sequence),
            sequence,
            date,
            venue_id: venue.id.clone(),
            base_combatant_id: base_id.clone(),
            winner: resolve(winner)?,
            loser: resolve(loser)?,
        })
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
