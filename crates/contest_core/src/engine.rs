//! Generation engine: drives selection, tie-break and record assembly for
//! every owned combatant.

use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

use crate::config::{seeded_rng, GenerationConfig, Seed, SeededRng};
use crate::error::{GenerationError, Result};
use crate::record::RecordBuilder;
use crate::registry::DataRegistry;
use crate::selector::{OpponentSelector, Selection};
use crate::tiebreak::TieBreaker;
use crate::types::{ContestRecord, Identifier};

/// Operator-facing counts for a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    /// Records produced
    pub records: usize,
    /// Base combatants processed
    pub owned_combatants: usize,
    /// Opponent slots left unfilled across the run
    pub shortfall_slots: usize,
    /// Base combatants that ended with fewer records than the slot target
    pub short_combatants: usize,
    /// Contests decided by a coin flip
    pub coin_flips: usize,
}

/// Output of a run: records in generation order plus diagnostics
#[derive(Debug, Clone)]
pub struct Generation<Id> {
    pub records: Vec<ContestRecord<Id>>,
    summary: GenerationSummary,
}

impl<Id> Generation<Id> {
    pub fn summary(&self) -> &GenerationSummary {
        &self.summary
    }

    pub fn into_records(self) -> Vec<ContestRecord<Id>> {
        self.records
    }
}

/// Owns the random source and the sequence counter for one run.
///
/// `run` consumes the engine, so a fresh instance (and a fresh counter) is
/// needed for every run.
pub struct GenerationEngine<R> {
    slots_per_combatant: u32,
    selector: OpponentSelector,
    tiebreaker: TieBreaker,
    builder: RecordBuilder,
    rng: R,
    next_sequence: u64,
}

impl GenerationEngine<SeededRng> {
    /// Engine driven by the ChaCha stream for `seed`
    pub fn seeded(config: GenerationConfig, seed: &Seed) -> Result<Self> {
        let rng = seed.rng();
        Self::new(config, rng)
    }

    /// Engine seeded from `config.seed`, or from entropy when unset
    pub fn from_config(config: GenerationConfig) -> Result<Self> {
        let rng = seeded_rng(config.seed.as_ref());
        Self::new(config, rng)
    }
}

impl<R: Rng> GenerationEngine<R> {
    pub fn new(config: GenerationConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            slots_per_combatant: config.slots_per_combatant,
            selector: config.selector(),
            tiebreaker: TieBreaker,
            builder: config.record_builder(),
            rng,
            next_sequence: 1,
        })
    }

    /// Generate contests for every owned combatant in registry order.
    ///
    /// Per base combatant, up to `slots_per_combatant` distinct opponents
    /// are drawn. The first exhausted slot ends that combatant's turn.
    pub fn run<Id: Identifier>(mut self, registry: &DataRegistry<Id>) -> Result<Generation<Id>> {
        let pool = registry.owned_ids();
        if pool.len() < 2 {
            return Err(GenerationError::InsufficientCombatants { found: pool.len() });
        }

        let ownership = registry.ownership();
        let target = self.slots_per_combatant as usize;
        // A base can never meet more opponents than the pool holds
        let reachable = target.min(pool.len());
        let mut records = Vec::with_capacity(pool.len().saturating_mul(reachable));
        let mut summary = GenerationSummary {
            owned_combatants: pool.len(),
            ..Default::default()
        };

        for base_id in &pool {
            let base = registry
                .combatant(base_id)
                .ok_or_else(|| GenerationError::UnknownCombatant(base_id.to_string()))?;
            let mut used: HashSet<Id> = HashSet::with_capacity(reachable);

            for slot in 0..target {
                let opponent_id = match self
                    .selector
                    .select(base_id, &pool, ownership, &used, &mut self.rng)?
                {
                    Selection::Found(id) => id,
                    Selection::Exhausted => {
                        debug!(
                            base = %base_id,
                            slot,
                            attempts = self.selector.attempt_budget(),
                            "no fresh opponent, skipping remaining slots"
                        );
                        break;
                    }
                };

                let opponent = registry
                    .combatant(&opponent_id)
                    .ok_or_else(|| GenerationError::UnknownCombatant(opponent_id.to_string()))?;
                used.insert(opponent_id);

                let decision = self.tiebreaker.decide(base.clone(), opponent, &mut self.rng);
                if decision.coin_flip {
                    summary.coin_flips += 1;
                }

                let record = self.builder.build(
                    self.next_sequence,
                    base_id,
                    &decision.winner,
                    &decision.loser,
                    ownership,
                    registry.venues(),
                    &mut self.rng,
                )?;
                records.push(record);
                self.next_sequence += 1;
            }

            if used.len() < target {
                summary.shortfall_slots =
                    summary.shortfall_slots.saturating_add(target - used.len());
                summary.short_combatants += 1;
            }
        }

        summary.records = records.len();
        info!(
            records = summary.records,
            combatants = summary.owned_combatants,
            shortfall_slots = summary.shortfall_slots,
            coin_flips = summary.coin_flips,
            "generation finished"
        );

        Ok(Generation { records, summary })
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
