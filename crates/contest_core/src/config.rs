//! Generation settings and the seed that drives the random source.

use chrono::NaiveTime;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{GenerationError, Result};
use crate::ownership::DuplicateOwnership;
use crate::record::{default_time_of_day, DateRange, RecordBuilder, DEFAULT_ID_PREFIX};
use crate::selector::{OpponentSelector, DEFAULT_ATTEMPT_BUDGET};

/// Opponent slots filled per base combatant
pub const DEFAULT_SLOTS_PER_COMBATANT: u32 = 3;

/// Random source used for every reproducible run
pub type SeededRng = ChaCha8Rng;

/// Integer or free-form text seed.
///
/// Text that parses as an integer behaves exactly like that integer; any
/// other text is hashed into the generator seed. Negative integers are
/// accepted and reinterpreted bit for bit as unsigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Number(i64),
    Text(String),
}

/// Signed parse first, then the unsigned values above `i64::MAX`
fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    text.parse::<i64>()
        .ok()
        .or_else(|| text.parse::<u64>().ok().map(|n| n as i64))
}

impl Seed {
    pub fn rng(&self) -> SeededRng {
        match self {
            Seed::Number(n) => ChaCha8Rng::seed_from_u64(*n as u64),
            Seed::Text(text) => match parse_integer(text) {
                Some(n) => ChaCha8Rng::seed_from_u64(n as u64),
                None => ChaCha8Rng::from_seed(Sha256::digest(text.as_bytes()).into()),
            },
        }
    }
}

/// Random source for an optional seed; entropy when there is none
pub fn seeded_rng(seed: Option<&Seed>) -> SeededRng {
    match seed {
        Some(seed) => seed.rng(),
        None => ChaCha8Rng::from_entropy(),
    }
}

impl FromStr for Seed {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match parse_integer(s) {
            Some(n) => Seed::Number(n),
            None => Seed::Text(s.to_string()),
        })
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Number(n) => write!(f, "{n}"),
            Seed::Text(text) => write!(f, "{text:?}"),
        }
    }
}

/// Generation configuration, usually read from a TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Seed for the random source (None = entropy)
    pub seed: Option<Seed>,
    /// Target number of distinct opponents per combatant
    pub slots_per_combatant: u32,
    /// Redraws allowed per slot before it counts as exhausted
    pub attempt_budget: u32,
    /// Calendar span for contest dates
    pub date_range: DateRange,
    /// Time of day stamped on every contest date
    pub time_of_day: NaiveTime,
    /// Prefix for record ids
    pub id_prefix: String,
    /// Policy for combatants listed under several owners
    pub duplicate_ownership: DuplicateOwnership,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            slots_per_combatant: DEFAULT_SLOTS_PER_COMBATANT,
            attempt_budget: DEFAULT_ATTEMPT_BUDGET,
            date_range: DateRange::default(),
            time_of_day: default_time_of_day(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            duplicate_ownership: DuplicateOwnership::default(),
        }
    }
}

impl GenerationConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| GenerationError::Config(format!("Failed to parse: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| GenerationError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.slots_per_combatant == 0 {
            return Err(GenerationError::InvalidSlotCount);
        }
        self.date_range.validate()
    }

    pub fn selector(&self) -> OpponentSelector {
        OpponentSelector::new(self.attempt_budget)
    }

    pub fn record_builder(&self) -> RecordBuilder {
        RecordBuilder::new(self.id_prefix.clone(), self.date_range, self.time_of_day)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
