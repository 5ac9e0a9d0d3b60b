//! Error types for contest generation.
//!
//! Slot exhaustion is deliberately absent: running out of fresh opponents is
//! a normal outcome reported through the generation summary.

use thiserror::Error;

/// Errors that abort a generation run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// Fewer than two combatants are available to pair up
    #[error("Need at least 2 eligible combatants to form contests, found {found}")]
    InsufficientCombatants { found: usize },

    /// The venue collection is empty
    #[error("No venues available to host contests")]
    NoVenues,

    /// The ownership collection is empty or missing
    #[error("No ownership data available")]
    NoOwnership,

    /// Date range ends before it starts
    #[error("Invalid date range: {start} is after {end}")]
    InvalidDateRange { start: String, end: String },

    /// Slot count of zero produces nothing and is treated as misconfiguration
    #[error("Slots per combatant must be at least 1")]
    InvalidSlotCount,

    /// A combatant is listed under two different owners and the policy rejects it
    #[error("Combatant {combatant} is owned by both {first} and {second}")]
    DuplicateOwnership {
        combatant: String,
        first: String,
        second: String,
    },

    /// A contest participant has no owner at build time
    #[error("Missing owner for combatant {combatant} (winner={winner}, loser={loser})")]
    MissingOwner {
        combatant: String,
        winner: String,
        loser: String,
    },

    /// A selected combatant is missing from the registry
    #[error("Combatant {0} is not in the registry")]
    UnknownCombatant(String),

    /// Config file could not be parsed
    #[error("Config error: {0}")]
    Config(String),
}

impl GenerationError {
    /// Configuration errors are raised before any record is produced.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::MissingOwner { .. } | Self::UnknownCombatant(_))
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;
