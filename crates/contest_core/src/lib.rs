//! Contest generation core
//!
//! This crate synthesizes pairwise contest records between combatants:
//! - No combatant ever faces itself or a combatant with the same owner
//! - A combatant faces each opponent at most once per run
//! - Every random draw comes from one seedable source, so a fixed seed
//!   reproduces a run exactly
//!
//! # Usage
//!
//! ```no_run
//! use contest_core::{DataRegistry, GenerationConfig, GenerationEngine, OwnershipIndex, Seed};
//! use contest_core::{Combatant, DuplicateOwnership, Venue};
//!
//! let ownership = OwnershipIndex::from_pairs(
//!     vec![(1u32, 10u32), (2, 20)],
//!     DuplicateOwnership::LastWins,
//! )?;
//! let registry = DataRegistry::new(
//!     vec![Combatant::new(1, 300), Combatant::new(2, 420)],
//!     vec![Venue::new(7)],
//!     ownership,
//! )?;
//!
//! let engine = GenerationEngine::seeded(GenerationConfig::default(), &Seed::Number(42))?;
//! let generation = engine.run(&registry)?;
//! println!("{} contests", generation.records.len());
//! # Ok::<(), contest_core::GenerationError>(())
//! ```

mod assign;
mod config;
mod engine;
mod error;
mod ownership;
mod record;
mod registry;
mod selector;
mod tiebreak;
mod types;

pub use assign::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use ownership::*;
pub use record::*;
pub use registry::*;
pub use selector::*;
pub use tiebreak::*;
pub use types::*;
