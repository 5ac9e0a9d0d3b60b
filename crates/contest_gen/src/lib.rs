//! Contest generation front end
//!
//! This crate connects the generation core to the datasets on disk:
//! - CSV tables with integer ids and JSON documents with string ids
//! - Writers for a list of JSON documents or a flat CSV table
//!
//! # Usage
//!
//! ```bash
//! # Generate contests from the CSV tables with a fixed seed
//! cargo run -p contest_gen -- generate --format csv --input dataset/csv --output battle.csv --seed 42
//!
//! # Same from the JSON documents
//! cargo run -p contest_gen -- generate --format json --input dataset/json --output battles.json
//!
//! # Assign one random owner to every combatant
//! cargo run -p contest_gen -- assign --combatants dataset/csv/pokemon.csv --owners dataset/csv/trainer.csv --output trainer_owns_pokemon.csv
//! ```

mod csv_source;
mod error;
mod json_source;
mod writer;

pub use csv_source::*;
pub use error::*;
pub use json_source::*;
pub use writer::*;
