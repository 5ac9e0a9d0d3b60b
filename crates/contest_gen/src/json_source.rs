//! JSON document collections with string ids.
//!
//! Combatants: `{"_id": "1", "stats": {"tot": "318"}, ...}`
//! Venues:     `{"_id": "3", ...}`
//! Owners:     `{"_id": "17", "owns": ["290", "1052"], ...}`
//!
//! Scalars may be strings or numbers. Documents missing a required field are
//! skipped with a warning.

use contest_core::{Combatant, DatasetSource, Venue};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::DatasetError;

/// Default file names inside a JSON dataset directory
pub const JSON_COMBATANTS: &str = "pokemon.json";
pub const JSON_VENUES: &str = "gym.json";
pub const JSON_OWNERS: &str = "trainer.json";

/// String-keyed dataset split over three JSON files
#[derive(Debug, Clone)]
pub struct JsonDataset {
    pub combatants: PathBuf,
    pub venues: PathBuf,
    pub owners: PathBuf,
}

impl JsonDataset {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            combatants: dir.join(JSON_COMBATANTS),
            venues: dir.join(JSON_VENUES),
            owners: dir.join(JSON_OWNERS),
        }
    }
}

impl DatasetSource<String> for JsonDataset {
    type Error = DatasetError;

    fn combatants(&mut self) -> Result<Vec<Combatant<String>>, DatasetError> {
        let docs = read_documents(&self.combatants)?;
        let mut combatants = Vec::with_capacity(docs.len());

        for (index, doc) in docs.iter().enumerate() {
            let id = doc.get("_id").and_then(scalar);
            let strength = doc
                .get("stats")
                .and_then(|stats| stats.get("tot"))
                .and_then(scalar)
                .and_then(|tot| tot.parse::<i64>().ok());
            match (id, strength) {
                (Some(id), Some(strength)) => combatants.push(Combatant::new(id, strength)),
                _ => warn!(path = %self.combatants.display(), index, "skipping combatant without _id or stats.tot"),
            }
        }

        if combatants.is_empty() {
            return Err(DatasetError::Empty {
                what: "combatants",
                path: self.combatants.clone(),
            });
        }
        Ok(combatants)
    }

    fn venues(&mut self) -> Result<Vec<Venue<String>>, DatasetError> {
        let docs = read_documents(&self.venues)?;
        let venues: Vec<_> = docs
            .iter()
            .filter_map(|doc| doc.get("_id").and_then(scalar))
            .map(Venue::new)
            .collect();

        if venues.is_empty() {
            return Err(DatasetError::Empty {
                what: "venues",
                path: self.venues.clone(),
            });
        }
        Ok(venues)
    }

    fn ownership_pairs(&mut self) -> Result<Vec<(String, String)>, DatasetError> {
        let docs = read_documents(&self.owners)?;
        let mut owners = 0usize;
        let mut pairs = Vec::new();

        for doc in &docs {
            let Some(owner) = doc.get("_id").and_then(scalar) else {
                continue;
            };
            owners += 1;

            let Some(owns) = doc.get("owns").and_then(Value::as_array) else {
                continue;
            };
            for owned in owns {
                match scalar(owned) {
                    Some(combatant) => pairs.push((combatant, owner.clone())),
                    None => warn!(owner = %owner, "skipping non-scalar entry in owns"),
                }
            }
        }

        if owners == 0 {
            return Err(DatasetError::Empty {
                what: "owners",
                path: self.owners.clone(),
            });
        }
        Ok(pairs)
    }
}

/// Top-level array of documents
fn read_documents(path: &Path) -> Result<Vec<Value>, DatasetError> {
    let file = File::open(path).map_err(|e| DatasetError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| DatasetError::json(path, e))
}

/// Trimmed text of a string or number value
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "json_source_tests.rs"]
mod json_source_tests;
