//! CSV tables with integer ids.
//!
//! Header lookup is case-insensitive and each column accepts a short list
//! of alternative names. Rows that fail to parse are skipped with a warning.

use contest_core::{Combatant, DatasetSource, Venue};
use csv::{ReaderBuilder, StringRecord};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::DatasetError;

/// Default file names inside a CSV dataset directory
pub const CSV_COMBATANTS: &str = "pokemon.csv";
pub const CSV_VENUES: &str = "gym.csv";
pub const CSV_OWNERSHIP: &str = "trainer_owns_pokemon.csv";
pub const CSV_OWNERS: &str = "trainer.csv";

const COMBATANT_ID: &[&str] = &["id"];
const COMBATANT_STRENGTH: &[&str] = &["total"];
const VENUE_ID: &[&str] = &["gym_id", "id"];
const OWNER_ID: &[&str] = &["trainerID"];
const OWNED_COMBATANT: &[&str] = &["pokename"];

/// Integer-keyed dataset split over three CSV files
#[derive(Debug, Clone)]
pub struct CsvDataset {
    pub combatants: PathBuf,
    pub venues: PathBuf,
    pub ownership: PathBuf,
}

impl CsvDataset {
    /// Dataset using the default file names under `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            combatants: dir.join(CSV_COMBATANTS),
            venues: dir.join(CSV_VENUES),
            ownership: dir.join(CSV_OWNERSHIP),
        }
    }
}

impl DatasetSource<u32> for CsvDataset {
    type Error = DatasetError;

    fn combatants(&mut self) -> Result<Vec<Combatant<u32>>, DatasetError> {
        let table = Table::open(&self.combatants)?;
        let id = table.column(COMBATANT_ID)?;
        let strength = table.column(COMBATANT_STRENGTH)?;

        let combatants: Vec<_> = table
            .rows(move |row| Some(Combatant::new(parse(row, id)?, parse(row, strength)?)))
            .collect();
        if combatants.is_empty() {
            return Err(DatasetError::Empty {
                what: "combatants",
                path: self.combatants.clone(),
            });
        }
        Ok(combatants)
    }

    fn venues(&mut self) -> Result<Vec<Venue<u32>>, DatasetError> {
        let table = Table::open(&self.venues)?;
        let id = table.column(VENUE_ID)?;

        let venues: Vec<_> = table.rows(move |row| Some(Venue::new(parse(row, id)?))).collect();
        if venues.is_empty() {
            return Err(DatasetError::Empty {
                what: "venues",
                path: self.venues.clone(),
            });
        }
        Ok(venues)
    }

    fn ownership_pairs(&mut self) -> Result<Vec<(u32, u32)>, DatasetError> {
        let table = Table::open(&self.ownership)?;
        let owner = table.column(OWNER_ID)?;
        let combatant = table.column(OWNED_COMBATANT)?;

        Ok(table
            .rows(move |row| Some((parse(row, combatant)?, parse(row, owner)?)))
            .collect())
    }
}

/// Read one integer id column, e.g. combatant or owner ids for assignment
pub fn read_id_column(path: &Path, names: &[&str]) -> Result<Vec<u32>, DatasetError> {
    let table = Table::open(path)?;
    let column = table.column(names)?;
    let ids: Vec<u32> = table.rows(move |row| parse(row, column)).collect();
    if ids.is_empty() {
        return Err(DatasetError::Empty {
            what: "ids",
            path: path.to_path_buf(),
        });
    }
    Ok(ids)
}

/// Column names accepted for combatant ids in `pokemon.csv`
pub fn combatant_id_columns() -> &'static [&'static str] {
    COMBATANT_ID
}

/// Column names accepted for owner ids in `trainer.csv`
pub fn owner_id_columns() -> &'static [&'static str] {
    OWNER_ID
}

/// A fully read CSV file
struct Table {
    path: PathBuf,
    headers: StringRecord,
    records: Vec<StringRecord>,
}

impl Table {
    fn open(path: &Path) -> Result<Self, DatasetError> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| DatasetError::csv(path, e))?;
        let headers = reader
            .headers()
            .map_err(|e| DatasetError::csv(path, e))?
            .clone();

        let mut records = Vec::new();
        for (line, record) in reader.records().enumerate() {
            match record {
                Ok(record) => records.push(record),
                Err(e) => warn!(path = %path.display(), line = line + 2, error = %e, "skipping unreadable row"),
            }
        }
        debug!(path = %path.display(), rows = records.len(), "loaded table");

        Ok(Self {
            path: path.to_path_buf(),
            headers,
            records,
        })
    }

    /// Index of the first accepted name present in the header row
    fn column(&self, names: &[&str]) -> Result<usize, DatasetError> {
        names
            .iter()
            .find_map(|name| {
                self.headers
                    .iter()
                    .position(|header| header.eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| DatasetError::MissingColumn {
                path: self.path.clone(),
                column: names.join("|"),
            })
    }

    /// Map every row, skipping (and logging) those that yield nothing
    fn rows<'a, T, F>(&'a self, mut map: F) -> impl Iterator<Item = T> + 'a
    where
        T: 'a,
        F: FnMut(&StringRecord) -> Option<T> + 'a,
    {
        self.records.iter().enumerate().filter_map(move |(line, row)| {
            let item = map(row);
            if item.is_none() {
                warn!(path = %self.path.display(), line = line + 2, "skipping malformed row");
            }
            item
        })
    }
}

fn parse<T: std::str::FromStr>(row: &StringRecord, column: usize) -> Option<T> {
    row.get(column)?.parse().ok()
}

#[cfg(test)]
#[path = "csv_source_tests.rs"]
mod csv_source_tests;
