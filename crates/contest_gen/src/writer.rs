//! Output writers: JSON document list or flat CSV table.
//!
//! Output is rendered fully in memory and written in one call, so a failed
//! run never leaves a partial file behind.

use contest_core::{utc_seconds, ContestRecord, Identifier};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::DatasetError;

/// Output representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed list of contest documents
    #[default]
    Json,
    /// One row per contest
    Csv,
}

impl OutputFormat {
    /// Guess from the output file extension, falling back to JSON
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

#[derive(Serialize)]
struct ContestDocument<'a, Id> {
    #[serde(rename = "_id")]
    id: &'a str,
    date: String,
    gym_id: &'a Id,
    participants: Participants<'a, Id>,
}

#[derive(Serialize)]
struct Participants<'a, Id> {
    #[serde(rename = "hasWon")]
    has_won: [Side<'a, Id>; 1],
    #[serde(rename = "hasLost")]
    has_lost: [Side<'a, Id>; 1],
}

#[derive(Serialize)]
struct Side<'a, Id> {
    trainer_id: &'a Id,
    pokemon_id: &'a Id,
}

impl<'a, Id> From<&'a ContestRecord<Id>> for ContestDocument<'a, Id> {
    fn from(record: &'a ContestRecord<Id>) -> Self {
        Self {
            id: &record.id,
            date: record.date.format(utc_seconds::FORMAT).to_string(),
            gym_id: &record.venue_id,
            participants: Participants {
                has_won: [Side {
                    trainer_id: &record.winner.owner_id,
                    pokemon_id: &record.winner.combatant_id,
                }],
                has_lost: [Side {
                    trainer_id: &record.loser.owner_id,
                    pokemon_id: &record.loser.combatant_id,
                }],
            },
        }
    }
}

/// Render records as a pretty-printed JSON array of documents
pub fn render_json<Id: Identifier + Serialize>(records: &[ContestRecord<Id>]) -> Result<String, serde_json::Error> {
    let documents: Vec<ContestDocument<'_, Id>> = records.iter().map(ContestDocument::from).collect();
    serde_json::to_string_pretty(&documents)
}

/// Render records as a CSV table, date without time of day
pub fn render_csv<Id: Identifier>(records: &[ContestRecord<Id>]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "battle_id",
        "date",
        "pok1_id",
        "pok2_id",
        "pokemon_winner_id",
        "trainer_winner_id",
        "gym_id",
    ])?;

    for record in records {
        writer.write_record([
            record.sequence.to_string(),
            record.date.format("%Y-%m-%d").to_string(),
            record.base_combatant_id.to_string(),
            record.opponent_id().to_string(),
            record.winner.combatant_id.to_string(),
            record.winner.owner_id.to_string(),
            record.venue_id.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write records to `path` in the requested format
pub fn write_records<Id: Identifier + Serialize>(
    records: &[ContestRecord<Id>],
    format: OutputFormat,
    path: &Path,
) -> Result<(), DatasetError> {
    let contents = match format {
        OutputFormat::Json => render_json(records).map_err(|e| DatasetError::json(path, e))?,
        OutputFormat::Csv => render_csv(records).map_err(|e| DatasetError::csv(path, e))?,
    };
    write_file(path, &contents)
}

/// Render `(combatant, owner)` pairs as `trainerID,pokename` rows
pub fn render_ownership<Id: fmt::Display>(pairs: &[(Id, Id)]) -> Result<String, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["trainerID", "pokename"])?;
    for (combatant, owner) in pairs {
        writer.write_record([owner.to_string(), combatant.to_string()])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write an ownership table to `path`
pub fn write_ownership<Id: fmt::Display>(pairs: &[(Id, Id)], path: &Path) -> Result<(), DatasetError> {
    let contents = render_ownership(pairs).map_err(|e| DatasetError::csv(path, e))?;
    write_file(path, &contents)
}

fn write_file(path: &Path, contents: &str) -> Result<(), DatasetError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| DatasetError::io(parent, e))?;
    }
    std::fs::write(path, contents).map_err(|e| DatasetError::io(path, e))
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod writer_tests;
