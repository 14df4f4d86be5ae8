//! Roster file loading (CSV, JSON and TOML)

use super::{RosterEntry, SeedValue};
use crate::error::AppError;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Column headers accepted as the participant name in CSV rosters, in priority order
const NAME_COLUMNS: [&str; 2] = ["team", "name"];

/// Column header for the optional seed rank in CSV rosters
const SEED_COLUMN: &str = "seed";

/// Supported roster file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Csv,
    Json,
    Toml,
}

impl RosterFormat {
    /// Determines the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("csv") => Ok(RosterFormat::Csv),
            Some("json") => Ok(RosterFormat::Json),
            Some("toml") => Ok(RosterFormat::Toml),
            _ => Err(AppError::unsupported_roster_format(
                path.display().to_string(),
            )),
        }
    }
}

#[derive(Deserialize)]
struct JsonRoster {
    participants: Vec<RosterEntry>,
}

#[derive(Deserialize)]
struct TomlRoster {
    #[serde(default, alias = "participant")]
    participants: Vec<RosterEntry>,
}

/// Reads a roster file into raw entries.
///
/// The format is picked from the file extension. Entries are returned as read;
/// run them through [`super::normalize_roster`] before generating a draw.
///
/// # Errors
/// * `AppError::UnsupportedRosterFormat` - unknown file extension
/// * `AppError::Io` - the file could not be read
/// * `AppError::RosterParse` / `AppError::MissingColumn` - malformed content
pub async fn load_roster(path: &Path) -> Result<Vec<RosterEntry>, AppError> {
    let format = RosterFormat::from_path(path)?;
    let content = tokio::fs::read_to_string(path).await?;
    let entries = parse_roster(&content, format, &path.display().to_string())?;
    info!("Loaded {} roster entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parses roster content that has already been read.
///
/// `source` names the origin of the content in error messages.
pub fn parse_roster(
    content: &str,
    format: RosterFormat,
    source: &str,
) -> Result<Vec<RosterEntry>, AppError> {
    debug!("Parsing {format:?} roster from {source}");
    match format {
        RosterFormat::Csv => parse_csv(content, source),
        RosterFormat::Json => parse_json(content, source),
        RosterFormat::Toml => toml::from_str::<TomlRoster>(content)
            .map(|roster| roster.participants)
            .map_err(|e| AppError::roster_parse(source, e.to_string())),
    }
}

// A bare list of records or an object with a `participants` list. The shape is
// picked first so serde reports the offending field instead of a variant mismatch.
fn parse_json(content: &str, source: &str) -> Result<Vec<RosterEntry>, AppError> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| AppError::roster_parse(source, e.to_string()))?;

    let entries = match value {
        serde_json::Value::Array(_) => serde_json::from_value::<Vec<RosterEntry>>(value),
        serde_json::Value::Object(_) => {
            serde_json::from_value::<JsonRoster>(value).map(|roster| roster.participants)
        }
        _ => {
            return Err(AppError::roster_parse(
                source,
                "expected a list of participants or an object with a 'participants' list",
            ));
        }
    };

    entries.map_err(|e| AppError::roster_parse(source, e.to_string()))
}

fn parse_csv(content: &str, source: &str) -> Result<Vec<RosterEntry>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let find_column = |wanted: &str| {
        headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(wanted))
    };

    let name_index = NAME_COLUMNS
        .iter()
        .find_map(|column| find_column(*column))
        .ok_or_else(|| AppError::missing_column(source, "Team"))?;
    let seed_index = find_column(SEED_COLUMN);

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        let name = record
            .get(name_index)
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        let seed = seed_index
            .and_then(|index| record.get(index))
            .filter(|seed| !seed.is_empty())
            .map(|seed| SeedValue::Text(seed.to_string()));
        entries.push(RosterEntry { name, seed });
    }

    Ok(entries)
}
