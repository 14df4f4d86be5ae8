//! Roster records and normalization
//!
//! Raw [`RosterEntry`] records come from a roster file (see [`loader`]) and are
//! turned into [`Participant`]s by [`normalize_roster`] before any draw is made.

pub mod loader;

use crate::constants::MIN_PARTICIPANTS;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub use loader::{RosterFormat, load_roster, parse_roster};

/// A seed cell exactly as it was read from the roster.
///
/// Spreadsheet exports carry numbers as text, so the value is kept raw and only
/// interpreted as a rank when a seeded draw asks for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedValue {
    Rank(f64),
    Text(String),
}

impl SeedValue {
    /// Interprets the cell as a numeric seed rank.
    ///
    /// Returns the reason as `Err` when the value is not a finite number.
    pub fn rank(&self) -> Result<f64, String> {
        let rank = match self {
            SeedValue::Rank(rank) => *rank,
            SeedValue::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| "not a number".to_string())?,
        };

        if rank.is_finite() {
            Ok(rank)
        } else {
            Err("not a finite number".to_string())
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, SeedValue::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for SeedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedValue::Rank(rank) => write!(f, "{rank}"),
            SeedValue::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<u32> for SeedValue {
    fn from(rank: u32) -> Self {
        SeedValue::Rank(f64::from(rank))
    }
}

impl From<&str> for SeedValue {
    fn from(text: &str) -> Self {
        SeedValue::Text(text.to_string())
    }
}

/// One raw roster record as supplied by the file layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(default, alias = "team", alias = "Team", alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "Seed")]
    pub seed: Option<SeedValue>,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            seed: None,
        }
    }

    pub fn with_seed(name: impl Into<String>, seed: impl Into<SeedValue>) -> Self {
        Self {
            name: Some(name.into()),
            seed: Some(seed.into()),
        }
    }
}

/// A tournament participant. Names are not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<SeedValue>,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            seed: None,
        }
    }

    pub fn seeded(name: impl Into<String>, seed: impl Into<SeedValue>) -> Self {
        Self {
            name: name.into(),
            seed: Some(seed.into()),
        }
    }
}

/// Validates and prepares raw roster records.
///
/// Entries without a name (or with a blank one) are discarded, names are trimmed
/// and blank seed cells become "no seed". Duplicate names are kept as distinct
/// participants.
///
/// # Errors
/// * `AppError::InsufficientParticipants` - fewer than two named entries remain
pub fn normalize_roster(entries: &[RosterEntry]) -> Result<Vec<Participant>, AppError> {
    let participants: Vec<Participant> = entries
        .iter()
        .filter_map(|entry| {
            let name = entry.name.as_deref().map(str::trim).unwrap_or_default();
            if name.is_empty() {
                return None;
            }
            let seed = entry.seed.clone().filter(|seed| !seed.is_blank());
            Some(Participant {
                name: name.to_string(),
                seed,
            })
        })
        .collect();

    debug!(
        "Normalized roster: {} of {} entries kept",
        participants.len(),
        entries.len()
    );

    ensure_enough_participants(participants.len())?;
    Ok(participants)
}

/// Shared precondition of every draw generator.
pub(crate) fn ensure_enough_participants(found: usize) -> Result<(), AppError> {
    if found < MIN_PARTICIPANTS {
        return Err(AppError::insufficient_participants(found));
    }
    Ok(())
}
