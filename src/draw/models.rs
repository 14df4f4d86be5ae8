//! Draw data structures shared by all generators

use crate::constants::labels;
use crate::roster::Participant;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer identifier of a match inside a draw (both parts 0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId {
    pub round: usize,
    pub index: usize,
}

impl MatchId {
    pub fn new(round: usize, index: usize) -> Self {
        Self { round, index }
    }

    /// 1-based match number within its round, as shown to users
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// One side of a match.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// A real participant from the roster
    Entrant(Participant),
    /// No opponent; the other side advances automatically
    Bye,
    /// The undetermined winner of an earlier bracket match
    WinnerOf(MatchId),
}

impl Slot {
    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }

    pub fn participant(&self) -> Option<&Participant> {
        match self {
            Slot::Entrant(participant) => Some(participant),
            _ => None,
        }
    }

    /// Label for this slot, with the bye rendered as `bye_label`
    pub fn label_with(&self, bye_label: &str) -> String {
        match self {
            Slot::Entrant(participant) => participant.name.clone(),
            Slot::Bye => bye_label.to_string(),
            Slot::WinnerOf(source) => format!("{} {}", labels::WINNER_PREFIX, source.number()),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label_with(labels::BYE))
    }
}

impl From<Participant> for Slot {
    fn from(participant: Participant) -> Self {
        Slot::Entrant(participant)
    }
}

// Entrants and byes serialize as plain strings for tabular consumers,
// placeholders keep their integer source identifier.
impl Serialize for Slot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Slot::Entrant(participant) => serializer.serialize_str(&participant.name),
            Slot::Bye => serializer.serialize_str(labels::BYE),
            Slot::WinnerOf(source) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("winner_of", source)?;
                map.end()
            }
        }
    }
}

/// A pairing of two slots. At most one side is ever a bye.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub team1: Slot,
    pub team2: Slot,
}

impl Match {
    pub fn new(team1: impl Into<Slot>, team2: impl Into<Slot>) -> Self {
        Self {
            team1: team1.into(),
            team2: team2.into(),
        }
    }

    pub fn has_bye(&self) -> bool {
        self.team1.is_bye() || self.team2.is_bye()
    }

    /// Names of both sides when both are real participants
    pub fn entrant_names(&self) -> Option<(&str, &str)> {
        match (self.team1.participant(), self.team2.participant()) {
            (Some(a), Some(b)) => Some((a.name.as_str(), b.name.as_str())),
            _ => None,
        }
    }
}

/// Ordered matches of one round; the order is the display/schedule order.
pub type Round = Vec<Match>;

/// Ordered rounds of a multi-round draw.
pub type Schedule = Vec<Round>;

/// Structure of a single-elimination bracket.
///
/// The first round holds the (shuffled) entrants and byes, every later round
/// holds [`Slot::WinnerOf`] placeholders pointing at the previous round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bracket {
    pub rounds: Vec<Round>,
    /// Number of real participants in the bracket
    pub entrants: usize,
    /// Number of byes padded into the first round
    pub byes: usize,
}

impl Bracket {
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Bracket size after padding to a power of two
    pub fn padded_size(&self) -> usize {
        self.rounds.first().map_or(0, |round| round.len() * 2)
    }

    /// Number of byes inserted into the first round
    pub fn first_round_byes(&self) -> usize {
        self.byes
    }

    pub fn first_round(&self) -> &[Match] {
        self.rounds.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// The final match, whose winner takes the champion slot
    pub fn champion_source(&self) -> Option<MatchId> {
        let last = self.rounds.len().checked_sub(1)?;
        (!self.rounds[last].is_empty()).then(|| MatchId::new(last, 0))
    }

    /// Conventional name of a round counted from the end of the bracket
    pub fn round_name(&self, round: usize) -> String {
        let remaining = self.rounds.len().saturating_sub(round);
        match remaining {
            1 => "Final".to_string(),
            2 => "Semi-finals".to_string(),
            3 => "Quarter-finals".to_string(),
            _ => format!("Round of {}", 1usize << remaining),
        }
    }
}
