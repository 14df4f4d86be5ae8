//! Tournament draw generation
//!
//! All generators take the roster by shared reference and work on private
//! copies. The randomized ones take an explicit RNG, so a given roster and
//! seed always produce the same draw.

pub mod knockout;
pub mod layout;
pub mod models;
pub mod random;
pub mod round_robin;
pub mod seeded;

pub use knockout::{knockout_bracket, knockout_from_seed};
pub use layout::{BracketLayout, BracketNode, Connector, LayoutOptions, Point};
pub use models::{Bracket, Match, MatchId, Round, Schedule, Slot};
pub use random::random_pairing;
pub use round_robin::round_robin;
pub use seeded::seeded_pairing;

use crate::error::AppError;
use crate::roster::Participant;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// The kind of draw to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawKind {
    Random,
    Seeded,
    #[default]
    RoundRobin,
    Knockout,
}

impl DrawKind {
    pub const ALL: [DrawKind; 4] = [
        DrawKind::Random,
        DrawKind::Seeded,
        DrawKind::RoundRobin,
        DrawKind::Knockout,
    ];

    /// Converts the draw kind to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DrawKind::Random => "random",
            DrawKind::Seeded => "seeded",
            DrawKind::RoundRobin => "round-robin",
            DrawKind::Knockout => "knockout",
        }
    }

    /// Whether generating this kind consumes randomness
    pub fn is_randomized(&self) -> bool {
        matches!(self, DrawKind::Random | DrawKind::Knockout)
    }
}

impl fmt::Display for DrawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrawKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "random" => Ok(DrawKind::Random),
            "seeded" => Ok(DrawKind::Seeded),
            "round-robin" | "roundrobin" | "rr" => Ok(DrawKind::RoundRobin),
            "knockout" | "bracket" | "ko" => Ok(DrawKind::Knockout),
            _ => Err(AppError::config_error(format!(
                "Unknown draw kind '{s}' (expected one of: random, seeded, round-robin, knockout)"
            ))),
        }
    }
}

/// A generated draw, tagged by kind.
///
/// Randomized draws carry the seed that produced them so the exact draw can
/// be generated again.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Draw {
    Random { matches: Round, rng_seed: u64 },
    Seeded { matches: Round },
    RoundRobin { rounds: Schedule },
    Knockout { bracket: Bracket, rng_seed: u64 },
}

impl Draw {
    pub fn kind(&self) -> DrawKind {
        match self {
            Draw::Random { .. } => DrawKind::Random,
            Draw::Seeded { .. } => DrawKind::Seeded,
            Draw::RoundRobin { .. } => DrawKind::RoundRobin,
            Draw::Knockout { .. } => DrawKind::Knockout,
        }
    }

    /// Seed used for randomized draws
    pub fn rng_seed(&self) -> Option<u64> {
        match self {
            Draw::Random { rng_seed, .. } | Draw::Knockout { rng_seed, .. } => Some(*rng_seed),
            _ => None,
        }
    }

    /// All rounds of the draw in display order
    pub fn rounds(&self) -> &[Round] {
        match self {
            Draw::Random { matches, .. } | Draw::Seeded { matches } => std::slice::from_ref(matches),
            Draw::RoundRobin { rounds } => rounds.as_slice(),
            Draw::Knockout { bracket, .. } => bracket.rounds.as_slice(),
        }
    }

    pub fn match_count(&self) -> usize {
        self.rounds().iter().map(Vec::len).sum()
    }

    pub fn bracket(&self) -> Option<&Bracket> {
        match self {
            Draw::Knockout { bracket, .. } => Some(bracket),
            _ => None,
        }
    }
}

/// Generates a draw of the requested kind.
///
/// Randomized kinds seed a ChaCha8 generator from `rng_seed`. When no seed is
/// given one is drawn from OS entropy and returned inside the [`Draw`].
pub fn generate_draw(
    roster: &[Participant],
    kind: DrawKind,
    rng_seed: Option<u64>,
) -> Result<Draw, AppError> {
    info!(
        "Generating {} draw for {} participants",
        kind,
        roster.len()
    );

    let draw = match kind {
        DrawKind::Seeded => Draw::Seeded {
            matches: seeded_pairing(roster)?,
        },
        DrawKind::RoundRobin => Draw::RoundRobin {
            rounds: round_robin(roster)?,
        },
        DrawKind::Random => {
            let seed = rng_seed.unwrap_or_else(rand::random);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            Draw::Random {
                matches: random_pairing(roster, &mut rng)?,
                rng_seed: seed,
            }
        }
        DrawKind::Knockout => {
            let seed = rng_seed.unwrap_or_else(rand::random);
            Draw::Knockout {
                bracket: knockout_from_seed(roster, seed)?,
                rng_seed: seed,
            }
        }
    };

    if let Some(seed) = draw.rng_seed() {
        info!("{} draw generated with RNG seed {}", kind, seed);
    }
    Ok(draw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_draw_kind_parsing() {
        assert_eq!("random".parse::<DrawKind>().unwrap(), DrawKind::Random);
        assert_eq!("Seeded".parse::<DrawKind>().unwrap(), DrawKind::Seeded);
        assert_eq!(
            "round_robin".parse::<DrawKind>().unwrap(),
            DrawKind::RoundRobin
        );
        assert_eq!("bracket".parse::<DrawKind>().unwrap(), DrawKind::Knockout);
        assert!("swiss".parse::<DrawKind>().is_err());
    }

    #[test]
    fn test_draw_kind_display_round_trips() {
        for kind in DrawKind::ALL {
            assert_eq!(kind.to_string().parse::<DrawKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_only_random_kinds_carry_seed() {
        let roster = TestDataBuilder::seeded_roster(&[("A", 1), ("B", 2), ("C", 3), ("D", 4)]);

        for kind in DrawKind::ALL {
            let draw = generate_draw(&roster, kind, Some(5)).unwrap();
            assert_eq!(draw.kind(), kind);
            assert_eq!(draw.rng_seed().is_some(), kind.is_randomized());
        }
    }

    #[test]
    fn test_generated_seed_reproduces_draw() {
        let roster = TestDataBuilder::numbered_roster(10);

        let first = generate_draw(&roster, DrawKind::Knockout, None).unwrap();
        let seed = first.rng_seed().unwrap();
        let second = generate_draw(&roster, DrawKind::Knockout, Some(seed)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_draw_rounds_and_match_count() {
        let roster = TestDataBuilder::roster(&["A", "B", "C", "D"]);

        let round_robin = generate_draw(&roster, DrawKind::RoundRobin, None).unwrap();
        assert_eq!(round_robin.rounds().len(), 3);
        assert_eq!(round_robin.match_count(), 6);
        assert!(round_robin.bracket().is_none());

        let random = generate_draw(&roster, DrawKind::Random, Some(1)).unwrap();
        assert_eq!(random.rounds().len(), 1);
        assert_eq!(random.match_count(), 2);

        let knockout = generate_draw(&roster, DrawKind::Knockout, Some(1)).unwrap();
        assert_eq!(knockout.match_count(), 3);
        assert!(knockout.bracket().is_some());
    }

    #[test]
    fn test_seed_errors_propagate() {
        let roster = TestDataBuilder::roster(&["A", "B"]);

        let result = generate_draw(&roster, DrawKind::Seeded, None);
        assert!(matches!(result, Err(AppError::MissingSeedData { .. })));
    }

    #[test]
    fn test_knockout_json_reports_bracket_counts() {
        let roster = TestDataBuilder::numbered_roster(5);

        let draw = generate_draw(&roster, DrawKind::Knockout, Some(1)).unwrap();
        let json = serde_json::to_value(&draw).unwrap();

        assert_eq!(json["kind"], "knockout");
        assert_eq!(json["rng_seed"], 1);
        assert_eq!(json["bracket"]["entrants"], 5);
        assert_eq!(json["bracket"]["byes"], 3);
        assert_eq!(json["bracket"]["rounds"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_draw_serializes_with_kind_tag() {
        let roster = TestDataBuilder::roster(&["A", "B", "C"]);

        let draw = generate_draw(&roster, DrawKind::RoundRobin, None).unwrap();
        let json = serde_json::to_value(&draw).unwrap();

        assert_eq!(json["kind"], "round-robin");
        assert_eq!(json["rounds"].as_array().unwrap().len(), 3);
        assert_eq!(json["rounds"][0][0]["team1"], "B");
    }
}
