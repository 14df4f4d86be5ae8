//! Single-elimination bracket construction

use super::models::{Bracket, Match, MatchId, Round, Slot};
use crate::error::AppError;
use crate::roster::{Participant, ensure_enough_participants};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Builds the structure of a knockout bracket.
///
/// The roster is shuffled with `rng` and padded with byes up to the next power
/// of two. Contested first-round matches come first, followed by one match per
/// remaining entrant against a bye, so a bye never meets a bye. Every later
/// round pairs the winners of adjacent matches of the previous round until a
/// single final remains.
///
/// The result is structure only; no winners are resolved.
pub fn knockout_bracket<R: Rng + ?Sized>(
    roster: &[Participant],
    rng: &mut R,
) -> Result<Bracket, AppError> {
    ensure_enough_participants(roster.len())?;

    let mut entrants = roster.to_vec();
    entrants.shuffle(rng);

    let entrant_count = entrants.len();
    let padded = entrant_count.next_power_of_two();
    let byes = padded - entrant_count;
    debug!(
        "Knockout bracket: {} entrants padded to {} with {} byes",
        entrant_count, padded, byes
    );

    let mut rounds = vec![first_round(entrants, byes)];
    let mut previous_len = padded / 2;
    while previous_len > 1 {
        let previous_round = rounds.len() - 1;
        let next: Round = (0..previous_len / 2)
            .map(|i| {
                Match::new(
                    Slot::WinnerOf(MatchId::new(previous_round, 2 * i)),
                    Slot::WinnerOf(MatchId::new(previous_round, 2 * i + 1)),
                )
            })
            .collect();
        previous_len = next.len();
        rounds.push(next);
    }

    Ok(Bracket {
        rounds,
        entrants: entrant_count,
        byes,
    })
}

/// Builds a knockout bracket from a plain `u64` seed.
///
/// Uses ChaCha8 so the same roster and seed give the same bracket on every
/// platform.
pub fn knockout_from_seed(roster: &[Participant], seed: u64) -> Result<Bracket, AppError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    knockout_bracket(roster, &mut rng)
}

fn first_round(entrants: Vec<Participant>, byes: usize) -> Round {
    let contested = entrants.len() - byes;
    let mut remaining = entrants.into_iter();
    let mut round = Round::with_capacity(contested / 2 + byes);

    for _ in 0..contested / 2 {
        if let (Some(team1), Some(team2)) = (remaining.next(), remaining.next()) {
            round.push(Match::new(team1, team2));
        }
    }
    round.extend(remaining.map(|entrant| Match::new(entrant, Slot::Bye)));

    round
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_four_entrants_make_two_rounds() {
        let roster = TestDataBuilder::roster(&["A", "B", "C", "D"]);

        let bracket = knockout_from_seed(&roster, 1).unwrap();

        assert_eq!(bracket.round_count(), 2);
        assert_eq!(bracket.rounds[0].len(), 2);
        assert_eq!(bracket.rounds[1].len(), 1);
        assert_eq!(bracket.first_round_byes(), 0);
        assert_eq!(
            bracket.rounds[1][0],
            Match::new(
                Slot::WinnerOf(MatchId::new(0, 0)),
                Slot::WinnerOf(MatchId::new(0, 1))
            )
        );
    }

    #[test]
    fn test_five_entrants_padded_to_eight() {
        let roster = TestDataBuilder::roster(&["A", "B", "C", "D", "E"]);

        let bracket = knockout_from_seed(&roster, 3).unwrap();

        assert_eq!(bracket.padded_size(), 8);
        assert_eq!(bracket.first_round_byes(), 3);
        assert_eq!(bracket.round_count(), 3);
        let first = bracket.first_round();
        assert_eq!(first.len(), 4);
        // One contested match, then three entrants against byes
        assert!(!first[0].has_bye());
        for m in &first[1..] {
            assert!(m.team1.participant().is_some());
            assert!(m.team2.is_bye());
        }
    }

    #[test]
    fn test_two_entrants_single_final() {
        let roster = TestDataBuilder::roster(&["A", "B"]);

        let bracket = knockout_from_seed(&roster, 0).unwrap();

        assert_eq!(bracket.round_count(), 1);
        assert_eq!(bracket.rounds[0].len(), 1);
        assert_eq!(bracket.champion_source(), Some(MatchId::new(0, 0)));
    }

    #[test]
    fn test_same_seed_same_bracket() {
        let roster = TestDataBuilder::numbered_roster(11);

        let first = knockout_from_seed(&roster, 2024).unwrap();
        let second = knockout_from_seed(&roster, 2024).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_every_entrant_placed_once() {
        let roster = TestDataBuilder::numbered_roster(13);

        let bracket = knockout_from_seed(&roster, 5).unwrap();

        let mut placed: Vec<String> = bracket
            .first_round()
            .iter()
            .flat_map(|m| [&m.team1, &m.team2])
            .filter_map(|slot| slot.participant())
            .map(|participant| participant.name.clone())
            .collect();
        placed.sort();
        let mut expected: Vec<String> = roster.iter().map(|p| p.name.clone()).collect();
        expected.sort();
        assert_eq!(placed, expected);
    }

    #[test]
    fn test_input_roster_is_not_mutated() {
        let roster = TestDataBuilder::numbered_roster(6);
        let before = roster.clone();

        let _ = knockout_from_seed(&roster, 8).unwrap();
        assert_eq!(roster, before);
    }

    #[test]
    fn test_single_participant_is_rejected() {
        let roster = TestDataBuilder::roster(&["A"]);
        assert!(matches!(
            knockout_from_seed(&roster, 1),
            Err(AppError::InsufficientParticipants { found: 1 })
        ));
    }
}
