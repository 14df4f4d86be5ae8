//! Random single-round pairing

use super::models::{Match, Round, Slot};
use crate::error::AppError;
use crate::roster::{Participant, ensure_enough_participants};
use rand::Rng;
use rand::seq::SliceRandom;

/// Builds one round of randomly paired matches.
///
/// A private copy of the roster is shuffled with `rng`. With an odd count the
/// last shuffled entry receives a bye, listed first, and the rest are paired
/// in shuffled order.
pub fn random_pairing<R: Rng + ?Sized>(
    roster: &[Participant],
    rng: &mut R,
) -> Result<Round, AppError> {
    ensure_enough_participants(roster.len())?;

    let mut pool = roster.to_vec();
    pool.shuffle(rng);

    let mut matches = Round::with_capacity(pool.len() / 2 + 1);
    if pool.len() % 2 != 0
        && let Some(last) = pool.pop()
    {
        matches.push(Match::new(last, Slot::Bye));
    }

    let mut remaining = pool.into_iter();
    while let (Some(team1), Some(team2)) = (remaining.next(), remaining.next()) {
        matches.push(Match::new(team1, team2));
    }

    Ok(matches)
}
