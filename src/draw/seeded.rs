//! Seeded single-round pairing (strongest vs weakest)

use super::models::{Match, Round, Slot};
use crate::error::AppError;
use crate::roster::{Participant, ensure_enough_participants};
use tracing::debug;

/// Builds one round pairing the strongest remaining seed with the weakest.
///
/// Participants are sorted by ascending seed rank (lower rank = stronger). With
/// an odd count the weakest entry is paired with a bye, listed first. The rest
/// are paired `sorted[i]` vs `sorted[len - 1 - i]`.
///
/// # Errors
/// * `AppError::InsufficientParticipants` - fewer than two participants
/// * `AppError::MissingSeedData` - at least one participant has no seed
/// * `AppError::InvalidSeedValue` - a seed is not a finite number or is shared
///   by two participants
pub fn seeded_pairing(roster: &[Participant]) -> Result<Round, AppError> {
    ensure_enough_participants(roster.len())?;

    let mut ranked = rank_participants(roster)?;
    ranked.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    reject_duplicate_ranks(&ranked)?;

    let mut matches = Round::with_capacity(ranked.len() / 2 + 1);

    if ranked.len() % 2 != 0
        && let Some((_, weakest)) = ranked.pop()
    {
        debug!("Odd seeded roster, {} receives a bye", weakest.name);
        matches.push(Match::new(weakest.clone(), Slot::Bye));
    }

    let half = ranked.len() / 2;
    for i in 0..half {
        let (_, strong) = ranked[i];
        let (_, weak) = ranked[ranked.len() - 1 - i];
        matches.push(Match::new(strong.clone(), weak.clone()));
    }

    Ok(matches)
}

/// Resolves every seed to a numeric rank before any sorting happens.
fn rank_participants(roster: &[Participant]) -> Result<Vec<(f64, &Participant)>, AppError> {
    let missing: Vec<String> = roster
        .iter()
        .filter(|participant| participant.seed.is_none())
        .map(|participant| participant.name.clone())
        .collect();
    if !missing.is_empty() {
        return Err(AppError::missing_seed_data(missing));
    }

    roster
        .iter()
        .filter_map(|participant| participant.seed.as_ref().map(|seed| (seed, participant)))
        .map(|(seed, participant)| {
            seed.rank()
                .map(|rank| (rank, participant))
                .map_err(|reason| {
                    AppError::invalid_seed_value(&participant.name, seed.to_string(), reason)
                })
        })
        .collect()
}

fn reject_duplicate_ranks(sorted: &[(f64, &Participant)]) -> Result<(), AppError> {
    for pair in sorted.windows(2) {
        let (rank_a, first) = pair[0];
        let (rank_b, second) = pair[1];
        if rank_a == rank_b {
            return Err(AppError::invalid_seed_value(
                &second.name,
                rank_b.to_string(),
                format!("same seed as {}", first.name),
            ));
        }
    }
    Ok(())
}
