//! Round-robin scheduling with the circle method

use super::models::{Match, Round, Schedule, Slot};
use crate::error::AppError;
use crate::roster::{Participant, ensure_enough_participants};
use tracing::debug;

/// Builds a full round-robin schedule.
///
/// With an odd roster a bye is appended so the working size `n` is even. Each
/// of the `n - 1` rounds pairs position `i` with position `n - 1 - i`, dropping
/// pairs that involve the bye, then rotates every position except the first
/// one step clockwise: `[p0, last, p1, ..., p(n-2)]`. Every pair of real
/// participants meets exactly once and nobody plays twice in a round.
///
/// Seed ranks are ignored.
pub fn round_robin(roster: &[Participant]) -> Result<Schedule, AppError> {
    ensure_enough_participants(roster.len())?;

    let mut slots: Vec<Slot> = roster.iter().cloned().map(Slot::Entrant).collect();
    if slots.len() % 2 != 0 {
        slots.push(Slot::Bye);
    }

    let n = slots.len();
    debug!("Round-robin over {} slots, {} rounds", n, n - 1);

    let mut schedule = Schedule::with_capacity(n - 1);
    for _ in 0..n - 1 {
        schedule.push(pair_positions(&slots));
        rotate(&mut slots);
    }

    Ok(schedule)
}

fn pair_positions(slots: &[Slot]) -> Round {
    let n = slots.len();
    (0..n / 2)
        .map(|i| (&slots[i], &slots[n - 1 - i]))
        .filter(|(a, b)| !a.is_bye() && !b.is_bye())
        .map(|(a, b)| Match::new(a.clone(), b.clone()))
        .collect()
}

/// Keeps position 0 fixed and moves the last slot to position 1.
fn rotate(slots: &mut [Slot]) {
    if slots.len() > 2 {
        slots[1..].rotate_right(1);
    }
}
