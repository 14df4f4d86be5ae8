use crate::draw::{Bracket, Match, Round, Schedule, Slot};
use crate::roster::{Participant, RosterEntry};
use std::collections::{HashMap, HashSet};

/// Test utilities for creating rosters and checking generated draws
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates an unseeded roster from the given names
    pub fn roster(names: &[&str]) -> Vec<Participant> {
        names.iter().map(|name| Participant::new(*name)).collect()
    }

    /// Creates a roster where every participant carries a numeric seed
    pub fn seeded_roster(entries: &[(&str, u32)]) -> Vec<Participant> {
        entries
            .iter()
            .map(|(name, seed)| Participant::seeded(*name, *seed))
            .collect()
    }

    /// Creates `count` unseeded participants named "Team 1" to "Team {count}"
    pub fn numbered_roster(count: usize) -> Vec<Participant> {
        (1..=count)
            .map(|i| Participant::new(format!("Team {i}")))
            .collect()
    }

    /// Creates raw roster records as a file would supply them
    pub fn entries(records: &[(&str, Option<&str>)]) -> Vec<RosterEntry> {
        records
            .iter()
            .map(|(name, seed)| match seed {
                Some(seed) => RosterEntry::with_seed(*name, *seed),
                None => RosterEntry::new(*name),
            })
            .collect()
    }
}

/// Property-based testing utilities
pub struct PropertyTesting;

impl PropertyTesting {
    /// Validates a single-round pairing: every participant appears exactly
    /// once and only an odd roster gets a single bye.
    pub fn validate_single_round(roster: &[Participant], round: &Round) -> Result<(), String> {
        let expected_matches = roster.len().div_ceil(2);
        if round.len() != expected_matches {
            return Err(format!(
                "Expected {} matches for {} participants, got {}",
                expected_matches,
                roster.len(),
                round.len()
            ));
        }

        Self::validate_matches(round)?;

        let byes = round.iter().filter(|m| m.has_bye()).count();
        if byes != roster.len() % 2 {
            return Err(format!(
                "Expected {} byes for {} participants, got {}",
                roster.len() % 2,
                roster.len(),
                byes
            ));
        }

        let expected = Self::name_counts(roster.iter().map(|p| p.name.as_str()));
        let actual = Self::name_counts(Self::entrants(round));
        if expected != actual {
            return Err("Round does not contain every participant exactly once".to_string());
        }

        Ok(())
    }

    /// Validates a round-robin schedule: every pair meets exactly once and no
    /// participant plays twice in the same round.
    pub fn validate_round_robin(roster: &[Participant], schedule: &Schedule) -> Result<(), String> {
        let n = roster.len();
        let expected_rounds = if n % 2 == 0 { n - 1 } else { n };
        if schedule.len() != expected_rounds {
            return Err(format!(
                "Expected {} rounds for {} participants, got {}",
                expected_rounds,
                n,
                schedule.len()
            ));
        }

        let mut pairs = HashSet::new();
        for (r, round) in schedule.iter().enumerate() {
            if round.len() != n / 2 {
                return Err(format!(
                    "Round {} has {} matches, expected {}",
                    r + 1,
                    round.len(),
                    n / 2
                ));
            }

            let mut seen = HashSet::new();
            for m in round {
                let (a, b) = m
                    .entrant_names()
                    .ok_or_else(|| format!("Round {} contains a non-entrant slot", r + 1))?;
                if !seen.insert(a) || !seen.insert(b) {
                    return Err(format!("Participant appears twice in round {}", r + 1));
                }
                let pair = if a <= b { (a, b) } else { (b, a) };
                if !pairs.insert(pair) {
                    return Err(format!("Pair {a} vs {b} meets more than once"));
                }
            }
        }

        let expected_pairs = n * (n - 1) / 2;
        if pairs.len() != expected_pairs {
            return Err(format!(
                "Expected {} distinct pairs, got {}",
                expected_pairs,
                pairs.len()
            ));
        }

        Ok(())
    }

    /// Validates the structure of a knockout bracket built from `roster`
    pub fn validate_bracket(roster: &[Participant], bracket: &Bracket) -> Result<(), String> {
        let padded = roster.len().next_power_of_two();
        if bracket.padded_size() != padded {
            return Err(format!(
                "Expected bracket size {}, got {}",
                padded,
                bracket.padded_size()
            ));
        }

        let expected_rounds = padded.trailing_zeros() as usize;
        if bracket.round_count() != expected_rounds {
            return Err(format!(
                "Expected {} rounds, got {}",
                expected_rounds,
                bracket.round_count()
            ));
        }

        let first = bracket.first_round();
        Self::validate_matches(first)?;
        let bye_slots = first.iter().filter(|m| m.has_bye()).count();
        if bracket.first_round_byes() != bye_slots || bye_slots != padded - roster.len() {
            return Err(format!(
                "Bracket reports {} byes but the first round holds {} (expected {})",
                bracket.first_round_byes(),
                bye_slots,
                padded - roster.len()
            ));
        }
        let expected = Self::name_counts(roster.iter().map(|p| p.name.as_str()));
        let actual = Self::name_counts(Self::entrants(first));
        if expected != actual {
            return Err("First round does not contain every participant exactly once".to_string());
        }

        for (r, round) in bracket.rounds.iter().enumerate().skip(1) {
            let previous = bracket.rounds[r - 1].len();
            if round.len() * 2 != previous {
                return Err(format!("Round {} does not halve the previous round", r + 1));
            }
            for (i, m) in round.iter().enumerate() {
                match (&m.team1, &m.team2) {
                    (Slot::WinnerOf(a), Slot::WinnerOf(b))
                        if a.round == r - 1
                            && b.round == r - 1
                            && a.index == 2 * i
                            && b.index == 2 * i + 1 => {}
                    _ => {
                        return Err(format!(
                            "Match {} of round {} does not reference its feeder matches",
                            i + 1,
                            r + 1
                        ));
                    }
                }
            }
        }

        Ok(())
    }

    fn validate_matches(round: &[Match]) -> Result<(), String> {
        for (i, m) in round.iter().enumerate() {
            if m.team1.is_bye() && m.team2.is_bye() {
                return Err(format!("Match {} pairs a bye with a bye", i + 1));
            }
        }
        Ok(())
    }

    fn entrants(round: &[Match]) -> impl Iterator<Item = &str> {
        round
            .iter()
            .flat_map(|m| [&m.team1, &m.team2])
            .filter_map(|slot| slot.participant().map(|p| p.name.as_str()))
    }

    fn name_counts<'a>(names: impl Iterator<Item = &'a str>) -> HashMap<&'a str, usize> {
        let mut counts = HashMap::new();
        for name in names {
            *counts.entry(name).or_insert(0) += 1;
        }
        counts
    }
}
