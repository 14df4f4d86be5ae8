//! Property-based tests for the draw generators
//!
//! These tests verify the structural invariants of every draw kind across a
//! wide range of roster sizes and RNG seeds.
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tournament_draws::draw::{
    BracketLayout, LayoutOptions, knockout_from_seed, random_pairing, round_robin, seeded_pairing,
};
use tournament_draws::testing_utils::{PropertyTesting, TestDataBuilder};

// Roster sizes covered by the property tests
fn roster_size() -> impl Strategy<Value = usize> {
    2usize..=40
}

proptest! {
    #[test]
    fn test_round_robin_every_pair_meets_once(n in roster_size()) {
        let roster = TestDataBuilder::numbered_roster(n);
        let schedule = round_robin(&roster).unwrap();

        prop_assert_eq!(PropertyTesting::validate_round_robin(&roster, &schedule), Ok(()));
    }

    #[test]
    fn test_round_robin_odd_rosters_rest_each_participant_once(n in (1usize..=20).prop_map(|k| 2 * k + 1)) {
        let roster = TestDataBuilder::numbered_roster(n);
        let schedule = round_robin(&roster).unwrap();

        prop_assert_eq!(schedule.len(), n);
        for participant in &roster {
            let rounds_played = schedule
                .iter()
                .filter(|round| {
                    round.iter().any(|m| {
                        m.entrant_names()
                            .is_some_and(|(a, b)| a == participant.name || b == participant.name)
                    })
                })
                .count();
            // Exactly one idle round per participant
            prop_assert_eq!(rounds_played, n - 1);
        }
    }

    #[test]
    fn test_knockout_structure(n in roster_size(), seed in any::<u64>()) {
        let roster = TestDataBuilder::numbered_roster(n);
        let bracket = knockout_from_seed(&roster, seed).unwrap();

        let padded = n.next_power_of_two();
        prop_assert_eq!(bracket.first_round().len(), padded / 2);
        prop_assert_eq!(bracket.first_round_byes(), padded - n);
        prop_assert_eq!(bracket.round_count(), padded.trailing_zeros() as usize);
        prop_assert_eq!(PropertyTesting::validate_bracket(&roster, &bracket), Ok(()));
    }

    #[test]
    fn test_knockout_is_deterministic(n in roster_size(), seed in any::<u64>()) {
        let roster = TestDataBuilder::numbered_roster(n);

        let first = knockout_from_seed(&roster, seed).unwrap();
        let second = knockout_from_seed(&roster, seed).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_random_pairing_covers_roster(n in roster_size(), seed in any::<u64>()) {
        let roster = TestDataBuilder::numbered_roster(n);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let round = random_pairing(&roster, &mut rng).unwrap();

        prop_assert_eq!(PropertyTesting::validate_single_round(&roster, &round), Ok(()));
    }

    #[test]
    fn test_seeded_pairing_reflects_ranks(n in roster_size()) {
        let names: Vec<String> = (1..=n).map(|i| format!("Seed {i}")).collect();
        let entries: Vec<(&str, u32)> = names
            .iter()
            .enumerate()
            .rev()
            .map(|(i, name)| (name.as_str(), i as u32 + 1))
            .collect();
        let roster = TestDataBuilder::seeded_roster(&entries);

        let round = seeded_pairing(&roster).unwrap();

        prop_assert_eq!(PropertyTesting::validate_single_round(&roster, &round), Ok(()));
        let contested: Vec<(&str, &str)> =
            round.iter().filter_map(|m| m.entrant_names()).collect();
        let paired = n - n % 2;
        for (i, (a, b)) in contested.iter().enumerate() {
            prop_assert_eq!(*a, format!("Seed {}", i + 1));
            prop_assert_eq!(*b, format!("Seed {}", paired - i));
        }
    }

    #[test]
    fn test_layout_node_and_connector_counts(n in roster_size(), seed in any::<u64>()) {
        let roster = TestDataBuilder::numbered_roster(n);
        let bracket = knockout_from_seed(&roster, seed).unwrap();
        let matches: usize = bracket.rounds.iter().map(Vec::len).sum();

        let layout = BracketLayout::compute(&bracket, &LayoutOptions::default());

        prop_assert_eq!(layout.nodes.len(), 2 * matches + 1);
        prop_assert_eq!(layout.connectors.len(), 4 * matches);
        prop_assert!(layout.connectors.iter().all(|c| c.is_horizontal() || c.is_vertical()));
    }
}
