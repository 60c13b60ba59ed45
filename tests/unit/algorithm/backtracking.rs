//! Tests for word ordering, input validation, and the depth-first placer

#[cfg(test)]
mod tests {
    use crossgrid::CrosswordError;
    use crossgrid::algorithm::backtracking::{
        BacktrackingPlacer, SearchBudget, SearchOutcome, SearchStatistics, order_words,
        place_words, validate_words,
    };
    use crossgrid::algorithm::validation::verify_layout;
    use crossgrid::spatial::Orientation;
    use rand::{SeedableRng, rngs::StdRng};
    use std::time::Duration;

    // Tests words are sorted longest first with ties in input order
    // Verified by using an unstable sort
    #[test]
    fn test_order_words_is_stable_descending() {
        let ordered = order_words(&["OX", "CAT", "HORSE", "DOG", "EWE", "PIG"]);

        assert_eq!(ordered, ["HORSE", "CAT", "DOG", "EWE", "PIG", "OX"]);
    }

    // Tests each invalid input shape is rejected before searching
    // Verified by removing the duplicate check
    #[test]
    fn test_validate_words_rejections() {
        assert!(matches!(
            validate_words::<&str>(&[], 10),
            Err(CrosswordError::InvalidInput { .. })
        ));
        assert!(matches!(
            validate_words(&["CAT", ""], 10),
            Err(CrosswordError::InvalidInput { .. })
        ));
        assert!(matches!(
            validate_words(&["CAT", "CAT"], 10),
            Err(CrosswordError::InvalidInput { .. })
        ));
        assert!(matches!(
            validate_words(&["HORSE"], 4),
            Err(CrosswordError::InvalidInput { .. })
        ));
        assert!(validate_words(&["CAT", "ARC"], 6).is_ok());
    }

    // Tests an explicit grid side smaller than a word is rejected
    // Verified by deriving the side from the words regardless
    #[test]
    fn test_with_side_rejects_word_longer_than_grid() {
        let result = BacktrackingPlacer::with_side(&["ELEPHANT", "ANT"], 5, SearchBudget::default());

        assert!(matches!(result, Err(CrosswordError::InvalidInput { .. })));
    }

    // Tests a solvable list is fully placed with a consistent layout
    // Verified by blanking all cells on undo
    #[test]
    fn test_run_solves_crossing_words() {
        let mut placer =
            BacktrackingPlacer::new(&["CAT", "CAR", "ARC"], SearchBudget::default()).expect("valid input");
        let mut rng = StdRng::seed_from_u64(7);

        let outcome = placer.run(&mut rng);

        assert_eq!(outcome, SearchOutcome::Solved);
        assert_eq!(placer.placed().len(), 3);
        assert!(verify_layout(placer.grid(), placer.placed()).is_ok());
        assert_eq!(placer.statistics().attempts, 1);
        assert_eq!(placer.statistics().deepest, 3);
    }

    // Tests the first word is placed at a centre anchor
    // Verified by seeding at the grid origin
    #[test]
    fn test_first_word_is_centred() {
        let mut placer = BacktrackingPlacer::new(&["HORSE"], SearchBudget::default()).expect("valid input");
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(placer.run(&mut rng), SearchOutcome::Solved);

        let placement = placer.placed().get("HORSE").expect("HORSE placed");
        let start = placement.start().expect("non-empty placement");
        match placement.orientation() {
            Orientation::Horizontal => assert_eq!(start, (5, 2)),
            Orientation::Vertical => assert_eq!(start, (2, 5)),
        }
    }

    // Tests disjoint words exhaust the search and leave the grid empty
    // Verified by falling back to a free placement when no crossing exists
    #[test]
    fn test_disjoint_words_exhaust_and_reset() {
        let mut placer =
            BacktrackingPlacer::new(&["ABC", "XYZ"], SearchBudget::default()).expect("valid input");
        let mut rng = StdRng::seed_from_u64(3);

        let outcome = placer.run(&mut rng);

        assert_eq!(outcome, SearchOutcome::Exhausted);
        assert!(placer.grid().is_blank());
        assert!(placer.placed().is_empty());
        assert_eq!(placer.statistics().backtracks, 2);
        assert_eq!(placer.statistics().deepest, 1);
    }

    // Tests an exhausted backtrack budget abandons the search and resets state
    // Verified by ignoring the budget
    #[test]
    fn test_budget_abandons_search() {
        let budget = SearchBudget {
            max_backtracks: 1,
            time_limit: None,
        };
        let mut placer = BacktrackingPlacer::new(&["ABC", "XYZ"], budget).expect("valid input");
        let mut rng = StdRng::seed_from_u64(3);

        let outcome = placer.run(&mut rng);

        assert_eq!(outcome, SearchOutcome::Abandoned);
        assert!(placer.grid().is_blank());
        assert!(placer.placed().is_empty());
    }

    // Tests the single-attempt wrapper maps outcomes to errors
    // Verified by mapping exhaustion to abandonment
    #[test]
    fn test_place_words_outcomes() {
        let mut rng = StdRng::seed_from_u64(11);

        let (grid, placed) =
            place_words(&["CAT", "ACT"], &mut rng, SearchBudget::default()).expect("solvable");
        assert_eq!(placed.len(), 2);
        assert!(verify_layout(&grid, &placed).is_ok());

        match place_words(&["ABC", "XYZ"], &mut rng, SearchBudget::default()) {
            Err(CrosswordError::Infeasible {
                attempts,
                words_placed,
                words_total,
            }) => {
                assert_eq!(attempts, 1);
                assert_eq!(words_placed, 1);
                assert_eq!(words_total, 2);
            }
            other => unreachable!("Expected Infeasible, got {other:?}"),
        }
    }

    // Tests a zero time limit is honoured at the first clock check
    // Verified by never consulting the deadline
    #[test]
    fn test_time_limit_abandons_search() {
        let budget = SearchBudget {
            max_backtracks: usize::MAX,
            time_limit: Some(Duration::ZERO),
        };
        let words: Vec<String> = (0..80).map(|index| format!("A{index:03}")).collect();
        let mut placer = BacktrackingPlacer::new(&words, budget).expect("valid input");
        let mut rng = StdRng::seed_from_u64(5);

        assert_eq!(placer.run(&mut rng), SearchOutcome::Abandoned);
    }

    // Tests counters fold across attempts
    // Verified by overwriting instead of adding
    #[test]
    fn test_statistics_absorb() {
        let mut total = SearchStatistics {
            states: 3,
            backtracks: 1,
            candidates: 4,
            deepest: 2,
            attempts: 1,
            elapsed: Duration::from_millis(2),
        };
        total.absorb(&SearchStatistics {
            states: 5,
            backtracks: 2,
            candidates: 6,
            deepest: 1,
            attempts: 1,
            elapsed: Duration::from_millis(3),
        });

        assert_eq!(total.states, 8);
        assert_eq!(total.backtracks, 3);
        assert_eq!(total.candidates, 10);
        assert_eq!(total.deepest, 2);
        assert_eq!(total.attempts, 2);
        assert_eq!(total.elapsed, Duration::from_millis(5));
    }
}
