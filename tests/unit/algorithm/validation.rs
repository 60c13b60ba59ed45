//! Tests for the placement predicate and finished-layout verification

#[cfg(test)]
mod tests {
    use crossgrid::CrosswordError;
    use crossgrid::algorithm::validation::{can_place, verify_layout};
    use crossgrid::spatial::{Anchor, Grid, Orientation, PlacedSet, Placement};

    fn horizontal(row: isize, col: isize) -> Anchor {
        Anchor::new(row, col, Orientation::Horizontal)
    }

    fn vertical(row: isize, col: isize) -> Anchor {
        Anchor::new(row, col, Orientation::Vertical)
    }

    // Tests words fit on blank cells and on matching letters
    // Verified by rejecting any occupied cell
    #[test]
    fn test_can_place_on_blank_and_matching_cells() {
        let grid = Grid::from_rows(&[".....", ".CAT.", "....."]).expect("rows should parse");

        assert!(can_place(&grid, "DOG", horizontal(0, 0)));
        assert!(can_place(&grid, "CAT", horizontal(1, 1)));
        assert!(can_place(&grid, "TO", vertical(1, 3)));
    }

    // Tests a mismatching letter on any target cell blocks placement
    // Verified by checking only the first letter
    #[test]
    fn test_can_place_rejects_conflict() {
        let grid = Grid::from_rows(&[".....", ".CAT.", "....."]).expect("rows should parse");

        assert!(!can_place(&grid, "ARM", vertical(0, 2)));
        assert!(!can_place(&grid, "COW", horizontal(1, 1)));
    }

    // Tests case differences count as conflicts
    // Verified by comparing letters case-insensitively
    #[test]
    fn test_can_place_is_case_sensitive() {
        let grid = Grid::from_rows(&["CAT"]).expect("rows should parse");

        assert!(!can_place(&grid, "cat", horizontal(0, 0)));
    }

    // Tests placements running off any edge are rejected
    // Verified by skipping the bounds check
    #[test]
    fn test_can_place_rejects_out_of_bounds() {
        let grid = Grid::new(4);

        assert!(!can_place(&grid, "HORSE", horizontal(0, 0)));
        assert!(!can_place(&grid, "OX", vertical(3, 0)));
        assert!(!can_place(&grid, "OX", vertical(-1, 0)));
        assert!(!can_place(&grid, "OX", horizontal(0, -1)));
        assert!(can_place(&grid, "OXEN", vertical(0, 3)));
    }

    // Tests a consistent layout passes verification
    // Verified by requiring every cell to have exactly one owner
    #[test]
    fn test_verify_layout_accepts_consistent_layout() {
        let grid = Grid::from_rows(&["CAT", "A..", "R.."]).expect("rows should parse");
        let mut placed = PlacedSet::new();
        placed.push(
            "CAT",
            Placement::from_anchor(horizontal(0, 0), 3, 3, 3).expect("fits"),
        );
        placed.push(
            "CAR",
            Placement::from_anchor(vertical(0, 0), 3, 3, 3).expect("fits"),
        );

        assert!(verify_layout(&grid, &placed).is_ok());
    }

    // Tests a letter missing from a placed word's cell is reported
    // Verified by skipping the per-letter comparison
    #[test]
    fn test_verify_layout_reports_blanked_shared_cell() {
        let grid = Grid::from_rows(&[".AT", "A..", "R.."]).expect("rows should parse");
        let mut placed = PlacedSet::new();
        placed.push(
            "CAT",
            Placement::from_anchor(horizontal(0, 0), 3, 3, 3).expect("fits"),
        );

        match verify_layout(&grid, &placed) {
            Err(CrosswordError::InvariantViolation { row, col, .. }) => {
                assert_eq!((row, col), (0, 0));
            }
            other => unreachable!("Expected InvariantViolation, got {other:?}"),
        }
    }

    // Tests letters owned by no word are reported
    // Verified by skipping the ownership scan
    #[test]
    fn test_verify_layout_reports_orphan_letter() {
        let grid = Grid::from_rows(&["CAT", "..X"]).expect("rows should parse");
        let mut placed = PlacedSet::new();
        placed.push(
            "CAT",
            Placement::from_anchor(horizontal(0, 0), 3, 2, 3).expect("fits"),
        );

        match verify_layout(&grid, &placed) {
            Err(CrosswordError::InvariantViolation { row, col, .. }) => {
                assert_eq!((row, col), (1, 2));
            }
            other => unreachable!("Expected InvariantViolation, got {other:?}"),
        }
    }
}
