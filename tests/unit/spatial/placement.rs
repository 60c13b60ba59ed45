//! Tests for anchors, placement shape, and the committed word stack

#[cfg(test)]
mod tests {
    use crossgrid::spatial::{Anchor, Orientation, PlacedSet, Placement};

    // Tests horizontal placements advance along columns and vertical along rows
    // Verified by swapping the orientation steps
    #[test]
    fn test_placement_follows_orientation() {
        let across = Placement::from_anchor(Anchor::new(2, 1, Orientation::Horizontal), 3, 5, 5)
            .expect("placement fits");
        let down = Placement::from_anchor(Anchor::new(2, 1, Orientation::Vertical), 3, 5, 5)
            .expect("placement fits");

        assert_eq!(across.cells(), &[(2, 1), (2, 2), (2, 3)]);
        assert_eq!(down.cells(), &[(2, 1), (3, 1), (4, 1)]);
        assert!(across.is_contiguous());
        assert!(down.is_contiguous());
        assert_eq!(across.start(), Some((2, 1)));
    }

    // Tests anchors running off any edge produce no placement
    // Verified by clamping coordinates instead of rejecting
    #[test]
    fn test_placement_rejects_out_of_bounds() {
        assert!(Placement::from_anchor(Anchor::new(0, 3, Orientation::Horizontal), 3, 5, 5).is_none());
        assert!(Placement::from_anchor(Anchor::new(3, 0, Orientation::Vertical), 3, 5, 5).is_none());
        assert!(Placement::from_anchor(Anchor::new(-1, 0, Orientation::Vertical), 2, 5, 5).is_none());
        assert!(Placement::from_anchor(Anchor::new(0, -2, Orientation::Horizontal), 3, 5, 5).is_none());
    }

    // Tests translation subtracts the trim offset and refuses to underflow
    // Verified by using saturating subtraction
    #[test]
    fn test_translated() {
        let placement = Placement::from_anchor(Anchor::new(4, 6, Orientation::Vertical), 2, 10, 10)
            .expect("placement fits");

        let moved = placement.translated(4, 5).expect("offset within placement");
        assert_eq!(moved.cells(), &[(0, 1), (1, 1)]);
        assert_eq!(moved.orientation(), Orientation::Vertical);

        assert!(placement.translated(5, 0).is_none());
    }

    // Tests the placed set behaves as a stack with lookup by word
    // Verified by popping from the front
    #[test]
    fn test_placed_set_stack_and_lookup() {
        let mut placed = PlacedSet::new();
        let first = Placement::from_anchor(Anchor::new(0, 0, Orientation::Horizontal), 3, 6, 6)
            .expect("placement fits");
        let second = Placement::from_anchor(Anchor::new(0, 0, Orientation::Vertical), 3, 6, 6)
            .expect("placement fits");

        placed.push("CAT", first.clone());
        placed.push("COW", second);

        assert_eq!(placed.len(), 2);
        assert_eq!(placed.get("CAT"), Some(&first));
        assert!(placed.contains("COW"));
        assert!(!placed.contains("cat"));

        let popped = placed.pop().expect("stack not empty");
        assert_eq!(popped.word, "COW");
        assert_eq!(placed.iter().map(|entry| entry.word.as_str()).collect::<Vec<_>>(), ["CAT"]);
    }

    // Tests orientation labels used for clue headings
    // Verified by swapping the labels
    #[test]
    fn test_orientation_labels() {
        assert_eq!(Orientation::Horizontal.to_string(), "Across");
        assert_eq!(Orientation::Vertical.label(), "Down");
        assert_eq!(Orientation::ALL, [Orientation::Horizontal, Orientation::Vertical]);
    }
}
