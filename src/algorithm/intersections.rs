//! Candidate anchors for the next word
//!
//! The first word is seeded at the centre of the grid. Every later word is
//! offered only anchors that cross an already placed letter, so the layout
//! stays a single connected component.

use std::collections::HashSet;

use crate::algorithm::validation::can_place;
use crate::spatial::{Anchor, Grid, Orientation, PlacedSet};

/// Centre-of-grid anchors for the first word, horizontal then vertical
///
/// The horizontal anchor sits on the middle row and the vertical anchor on the
/// middle column, each centred along its own axis. Anchors that do not fit
/// are dropped.
///
/// This differs from seeding both orientations at `(rows/2, (cols-len)/2)`:
/// there the vertical word starts on the middle row and hangs below centre.
pub fn seed_anchors(word: &str, grid: &Grid) -> Vec<Anchor> {
    let length = word.chars().count();
    let across = Anchor::new(
        (grid.rows() / 2) as isize,
        (grid.cols().saturating_sub(length) / 2) as isize,
        Orientation::Horizontal,
    );
    let down = Anchor::new(
        (grid.rows().saturating_sub(length) / 2) as isize,
        (grid.cols() / 2) as isize,
        Orientation::Vertical,
    );

    [across, down]
        .into_iter()
        .filter(|&anchor| can_place(grid, word, anchor))
        .collect()
}

/// Propose anchors that cross the new word with letters already placed
///
/// For every placed letter matching a letter of `word`, both a vertical and a
/// horizontal anchor are proposed that put the matching letter on that cell,
/// whatever the placed word's own orientation. Proposals failing the
/// validator are discarded; duplicates keep their first occurrence.
pub fn find_intersections(word: &str, grid: &Grid, placed: &PlacedSet) -> Vec<Anchor> {
    let letters: Vec<char> = word.chars().collect();
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for entry in placed {
        for (&(row, col), placed_letter) in entry.placement.cells().iter().zip(entry.word.chars())
        {
            for (index, _) in letters
                .iter()
                .enumerate()
                .filter(|&(_, &letter)| letter == placed_letter)
            {
                let (r, c, offset) = (row as isize, col as isize, index as isize);
                let proposals = [
                    Anchor::new(r - offset, c, Orientation::Vertical),
                    Anchor::new(r, c - offset, Orientation::Horizontal),
                ];

                for anchor in proposals {
                    if seen.insert(anchor) && can_place(grid, word, anchor) {
                        candidates.push(anchor);
                    }
                }
            }
        }
    }

    candidates
}
