//! Word orientations, anchors, and the record of committed placements

use std::fmt;

/// Axis along which a word is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// Advances along columns (reads across)
    Horizontal,
    /// Advances along rows (reads down)
    Vertical,
}

impl Orientation {
    /// Both orientations, horizontal first
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Row and column step between consecutive letters
    pub const fn step(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
        }
    }

    /// Conventional clue heading for words in this orientation
    pub const fn label(self) -> &'static str {
        match self {
            Self::Horizontal => "Across",
            Self::Vertical => "Down",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position of a word's first letter together with its orientation
///
/// Coordinates are signed because intersection arithmetic can propose
/// anchors above or left of the grid; such anchors never validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    /// Row of the first letter
    pub row: isize,
    /// Column of the first letter
    pub col: isize,
    /// Writing direction
    pub orientation: Orientation,
}

impl Anchor {
    /// Create an anchor
    pub const fn new(row: isize, col: isize, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }

    /// Grid position of the letter at `index`, if it lies within `rows × cols`
    pub fn cell(self, index: usize, rows: usize, cols: usize) -> Option<(usize, usize)> {
        let (row_step, col_step) = self.orientation.step();
        let offset = index as isize;
        let row = usize::try_from(self.row + row_step * offset).ok()?;
        let col = usize::try_from(self.col + col_step * offset).ok()?;
        (row < rows && col < cols).then_some((row, col))
    }
}

/// Cells occupied by one word, in letter order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    cells: Vec<(usize, usize)>,
    orientation: Orientation,
}

impl Placement {
    /// Lay out `length` cells from an anchor
    ///
    /// Returns `None` if any cell falls outside `rows × cols`.
    pub fn from_anchor(anchor: Anchor, length: usize, rows: usize, cols: usize) -> Option<Self> {
        let cells = (0..length)
            .map(|index| anchor.cell(index, rows, cols))
            .collect::<Option<Vec<_>>>()?;
        Some(Self {
            cells,
            orientation: anchor.orientation,
        })
    }

    /// Cells in letter order
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Writing direction
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cell of the first letter
    pub fn start(&self) -> Option<(usize, usize)> {
        self.cells.first().copied()
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the placement covers no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cells form a gap-free straight run in the stated orientation
    pub fn is_contiguous(&self) -> bool {
        let (row_step, col_step) = self.orientation.step();
        self.cells.windows(2).all(|pair| match pair {
            [(r0, c0), (r1, c1)] => {
                *r1 as isize - *r0 as isize == row_step && *c1 as isize - *c0 as isize == col_step
            }
            _ => false,
        })
    }

    /// Copy with every cell shifted up-left by a trim offset
    ///
    /// Returns `None` if any cell lies above or left of the offset.
    pub fn translated(&self, row_offset: usize, col_offset: usize) -> Option<Self> {
        let cells = self
            .cells
            .iter()
            .map(|&(row, col)| Some((row.checked_sub(row_offset)?, col.checked_sub(col_offset)?)))
            .collect::<Option<Vec<_>>>()?;
        Some(Self {
            cells,
            orientation: self.orientation,
        })
    }
}

/// A committed word and where it sits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    /// The word as written into the grid
    pub word: String,
    /// Its cells and orientation
    pub placement: Placement,
}

/// Words committed so far, in commit order
///
/// Backtracking always removes the most recent commit. Lookups by word scan
/// linearly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacedSet {
    entries: Vec<PlacedWord>,
}

impl PlacedSet {
    /// Create an empty set
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Commit a word
    pub fn push(&mut self, word: impl Into<String>, placement: Placement) {
        self.entries.push(PlacedWord {
            word: word.into(),
            placement,
        });
    }

    /// Remove the most recent commit
    pub fn pop(&mut self) -> Option<PlacedWord> {
        self.entries.pop()
    }

    /// Placement of a word, if committed
    pub fn get(&self, word: &str) -> Option<&Placement> {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| &entry.placement)
    }

    /// Whether a word has been committed
    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Number of committed words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is committed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Committed words in commit order
    pub fn iter(&self) -> std::slice::Iter<'_, PlacedWord> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a PlacedSet {
    type Item = &'a PlacedWord;
    type IntoIter = std::slice::Iter<'a, PlacedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
