//! Layout types: words bound to grid positions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction a word is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

impl Orientation {
    /// Numeric code used in solution files (0 = horizontal, 1 = vertical).
    pub fn code(self) -> u8 {
        match self {
            Self::Horizontal => 0,
            Self::Vertical => 1,
        }
    }

    /// The other orientation.
    pub fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single word placed on the grid (one gene of a [`Layout`]).
///
/// A placement carries no validity guarantee: it may extend past the grid
/// or clash with other words. Validity is what fitness measures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The word text. Never changes after creation.
    word: String,
    /// Row of the first letter.
    pub row: i32,
    /// Column of the first letter.
    pub col: i32,
    /// Writing direction.
    pub orientation: Orientation,
}

impl Placement {
    /// Create a placement.
    pub fn new(word: impl Into<String>, row: i32, col: i32, orientation: Orientation) -> Self {
        Self {
            word: word.into(),
            row,
            col,
            orientation,
        }
    }

    /// The placed word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Number of letters (not bytes).
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Cell holding the letter at `offset`.
    pub fn cell_at(&self, offset: usize) -> (i32, i32) {
        let offset = offset as i32;
        match self.orientation {
            Orientation::Horizontal => (self.row, self.col + offset),
            Orientation::Vertical => (self.row + offset, self.col),
        }
    }

    /// Cell of the last letter. Equals the start cell for one-letter words.
    pub fn end(&self) -> (i32, i32) {
        self.cell_at(self.len().saturating_sub(1))
    }

    /// Iterate over `(row, col, letter)` for every letter, in order.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, char)> + '_ {
        self.word.chars().enumerate().map(|(i, ch)| {
            let (row, col) = self.cell_at(i);
            (row, col, ch)
        })
    }

    /// Whether this placement's span includes `(row, col)`.
    pub fn covers(&self, row: i32, col: i32) -> bool {
        let len = self.len() as i32;
        match self.orientation {
            Orientation::Horizontal => row == self.row && col >= self.col && col < self.col + len,
            Orientation::Vertical => col == self.col && row >= self.row && row < self.row + len,
        }
    }

    /// Whether the same `(row, col, orientation)` is used by both.
    pub fn same_position(&self, other: &Placement) -> bool {
        self.row == other.row && self.col == other.col && self.orientation == other.orientation
    }
}

/// A complete candidate crossword: one placement per input word.
///
/// Gene order is fixed at creation, so index `i` names the same word in
/// every layout of a run. The fitness cache is filled lazily by the
/// evaluator and cleared by any mutable access to a placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    placements: Vec<Placement>,
    #[serde(skip)]
    fitness: Option<u32>,
}

impl Layout {
    /// Create a layout with an empty fitness cache.
    pub fn new(placements: Vec<Placement>) -> Self {
        Self {
            placements,
            fitness: None,
        }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Mutable access to one gene. Invalidates the cached fitness.
    pub fn placement_mut(&mut self, index: usize) -> Option<&mut Placement> {
        self.fitness = None;
        self.placements.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Word texts in gene order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.placements.iter().map(Placement::word)
    }

    /// Cached fitness, if it has been computed since the last mutation.
    pub fn cached_fitness(&self) -> Option<u32> {
        self.fitness
    }

    pub(crate) fn set_fitness(&mut self, fitness: u32) {
        self.fitness = Some(fitness);
    }

    /// Cached fitness, treating "not yet evaluated" as the worst score.
    pub(crate) fn fitness_or_max(&self) -> u32 {
        self.fitness.unwrap_or(u32::MAX)
    }
}
