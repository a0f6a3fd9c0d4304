//! Square character grid that layouts are rendered onto.
//!
//! A grid is a disposable render of one layout. Each evaluation owns its grid
//! exclusively, either freshly allocated or cleared with [`Grid::clear`].

use std::fmt;

use crate::schema::Placement;

/// Character used when printing an empty cell.
pub const EMPTY_CELL: char = '-';

/// Fixed-size square surface of optional letters, stored row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Side length.
    pub size: usize,
    cells: Vec<Option<char>>,
    /// Scratch buffer of `(cell index, letter)` writes, reused across renders.
    writes: Vec<(usize, char)>,
}

/// Violations found while rendering placements onto a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Letters that fell outside the grid.
    pub out_of_bounds: u32,
    /// Writes that disagree with the majority letter of their cell.
    pub conflicts: u32,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            writes: Vec::new(),
        }
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Whether `(row, col)` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        let size = self.size as i32;
        row >= 0 && row < size && col >= 0 && col < size
    }

    #[inline]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        self.in_bounds(row, col)
            .then(|| row as usize * self.size + col as usize)
    }

    /// Letter at `(row, col)`. `None` for empty or out-of-bounds cells.
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> Option<char> {
        self.index(row, col).and_then(|idx| self.cells[idx])
    }

    /// Whether `(row, col)` is inside the grid and holds a letter.
    #[inline]
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        self.get(row, col).is_some()
    }

    /// Number of cells holding a letter.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the grid and render every placement.
    ///
    /// A cell written `n` times costs `n - m` conflicts, where `m` is the
    /// largest group of identical letters among those writes. Matching
    /// crossings are free and the count does not depend on placement order.
    /// Letters outside the grid are counted and skipped.
    pub fn render(&mut self, placements: &[Placement]) -> RenderReport {
        self.clear();
        let mut report = RenderReport::default();

        let mut writes = std::mem::take(&mut self.writes);
        writes.clear();
        for placement in placements {
            for (row, col, ch) in placement.cells() {
                match self.index(row, col) {
                    Some(idx) => writes.push((idx, ch)),
                    None => report.out_of_bounds += 1,
                }
            }
        }
        writes.sort_unstable();

        for cell_writes in writes.chunk_by(|a, b| a.0 == b.0) {
            let idx = cell_writes[0].0;
            let (letter, largest) = cell_writes
                .chunk_by(|a, b| a.1 == b.1)
                .map(|run| (run[0].1, run.len()))
                .fold((cell_writes[0].1, 0), |best, run| {
                    if run.1 > best.1 { run } else { best }
                });

            report.conflicts += (cell_writes.len() - largest) as u32;
            self.cells[idx] = Some(letter);
        }

        self.writes = writes;
        report
    }

    /// Build a grid holding the given placements.
    pub fn from_placements(size: usize, placements: &[Placement]) -> Self {
        let mut grid = Self::new(size);
        grid.render(placements);
        grid
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            let line: Vec<String> = row
                .iter()
                .map(|c| c.unwrap_or(EMPTY_CELL).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
