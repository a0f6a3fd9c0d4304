//! Neighbour rule: detects letters touching a word where they should not.
//!
//! For every placement the rule walks its letters and penalizes
//!
//! - a letter directly before the first or after the last letter (the word
//!   would read longer than it is),
//! - an occupied cell on the near side (above a horizontal word, left of a
//!   vertical one) at either end, unless a perpendicular placement starting
//!   further out on that side actually runs through the end letter,
//! - two or more consecutive letters with an occupied neighbour on the same
//!   side (a parallel word running alongside), once per letter past the first.

use super::Grid;
use crate::schema::{Orientation, Placement};

/// Step along the word and step across it, as `(d_row, d_col)`.
fn axes(orientation: Orientation) -> ((i32, i32), (i32, i32)) {
    match orientation {
        Orientation::Horizontal => ((0, 1), (1, 0)),
        Orientation::Vertical => ((1, 0), (0, 1)),
    }
}

#[inline]
fn offset((row, col): (i32, i32), (dr, dc): (i32, i32), k: i32) -> (i32, i32) {
    (row + dr * k, col + dc * k)
}

/// Counts consecutive occupied neighbours on one side of a word.
///
/// Cells outside the grid neither extend nor break a run.
#[derive(Default)]
struct SideRun {
    len: u32,
}

impl SideRun {
    /// Feed the next neighbour cell; returns true when it extends a run of two or more.
    fn observe(&mut self, grid: &Grid, (row, col): (i32, i32)) -> bool {
        if !grid.in_bounds(row, col) {
            return false;
        }
        if grid.is_occupied(row, col) {
            self.len += 1;
            self.len > 1
        } else {
            self.len = 0;
            false
        }
    }
}

/// Whether no perpendicular placement legitimately explains the letter on the
/// near side of `cell`.
///
/// Walks outward from the neighbour cell while it stays occupied, looking for a
/// perpendicular placement that starts there and spans `cell`.
fn crossing_word_absent(
    grid: &Grid,
    placements: &[Placement],
    word: &Placement,
    cell: (i32, i32),
) -> bool {
    let (_, across) = axes(word.orientation);
    let crossing_orientation = word.orientation.perpendicular();

    let mut k = 1;
    loop {
        let (row, col) = offset(cell, across, -k);
        if !grid.is_occupied(row, col) {
            return true;
        }

        let found = placements.iter().any(|p| {
            p.orientation == crossing_orientation
                && p.row == row
                && p.col == col
                && p.covers(cell.0, cell.1)
        });
        if found {
            return false;
        }

        k += 1;
    }
}

/// Neighbour penalty for a single placement against a rendered grid.
pub fn placement_neighbour_penalty(
    grid: &Grid,
    placements: &[Placement],
    word: &Placement,
    penalty: u32,
) -> u32 {
    let (along, across) = axes(word.orientation);
    let len = word.len();
    let mut total = 0;

    let mut near_run = SideRun::default();
    let mut far_run = SideRun::default();

    for i in 0..len {
        let cell = word.cell_at(i);
        if !grid.in_bounds(cell.0, cell.1) {
            continue;
        }

        let near = offset(cell, across, -1);
        let far = offset(cell, across, 1);

        let boundary = if i == 0 {
            Some(offset(cell, along, -1))
        } else if i == len - 1 {
            Some(offset(cell, along, 1))
        } else {
            None
        };

        if let Some((br, bc)) = boundary {
            // Run-on past the end of the word.
            if grid.is_occupied(br, bc) {
                total += penalty;
            }
            if grid.is_occupied(near.0, near.1)
                && crossing_word_absent(grid, placements, word, cell)
            {
                total += penalty;
            }
        }

        if near_run.observe(grid, near) {
            total += penalty;
        }
        if far_run.observe(grid, far) {
            total += penalty;
        }
    }

    total
}

/// Sum of [`placement_neighbour_penalty`] over every placement.
pub fn neighbour_penalty(grid: &Grid, placements: &[Placement], penalty: u32) -> u32 {
    placements
        .iter()
        .map(|word| placement_neighbour_penalty(grid, placements, word, penalty))
        .sum()
}
