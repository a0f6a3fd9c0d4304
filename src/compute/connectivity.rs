//! Connected-component analysis over a rendered grid.

use super::Grid;

/// Orthogonal neighbour offsets (up, down, left, right).
pub const NEIGHBOURS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Count 4-connected components of occupied cells.
///
/// Uses an explicit stack so depth does not grow with grid size.
pub fn count_components(grid: &Grid) -> usize {
    let size = grid.size as i32;
    let mut visited = vec![false; grid.size * grid.size];
    let mut stack: Vec<(i32, i32)> = Vec::new();
    let mut components = 0;

    for row in 0..size {
        for col in 0..size {
            let idx = (row * size + col) as usize;
            if visited[idx] || !grid.is_occupied(row, col) {
                continue;
            }

            components += 1;
            visited[idx] = true;
            stack.push((row, col));

            while let Some((r, c)) = stack.pop() {
                for (dr, dc) in NEIGHBOURS {
                    let (nr, nc) = (r + dr, c + dc);
                    if !grid.is_occupied(nr, nc) {
                        continue;
                    }
                    let nidx = (nr * size + nc) as usize;
                    if !visited[nidx] {
                        visited[nidx] = true;
                        stack.push((nr, nc));
                    }
                }
            }
        }
    }

    components
}

/// Penalty for a fragmented grid: `components * penalty` when more than one
/// component exists, zero otherwise.
pub fn connectivity_penalty(grid: &Grid, penalty: u32) -> u32 {
    match count_components(grid) {
        0 | 1 => 0,
        n => n as u32 * penalty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Orientation, Placement};

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new(20);
        assert_eq!(count_components(&grid), 0);
        assert_eq!(connectivity_penalty(&grid, 10), 0);
    }

    #[test]
    fn test_crossing_words_single_component() {
        let grid = Grid::from_placements(
            20,
            &[
                Placement::new("CAT", 5, 5, Orientation::Horizontal),
                Placement::new("COT", 5, 5, Orientation::Vertical),
            ],
        );
        assert_eq!(count_components(&grid), 1);
        assert_eq!(connectivity_penalty(&grid, 10), 0);
    }

    #[test]
    fn test_diagonal_is_not_connected() {
        let grid = Grid::from_placements(
            10,
            &[
                Placement::new("AB", 0, 0, Orientation::Horizontal),
                Placement::new("CD", 1, 2, Orientation::Horizontal),
            ],
        );
        assert_eq!(count_components(&grid), 2);
    }

    #[test]
    fn test_penalty_scales_with_components() {
        let grid = Grid::from_placements(
            20,
            &[
                Placement::new("ONE", 0, 0, Orientation::Horizontal),
                Placement::new("TWO", 5, 5, Orientation::Horizontal),
                Placement::new("SIX", 10, 10, Orientation::Vertical),
            ],
        );
        assert_eq!(count_components(&grid), 3);
        assert_eq!(connectivity_penalty(&grid, 10), 30);
    }

    #[test]
    fn test_large_snake_component() {
        // Serpentine path covering most of a 50x50 grid exercises deep traversal.
        let size = 50;
        let mut placements = Vec::new();
        for row in (0..size).step_by(2) {
            placements.push(Placement::new(
                "A".repeat(size as usize),
                row,
                0,
                Orientation::Horizontal,
            ));
            let col = if (row / 2) % 2 == 0 { size - 1 } else { 0 };
            if row + 1 < size {
                placements.push(Placement::new("A", row + 1, col, Orientation::Vertical));
            }
        }
        let grid = Grid::from_placements(size as usize, &placements);
        assert_eq!(count_components(&grid), 1);
    }
}
