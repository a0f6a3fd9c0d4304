//! Fitness evaluation for crossword layouts.
//!
//! Fitness is a penalty: the sum of rule violations, each worth one penalty
//! unit. Zero means the layout is a valid crossword.

use crate::compute::{Grid, connectivity_penalty, neighbour_penalty};
use crate::schema::{EvolutionConfig, Layout, Placement};

/// Scores layouts against the crossword rules.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    grid_size: usize,
    penalty: u32,
    penalize_out_of_bounds: bool,
}

/// Per-rule penalties of one evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FitnessBreakdown {
    /// Letters outside the grid.
    pub bounds: u32,
    /// Cells written with two different letters.
    pub overlap: u32,
    /// More than one connected component.
    pub connectivity: u32,
    /// Run-ons, unexplained end neighbours and parallel words.
    pub adjacency: u32,
}

impl FitnessBreakdown {
    /// Combined penalty.
    pub fn total(&self) -> u32 {
        self.bounds + self.overlap + self.connectivity + self.adjacency
    }
}

impl FitnessEvaluator {
    /// Create a new fitness evaluator.
    pub fn new(grid_size: usize, penalty: u32, penalize_out_of_bounds: bool) -> Self {
        Self {
            grid_size,
            penalty,
            penalize_out_of_bounds,
        }
    }

    /// Evaluator matching a run configuration.
    pub fn from_config(config: &EvolutionConfig) -> Self {
        Self::new(
            config.grid_size,
            config.penalty,
            config.penalize_out_of_bounds,
        )
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// A blank grid sized for this evaluator.
    pub fn new_grid(&self) -> Grid {
        Grid::new(self.grid_size)
    }

    /// Score placements on a fresh grid.
    pub fn evaluate(&self, placements: &[Placement]) -> u32 {
        let mut grid = self.new_grid();
        self.breakdown_with(placements, &mut grid).total()
    }

    /// Score placements, rendering into a caller-owned grid.
    ///
    /// The grid is cleared first; on return it holds the rendered layout.
    pub fn breakdown_with(&self, placements: &[Placement], grid: &mut Grid) -> FitnessBreakdown {
        if grid.size != self.grid_size {
            *grid = self.new_grid();
        }

        let report = grid.render(placements);

        let bounds = if self.penalize_out_of_bounds {
            report.out_of_bounds * self.penalty
        } else {
            0
        };

        FitnessBreakdown {
            bounds,
            overlap: report.conflicts * self.penalty,
            connectivity: connectivity_penalty(grid, self.penalty),
            adjacency: neighbour_penalty(grid, placements, self.penalty),
        }
    }

    /// Fitness of a layout, computed on first use and cached until the layout
    /// is mutated.
    pub fn score(&self, layout: &mut Layout) -> u32 {
        let mut grid = self.new_grid();
        self.score_with(layout, &mut grid)
    }

    /// Same as [`score`](Self::score), reusing a caller-owned grid.
    pub fn score_with(&self, layout: &mut Layout, grid: &mut Grid) -> u32 {
        if let Some(fitness) = layout.cached_fitness() {
            return fitness;
        }
        let fitness = self.breakdown_with(layout.placements(), grid).total();
        layout.set_fitness(fitness);
        fitness
    }
}
