//! Layout manipulation utilities for evolutionary search.
//!
//! Provides random generation, crossover, and mutation operations.

use rand::prelude::*;

use crate::schema::{Layout, Orientation, Placement, PlacementStrategy};

/// Random number generator wrapper for layout operations.
pub struct LayoutRng {
    rng: StdRng,
}

impl LayoutRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Pick an orientation and start cell for a word of `len` letters.
    fn sample_position(
        &mut self,
        len: usize,
        grid_size: usize,
        strategy: PlacementStrategy,
    ) -> (i32, i32, Orientation) {
        let orientation = if self.rng.r#gen::<bool>() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };

        // Number of start offsets along the word's own axis.
        let span = match strategy {
            PlacementStrategy::LengthAware => grid_size.saturating_sub(len.max(1)) + 1,
            PlacementStrategy::Uniform => grid_size,
        };
        let along = self.rng.gen_range(0..span) as i32;
        let fixed = self.rng.gen_range(0..grid_size) as i32;

        match orientation {
            Orientation::Horizontal => (fixed, along, orientation),
            Orientation::Vertical => (along, fixed, orientation),
        }
    }

    /// Generate a random placement for one word.
    pub fn random_placement(
        &mut self,
        word: &str,
        grid_size: usize,
        strategy: PlacementStrategy,
    ) -> Placement {
        let (row, col, orientation) =
            self.sample_position(word.chars().count(), grid_size, strategy);
        Placement::new(word, row, col, orientation)
    }

    /// Generate a random layout with one placement per word, in word order.
    pub fn random_layout(
        &mut self,
        words: &[String],
        grid_size: usize,
        strategy: PlacementStrategy,
    ) -> Layout {
        let placements = words
            .iter()
            .map(|w| self.random_placement(w, grid_size, strategy))
            .collect();
        Layout::new(placements)
    }

    /// Uniform crossover: each gene's position comes from either parent with
    /// equal probability. The child shares no storage with its parents.
    pub fn crossover(&mut self, parent1: &Layout, parent2: &Layout) -> Layout {
        let placements = parent1
            .placements()
            .iter()
            .zip(parent2.placements())
            .map(|(a, b)| {
                debug_assert_eq!(a.word(), b.word());
                let source = if self.rng.r#gen::<bool>() { a } else { b };
                Placement::new(a.word(), source.row, source.col, source.orientation)
            })
            .collect();
        Layout::new(placements)
    }

    /// With probability `rate`, resample the orientation and position of one
    /// randomly chosen gene. Returns the index of the mutated gene.
    pub fn mutate(
        &mut self,
        layout: &mut Layout,
        rate: f64,
        grid_size: usize,
        strategy: PlacementStrategy,
    ) -> Option<usize> {
        if layout.is_empty() || !self.chance(rate) {
            return None;
        }

        let index = self.rng.gen_range(0..layout.len());
        let len = layout.placements()[index].len();
        let (row, col, orientation) = self.sample_position(len, grid_size, strategy);

        let placement = layout.placement_mut(index)?;
        placement.row = row;
        placement.col = col;
        placement.orientation = orientation;

        Some(index)
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.r#gen::<f64>() < p
    }

    /// Uniform index in `0..len`.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Generate next u64 for seeding child RNGs.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.r#gen()
    }
}

/// Number of genes whose position differs between two layouts.
pub fn layout_distance(l1: &Layout, l2: &Layout) -> usize {
    l1.placements()
        .iter()
        .zip(l2.placements())
        .filter(|(a, b)| !a.same_position(b))
        .count()
}
