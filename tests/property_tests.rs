//! Property-based tests for crossword-evo
//!
//! Uses proptest to check the scoring rules and genetic operators.

use crossword_evo::compute::count_components;
use crossword_evo::compute::evolution::{LayoutRng, check_feasibility, layout_distance};
use crossword_evo::schema::PlacementStrategy;
use crossword_evo::{FitnessEvaluator, Grid, Layout, Orientation, Placement};
use proptest::prelude::*;

const GRID: usize = 20;
const PENALTY: u32 = 10;

fn evaluator() -> FitnessEvaluator {
    FitnessEvaluator::new(GRID, PENALTY, true)
}

fn orientation() -> impl Strategy<Value = Orientation> {
    any::<bool>().prop_map(|h| {
        if h {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    })
}

/// Any placement starting inside the grid. The word may run off the edge.
fn placement() -> impl Strategy<Value = Placement> {
    ("[A-Z]{2,8}", 0i32..GRID as i32, 0i32..GRID as i32, orientation())
        .prop_map(|(word, row, col, orientation)| Placement::new(word, row, col, orientation))
}

/// A placement whose letters all fit in the grid.
fn fitting_placement() -> impl Strategy<Value = Placement> {
    ("[A-Z]{2,8}", 0i32..GRID as i32, 0i32..12, orientation()).prop_map(
        |(word, fixed, along, orientation)| match orientation {
            Orientation::Horizontal => Placement::new(word, fixed, along, orientation),
            Orientation::Vertical => Placement::new(word, along, fixed, orientation),
        },
    )
}

fn word_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z]{2,8}", 1..10)
}

proptest! {
    // ==================== Fitness Properties ====================

    #[test]
    fn fitness_is_deterministic(placements in prop::collection::vec(placement(), 0..8)) {
        let eval = evaluator();
        prop_assert_eq!(eval.evaluate(&placements), eval.evaluate(&placements));
    }

    #[test]
    fn fitness_ignores_gene_order(placements in prop::collection::vec(placement(), 0..8)) {
        let eval = evaluator();
        let mut reversed = placements.clone();
        reversed.reverse();
        prop_assert_eq!(eval.evaluate(&placements), eval.evaluate(&reversed));
    }

    #[test]
    fn fitness_is_whole_penalty_units(placements in prop::collection::vec(placement(), 0..8)) {
        prop_assert_eq!(evaluator().evaluate(&placements) % PENALTY, 0);
    }

    #[test]
    fn breakdown_sums_to_fitness(placements in prop::collection::vec(placement(), 0..8)) {
        let eval = evaluator();
        let mut grid = eval.new_grid();
        let breakdown = eval.breakdown_with(&placements, &mut grid);
        prop_assert_eq!(breakdown.total(), eval.evaluate(&placements));
    }

    #[test]
    fn single_fitting_word_is_valid(p in fitting_placement()) {
        prop_assert_eq!(evaluator().evaluate(&[p]), 0);
    }

    #[test]
    fn duplicate_placement_never_conflicts(p in fitting_placement()) {
        let eval = evaluator();
        let mut grid = eval.new_grid();
        let breakdown = eval.breakdown_with(&[p.clone(), p], &mut grid);
        prop_assert_eq!(breakdown.overlap, 0);
    }

    #[test]
    fn one_mismatched_cell_costs_one_penalty(
        a in "[A-Z]{2,6}",
        b in "[A-Z]{2,6}",
        row in 0i32..14,
        col in 0i32..14,
    ) {
        prop_assume!(a.chars().next() != b.chars().next());
        let placements = [
            Placement::new(a, row, col, Orientation::Horizontal),
            Placement::new(b, row, col, Orientation::Vertical),
        ];
        let eval = evaluator();
        let mut grid = eval.new_grid();
        let breakdown = eval.breakdown_with(&placements, &mut grid);
        prop_assert_eq!(breakdown.overlap, PENALTY);
        prop_assert_eq!(breakdown.bounds, 0);
    }

    #[test]
    fn separated_rows_cost_one_penalty_per_word(words in prop::collection::vec("[A-Z]{2,8}", 2..8)) {
        let placements: Vec<Placement> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Placement::new(w.as_str(), 2 * i as i32, 0, Orientation::Horizontal))
            .collect();

        let grid = Grid::from_placements(GRID, &placements);
        prop_assert_eq!(count_components(&grid), words.len());
        prop_assert_eq!(evaluator().evaluate(&placements), words.len() as u32 * PENALTY);
    }

    #[test]
    fn cached_fitness_matches_evaluation(words in word_list(), seed in any::<u64>()) {
        let mut rng = LayoutRng::new(seed);
        let mut layout = rng.random_layout(&words, GRID, PlacementStrategy::Uniform);
        let eval = evaluator();

        let expected = eval.evaluate(layout.placements());
        prop_assert_eq!(eval.score(&mut layout), expected);
        prop_assert_eq!(layout.cached_fitness(), Some(expected));
    }

    // ==================== Genome Properties ====================

    #[test]
    fn length_aware_layouts_stay_in_grid(words in word_list(), seed in any::<u64>()) {
        let mut rng = LayoutRng::new(seed);
        let layout = rng.random_layout(&words, GRID, PlacementStrategy::LengthAware);

        let eval = evaluator();
        let mut grid = eval.new_grid();
        prop_assert_eq!(eval.breakdown_with(layout.placements(), &mut grid).bounds, 0);
        prop_assert!(layout.words().eq(words.iter().map(String::as_str)));
    }

    #[test]
    fn crossover_takes_each_gene_from_a_parent(words in word_list(), seed in any::<u64>()) {
        let mut rng = LayoutRng::new(seed);
        let p1 = rng.random_layout(&words, GRID, PlacementStrategy::LengthAware);
        let p2 = rng.random_layout(&words, GRID, PlacementStrategy::LengthAware);
        let child = rng.crossover(&p1, &p2);

        prop_assert_eq!(child.len(), words.len());
        prop_assert_eq!(child.cached_fitness(), None);
        for ((c, a), b) in child.placements().iter().zip(p1.placements()).zip(p2.placements()) {
            prop_assert_eq!(c.word(), a.word());
            prop_assert!(c.same_position(a) || c.same_position(b));
        }
    }

    #[test]
    fn mutation_changes_at_most_one_gene(words in word_list(), seed in any::<u64>()) {
        let mut rng = LayoutRng::new(seed);
        let eval = evaluator();
        let mut layout = rng.random_layout(&words, GRID, PlacementStrategy::LengthAware);
        eval.score(&mut layout);
        let before = layout.clone();

        let mutated = rng.mutate(&mut layout, 1.0, GRID, PlacementStrategy::LengthAware);

        prop_assert!(mutated.is_some());
        prop_assert!(layout_distance(&before, &layout) <= 1);
        prop_assert_eq!(layout.cached_fitness(), None);
        prop_assert!(layout.words().eq(before.words()));
    }

    #[test]
    fn zero_rate_mutation_keeps_layout(words in word_list(), seed in any::<u64>()) {
        let mut rng = LayoutRng::new(seed);
        let eval = evaluator();
        let mut layout: Layout = rng.random_layout(&words, GRID, PlacementStrategy::LengthAware);
        let fitness = eval.score(&mut layout);

        prop_assert_eq!(rng.mutate(&mut layout, 0.0, GRID, PlacementStrategy::LengthAware), None);
        prop_assert_eq!(layout.cached_fitness(), Some(fitness));
    }

    // ==================== Feasibility ====================

    #[test]
    fn words_longer_than_grid_are_rejected(extra in 1usize..5, grid_size in 2usize..12) {
        let words = vec!["AB".to_string(), "X".repeat(grid_size + extra)];
        prop_assert!(check_feasibility(&words, grid_size).is_err());
        prop_assert!(check_feasibility(&words[..1], grid_size).is_ok());
    }
}
