//! Benchmarks for crossword fitness evaluation and search.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use crossword_evo::{
    compute::evolution::{EvolutionEngine, FitnessEvaluator, LayoutRng},
    schema::{EvolutionConfig, PlacementStrategy},
};

const WORDS: [&str; 10] = [
    "CROSSWORD", "GENETIC", "LAYOUT", "LETTER", "PUZZLE", "GRID", "CLUE", "ACROSS", "DOWN",
    "SQUARE",
];

fn word_list(count: usize) -> Vec<String> {
    WORDS.iter().take(count).map(|w| w.to_string()).collect()
}

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");

    for count in [2, 5, 10] {
        let words = word_list(count);
        let evaluator = FitnessEvaluator::new(20, 10, true);
        let mut rng = LayoutRng::new(42);
        let layouts: Vec<_> = (0..64)
            .map(|_| rng.random_layout(&words, 20, PlacementStrategy::LengthAware))
            .collect();
        let mut grid = evaluator.new_grid();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_words", count)),
            &count,
            |b, _| {
                b.iter(|| {
                    for layout in &layouts {
                        black_box(evaluator.breakdown_with(layout.placements(), &mut grid));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    for population_size in [50, 100, 200] {
        let config = EvolutionConfig {
            population_size,
            restart_generation: 200,
            max_restarts: Some(0),
            random_seed: Some(7),
            ..Default::default()
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("pop_{}", population_size)),
            &population_size,
            |b, _| {
                b.iter(|| {
                    let mut engine = EvolutionEngine::new(config.clone(), word_list(5))
                        .expect("benchmark words fit the grid");
                    black_box(engine.run());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_fitness, bench_search);
criterion_main!(benches);
