//! Genetic search driver for crossword layouts.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rayon::prelude::*;

use crate::schema::{
    ConfigError, EvolutionConfig, EvolutionHistory, EvolutionPhase, EvolutionProgress,
    EvolutionResult, EvolutionStats, Layout, StopReason,
};

use super::fitness::FitnessEvaluator;
use super::genome::{LayoutRng, layout_distance};

/// Errors raised before a search starts.
#[derive(Debug, thiserror::Error)]
pub enum EvolutionError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Word {word:?} has {len} letters but the grid is only {grid_size} wide")]
    WordTooLong {
        word: String,
        len: usize,
        grid_size: usize,
    },
}

/// Reject word lists that can never reach zero penalty because a word does
/// not fit on the grid.
pub fn check_feasibility(words: &[String], grid_size: usize) -> Result<(), EvolutionError> {
    match words.iter().find(|w| w.chars().count() > grid_size) {
        Some(word) => Err(EvolutionError::WordTooLong {
            word: word.clone(),
            len: word.chars().count(),
            grid_size,
        }),
        None => Ok(()),
    }
}

/// Fitness summary of one evaluated population.
#[derive(Debug, Clone, Copy)]
struct PopulationSummary {
    best_idx: usize,
    best: u32,
    worst: u32,
    avg: f64,
}

/// Evolution engine that runs the search.
pub struct EvolutionEngine {
    config: EvolutionConfig,
    words: Vec<String>,
    rng: LayoutRng,
    evaluator: FitnessEvaluator,
    population: Vec<Layout>,
    history: EvolutionHistory,
    generation: usize,
    total_generations: usize,
    restarts: usize,
    evaluations: u64,
    iteration_best: u32,
    phase: EvolutionPhase,
    cancelled: Arc<AtomicBool>,
}

impl EvolutionEngine {
    /// Create a new evolution engine for one word list.
    ///
    /// Fails if the configuration is invalid or a word is longer than the grid.
    pub fn new(config: EvolutionConfig, words: Vec<String>) -> Result<Self, EvolutionError> {
        config.validate()?;
        check_feasibility(&words, config.grid_size)?;

        let seed = config.random_seed.unwrap_or_else(rand::random);
        let rng = LayoutRng::new(seed);
        let evaluator = FitnessEvaluator::from_config(&config);

        Ok(Self {
            config,
            words,
            rng,
            evaluator,
            population: Vec::new(),
            history: EvolutionHistory::default(),
            generation: 0,
            total_generations: 0,
            restarts: 0,
            evaluations: 0,
            iteration_best: u32::MAX,
            phase: EvolutionPhase::Initializing,
            cancelled: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Share an existing cancellation flag, e.g. across a batch of runs.
    pub fn with_cancel_handle(mut self, cancelled: Arc<AtomicBool>) -> Self {
        self.cancelled = cancelled;
        self
    }

    /// Get cancellation handle.
    ///
    /// Setting it stops the search at the next generation boundary.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    pub fn population(&self) -> &[Layout] {
        &self.population
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn phase(&self) -> EvolutionPhase {
        self.phase
    }

    fn random_layout(&mut self) -> Layout {
        self.rng
            .random_layout(&self.words, self.config.grid_size, self.config.placement)
    }

    /// Initialize the population with random layouts.
    pub fn initialize(&mut self) {
        self.phase = EvolutionPhase::Initializing;
        self.generation = 0;
        self.iteration_best = u32::MAX;
        let population: Vec<Layout> = (0..self.config.population_size)
            .map(|_| self.random_layout())
            .collect();
        self.population = population;
    }

    /// Evaluate all layouts whose fitness is not cached.
    ///
    /// Each rayon worker renders into its own grid.
    fn evaluate_population(&mut self) {
        self.phase = EvolutionPhase::Evaluating;
        let evaluator = &self.evaluator;

        let pending = self
            .population
            .iter()
            .filter(|l| l.cached_fitness().is_none())
            .count();
        self.evaluations += pending as u64;

        self.population.par_iter_mut().for_each_init(
            || evaluator.new_grid(),
            |grid, layout| {
                evaluator.score_with(layout, grid);
            },
        );
    }

    /// Best, worst and mean fitness of the evaluated population.
    fn summarize(&self) -> PopulationSummary {
        let mut summary = PopulationSummary {
            best_idx: 0,
            best: u32::MAX,
            worst: 0,
            avg: 0.0,
        };
        let mut total = 0u64;

        for (i, layout) in self.population.iter().enumerate() {
            let fitness = layout.fitness_or_max();
            if fitness < summary.best {
                summary.best = fitness;
                summary.best_idx = i;
            }
            summary.worst = summary.worst.max(fitness);
            total += u64::from(fitness);
        }

        if !self.population.is_empty() {
            summary.avg = total as f64 / self.population.len() as f64;
        }
        summary
    }

    /// Tournament selection: best of `k` draws with replacement, first
    /// encountered wins ties.
    fn select_index(&mut self) -> usize {
        let size = self.config.tournament_size();
        let len = self.population.len();

        let mut best_idx = self.rng.index(len);
        for _ in 1..size {
            let idx = self.rng.index(len);
            if self.population[idx].fitness_or_max() < self.population[best_idx].fitness_or_max() {
                best_idx = idx;
            }
        }
        best_idx
    }

    /// Breed the next generation from the evaluated population.
    fn step_generation(&mut self) {
        self.phase = EvolutionPhase::Reproducing;
        let size = self.config.population_size;
        let mut next_gen = Vec::with_capacity(size);

        if self.config.inject_random {
            let fresh = self.random_layout();
            next_gen.push(fresh);
        }

        // Elitism: keep best layouts, fitness cache included.
        if self.config.elitism > 0 {
            let mut ranked: Vec<usize> = (0..self.population.len()).collect();
            ranked.sort_by_key(|&i| self.population[i].fitness_or_max());
            for &i in ranked.iter().take(self.config.elitism) {
                next_gen.push(self.population[i].clone());
            }
        }

        while next_gen.len() < size {
            let idx1 = self.select_index();
            let idx2 = self.select_index();

            let mut child = if self.rng.chance(self.config.crossover_rate) {
                self.rng
                    .crossover(&self.population[idx1], &self.population[idx2])
            } else {
                // Copies keep their parent's cached score until mutated.
                self.population[idx1].clone()
            };

            self.rng.mutate(
                &mut child,
                self.config.mutation_rate,
                self.config.grid_size,
                self.config.placement,
            );

            next_gen.push(child);
        }

        self.population = next_gen;
        self.generation += 1;
        self.total_generations += 1;
    }

    /// Discard the stagnant population and start over.
    fn restart(&mut self) {
        self.phase = EvolutionPhase::Restarting;
        self.restarts += 1;
        log::info!(
            "No solution after {} generations, restarting (restart {})",
            self.generation,
            self.restarts
        );
        self.initialize();
    }

    /// Mean pairwise gene distance across the population.
    fn compute_diversity(&self) -> f64 {
        let n = self.population.len();
        if n < 2 {
            return 0.0;
        }

        let mut total = 0usize;
        let mut count = 0usize;
        for i in 0..n {
            for j in (i + 1)..n {
                total += layout_distance(&self.population[i], &self.population[j]);
                count += 1;
            }
        }
        total as f64 / count as f64
    }

    fn progress_from(&self, summary: &PopulationSummary) -> EvolutionProgress {
        EvolutionProgress {
            generation: self.generation,
            total_generations: self.total_generations,
            restarts: self.restarts,
            best_fitness: summary.best,
            worst_fitness: summary.worst,
            avg_fitness: summary.avg,
            iteration_best: self.iteration_best,
            diversity: self.compute_diversity(),
            phase: self.phase,
        }
    }

    /// Get current progress.
    pub fn progress(&self) -> EvolutionProgress {
        self.progress_from(&self.summarize())
    }

    /// Check whether the search should stop at this generation boundary.
    fn should_stop(&self, summary: &PopulationSummary) -> Option<StopReason> {
        if summary.best == 0 {
            return Some(StopReason::Solved);
        }

        if self.cancelled.load(Ordering::Relaxed) {
            return Some(StopReason::Cancelled);
        }

        if self.generation >= self.config.restart_generation
            && let Some(limit) = self.config.max_restarts
            && self.restarts >= limit
        {
            return Some(StopReason::RestartLimit);
        }

        None
    }

    /// Run evolution with progress callback.
    pub fn run_with_callback<F>(&mut self, callback: F) -> EvolutionResult
    where
        F: Fn(&EvolutionProgress),
    {
        let start_time = Instant::now();
        let interval = self.config.progress_interval;

        log::info!(
            "Searching layout for {} words on a {}x{} grid",
            self.words.len(),
            self.config.grid_size,
            self.config.grid_size
        );

        self.initialize();

        let (stop_reason, summary) = loop {
            self.evaluate_population();
            let summary = self.summarize();
            self.iteration_best = self.iteration_best.min(summary.best);

            if let Some(reason) = self.should_stop(&summary) {
                break (reason, summary);
            }

            if self.generation % interval == 0 {
                let progress = self.progress_from(&summary);
                log::debug!(
                    "Generation {} (restart {}): best {} | worst {} | avg {:.2}",
                    progress.generation,
                    progress.restarts,
                    progress.best_fitness,
                    progress.worst_fitness,
                    progress.avg_fitness
                );
                self.history.record(&progress);
                callback(&progress);
            }

            if self.generation >= self.config.restart_generation {
                self.restart();
                continue;
            }

            self.step_generation();
        };

        self.phase = EvolutionPhase::Terminated;
        let progress = self.progress_from(&summary);
        self.history.record(&progress);
        callback(&progress);

        let elapsed = start_time.elapsed().as_secs_f64();

        match stop_reason {
            StopReason::Solved => log::info!(
                "Solution found after {} generations ({} restarts)",
                self.total_generations,
                self.restarts
            ),
            StopReason::Cancelled => log::warn!("Search cancelled at best fitness {}", summary.best),
            StopReason::RestartLimit => log::warn!(
                "Restart limit reached at best fitness {}",
                summary.best
            ),
        }

        let best = self
            .population
            .get(summary.best_idx)
            .cloned()
            .unwrap_or_else(|| Layout::new(Vec::new()));

        EvolutionResult {
            best,
            best_fitness: summary.best,
            stats: EvolutionStats {
                generations: self.generation,
                total_generations: self.total_generations,
                restarts: self.restarts,
                total_evaluations: self.evaluations,
                best_fitness: summary.best,
                final_avg_fitness: summary.avg,
                elapsed_seconds: elapsed,
                stop_reason,
            },
            history: self.history.clone(),
        }
    }

    /// Run evolution (blocking).
    pub fn run(&mut self) -> EvolutionResult {
        self.run_with_callback(|_| {})
    }
}
