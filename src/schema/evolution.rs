//! Progress and result types reported by the evolution engine.

use serde::{Deserialize, Serialize};

use super::Layout;

// ============================================================================
// Progress and Result Types
// ============================================================================

/// Snapshot of the search, handed to progress callbacks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionProgress {
    /// Generation within the current iteration (reset on restart).
    pub generation: usize,
    /// Generations run across all iterations.
    pub total_generations: usize,
    /// Number of restarts so far.
    pub restarts: usize,
    /// Best (lowest) fitness of the current population.
    pub best_fitness: u32,
    /// Worst (highest) fitness of the current population.
    pub worst_fitness: u32,
    /// Mean fitness of the current population.
    pub avg_fitness: f64,
    /// Best fitness seen in the current iteration.
    pub iteration_best: u32,
    /// Mean number of differing genes between two layouts.
    pub diversity: f64,
    /// Current phase of the algorithm.
    pub phase: EvolutionPhase,
}

/// Evolution history, sampled every `progress_interval` generations.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EvolutionHistory {
    /// Total generation index of each sample.
    pub generations: Vec<usize>,
    /// Best fitness per sample.
    pub best_fitness: Vec<u32>,
    /// Worst fitness per sample.
    pub worst_fitness: Vec<u32>,
    /// Mean fitness per sample.
    pub avg_fitness: Vec<f64>,
    /// Diversity per sample.
    pub diversity: Vec<f64>,
}

impl EvolutionHistory {
    pub(crate) fn record(&mut self, progress: &EvolutionProgress) {
        self.generations.push(progress.total_generations);
        self.best_fitness.push(progress.best_fitness);
        self.worst_fitness.push(progress.worst_fitness);
        self.avg_fitness.push(progress.avg_fitness);
        self.diversity.push(progress.diversity);
    }

    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }
}

/// Current phase of evolution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum EvolutionPhase {
    /// Building a fresh random population.
    #[default]
    Initializing,
    /// Scoring the population.
    Evaluating,
    /// Breeding the next generation.
    Reproducing,
    /// Discarding a stagnant population.
    Restarting,
    /// Search finished.
    Terminated,
}

/// Final result of an evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionResult {
    /// Best layout of the final population.
    pub best: Layout,
    /// Fitness of `best`. Zero means a valid crossword.
    pub best_fitness: u32,
    /// Statistics from the run.
    pub stats: EvolutionStats,
    /// Sampled history for analysis.
    pub history: EvolutionHistory,
}

impl EvolutionResult {
    /// Whether the run produced a valid crossword.
    pub fn is_solved(&self) -> bool {
        self.stats.stop_reason == StopReason::Solved
    }
}

/// Statistics from an evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Generations in the final iteration.
    pub generations: usize,
    /// Generations across all iterations.
    pub total_generations: usize,
    /// Number of restarts.
    pub restarts: usize,
    /// Total fitness evaluations performed.
    pub total_evaluations: u64,
    /// Best fitness of the final population.
    pub best_fitness: u32,
    /// Mean fitness of the final population.
    pub final_avg_fitness: f64,
    /// Time taken (in seconds).
    pub elapsed_seconds: f64,
    /// Reason for stopping.
    pub stop_reason: StopReason,
}

/// Reason evolution stopped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StopReason {
    /// A zero-penalty layout was found.
    Solved,
    /// Restart limit hit without a solution.
    RestartLimit,
    /// User cancelled.
    Cancelled,
}
