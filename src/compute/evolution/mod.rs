//! Evolutionary search for valid crossword layouts.
//!
//! # Overview
//!
//! The evolutionary search system consists of:
//!
//! - **Fitness** (`fitness`): penalty scoring of a layout against the crossword rules
//! - **Genome Operations** (`genome`): random layouts, crossover, and mutation
//! - **Search** (`search`): the generational loop with tournament selection
//!   and restarts on stagnation
//!
//! # Example
//!
//! ```rust,no_run
//! use crossword_evo::schema::EvolutionConfig;
//! use crossword_evo::compute::evolution::EvolutionEngine;
//!
//! let words = vec!["CROSS".to_string(), "WORD".to_string(), "SWORD".to_string()];
//! let mut engine = EvolutionEngine::new(EvolutionConfig::default(), words)?;
//! let result = engine.run_with_callback(|progress| {
//!     println!("Generation {}: best fitness = {}",
//!         progress.generation, progress.best_fitness);
//! });
//!
//! for p in result.best.placements() {
//!     println!("{} {} {} {}", p.row, p.col, p.orientation, p.word());
//! }
//! # Ok::<(), crossword_evo::compute::evolution::EvolutionError>(())
//! ```
//!
//! # Fitness Rules
//!
//! Each violation costs one penalty unit (10 by default):
//!
//! - `Bounds`: a letter outside the grid (optional)
//! - `Overlap`: two different letters written to one cell
//! - `Connectivity`: more than one connected group of letters, charged per group
//! - `Adjacency`: run-ons, unexplained end neighbours, parallel words

mod fitness;
mod genome;
mod search;

pub use fitness::{FitnessBreakdown, FitnessEvaluator};
pub use genome::{LayoutRng, layout_distance};
pub use search::{EvolutionEngine, EvolutionError, check_feasibility};
