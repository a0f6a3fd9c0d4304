//! Crossword layout generation by genetic search.
//!
//! Given a list of words, this crate searches for row, column and orientation
//! assignments such that words only cross on matching letters, form a single
//! connected figure, and never touch in ways that spell unintended words.
//!
//! # Architecture
//!
//! The crate is split into three modules:
//!
//! - `schema`: Layout data model, configuration and result types
//! - `compute`: Grid rendering, rule checks and the evolutionary search
//! - `batch`: Reading word lists and writing solutions for a directory of inputs
//!
//! # Example
//!
//! ```rust,no_run
//! use crossword_evo::{EvolutionConfig, EvolutionEngine, Grid};
//!
//! let words = vec!["CAT".to_string(), "COT".to_string(), "TOE".to_string()];
//! let config = EvolutionConfig::default();
//! let grid_size = config.grid_size;
//!
//! let mut engine = EvolutionEngine::new(config, words)?;
//! let result = engine.run();
//!
//! println!("{}", Grid::from_placements(grid_size, result.best.placements()));
//! # Ok::<(), crossword_evo::EvolutionError>(())
//! ```

pub mod batch;
pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::Grid;
pub use compute::evolution::{EvolutionEngine, EvolutionError, FitnessEvaluator};
pub use schema::{EvolutionConfig, EvolutionResult, Layout, Orientation, Placement};
