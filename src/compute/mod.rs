//! Compute module - Grid rendering, rule checks and evolutionary search.

mod adjacency;
mod connectivity;
mod grid;

pub mod evolution;

pub use adjacency::*;
pub use connectivity::*;
pub use grid::*;
