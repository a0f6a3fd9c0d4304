//! Schema module - Layout, configuration and result types for crossword search.

mod config;
mod evolution;
mod layout;

pub use config::*;
pub use evolution::*;
pub use layout::*;
