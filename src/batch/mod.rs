//! Batch processing of word-list files.
//!
//! Each input file holds one word per line and yields one independent search.
//! Solutions are written as `<row> <col> <orientation> <word>` lines in gene
//! order (orientation 0 = horizontal, 1 = vertical).

mod input;
mod output;
mod runner;

use std::io;
use std::path::PathBuf;

use crate::compute::evolution::EvolutionError;

pub use input::*;
pub use output::*;
pub use runner::*;

/// Errors raised while processing a batch.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Failed to read input {path}: {source}")]
    ReadInput { path: PathBuf, source: io::Error },
    #[error("Failed to list input directory {path}: {source}")]
    ListInputs { path: PathBuf, source: io::Error },
    #[error("Failed to create output directory {path}: {source}")]
    CreateOutputDir { path: PathBuf, source: io::Error },
    #[error("Failed to write output {path}: {source}")]
    WriteOutput { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Evolution(#[from] EvolutionError),
}
