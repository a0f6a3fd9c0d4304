//! Directory batch runner.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{BatchError, output_file_name, read_words, write_layout};
use crate::compute::evolution::EvolutionEngine;
use crate::schema::{EvolutionConfig, EvolutionResult};

/// A solved input file.
#[derive(Debug)]
pub struct SolvedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub result: EvolutionResult,
}

/// Outcome of a whole batch.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Inputs solved and written.
    pub solved: Vec<SolvedFile>,
    /// Inputs whose search stopped without a solution.
    pub unsolved: Vec<PathBuf>,
    /// Inputs that failed to read, validate or write.
    pub failed: Vec<PathBuf>,
}

impl BatchSummary {
    pub fn processed(&self) -> usize {
        self.solved.len() + self.unsolved.len() + self.failed.len()
    }
}

/// Keep the regular files among `entries`, sorted, skipping unreadable ones.
fn regular_files<I>(dir: &Path, entries: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = io::Result<PathBuf>>,
{
    let mut files: Vec<PathBuf> = entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    files
}

/// Runs one independent search per input file.
pub struct BatchRunner {
    config: EvolutionConfig,
    cancelled: Arc<AtomicBool>,
}

impl BatchRunner {
    pub fn new(config: EvolutionConfig) -> Self {
        Self {
            config,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Cancellation handle shared by every search in the batch.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Regular files in `dir`, sorted by path.
    ///
    /// Failing to open `dir` is an error. Entries that cannot be read are
    /// logged and skipped.
    pub fn list_inputs(dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
        let entries = fs::read_dir(dir).map_err(|source| BatchError::ListInputs {
            path: dir.to_path_buf(),
            source,
        })?;
        Ok(regular_files(dir, entries.map(|entry| entry.map(|e| e.path()))))
    }

    /// Search one word list and write the solution, if any, to `outputs_dir`.
    ///
    /// Returns the result and the output path when a solution was written.
    pub fn run_file(
        &self,
        input: &Path,
        outputs_dir: &Path,
    ) -> Result<(EvolutionResult, Option<PathBuf>), BatchError> {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::info!("Processing file: {}", name);

        let words = read_words(input)?;
        let mut engine = EvolutionEngine::new(self.config.clone(), words)?
            .with_cancel_handle(self.cancel_handle());

        let result = engine.run_with_callback(|progress| {
            log::info!(
                "{}: generation {} (restart {}) | avg {:.2} | worst {} | best {}",
                name,
                progress.generation,
                progress.restarts,
                progress.avg_fitness,
                progress.worst_fitness,
                progress.best_fitness
            );
        });

        if !result.is_solved() {
            return Ok((result, None));
        }

        let output = outputs_dir.join(output_file_name(&name));
        write_layout(&output, &result.best)?;
        Ok((result, Some(output)))
    }

    /// Process every file in `inputs_dir`.
    ///
    /// The output directory is created if missing; failure to create it aborts
    /// the batch. Per-file failures are logged and the batch continues.
    pub fn run(&self, inputs_dir: &Path, outputs_dir: &Path) -> Result<BatchSummary, BatchError> {
        fs::create_dir_all(outputs_dir).map_err(|source| BatchError::CreateOutputDir {
            path: outputs_dir.to_path_buf(),
            source,
        })?;

        let inputs = Self::list_inputs(inputs_dir)?;
        if inputs.is_empty() {
            log::warn!("No files found in {}", inputs_dir.display());
        }

        let mut summary = BatchSummary::default();
        for input in inputs {
            if self.cancelled.load(Ordering::Relaxed) {
                break;
            }

            match self.run_file(&input, outputs_dir) {
                Ok((result, Some(output))) => summary.solved.push(SolvedFile {
                    input,
                    output,
                    result,
                }),
                Ok((result, None)) => {
                    log::warn!(
                        "{}: stopped without a solution ({:?})",
                        input.display(),
                        result.stats.stop_reason
                    );
                    summary.unsolved.push(input);
                }
                Err(e) => {
                    log::error!("{}", e);
                    summary.failed.push(input);
                }
            }
        }

        Ok(summary)
    }
}
