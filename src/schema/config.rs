//! Configuration types for crossword layout search.

use serde::{Deserialize, Serialize};

/// Top-level configuration for one optimization run.
///
/// Every field has a serde default, so a partial JSON file only needs the
/// values it overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Side length of the square grid.
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,
    /// Number of layouts per generation.
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    /// Probability that a child is bred by crossover instead of copied (0.0-1.0).
    #[serde(default = "default_crossover_rate")]
    pub crossover_rate: f64,
    /// Probability that a child gets one gene resampled (0.0-1.0).
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,
    /// Tournament size as a fraction of the population (0.0-1.0].
    #[serde(default = "default_tournament_ratio")]
    pub tournament_ratio: f64,
    /// Generations without a solution before the population is reinitialized.
    #[serde(default = "default_restart_generation")]
    pub restart_generation: usize,
    /// Stop after this many restarts. `None` keeps restarting forever.
    #[serde(default)]
    pub max_restarts: Option<usize>,
    /// Best layouts copied unchanged into the next generation.
    #[serde(default)]
    pub elitism: usize,
    /// Seed every new generation with one fresh random layout.
    #[serde(default = "default_inject_random")]
    pub inject_random: bool,
    /// How new placements are sampled.
    #[serde(default)]
    pub placement: PlacementStrategy,
    /// Penalty unit added per rule violation.
    #[serde(default = "default_penalty")]
    pub penalty: u32,
    /// Score letters that fall outside the grid.
    #[serde(default = "default_penalize_out_of_bounds")]
    pub penalize_out_of_bounds: bool,
    /// Generations between progress reports and history samples.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            population_size: default_population_size(),
            crossover_rate: default_crossover_rate(),
            mutation_rate: default_mutation_rate(),
            tournament_ratio: default_tournament_ratio(),
            restart_generation: default_restart_generation(),
            max_restarts: None,
            elitism: 0,
            inject_random: default_inject_random(),
            placement: PlacementStrategy::default(),
            penalty: default_penalty(),
            penalize_out_of_bounds: default_penalize_out_of_bounds(),
            progress_interval: default_progress_interval(),
            random_seed: None,
        }
    }
}

fn default_grid_size() -> usize {
    20
}
fn default_population_size() -> usize {
    100
}
fn default_crossover_rate() -> f64 {
    0.9
}
fn default_mutation_rate() -> f64 {
    1.0
}
fn default_tournament_ratio() -> f64 {
    0.1
}
fn default_restart_generation() -> usize {
    100_000
}
fn default_inject_random() -> bool {
    true
}
fn default_penalty() -> u32 {
    10
}
fn default_penalize_out_of_bounds() -> bool {
    true
}
fn default_progress_interval() -> usize {
    1000
}

/// Sampling rule for a placement's start cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementStrategy {
    /// Start cells keep the whole word inside the grid.
    #[default]
    LengthAware,
    /// Start cells are uniform over the grid; words may overhang the edge.
    Uniform,
}

impl EvolutionConfig {
    /// Number of contestants drawn per tournament (at least one).
    pub fn tournament_size(&self) -> usize {
        ((self.population_size as f64 * self.tournament_ratio) as usize).max(1)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::InvalidGridSize);
        }
        if self.grid_size > i32::MAX as usize {
            return Err(ConfigError::InvalidGridSize);
        }
        if self.population_size == 0 {
            return Err(ConfigError::PopulationTooSmall);
        }

        let check_rate = |rate: f64, name: &'static str| {
            if (0.0..=1.0).contains(&rate) {
                Ok(())
            } else {
                Err(ConfigError::InvalidRate { name, value: rate })
            }
        };
        check_rate(self.crossover_rate, "crossover_rate")?;
        check_rate(self.mutation_rate, "mutation_rate")?;

        if !(self.tournament_ratio > 0.0 && self.tournament_ratio <= 1.0) {
            return Err(ConfigError::InvalidRate {
                name: "tournament_ratio",
                value: self.tournament_ratio,
            });
        }
        if self.restart_generation == 0 {
            return Err(ConfigError::InvalidRestartGeneration);
        }
        if self.penalty == 0 {
            return Err(ConfigError::InvalidPenalty);
        }
        if self.progress_interval == 0 {
            return Err(ConfigError::InvalidProgressInterval);
        }

        let reserved = self.elitism + usize::from(self.inject_random);
        if reserved > self.population_size {
            return Err(ConfigError::TooManyReservedSlots {
                reserved,
                population: self.population_size,
            });
        }

        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid size must be non-zero and fit in an i32")]
    InvalidGridSize,
    #[error("Population size must be at least 1")]
    PopulationTooSmall,
    #[error("{name} must be within range, got {value}")]
    InvalidRate { name: &'static str, value: f64 },
    #[error("Restart generation must be positive")]
    InvalidRestartGeneration,
    #[error("Penalty must be positive")]
    InvalidPenalty,
    #[error("Progress interval must be positive")]
    InvalidProgressInterval,
    #[error("Elitism and random injection reserve {reserved} slots of a population of {population}")]
    TooManyReservedSlots { reserved: usize, population: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = EvolutionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tournament_size(), 10);
    }

    #[test]
    fn test_tournament_size_minimum_one() {
        let config = EvolutionConfig {
            population_size: 5,
            tournament_ratio: 0.1,
            ..Default::default()
        };
        assert_eq!(config.tournament_size(), 1);
    }

    #[test]
    fn test_invalid_rates_rejected() {
        let config = EvolutionConfig {
            crossover_rate: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRate {
                name: "crossover_rate",
                ..
            })
        ));

        let config = EvolutionConfig {
            tournament_ratio: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reserved_slots_rejected() {
        let config = EvolutionConfig {
            population_size: 2,
            elitism: 2,
            inject_random: true,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooManyReservedSlots {
                reserved: 3,
                population: 2
            })
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EvolutionConfig =
            serde_json::from_str(r#"{ "population_size": 50, "placement": "Uniform" }"#).unwrap();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.placement, PlacementStrategy::Uniform);
        assert_eq!(config.restart_generation, 100_000);
    }

    #[test]
    fn test_serialization() {
        let config = EvolutionConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: EvolutionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.population_size, config.population_size);
        assert_eq!(parsed.penalty, config.penalty);
    }
}
