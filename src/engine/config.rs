//! Engine configuration.
//!
//! [`EngineConfig`] holds all parameters that control one evolutionary
//! run. The engine takes a single snapshot of these values at the start of
//! each generation, so one generation never mixes settings.

use thiserror::Error;

use super::operators::CrossoverOp;

/// Rejected configuration parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `population_size` was zero.
    #[error("population_size must be at least 1")]
    PopulationSize,

    /// `tournament_size` fell outside `1..=population_size`.
    #[error("tournament_size must be between 1 and population_size ({population_size}), got {tournament_size}")]
    TournamentSize {
        tournament_size: usize,
        population_size: usize,
    },

    /// A probability fell outside `[0, 1]`.
    #[error("{name} must lie in [0, 1], got {value}")]
    Rate { name: &'static str, value: f64 },

    /// The input graph cannot carry a circuit.
    #[error("input graph must have at least 2 vertices, got {0}")]
    GraphTooSmall(usize),
}

/// Configuration for an [`EvolutionEngine`](super::EvolutionEngine).
///
/// # Defaults
///
/// ```
/// use tsp_ga::{CrossoverOp, EngineConfig};
///
/// let config = EngineConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.tournament_size, 3);
/// assert_eq!(config.crossover, CrossoverOp::Segment);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::{CrossoverOp, EngineConfig};
///
/// let config = EngineConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(5)
///     .with_crossover(CrossoverOp::Cycle)
///     .with_mutation_rate(0.02)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Number of individuals per generation.
    ///
    /// Every generation produces exactly as many children as the previous
    /// population had members.
    pub population_size: usize,

    /// Number of with-replacement draws per tournament.
    ///
    /// Higher values increase selection pressure. Must not exceed
    /// `population_size`.
    pub tournament_size: usize,

    /// Probability of recombining a parent pair (0.0–1.0).
    ///
    /// When the draw fails, the fitter parent passes through unchanged.
    pub crossover_rate: f64,

    /// Per-position swap probability applied to each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Which recombination operator to use.
    pub crossover: CrossoverOp,

    /// Whether to breed the generation's children on the rayon pool.
    ///
    /// Each parallel breeding task draws from its own random stream seeded
    /// by the engine's master RNG, so runs stay reproducible per seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed from the OS at engine construction.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            tournament_size: 3,
            crossover_rate: 0.9,
            mutation_rate: 0.05,
            crossover: CrossoverOp::Segment,
            parallel: false,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the crossover rate, clamped to `[0, 1]`.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate, clamped to `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, op: CrossoverOp) -> Self {
        self.crossover = op;
        self
    }

    /// Enables or disables parallel breeding.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::PopulationSize);
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(ConfigError::TournamentSize {
                tournament_size: self.tournament_size,
                population_size: self.population_size,
            });
        }
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Rate { name, value });
            }
        }
        Ok(())
    }
}
