//! The evolutionary engine.
//!
//! One [`EvolutionEngine`] drives one run: it owns the current
//! [`Population`](crate::Population), a seeded random source, and an
//! immutable parameter snapshot per generation. Callers own the iteration
//! loop — each [`evolve`](EvolutionEngine::evolve) call advances exactly
//! one generation and returns its [`GenerationStats`].
//!
//! # Key Types
//!
//! - [`EngineConfig`]: run parameters (population size, tournament size,
//!   operator rates, crossover choice, parallelism, seed)
//! - [`CrossoverOp`]: which recombination operator to dispatch
//! - [`EvolutionEngine`]: selection → crossover → mutation → replacement
//! - [`GenerationStats`]: per-generation observability counters
//!
//! # Submodules
//!
//! - [`operators`]: the segment and cycle crossover operators and the
//!   per-position swap mutation, over raw index sequences

mod config;
pub mod operators;
mod runner;
mod selection;

pub use config::{ConfigError, EngineConfig};
pub use operators::CrossoverOp;
pub use runner::{EvolutionEngine, GenerationStats};
