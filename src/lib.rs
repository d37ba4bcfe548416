//! Genetic-algorithm search for short Hamiltonian circuits (the
//! Traveling Salesman Problem).
//!
//! The crate provides the evolutionary core only: callers build a
//! complete [`WeightedGraph`] from their own input format, configure an
//! [`EvolutionEngine`], and own the iteration loop — each
//! [`evolve`](EvolutionEngine::evolve) call advances exactly one
//! generation. Benchmark-file decoding, presentation, and run
//! orchestration live outside this crate.
//!
//! # Components
//!
//! - [`WeightedGraph`]: fixed vertex set with weighted edges, the
//!   immutable distance oracle
//! - [`Tour`]: one candidate circuit — depot-anchored permutation of the
//!   vertices, computing its own total distance
//! - [`Population`]: a generation's worth of tours, exposing the fittest
//! - [`EvolutionEngine`]: tournament selection, two crossover operators
//!   ([`CrossoverOp::Segment`] and [`CrossoverOp::Cycle`]), per-position
//!   swap mutation, and full generational replacement
//!
//! Every candidate stays a valid permutation circuit through any number
//! of recombinations and perturbations; a lower distance is better.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tsp_ga::{CrossoverOp, EngineConfig, EvolutionEngine, WeightedGraph};
//!
//! // A complete 4-city instance.
//! let mut graph = WeightedGraph::new(4);
//! graph.insert_edge(0, 1, 10);
//! graph.insert_edge(0, 2, 15);
//! graph.insert_edge(0, 3, 20);
//! graph.insert_edge(1, 2, 35);
//! graph.insert_edge(1, 3, 25);
//! graph.insert_edge(2, 3, 30);
//!
//! let config = EngineConfig::default()
//!     .with_population_size(50)
//!     .with_crossover(CrossoverOp::Segment)
//!     .with_seed(42);
//! let mut engine = EvolutionEngine::new(Arc::new(graph), config)?;
//!
//! for _ in 0..100 {
//!     engine.evolve()?;
//! }
//!
//! let best = engine.fittest()?;
//! println!("{}: {}", best, best.distance()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*
//! - Oliver, Smith & Holland (1987), *A Study of Permutation Crossover
//!   Operators on the Traveling Salesman Problem*

pub mod engine;
pub mod graph;
pub mod population;
pub mod tour;

pub use engine::{ConfigError, CrossoverOp, EngineConfig, EvolutionEngine, GenerationStats};
pub use graph::{NoEdgeError, WeightedGraph};
pub use population::Population;
pub use tour::Tour;
