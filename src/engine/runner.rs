//! The generational-replacement loop.
//!
//! [`EvolutionEngine`] owns one run: the input graph, the parameter set,
//! the current population, the generation counter, and a seeded random
//! source. Each [`evolve`](EvolutionEngine::evolve) call breeds a full
//! replacement population — select two parents, cross them, mutate the
//! child, repeat `population.len()` times — then swaps it in as a whole
//! and bumps the generation counter.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::debug;

use super::config::{ConfigError, EngineConfig};
use super::operators::{cycle_crossover, segment_crossover, swap_mutation, CrossoverOp};
use super::selection::tournament;
use crate::graph::{NoEdgeError, WeightedGraph};
use crate::population::Population;
use crate::tour::Tour;

/// Seeded random source; one per run, and one per breeding task when
/// breeding runs in parallel.
fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Observability counters for one completed generation.
///
/// The counters are auxiliary — reading them is optional and nothing in
/// the evolutionary loop consults them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// The generation this snapshot describes (1 for the first `evolve`).
    pub generation: usize,

    /// Distance of the fittest individual after the replacement.
    pub best_distance: u64,

    /// How many offspring drew the same individual as both parents.
    pub same_parents_selected: usize,

    /// How many children left crossover identical to a parent
    /// (sampled before mutation).
    pub children_equal_to_parent: usize,
}

/// Drives selection, crossover, mutation, and generational replacement.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tsp_ga::{EngineConfig, EvolutionEngine, WeightedGraph};
///
/// let mut graph = WeightedGraph::new(4);
/// graph.insert_edge(0, 1, 10);
/// graph.insert_edge(0, 2, 15);
/// graph.insert_edge(0, 3, 20);
/// graph.insert_edge(1, 2, 35);
/// graph.insert_edge(1, 3, 25);
/// graph.insert_edge(2, 3, 30);
///
/// let config = EngineConfig::default()
///     .with_population_size(30)
///     .with_seed(42);
/// let mut engine = EvolutionEngine::new(Arc::new(graph), config)?;
///
/// for _ in 0..20 {
///     engine.evolve()?;
/// }
/// assert_eq!(engine.generations(), 20);
/// let best = engine.fittest()?.distance()?;
/// assert!(best >= 80); // 80 is this instance's optimum
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct EvolutionEngine {
    graph: Arc<WeightedGraph>,
    config: EngineConfig,
    population: Population,
    generations: usize,
    rng: StdRng,
}

impl EvolutionEngine {
    /// Creates an engine and generates its initial population.
    ///
    /// The generation counter starts at 0. With `config.seed` unset, a
    /// seed is drawn from the OS.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] for invalid parameters or a graph with
    /// fewer than two vertices.
    pub fn new(graph: Arc<WeightedGraph>, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        if graph.size() < 2 {
            return Err(ConfigError::GraphTooSmall(graph.size()));
        }

        let mut rng = create_rng(config.seed.unwrap_or_else(rand::random));
        let population = Population::generate(&graph, config.population_size, &mut rng);
        debug!(
            individuals = population.len(),
            vertices = graph.size(),
            "initial population generated"
        );

        Ok(Self {
            graph,
            config,
            population,
            generations: 0,
            rng,
        })
    }

    /// Discards the current population, generates a fresh one, and resets
    /// the generation counter to 0.
    pub fn reinitialize(&mut self) {
        self.generations = 0;
        self.population =
            Population::generate(&self.graph, self.config.population_size, &mut self.rng);
    }

    /// The current population. Replaced as a whole by every generation.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// How many times the population has evolved since (re)initialization.
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// The input graph.
    pub fn graph(&self) -> &Arc<WeightedGraph> {
        &self.graph
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Replaces the configuration between generations.
    ///
    /// The new settings take effect with the next [`evolve`] call; a
    /// changed `population_size` only applies on [`reinitialize`], since
    /// each generation breeds as many children as the current population
    /// holds.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] and leaves the engine untouched if the
    /// new configuration is invalid.
    ///
    /// [`evolve`]: Self::evolve
    /// [`reinitialize`]: Self::reinitialize
    pub fn set_config(&mut self, config: EngineConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// The fittest individual of the current population.
    ///
    /// # Errors
    /// Returns [`NoEdgeError`] if any tour crosses a missing edge.
    pub fn fittest(&self) -> Result<&Tour, NoEdgeError> {
        self.population.fittest()
    }

    /// Advances exactly one generation.
    ///
    /// Breeds `population.len()` children (tournament-select two parents,
    /// crossover, mutate in place), swaps the new population in
    /// atomically, and increments the generation counter. No early
    /// termination, elitism, or diversity preservation is applied.
    ///
    /// The configuration is snapshotted once at the start, so a
    /// generation never mixes settings. With `parallel` set, children
    /// breed on the rayon pool, each task on a private random stream
    /// seeded from the engine's master RNG.
    ///
    /// # Errors
    /// Returns [`NoEdgeError`] if any distance computation crosses a
    /// missing edge — a fatal input-graph defect, never retried.
    pub fn evolve(&mut self) -> Result<GenerationStats, NoEdgeError> {
        let config = self.config.clone();
        let count = self.population.len();

        let children: Vec<BredChild> = if config.parallel {
            let seeds: Vec<u64> = (0..count).map(|_| self.rng.random()).collect();
            let population = &self.population;
            let config = &config;
            seeds
                .into_par_iter()
                .map(|seed| breed_child(population, config, &mut create_rng(seed)))
                .collect::<Result<_, _>>()?
        } else {
            let mut children = Vec::with_capacity(count);
            for _ in 0..count {
                children.push(breed_child(&self.population, &config, &mut self.rng)?);
            }
            children
        };

        let mut next = Population::with_capacity(count);
        let mut same_parents_selected = 0;
        let mut children_equal_to_parent = 0;
        for child in children {
            if child.same_parents {
                same_parents_selected += 1;
            }
            if child.equals_parent {
                children_equal_to_parent += 1;
            }
            next.push(child.tour);
        }

        self.population = next;
        self.generations += 1;

        let best_distance = self.population.fittest()?.distance()?;
        debug!(
            generation = self.generations,
            best_distance,
            same_parents_selected,
            children_equal_to_parent,
            "generation complete"
        );

        Ok(GenerationStats {
            generation: self.generations,
            best_distance,
            same_parents_selected,
            children_equal_to_parent,
        })
    }
}

/// One bred offspring plus the counters sampled while breeding it.
struct BredChild {
    tour: Tour,
    same_parents: bool,
    equals_parent: bool,
}

/// Selects two parents, crosses them, and mutates the child in place.
fn breed_child<R: Rng>(
    population: &Population,
    config: &EngineConfig,
    rng: &mut R,
) -> Result<BredChild, NoEdgeError> {
    let first = tournament(population, config.tournament_size, rng)?;
    let second = tournament(population, config.tournament_size, rng)?;
    let parent1 = &population[first];
    let parent2 = &population[second];

    let mut child = crossover(parent1, parent2, config, rng)?;
    let equals_parent =
        child.sequence() == parent1.sequence() || child.sequence() == parent2.sequence();
    swap_mutation(child.sequence_mut(), config.mutation_rate, rng);

    Ok(BredChild {
        tour: child,
        same_parents: first == second,
        equals_parent,
    })
}

/// Applies the crossover-rate gate and dispatches on the operator.
///
/// A failed rate draw passes the strictly fitter parent through
/// unchanged (ties fall to `parent2`). The cycle operator breeds two
/// children and keeps the strictly fitter one (ties fall to the second).
fn crossover<R: Rng>(
    parent1: &Tour,
    parent2: &Tour,
    config: &EngineConfig,
    rng: &mut R,
) -> Result<Tour, NoEdgeError> {
    if rng.random_range(0.0..1.0) >= config.crossover_rate {
        return Ok(if parent1.distance()? < parent2.distance()? {
            parent1.clone()
        } else {
            parent2.clone()
        });
    }

    match config.crossover {
        CrossoverOp::Segment => {
            let sequence = segment_crossover(parent1.sequence(), parent2.sequence(), rng);
            Ok(Tour::from_sequence(parent1.graph().clone(), sequence))
        }
        CrossoverOp::Cycle => {
            let (first, second) = cycle_crossover(parent1.sequence(), parent2.sequence());
            let first = Tour::from_sequence(parent1.graph().clone(), first);
            let second = Tour::from_sequence(parent1.graph().clone(), second);
            Ok(if first.distance()? < second.distance()? {
                first
            } else {
                second
            })
        }
    }
}
