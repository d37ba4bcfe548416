//! Tournament selection.
//!
//! The engine's only selection scheme: draw `size` individuals uniformly
//! at random **with replacement** and keep the one with the minimum
//! distance. It is called twice per offspring, once per parent, and the
//! two calls are independent — the same individual may win both.

use rand::Rng;

use crate::graph::NoEdgeError;
use crate::population::Population;

/// Selects one parent index from `population`.
///
/// `size` draws with replacement; the first minimum wins. A `size` of
/// zero is treated as one draw.
///
/// # Errors
/// Returns [`NoEdgeError`] if a drawn tour crosses a missing edge.
///
/// # Panics
/// Panics if `population` is empty.
pub(crate) fn tournament<R: Rng>(
    population: &Population,
    size: usize,
    rng: &mut R,
) -> Result<usize, NoEdgeError> {
    assert!(
        !population.is_empty(),
        "cannot select from an empty population"
    );
    let size = size.max(1);
    let n = population.len();

    let mut best = rng.random_range(0..n);
    let mut best_distance = population[best].distance()?;
    for _ in 1..size {
        let idx = rng.random_range(0..n);
        let distance = population[idx].distance()?;
        if distance < best_distance {
            best = idx;
            best_distance = distance;
        }
    }
    Ok(best)
}
