//! Candidate circuits over a weighted graph.
//!
//! A [`Tour`] is one candidate solution: a closed circuit that starts and
//! ends at the depot (vertex `0`) and visits every other vertex exactly
//! once. Tours share their graph through an [`Arc`] and compute their own
//! total distance on every read — nothing is cached, so in-place changes
//! to the sequence can never observe a stale value.

use std::fmt;
use std::sync::Arc;

use rand::Rng;

use crate::graph::{NoEdgeError, WeightedGraph};

/// An ordered sequence of vertex indices forming a closed circuit.
///
/// For a graph of `size` vertices the sequence has `size + 1` entries:
/// `sequence[0] == sequence[size] == 0` (the depot), and the interior is a
/// permutation of `1..size`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tsp_ga::{Tour, WeightedGraph};
///
/// let mut graph = WeightedGraph::new(3);
/// graph.insert_edge(0, 1, 10);
/// graph.insert_edge(1, 2, 20);
/// graph.insert_edge(2, 0, 15);
///
/// let tour = Tour::natural(Arc::new(graph));
/// assert_eq!(tour.sequence(), &[0, 1, 2, 0]);
/// assert_eq!(tour.distance(), Ok(45));
/// ```
#[derive(Debug, Clone)]
pub struct Tour {
    graph: Arc<WeightedGraph>,
    sequence: Vec<usize>,
}

impl Tour {
    /// The natural-order circuit `[0, 1, …, size-1, 0]`.
    pub fn natural(graph: Arc<WeightedGraph>) -> Self {
        let size = graph.size();
        let mut sequence: Vec<usize> = (0..size).collect();
        sequence.push(0);
        Self { graph, sequence }
    }

    /// Wraps a ready-made sequence.
    ///
    /// The caller guarantees the circuit invariant: depot at both ends,
    /// interior a permutation of `1..size`. Checked in debug builds only.
    pub fn from_sequence(graph: Arc<WeightedGraph>, sequence: Vec<usize>) -> Self {
        debug_assert!(
            is_valid_circuit(&sequence, graph.size()),
            "sequence is not a valid depot-anchored circuit: {sequence:?}"
        );
        Self { graph, sequence }
    }

    /// Installs a full ordered sequence, replacing the current one.
    ///
    /// The caller guarantees the circuit invariant. Checked in debug
    /// builds only.
    pub fn set_sequence(&mut self, sequence: Vec<usize>) {
        debug_assert!(
            is_valid_circuit(&sequence, self.graph.size()),
            "sequence is not a valid depot-anchored circuit: {sequence:?}"
        );
        self.sequence = sequence;
    }

    /// The vertex sequence, depot endpoints included.
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    pub(crate) fn sequence_mut(&mut self) -> &mut [usize] {
        &mut self.sequence
    }

    /// Number of entries in the sequence (`graph.size() + 1`).
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// `true` if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// `true` if the sequence starts and ends on the same vertex.
    pub fn is_circuit(&self) -> bool {
        self.sequence.first() == self.sequence.last()
    }

    /// The graph this tour draws its vertices from.
    pub fn graph(&self) -> &Arc<WeightedGraph> {
        &self.graph
    }

    /// Sum of edge weights between consecutive sequence entries.
    ///
    /// Recomputed on every call, O(len).
    ///
    /// # Errors
    /// Returns [`NoEdgeError`] if a consecutive pair is not connected,
    /// which signals an incomplete input graph.
    pub fn distance(&self) -> Result<u64, NoEdgeError> {
        let mut total = 0u64;
        for pair in self.sequence.windows(2) {
            total += u64::from(self.graph.edge_weight(pair[0], pair[1])?);
        }
        Ok(total)
    }

    /// Uniformly permutes the interior positions `[1, len-2]`.
    ///
    /// Fisher–Yates restricted to the interior: the depot endpoints are
    /// never moved.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        let len = self.sequence.len();
        if len < 4 {
            return; // one interior position or fewer
        }
        for i in (2..=len - 2).rev() {
            let j = rng.random_range(1..=i);
            self.sequence.swap(i, j);
        }
    }

    /// `true` if `vertex` appears anywhere in the sequence. Linear scan.
    pub fn contains(&self, vertex: usize) -> bool {
        self.sequence.contains(&vertex)
    }
}

impl fmt::Display for Tour {
    /// Renders the sequence as comma-separated indices, e.g. `0, 2, 1, 0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.sequence.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{vertex}")?;
        }
        Ok(())
    }
}

/// Checks the depot-anchored circuit invariant: `sequence` has `size + 1`
/// entries, both endpoints are `0`, and the interior is a permutation of
/// `1..size`.
pub(crate) fn is_valid_circuit(sequence: &[usize], size: usize) -> bool {
    if sequence.len() != size + 1 {
        return false;
    }
    if sequence[0] != 0 || sequence[size] != 0 {
        return false;
    }
    let mut seen = vec![false; size];
    for &v in &sequence[1..size] {
        if v == 0 || v >= size || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// The 4-city symmetric instance used throughout the crate's tests:
    /// d(0,1)=10, d(0,2)=15, d(0,3)=20, d(1,2)=35, d(1,3)=25, d(2,3)=30.
    fn example_graph() -> Arc<WeightedGraph> {
        let mut graph = WeightedGraph::new(4);
        graph.insert_edge(0, 1, 10);
        graph.insert_edge(0, 2, 15);
        graph.insert_edge(0, 3, 20);
        graph.insert_edge(1, 2, 35);
        graph.insert_edge(1, 3, 25);
        graph.insert_edge(2, 3, 30);
        Arc::new(graph)
    }

    #[test]
    fn test_natural_sequence() {
        let tour = Tour::natural(example_graph());
        assert_eq!(tour.sequence(), &[0, 1, 2, 3, 0]);
        assert_eq!(tour.len(), 5);
        assert!(tour.is_circuit());
    }

    #[test]
    fn test_distance_natural_order() {
        let tour = Tour::natural(example_graph());
        // 10 + 35 + 30 + 20
        assert_eq!(tour.distance(), Ok(95));
    }

    #[test]
    fn test_distance_optimal_order() {
        let tour = Tour::from_sequence(example_graph(), vec![0, 1, 3, 2, 0]);
        // 10 + 25 + 30 + 15
        assert_eq!(tour.distance(), Ok(80));
    }

    #[test]
    fn test_distance_missing_edge() {
        let mut graph = WeightedGraph::new(3);
        graph.insert_edge(0, 1, 10);
        graph.insert_edge(2, 0, 5);
        let tour = Tour::natural(Arc::new(graph));
        assert_eq!(tour.distance(), Err(NoEdgeError { from: 1, to: 2 }));
    }

    #[test]
    fn test_shuffle_preserves_invariant() {
        let mut rng = StdRng::seed_from_u64(42);
        let graph = example_graph();
        for _ in 0..100 {
            let mut tour = Tour::natural(graph.clone());
            tour.shuffle(&mut rng);
            assert!(
                is_valid_circuit(tour.sequence(), 4),
                "shuffled tour invalid: {:?}",
                tour.sequence()
            );
        }
    }

    #[test]
    fn test_shuffle_changes_interior() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut graph = WeightedGraph::new(12);
        for i in 0..12 {
            for j in (i + 1)..12 {
                graph.insert_edge(i, j, 1);
            }
        }
        let graph = Arc::new(graph);

        let reference = Tour::natural(graph.clone());
        let mut changed = false;
        for _ in 0..20 {
            let mut tour = Tour::natural(graph.clone());
            tour.shuffle(&mut rng);
            if tour.sequence() != reference.sequence() {
                changed = true;
                break;
            }
        }
        assert!(changed, "shuffle never changed an 11-city interior");
    }

    #[test]
    fn test_shuffle_tiny_tour_is_noop() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut graph = WeightedGraph::new(2);
        graph.insert_edge(0, 1, 10);
        let mut tour = Tour::natural(Arc::new(graph));
        tour.shuffle(&mut rng);
        assert_eq!(tour.sequence(), &[0, 1, 0]);
    }

    #[test]
    fn test_contains() {
        let tour = Tour::natural(example_graph());
        assert!(tour.contains(0));
        assert!(tour.contains(3));
        assert!(!tour.contains(4));
    }

    #[test]
    fn test_set_sequence() {
        let mut tour = Tour::natural(example_graph());
        tour.set_sequence(vec![0, 3, 1, 2, 0]);
        assert_eq!(tour.sequence(), &[0, 3, 1, 2, 0]);
    }

    #[test]
    fn test_display() {
        let tour = Tour::natural(example_graph());
        assert_eq!(tour.to_string(), "0, 1, 2, 3, 0");
    }

    #[test]
    fn test_is_valid_circuit_rejects_bad_sequences() {
        assert!(is_valid_circuit(&[0, 1, 2, 3, 0], 4));
        assert!(!is_valid_circuit(&[0, 1, 2, 0], 4)); // wrong length
        assert!(!is_valid_circuit(&[0, 1, 1, 3, 0], 4)); // duplicate
        assert!(!is_valid_circuit(&[0, 1, 2, 4, 0], 4)); // out of range
        assert!(!is_valid_circuit(&[1, 0, 2, 3, 1], 4)); // wrong depot
        assert!(!is_valid_circuit(&[0, 1, 0, 3, 0], 4)); // depot in interior
    }
}
