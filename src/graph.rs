//! Weighted graph over a fixed vertex set.
//!
//! [`WeightedGraph`] is the input data structure for the evolutionary
//! engine: a complete graph of cities with non-negative integer edge
//! weights. It is built once from external input and never mutated by the
//! evolutionary core, which only performs [`edge_weight`] lookups.
//!
//! A weight of `0` means "no edge" and is never stored.
//!
//! [`edge_weight`]: WeightedGraph::edge_weight

use std::fmt;
use thiserror::Error;

/// Lookup failure for a vertex pair with no connecting edge.
///
/// The engine assumes a complete input graph, so this error signals
/// malformed input rather than a normal runtime branch. It is fatal and
/// never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no edge between vertices {from} and {to}")]
pub struct NoEdgeError {
    /// Source vertex index.
    pub from: usize,
    /// Target vertex index.
    pub to: usize,
}

/// A weighted connection from one vertex to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Index of the vertex this edge leads to.
    pub target: usize,
    /// Edge weight. Always positive: zero-weight edges are never stored.
    pub weight: u32,
}

/// A vertex and its adjacency list.
#[derive(Debug, Clone)]
pub struct Vertex {
    index: usize,
    edges: Vec<Edge>,
}

impl Vertex {
    fn new(index: usize) -> Self {
        Self {
            index,
            edges: Vec::new(),
        }
    }

    /// Index of this vertex in its graph.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over the outgoing edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Returns `true` if an edge to `target` exists. O(degree).
    pub fn is_neighbor(&self, target: usize) -> bool {
        self.edges.iter().any(|e| e.target == target)
    }

    /// Weight of the edge to `target`, if connected. O(degree).
    pub fn edge_weight(&self, target: usize) -> Option<u32> {
        self.edges
            .iter()
            .find(|e| e.target == target)
            .map(|e| e.weight)
    }

    fn connect_to(&mut self, target: usize, weight: u32) {
        if weight != 0 && !self.is_neighbor(target) {
            self.edges.push(Edge { target, weight });
        }
    }

    fn disconnect_from(&mut self, target: usize) {
        self.edges.retain(|e| e.target != target);
    }
}

/// A graph with a fixed number of vertices and weighted edges.
///
/// # Examples
///
/// ```
/// use tsp_ga::WeightedGraph;
///
/// let mut graph = WeightedGraph::new(3);
/// graph.insert_edge(0, 1, 10);
/// graph.insert_edge(1, 2, 20);
/// graph.insert_edge(0, 2, 15);
///
/// assert_eq!(graph.edge_weight(1, 0), Ok(10)); // undirected mirror
/// assert!(graph.edge_weight(0, 0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    vertices: Vec<Vertex>,
    directed: bool,
}

impl WeightedGraph {
    /// Creates an undirected graph with `size` vertices and no edges.
    pub fn new(size: usize) -> Self {
        Self::with_direction(size, false)
    }

    /// Creates a directed graph with `size` vertices and no edges.
    pub fn directed(size: usize) -> Self {
        Self::with_direction(size, true)
    }

    fn with_direction(size: usize, directed: bool) -> Self {
        Self {
            vertices: (0..size).map(Vertex::new).collect(),
            directed,
        }
    }

    /// Number of vertices. Fixed at construction.
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// The vertex at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn vertex(&self, index: usize) -> &Vertex {
        &self.vertices[index]
    }

    /// All vertices in index order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Records an edge from `source` to `target`.
    ///
    /// A `weight` of `0` is a no-op. Re-inserting an existing edge is
    /// skipped, so the first inserted weight wins. On an undirected graph
    /// the mirror edge is recorded as well.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn insert_edge(&mut self, source: usize, target: usize, weight: u32) {
        assert!(target < self.vertices.len(), "target vertex out of range");
        self.vertices[source].connect_to(target, weight);
        if !self.directed {
            self.vertices[target].connect_to(source, weight);
        }
    }

    /// Removes the edge from `source` to `target` (and its mirror on an
    /// undirected graph). Removing an absent edge is a no-op.
    ///
    /// Present for completeness of the data structure; the evolutionary
    /// path never removes edges.
    pub fn remove_edge(&mut self, source: usize, target: usize) {
        self.vertices[source].disconnect_from(target);
        if !self.directed {
            self.vertices[target].disconnect_from(source);
        }
    }

    /// Weight of the edge from `source` to `target`.
    ///
    /// # Errors
    /// Returns [`NoEdgeError`] if the vertices are not connected.
    pub fn edge_weight(&self, source: usize, target: usize) -> Result<u32, NoEdgeError> {
        self.vertices[source]
            .edge_weight(target)
            .ok_or(NoEdgeError {
                from: source,
                to: target,
            })
    }

    /// Checks `w(i,j) <= w(i,k) + w(k,j)` over all distinct vertex triples.
    ///
    /// Returns `Ok(false)` for directed graphs.
    ///
    /// # Errors
    /// Returns [`NoEdgeError`] if any required pair is not connected.
    pub fn satisfies_triangle_inequality(&self) -> Result<bool, NoEdgeError> {
        if self.directed {
            return Ok(false);
        }
        let n = self.size();
        for i in 0..n {
            for j in 0..n {
                if j == i {
                    continue;
                }
                for k in 0..n {
                    if k == i || k == j {
                        continue;
                    }
                    if self.edge_weight(i, j)? > self.edge_weight(i, k)? + self.edge_weight(k, j)? {
                        return Ok(false);
                    }
                }
            }
        }
        Ok(true)
    }
}

impl fmt::Display for WeightedGraph {
    /// Renders the adjacency list, one vertex per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            write!(f, "{}:", vertex.index())?;
            for edge in vertex.edges() {
                write!(f, " {},{}", edge.target, edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup_undirected() {
        let mut graph = WeightedGraph::new(4);
        graph.insert_edge(0, 1, 10);
        graph.insert_edge(2, 3, 30);

        assert_eq!(graph.edge_weight(0, 1), Ok(10));
        assert_eq!(graph.edge_weight(1, 0), Ok(10));
        assert_eq!(graph.edge_weight(3, 2), Ok(30));
    }

    #[test]
    fn test_missing_edge_error_carries_indices() {
        let graph = WeightedGraph::new(3);
        let err = graph.edge_weight(0, 2).unwrap_err();
        assert_eq!(err, NoEdgeError { from: 0, to: 2 });
        assert_eq!(err.to_string(), "no edge between vertices 0 and 2");
    }

    #[test]
    fn test_zero_weight_is_not_stored() {
        let mut graph = WeightedGraph::new(2);
        graph.insert_edge(0, 1, 0);
        assert!(graph.edge_weight(0, 1).is_err());
        assert_eq!(graph.vertex(0).degree(), 0);
    }

    #[test]
    fn test_reinsert_keeps_first_weight() {
        let mut graph = WeightedGraph::new(2);
        graph.insert_edge(0, 1, 5);
        graph.insert_edge(0, 1, 9);
        assert_eq!(graph.edge_weight(0, 1), Ok(5));
        assert_eq!(graph.vertex(0).degree(), 1);
    }

    #[test]
    fn test_directed_graph_has_no_mirror() {
        let mut graph = WeightedGraph::directed(2);
        graph.insert_edge(0, 1, 7);
        assert_eq!(graph.edge_weight(0, 1), Ok(7));
        assert!(graph.edge_weight(1, 0).is_err());
    }

    #[test]
    fn test_remove_edge_both_directions() {
        let mut graph = WeightedGraph::new(3);
        graph.insert_edge(0, 1, 4);
        graph.remove_edge(1, 0);
        assert!(graph.edge_weight(0, 1).is_err());
        assert!(graph.edge_weight(1, 0).is_err());

        // Removing an absent edge is a no-op.
        graph.remove_edge(0, 2);
    }

    #[test]
    fn test_vertex_queries() {
        let mut graph = WeightedGraph::new(4);
        graph.insert_edge(0, 1, 1);
        graph.insert_edge(0, 2, 2);

        let v = graph.vertex(0);
        assert_eq!(v.index(), 0);
        assert_eq!(v.degree(), 2);
        assert!(v.is_neighbor(2));
        assert!(!v.is_neighbor(3));
        assert_eq!(v.edge_weight(2), Some(2));
        assert_eq!(v.edge_weight(3), None);
    }

    #[test]
    fn test_triangle_inequality_satisfied() {
        let mut graph = WeightedGraph::new(3);
        graph.insert_edge(0, 1, 3);
        graph.insert_edge(1, 2, 4);
        graph.insert_edge(0, 2, 5);
        assert_eq!(graph.satisfies_triangle_inequality(), Ok(true));
    }

    #[test]
    fn test_triangle_inequality_violated() {
        let mut graph = WeightedGraph::new(3);
        graph.insert_edge(0, 1, 100);
        graph.insert_edge(1, 2, 1);
        graph.insert_edge(0, 2, 1);
        assert_eq!(graph.satisfies_triangle_inequality(), Ok(false));
    }

    #[test]
    fn test_triangle_inequality_directed_is_false() {
        let graph = WeightedGraph::directed(3);
        assert_eq!(graph.satisfies_triangle_inequality(), Ok(false));
    }

    #[test]
    fn test_triangle_inequality_incomplete_graph_errors() {
        let mut graph = WeightedGraph::new(3);
        graph.insert_edge(0, 1, 3);
        assert!(graph.satisfies_triangle_inequality().is_err());
    }

    #[test]
    fn test_display_adjacency_list() {
        let mut graph = WeightedGraph::new(2);
        graph.insert_edge(0, 1, 9);
        assert_eq!(graph.to_string(), "0: 1,9\n1: 0,9\n");
    }
}
