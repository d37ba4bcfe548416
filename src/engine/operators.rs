//! Recombination and mutation operators over index sequences.
//!
//! The operators work on raw `&[usize]` circuits — depot-anchored
//! sequences as described in [`Tour`](crate::Tour) — so they stay free of
//! any graph bookkeeping. The engine wraps their output back into tours.
//!
//! # Crossover Operators
//!
//! - [`segment_crossover`]: copies a randomly drawn (possibly wrapping)
//!   segment of interior positions from the first parent and fills the
//!   rest from the second parent, left to right — one child
//! - [`cycle_crossover`]: partitions the interior positions into cycles
//!   and alternates parental contribution by cycle parity — two
//!   complementary children
//!
//! # Mutation Operators
//!
//! - [`swap_mutation`]: independent per-position Bernoulli swap trials
//!
//! Both crossover operators guarantee closure: given valid parent
//! circuits, every child is again a valid permutation circuit.

use rand::Rng;

/// Which recombination operator the engine dispatches on.
///
/// The two operators differ structurally (one child versus two), so they
/// are modeled as a tagged choice rather than a trait hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossoverOp {
    /// Segment-copy crossover producing one child.
    #[default]
    Segment,
    /// Cycle crossover producing two complementary children.
    Cycle,
}

/// Segment crossover: one child from two parent circuits.
///
/// Draws `start_pos` uniformly from the interior `[1, len-2]` and
/// `end_pos` as the sum of two further independent interior draws — a
/// deliberately biased segment-length distribution that is part of the
/// operator's contract. Interior positions inside the segment take the
/// first parent's gene:
///
/// - `start_pos < end_pos`: the open interval `(start_pos, end_pos)`
/// - `start_pos > end_pos`: the wrapped region `i >= start_pos || i <= end_pos`
///   over interior indices
/// - `start_pos == end_pos`: nothing — the child is filled entirely from
///   the second parent
///
/// Remaining positions are filled by scanning the second parent left to
/// right, placing each still-missing gene into the leftmost empty slot.
/// The child is returned regardless of its fitness.
///
/// # Panics
/// Panics if the parents' lengths differ or are shorter than a 2-vertex
/// circuit. Parent validity (debug builds): both must be depot-anchored
/// permutation circuits.
pub fn segment_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let len = parent1.len();
    assert_eq!(len, parent2.len(), "parents must have equal length");
    assert!(len >= 3, "a circuit needs at least one interior position");
    debug_assert!(
        crate::tour::is_valid_circuit(parent1, len - 1)
            && crate::tour::is_valid_circuit(parent2, len - 1),
        "parents must be valid circuits"
    );

    let start_pos = rng.random_range(1..len - 1);
    let end_pos = rng.random_range(1..len - 1) + rng.random_range(1..len - 1);
    segment_child(parent1, parent2, start_pos, end_pos)
}

/// Builds the segment-crossover child for fixed segment bounds.
fn segment_child(
    parent1: &[usize],
    parent2: &[usize],
    start_pos: usize,
    end_pos: usize,
) -> Vec<usize> {
    let len = parent1.len();
    let size = len - 1;

    const EMPTY: usize = usize::MAX;
    let mut child = vec![EMPTY; len];
    let mut in_child = vec![false; size];

    child[0] = parent1[0];
    child[len - 1] = parent1[0];
    in_child[parent1[0]] = true;

    // Copy the segment from parent1.
    for i in 1..len - 1 {
        let inside = if start_pos < end_pos {
            i > start_pos && i < end_pos
        } else if start_pos > end_pos {
            i >= start_pos || i <= end_pos
        } else {
            false
        };
        if inside {
            child[i] = parent1[i];
            in_child[parent1[i]] = true;
        }
    }

    // Fill the rest from parent2, leftmost empty slot first. Empty slots
    // and missing genes are in bijection, so the scan never runs out.
    let mut slot = 1;
    for i in 1..len - 1 {
        let gene = parent2[i];
        if in_child[gene] {
            continue;
        }
        while child[slot] != EMPTY {
            slot += 1;
        }
        child[slot] = gene;
        in_child[gene] = true;
    }

    child
}

/// Cycle crossover: two complementary children from two parent circuits.
///
/// Starting from each unmarked interior position `i`, follows the mapping
/// "read the gene at the current position in `parent2`, jump to that
/// gene's position in `parent1`" until the walk returns to the starting
/// gene, tagging every visited position with the starting index `i`. Cycles
/// with an even starting index contribute `parent1`'s genes to the first
/// child and `parent2`'s to the second; odd cycles the reverse. Depot
/// endpoints are copied to both children.
///
/// By construction the two children are complementary at every interior
/// position and both are valid permutation circuits. Deterministic — no
/// randomness is involved.
///
/// # Panics
/// Panics if the parents' lengths differ or are shorter than a 2-vertex
/// circuit, or (implicitly) if the parents are not permutations of the
/// same gene set.
pub fn cycle_crossover(parent1: &[usize], parent2: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let len = parent1.len();
    assert_eq!(len, parent2.len(), "parents must have equal length");
    assert!(len >= 3, "a circuit needs at least one interior position");
    debug_assert!(
        crate::tour::is_valid_circuit(parent1, len - 1)
            && crate::tour::is_valid_circuit(parent2, len - 1),
        "parents must be valid circuits"
    );

    let size = len - 1;

    // position of each interior gene in parent1
    let mut position = vec![usize::MAX; size];
    for i in 1..len - 1 {
        position[parent1[i]] = i;
    }

    // cycle_of[v]: starting index of the cycle owning parent1's gene v
    let mut cycle_of = vec![None::<usize>; size];
    for i in 1..len - 1 {
        if cycle_of[parent1[i]].is_some() {
            continue;
        }
        cycle_of[parent1[i]] = Some(i);
        let mut gene = parent2[i];
        while gene != parent1[i] {
            let pos = position[gene];
            cycle_of[parent1[pos]] = Some(i);
            gene = parent2[pos];
        }
    }

    let mut child1 = vec![usize::MAX; len];
    let mut child2 = vec![usize::MAX; len];
    child1[0] = parent1[0];
    child2[0] = parent1[0];
    child1[len - 1] = parent1[0];
    child2[len - 1] = parent1[0];

    for i in 1..len - 1 {
        let origin = cycle_of[parent1[i]].expect("every interior position belongs to a cycle");
        if origin % 2 == 0 {
            child1[i] = parent1[i];
            child2[i] = parent2[i];
        } else {
            child1[i] = parent2[i];
            child2[i] = parent1[i];
        }
    }

    (child1, child2)
}

/// Per-position swap mutation over the interior of a circuit.
///
/// Every interior position runs an independent Bernoulli(`rate`) trial;
/// on success the gene swaps with a uniformly drawn interior position
/// (possibly itself, a no-op). Expected swaps per call:
/// `rate × (len - 2)`. The depot endpoints are never touched.
pub fn swap_mutation<R: Rng>(sequence: &mut [usize], rate: f64, rng: &mut R) {
    let len = sequence.len();
    if len < 3 {
        return;
    }
    for i in 1..len - 1 {
        if rng.random_range(0.0..1.0) < rate {
            let j = rng.random_range(1..len - 1);
            sequence.swap(i, j);
        }
    }
}
