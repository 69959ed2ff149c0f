use overlay_core::{Graph, RandomSource};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::random::clamp_degree;
use crate::matrix::SymmetricMatrix;

/// Outcome of [`k_out_undirected`]: how close the result came to k-regular.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegularityReport {
    /// Target degree after clamping to `n - 1`.
    pub target_degree: usize,
    /// Number of nodes in the graph.
    pub nodes: usize,
    /// Nodes whose final degree differs from the target, in ascending order.
    pub off_target: Vec<usize>,
}

impl RegularityReport {
    /// Number of nodes whose final degree differs from the target.
    pub fn deviating(&self) -> usize {
        self.off_target.len()
    }

    /// Returns whether every node reached the target degree.
    pub fn is_regular(&self) -> bool {
        self.off_target.is_empty()
    }
}

/// Random undirected graph in which (almost) every node has degree `k`.
///
/// Links are built on a private symmetric matrix and only emitted, as pairs of
/// opposite directed edges, once construction is over. Nodes are visited in a
/// random order. Each visited node draws candidates without replacement from
/// all other nodes until its degree reaches `k` or the candidates run out:
///
/// * a candidate below `k` that is not yet a neighbour is linked directly;
/// * a saturated candidate that is not yet a neighbour hands over one of its
///   links: if the node still needs at least two links and the candidate has a
///   neighbour `split` not adjacent to the node, `candidate - split` is
///   replaced by `candidate - node` and `node - split`. Candidate and `split`
///   keep their degree. The first candidate drawn for a node is never split,
///   and node 0 is never a `split` partner.
///
/// No node ever exceeds `k`. Nodes that end below `k` are pairwise adjacent,
/// so at most `k` nodes miss the target; they are listed in the returned
/// report rather than repaired. `k >= n` is clamped to `n - 1` and graphs with
/// fewer than two nodes are left untouched.
pub fn k_out_undirected<G, R>(graph: &mut G, k: usize, rng: &mut R) -> RegularityReport
where
    G: Graph + ?Sized,
    R: RandomSource + ?Sized,
{
    let n = graph.size();
    if n < 2 {
        return RegularityReport {
            target_degree: k,
            nodes: n,
            off_target: Vec::new(),
        };
    }
    let k = clamp_degree(k, n);
    let mut matrix = SymmetricMatrix::new(n);
    let order = visiting_order(n, rng);
    let mut pool = Vec::with_capacity(n - 1);
    for &current in &order {
        fill_node(&mut matrix, current, k, &mut pool, rng);
    }

    for i in 0..n {
        for j in matrix.neighbours(i) {
            graph.set_edge(i, j);
            graph.set_edge(j, i);
        }
    }

    let off_target: Vec<usize> = (0..n).filter(|&node| matrix.degree(node) != k).collect();
    debug!(
        nodes = n,
        k,
        deviating = off_target.len(),
        "undirected k-out construction finished"
    );
    RegularityReport {
        target_degree: k,
        nodes: n,
        off_target,
    }
}

// n swaps of slot i with a uniformly drawn slot.
fn visiting_order<R: RandomSource + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    for i in 0..n {
        let j = rng.next_int(n);
        order.swap(i, j);
    }
    order
}

fn fill_node<R: RandomSource + ?Sized>(
    matrix: &mut SymmetricMatrix,
    current: usize,
    k: usize,
    pool: &mut Vec<usize>,
    rng: &mut R,
) {
    pool.clear();
    pool.extend((0..matrix.size()).filter(|&node| node != current));
    let mut active = pool.len();
    let mut degree = matrix.degree(current);
    let mut first = true;

    while degree < k && active > 0 {
        let slot = rng.next_int(active);
        let candidate = pool[slot];
        let candidate_degree = matrix.degree(candidate);
        let linked = matrix.is_linked(current, candidate);

        if !linked && candidate_degree < k {
            matrix.link(current, candidate);
            degree += 1;
        } else if !first && !linked && candidate_degree == k && degree + 2 <= k {
            if let Some(split) = matrix.split_partner(candidate, current) {
                matrix.unlink(candidate, split);
                matrix.link(candidate, current);
                matrix.link(current, split);
                degree += 2;
            }
        }

        pool.swap(slot, active - 1);
        active -= 1;
        first = false;
    }
}
