use overlay_core::{Graph, RandomSource};
use tracing::debug;

/// Random k-out digraph.
///
/// Every node gets `k` out-links to distinct targets drawn uniformly without
/// replacement from the other nodes, so there are no loops and no duplicate
/// targets per source. If `k >= n` it is clamped to `n - 1` and the result is
/// the complete digraph. Graphs with fewer than two nodes are left untouched.
///
/// The targets come from a partial Fisher-Yates shuffle over one working
/// permutation that is seeded to the identity once and carried over from
/// source to source.
pub fn k_out_directed<G, R>(graph: &mut G, k: usize, rng: &mut R)
where
    G: Graph + ?Sized,
    R: RandomSource + ?Sized,
{
    let n = graph.size();
    if n < 2 {
        return;
    }
    let k = clamp_degree(k, n);
    let mut nodes: Vec<usize> = (0..n).collect();
    for i in 0..n {
        let mut accepted = 0;
        while accepted < k {
            let pick = accepted + rng.next_int(n - accepted);
            nodes.swap(accepted, pick);
            // `i` drawn into the slot is skipped; the next pass swaps it out.
            if nodes[accepted] != i {
                graph.set_edge(i, nodes[accepted]);
                accepted += 1;
            }
        }
    }
}

pub(crate) fn clamp_degree(k: usize, n: usize) -> usize {
    if n <= k {
        debug!(requested = k, clamped = n - 1, "degree clamped to population");
        n - 1
    } else {
        k
    }
}
