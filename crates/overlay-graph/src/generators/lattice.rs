use overlay_core::errors::{ErrorInfo, OverlayError};
use overlay_core::Graph;

/// Wires a ring lattice.
///
/// Node `i` is linked to `i-k/2, ..., i+(k-k/2)` (modulo `n`, skipping
/// itself), so odd `k` yields one more successor than predecessor. For
/// example `k = 5` gives two predecessors and three successors, and `k = 1`
/// links every node to its successor only.
///
/// Fails without touching the graph when `k >= n` on a non-empty graph,
/// because the offsets would wrap around onto the node itself.
pub fn ring_lattice<G: Graph + ?Sized>(graph: &mut G, k: usize) -> Result<(), OverlayError> {
    let n = graph.size();
    if n == 0 {
        return Ok(());
    }
    if k >= n {
        return Err(degree_too_large("ring-lattice", k, n));
    }
    let pred = k / 2;
    let succ = k - pred;
    for i in 0..n {
        for offset in 1..=pred {
            graph.set_edge(i, (i + n - offset) % n);
        }
        for offset in 1..=succ {
            graph.set_edge(i, (i + offset) % n);
        }
    }
    Ok(())
}

/// Wires a sink star: every node other than `0` links to `0`.
pub fn star<G: Graph + ?Sized>(graph: &mut G) {
    for i in 1..graph.size() {
        graph.set_edge(i, 0);
    }
}

/// Wires a regular rooted tree with root `0`.
///
/// Children are handed out breadth first, so node `i` links to
/// `i*k+1, ..., i*k+k`. Leaves have no out-links and at most one node (the
/// last parent) has fewer than `k` children. `k == 0` leaves the graph
/// untouched.
pub fn regular_rooted_tree<G: Graph + ?Sized>(graph: &mut G, k: usize) {
    if k == 0 {
        return;
    }
    let n = graph.size();
    let mut parent = 0;
    let mut next_child = 1;
    while next_child < n {
        let mut given = 0;
        while given < k && next_child < n {
            graph.set_edge(parent, next_child);
            given += 1;
            next_child += 1;
        }
        parent += 1;
    }
}

/// Wires a hypercube: node `i` links to `i xor 2^b` for every bit `b` up to
/// the highest one set in `n - 1`, skipping targets outside the graph.
///
/// The result is an exact hypercube when `n` is a power of two.
pub fn hypercube<G: Graph + ?Sized>(graph: &mut G) {
    let n = graph.size();
    if n <= 1 {
        return;
    }
    let highest = highest_one_bit(n - 1);
    for i in 0..n {
        let mut mask = highest;
        while mask > 0 {
            let j = i ^ mask;
            if j < n {
                graph.set_edge(i, j);
            }
            mask >>= 1;
        }
    }
}

fn highest_one_bit(value: usize) -> usize {
    if value == 0 {
        0
    } else {
        1 << (usize::BITS - 1 - value.leading_zeros())
    }
}

pub(crate) fn degree_too_large(generator: &str, k: usize, n: usize) -> OverlayError {
    OverlayError::Config(
        ErrorInfo::new(
            "degree-exceeds-population",
            format!("{generator} degree must be smaller than the node count"),
        )
        .with_context("k", k)
        .with_context("n", n)
        .with_hint("lower k or grow the population"),
    )
}
