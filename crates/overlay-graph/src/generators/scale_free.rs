use overlay_core::{Graph, RandomSource};

/// Barabási–Albert growth of a scale-free network.
///
/// The first `k` nodes are seeds without links, node `k` links to all of
/// them, and every later node `i` adds `k` links whose targets are drawn
/// proportionally to the current degree. Degree-proportional sampling picks a
/// uniform slot in the list of all edge endpoints recorded so far.
///
/// Targets are distinct within the batch of a single node only. Graphs that
/// already carry edges are accepted, and links recorded by earlier growth
/// stages are never consulted. Graphs with `n <= k` are left untouched.
pub fn scale_free_ba<G, R>(graph: &mut G, k: usize, rng: &mut R)
where
    G: Graph + ?Sized,
    R: RandomSource + ?Sized,
{
    let n = graph.size();
    if n <= k {
        return;
    }
    // edge e has endpoints (ends[2e], ends[2e + 1])
    let mut ends = vec![0usize; 2 * k * (n - k)];
    for seed in 0..k {
        graph.set_edge(k, seed);
        ends[2 * seed] = k;
        ends[2 * seed + 1] = seed;
    }
    let mut len = 2 * k;
    for i in (k + 1)..n {
        for j in 0..k {
            let target = loop {
                let drawn = ends[rng.next_int(len)];
                let batch_target = |m: usize| ends[len + 2 * m + 1];
                if (0..j).all(|m| batch_target(m) != drawn) {
                    break drawn;
                }
            };
            graph.set_edge(i, target);
            ends[len + 2 * j] = i;
            ends[len + 2 * j + 1] = target;
        }
        len += 2 * k;
    }
}
