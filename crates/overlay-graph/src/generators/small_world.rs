use overlay_core::errors::{ErrorInfo, OverlayError};
use overlay_core::{Graph, RandomSource};

use super::lattice::degree_too_large;

/// Directed Watts-Strogatz small-world model.
///
/// Starts from the symmetric ring lattice with offsets `-k/2..=k/2` and
/// rewires each directed lattice link with probability `p` to a uniformly
/// random node other than the source. Rewiring is with replacement, so two
/// links of the same node may land on the same target; the graph then simply
/// holds one edge.
///
/// One `next_double` is drawn per lattice link, followed by one `next_int`
/// when the link is rewired.
pub fn watts_strogatz<G, R>(graph: &mut G, k: usize, p: f64, rng: &mut R) -> Result<(), OverlayError>
where
    G: Graph + ?Sized,
    R: RandomSource + ?Sized,
{
    if !(0.0..=1.0).contains(&p) {
        return Err(OverlayError::Config(
            ErrorInfo::new("probability-out-of-range", "rewiring probability must be in [0, 1]")
                .with_context("p", p),
        ));
    }
    let n = graph.size();
    if n == 0 {
        return Ok(());
    }
    let half = k / 2;
    if half >= n {
        return Err(degree_too_large("watts-strogatz", k, n));
    }
    for i in 0..n {
        for offset in -(half as isize)..=(half as isize) {
            if offset == 0 {
                continue;
            }
            let mut target = lattice_target(i, offset, n);
            if rng.next_double() < p {
                target = random_other(i, n, rng);
            }
            graph.set_edge(i, target);
        }
    }
    Ok(())
}

fn lattice_target(i: usize, offset: isize, n: usize) -> usize {
    (i as isize + offset).rem_euclid(n as isize) as usize
}

// Uniform over every node except `i`, without rejection.
fn random_other<R: RandomSource + ?Sized>(i: usize, n: usize, rng: &mut R) -> usize {
    let drawn = rng.next_int(n - 1);
    if drawn >= i {
        drawn + 1
    } else {
        drawn
    }
}
