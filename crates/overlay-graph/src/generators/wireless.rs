use overlay_core::errors::{ErrorInfo, OverlayError};
use overlay_core::{Graph, Position, RandomSource};

/// Places `count` peers uniformly on the integer grid
/// `[0, x_region) x [0, y_region)`.
///
/// Draws `x` then `y` for each peer in index order.
pub fn scatter_positions<R: RandomSource + ?Sized>(
    count: usize,
    x_region: u64,
    y_region: u64,
    rng: &mut R,
) -> Result<Vec<Position>, OverlayError> {
    if x_region == 0 || y_region == 0 {
        return Err(OverlayError::Config(
            ErrorInfo::new("zero-region", "placement region must be non-empty")
                .with_context("x_region", x_region)
                .with_context("y_region", y_region),
        ));
    }
    let x_bound = region_bound(x_region)?;
    let y_bound = region_bound(y_region)?;
    Ok((0..count)
        .map(|_| {
            let x = rng.next_int(x_bound) as i64;
            let y = rng.next_int(y_bound) as i64;
            Position::new(x, y)
        })
        .collect())
}

/// Links every node to the nodes within radio `range` of its position.
///
/// Candidates are taken nearest first (ties broken by index). When `k > 0` a
/// node keeps at most `k` out-links; `k == 0` means no cap. Links are directed:
/// a node whose quota is full may still be chosen by its neighbours.
pub fn wireless_range<G: Graph + ?Sized>(
    graph: &mut G,
    positions: &[Position],
    range: u64,
    k: usize,
) -> Result<(), OverlayError> {
    let n = graph.size();
    if positions.len() != n {
        return Err(OverlayError::Config(
            ErrorInfo::new("position-count-mismatch", "one position per node is required")
                .with_context("positions", positions.len())
                .with_context("n", n),
        ));
    }
    let cap = if k == 0 { n } else { k };
    let mut in_range: Vec<(u128, usize)> = Vec::new();
    for (i, origin) in positions.iter().enumerate() {
        in_range.clear();
        in_range.extend(
            positions
                .iter()
                .enumerate()
                .filter(|&(j, other)| j != i && origin.within(other, range))
                .map(|(j, other)| (origin.distance_squared(other), j)),
        );
        in_range.sort_unstable();
        for &(_, j) in in_range.iter().take(cap) {
            graph.set_edge(i, j);
        }
    }
    Ok(())
}

// Coordinates are `i64`, so regions stop at `i64::MAX` as well as `usize::MAX`.
fn region_bound(region: u64) -> Result<usize, OverlayError> {
    i64::try_from(region)
        .ok()
        .and_then(|region| usize::try_from(region).ok())
        .ok_or_else(|| {
            OverlayError::Config(
                ErrorInfo::new("region-too-large", "placement region exceeds addressable size")
                    .with_context("region", region)
                    .with_context("max", i64::MAX),
            )
        })
}
