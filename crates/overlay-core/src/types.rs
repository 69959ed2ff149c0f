use serde::{Deserialize, Serialize};

/// Integer coordinate of a peer on the simulated plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

impl Position {
    /// Creates a position from its coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(&self, other: &Position) -> u128 {
        let dx = self.x.abs_diff(other.x) as u128;
        let dy = self.y.abs_diff(other.y) as u128;
        dx * dx + dy * dy
    }

    /// Returns whether `other` lies within `range` of this position (inclusive).
    pub fn within(&self, other: &Position, range: u64) -> bool {
        let range = range as u128;
        self.distance_squared(other) <= range * range
    }
}
