use serde::{Deserialize, Serialize};

/// Discrete tile coordinate. Signed because agents can be pushed off the grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct TileCoord {
    pub row: i64,
    pub col: i64,
}

impl TileCoord {
    #[must_use]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

/// Isometric world position in fixed-point hundredths of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: i64,
    pub y: i64,
}

impl WorldPoint {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Point moved by `(dx, dy) * amount`.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i64, dy: i64, amount: i64) -> Self {
        Self {
            x: self.x + dx * amount,
            y: self.y + dy * amount,
        }
    }

    /// Squared euclidean distance, exact in integers.
    #[inline]
    #[must_use]
    pub const fn distance_sq(self, other: WorldPoint) -> i64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}
