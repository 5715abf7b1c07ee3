//! Planar coordinate type and derived geometry.
//!
//! Street topologies live in a flat Cartesian plane (metres, typically), so
//! distance is plain Euclidean — no geodesy here.  Streets in the grid-style
//! scenarios this toolbox targets are overwhelmingly axis-aligned, so
//! `distance` short-circuits to `|Δ|` whenever the two points share a
//! coordinate, skipping the `sqrt`.

/// A 2-D planar coordinate stored as double-precision floats.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    ///
    /// Exact-axis short-circuit: when the points share an `x` or `y`
    /// coordinate the distance is `|Δ|` along the other axis, computed
    /// without rounding through `sqrt`.
    pub fn distance(self, other: Position) -> f64 {
        if self.x == other.x {
            return (other.y - self.y).abs();
        }
        if self.y == other.y {
            return (other.x - self.x).abs();
        }
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Unit direction vector from `self` towards `other`.
    ///
    /// Returns `(0.0, 0.0)` when the two positions coincide — there is no
    /// defined direction between a point and itself.
    pub fn direction(self, other: Position) -> (f64, f64) {
        if self == other {
            return (0.0, 0.0);
        }
        let dist = self.distance(other);
        ((other.x - self.x) / dist, (other.y - self.y) / dist)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
