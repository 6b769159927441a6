//! Plain value types shared across the engine.

/// A point in the plane.
///
/// # Examples
///
/// ```rust
/// use ctrw_engine::Position;
///
/// let p = Position::ORIGIN.displaced(2.0, 0.0);
/// assert_eq!(p, Position::new(2.0, 0.0));
/// assert_eq!(p.squared_norm(), 4.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// The starting point of every walk.
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    /// Creates a position from coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared distance from the origin, x² + y².
    #[inline]
    pub fn squared_norm(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Distance from the origin.
    #[inline]
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// This position moved by `length` in direction `angle` (radians).
    #[inline]
    pub fn displaced(&self, length: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x + length * cos,
            y: self.y + length * sin,
        }
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
