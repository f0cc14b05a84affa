use std::ops::{Add, Sub};

/// A 2-D coordinate in screen convention (y grows downward).
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin.
    pub const fn origin() -> Self {
        Self::new(0., 0.)
    }

    /// Distance to another point.
    pub fn dist(&self, rhs: Self) -> f64 {
        (rhs.x - self.x).hypot(rhs.y - self.y)
    }

    /// Direction angle from this point to another point.
    pub fn angle_to(&self, rhs: Self) -> f64 {
        (rhs.y - self.y).atan2(rhs.x - self.x)
    }

    /// Point-length-angle: the point at distance `d0` in direction `a0`.
    pub fn pla(&self, d0: f64, a0: f64) -> Self {
        Self::new(self.x + d0 * a0.cos(), self.y + d0 * a0.sin())
    }

    /// Point-length-angle-point: like [`Point::pla()`], but the angle `a0` is
    /// measured from the direction toward `rhs`.
    pub fn plap(&self, d0: f64, a0: f64, rhs: Self) -> Self {
        self.pla(d0, self.angle_to(rhs) + a0)
    }

    /// Check if all coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
