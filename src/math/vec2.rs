use std::ops::{Add, Sub, Mul, AddAssign, SubAssign, Neg, Div};

use super::approx_eq;
use crate::common::EngineError;

/// A displacement, velocity or force. Positions live in [`Point2`](super::Point2).
#[derive(Debug, Clone, Copy, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Creates a new Vec2.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a vector from its polar form (angle in radians).
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        Self::new(magnitude * angle.cos(), magnitude * angle.sin())
    }

    /// Calculates the dot product of two vectors.
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Calculates the squared magnitude (length) of the vector.
    /// Useful for comparisons as it avoids a square root.
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Calculates the magnitude (length) of the vector.
    ///
    /// Uses `hypot`, so a tiny non-zero vector keeps a non-zero length
    /// even where `magnitude_squared` underflows to zero.
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Angle of the vector relative to the +x axis, in (-PI, PI].
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// Fails for the zero vector instead of producing NaN components.
    pub fn unit(self) -> Result<Self, EngineError> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(EngineError::DegenerateVector { operation: "unit" });
        }
        Ok(self / mag)
    }

    /// Projects this vector onto `onto`: `onto * (self·onto / |onto|²)`,
    /// evaluated along the unit direction of `onto`.
    pub fn project(self, onto: Vec2) -> Result<Self, EngineError> {
        let direction = onto
            .unit()
            .map_err(|_| EngineError::DegenerateVector { operation: "project" })?;
        Ok(direction * self.dot(direction))
    }

    /// Returns a vector perpendicular to this vector (90-degree counter-clockwise rotation).
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// True if both components differ by less than [`EPSILON`](super::EPSILON).
    pub fn approx_eq(self, other: Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

// Equality is tolerance based so collision bookkeeping survives float noise.
impl PartialEq for Vec2 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(*other)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

// Vec2 * f64
impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

// f64 * Vec2
impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, vec: Vec2) -> Vec2 {
        vec * self
    }
}

// Vec2 * Vec2 is the dot product
impl Mul for Vec2 {
    type Output = f64;

    fn mul(self, other: Vec2) -> f64 {
        self.dot(other)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}
