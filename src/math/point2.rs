use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::{approx_eq, Vec2};

/// A position in world space.
///
/// Kept apart from [`Vec2`] so positions and velocities cannot be mixed:
/// `Point2 - Point2` is a `Vec2`, `Point2 + Vec2` is a `Point2`, and two
/// points cannot be added.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Point2 = Point2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(self, other: Self) -> f64 {
        (self - other).magnitude_squared()
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).magnitude()
    }

    pub fn approx_eq(self, other: Self) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }
}

impl PartialEq for Point2 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(*other)
    }
}

impl Sub for Point2 {
    type Output = Vec2;

    fn sub(self, other: Point2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Add<Vec2> for Point2 {
    type Output = Point2;

    fn add(self, v: Vec2) -> Point2 {
        Point2::new(self.x + v.x, self.y + v.y)
    }
}

impl Sub<Vec2> for Point2 {
    type Output = Point2;

    fn sub(self, v: Vec2) -> Point2 {
        Point2::new(self.x - v.x, self.y - v.y)
    }
}

impl AddAssign<Vec2> for Point2 {
    fn add_assign(&mut self, v: Vec2) {
        self.x += v.x;
        self.y += v.y;
    }
}

impl SubAssign<Vec2> for Point2 {
    fn sub_assign(&mut self, v: Vec2) {
        self.x -= v.x;
        self.y -= v.y;
    }
}
