pub mod vec2;
pub mod point2;

pub use vec2::Vec2;
pub use point2::Point2;

/// Tolerance shared by vector/point equality, the contact predicate,
/// simultaneous-collision pruning and the post-step invariant checks.
///
/// Must stay above 1e-5 so impacts reported a few ulps of toi apart in a
/// single step are still grouped together.
pub const EPSILON: f64 = 1e-4;

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
