use crate::math::vec2::Vec2;

/// One side of an impact found during a step.
///
/// Each physical impact is stored as two records, one in each body's
/// `collisions`, sharing the same `toi` and naming each other by index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    /// Time of impact, measured from the start of the step, in `[0, dt]`.
    pub toi: f64,
    /// Index of the partner body in the slice being stepped.
    pub other: usize,
    /// Velocity change this body receives when the impact is applied.
    pub dv: Vec2,
}
