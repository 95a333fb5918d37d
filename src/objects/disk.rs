use std::f64::consts::PI;

use crate::collision::Collision;
use crate::common::EngineError;
use crate::math::{Point2, Vec2, EPSILON};

/// A rigid circular body.
///
/// Callers set `center` and `velocity` between steps and read them back
/// after a step; `force`, `acceleration` and `collisions` are rebuilt by
/// every step and only meaningful until the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct Disk {
    // Primary state
    pub center: Point2,
    pub velocity: Vec2,

    // Per-step accumulators
    pub force: Vec2,
    pub acceleration: Vec2,
    pub collisions: Vec<Collision>,

    // Validated at construction
    radius: f64,
    mass: f64,
}

impl Disk {
    /// Creates a resting disk. Radius and mass must be positive and finite.
    pub fn new(center: Point2, radius: f64, mass: f64) -> Result<Self, EngineError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(EngineError::InvalidBodyParameter { parameter: "radius", value: radius });
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(EngineError::InvalidBodyParameter { parameter: "mass", value: mass });
        }

        Ok(Self {
            center,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            collisions: Vec::new(),
            radius,
            mass,
        })
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Area of the disk, `π r²`.
    pub fn surface(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    /// True if the two disks touch or overlap. Disks exactly `r1 + r2`
    /// apart (up to [`EPSILON`]) count as touching.
    pub fn is_in_contact(&self, other: &Disk) -> bool {
        self.center.distance(other.center) <= self.radius + other.radius + EPSILON
    }

    /// Adds a force acting through the center.
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// Resets everything a step rebuilds.
    pub fn clear_accumulators(&mut self) {
        self.force = Vec2::ZERO;
        self.acceleration = Vec2::ZERO;
        self.collisions.clear();
    }

    /// Unconstrained Euler move over `dt`.
    pub fn update_position(&mut self, dt: f64) {
        self.center += self.velocity * dt;
    }
}
