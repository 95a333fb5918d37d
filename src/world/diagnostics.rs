//! Post-step consistency checks and the per-step report.
//!
//! Violations are data, not errors: a coarse `dt` with very fast or very
//! heavy bodies can legitimately produce them, and the step still completes.

use crate::collision::Collision;
use crate::math::{Point2, Vec2, EPSILON};
use crate::objects::Disk;

/// A non-physical state found after a step.
#[derive(Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    /// Two bodies overlap by more than the tolerance.
    Interpenetration {
        first: usize,
        second: usize,
        distance: f64,
        radii_sum: f64,
    },
    /// A resolved impact left its two bodies apart.
    CollisionWithoutContact {
        body: usize,
        other: usize,
        distance: f64,
        radii_sum: f64,
    },
    /// The impacts of one step changed the total kinetic energy.
    ///
    /// Pairwise impulses summed on one body only conserve energy when
    /// their normals are orthogonal.
    NonConservativeImpulse {
        energy_change: f64,
        kinetic_energy: f64,
    },
}

/// Intermediate state of every phase of one step, indexed by body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepSnapshot {
    pub non_contact_forces: Vec<Vec2>,
    pub contact_forces: Vec<Vec2>,
    pub accelerations: Vec<Vec2>,
    pub integrated_velocities: Vec<Vec2>,
    pub detected_collisions: Vec<Vec<Collision>>,
    pub pruned_collisions: Vec<Vec<Collision>>,
    pub final_positions: Vec<Point2>,
    pub final_velocities: Vec<Vec2>,
}

/// What a step found besides the new body state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub violations: Vec<InvariantViolation>,
    /// Kinetic energy added by this step's impacts. Zero when no body collided.
    pub impulse_energy_change: f64,
    /// Present only when snapshots are enabled in the world config.
    pub snapshot: Option<StepSnapshot>,
}

impl StepReport {
    pub fn is_consistent(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Checks resolved impacts and pairwise overlap after bodies have moved.
pub fn check_invariants(bodies: &[Disk]) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for (i, body) in bodies.iter().enumerate() {
        for collision in &body.collisions {
            // Each pair is reported once, from its lower index.
            if collision.other < i {
                continue;
            }
            let other = &bodies[collision.other];
            if !body.is_in_contact(other) {
                violations.push(InvariantViolation::CollisionWithoutContact {
                    body: i,
                    other: collision.other,
                    distance: body.center.distance(other.center),
                    radii_sum: body.radius() + other.radius(),
                });
            }
        }
    }

    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let distance = bodies[i].center.distance(bodies[j].center);
            let radii_sum = bodies[i].radius() + bodies[j].radius();
            if distance < radii_sum - EPSILON {
                violations.push(InvariantViolation::Interpenetration {
                    first: i,
                    second: j,
                    distance,
                    radii_sum,
                });
            }
        }
    }

    violations
}

/// Kinetic energy the pending impacts add, measured against the current
/// velocities. Call after pruning and before bodies advance.
pub fn impulse_energy_change(bodies: &[Disk]) -> f64 {
    bodies
        .iter()
        .map(|body| {
            let dv = body.collisions.iter().fold(Vec2::ZERO, |acc, c| acc + c.dv);
            let before = body.velocity.magnitude_squared();
            let after = (body.velocity + dv).magnitude_squared();
            0.5 * body.mass() * (after - before)
        })
        .sum()
}

/// Flags an impulse energy change larger than the tolerance relative to
/// the kinetic energy going into the impacts.
pub fn check_impulse_energy(energy_change: f64, kinetic_energy: f64) -> Option<InvariantViolation> {
    (energy_change.abs() > EPSILON * kinetic_energy.max(1.0)).then_some(
        InvariantViolation::NonConservativeImpulse { energy_change, kinetic_energy },
    )
}

pub(crate) fn forces_of(bodies: &[Disk]) -> Vec<Vec2> {
    bodies.iter().map(|b| b.force).collect()
}

pub(crate) fn collisions_of(bodies: &[Disk]) -> Vec<Vec<Collision>> {
    bodies.iter().map(|b| b.collisions.clone()).collect()
}
