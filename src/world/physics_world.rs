use crate::{
    collision,
    common::{EngineError, WorldConfig},
    math::vec2::Vec2,
    objects::Disk,
};
use crate::integration::integrator;

use super::diagnostics::{self, StepReport, StepSnapshot};
use super::{forces, pruning};

/// Advances `bodies` by one step of length `dt`.
///
/// Phases run in this order over pairs `(i, j)`, `i < j`, in index order:
/// reset accumulators, gravity, contact reaction, velocity integration,
/// impact detection, pruning, advance, invariant checks.
///
/// Impacts are resolved pair by pair and summed per body. Momentum is
/// always conserved; kinetic energy only when a body's simultaneous impact
/// normals are orthogonal. The report carries the energy the impacts added.
///
/// The input is validated before any body is touched, so an `Err` leaves
/// every body exactly as it was.
pub fn update(bodies: &mut [Disk], dt: f64, config: &WorldConfig) -> Result<StepReport, EngineError> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(EngineError::InvalidTimeStep(dt));
    }
    config.validate()?;
    check_distinct_centers(bodies)?;

    log::trace!("step dt={dt} over {} bodies", bodies.len());
    let mut snapshot = config.record_snapshots.then(StepSnapshot::default);

    // 1. Reset
    for body in bodies.iter_mut() {
        body.clear_accumulators();
    }

    // 2. Non-contact forces
    forces::apply_gravity(bodies, config.gravitational_constant)?;
    if let Some(s) = snapshot.as_mut() {
        s.non_contact_forces = diagnostics::forces_of(bodies);
    }

    // 3. Contact forces
    forces::apply_contact_forces(bodies)?;
    if let Some(s) = snapshot.as_mut() {
        s.contact_forces = diagnostics::forces_of(bodies);
    }

    // 4. Integrate velocities
    for body in bodies.iter_mut() {
        integrator::integrate_velocity(body, dt);
    }
    if let Some(s) = snapshot.as_mut() {
        s.accelerations = bodies.iter().map(|b| b.acceleration).collect();
        s.integrated_velocities = bodies.iter().map(|b| b.velocity).collect();
    }

    // 5. Detect impacts
    detect_collisions(bodies, dt)?;
    if let Some(s) = snapshot.as_mut() {
        s.detected_collisions = diagnostics::collisions_of(bodies);
    }

    // 6. Prune
    pruning::prune_collisions(bodies);
    if let Some(s) = snapshot.as_mut() {
        s.pruned_collisions = diagnostics::collisions_of(bodies);
    }

    let kinetic_energy: f64 = bodies.iter().map(Disk::kinetic_energy).sum();
    let impulse_energy_change = diagnostics::impulse_energy_change(bodies);

    // 7. Advance
    for body in bodies.iter_mut() {
        integrator::advance(body, dt);
    }
    if let Some(s) = snapshot.as_mut() {
        s.final_positions = bodies.iter().map(|b| b.center).collect();
        s.final_velocities = bodies.iter().map(|b| b.velocity).collect();
    }

    // 8. Diagnostics
    let mut violations = diagnostics::check_invariants(bodies);
    violations.extend(diagnostics::check_impulse_energy(impulse_energy_change, kinetic_energy));
    for violation in &violations {
        log::warn!("inconsistent state after step of {dt}: {violation:?}");
    }
    if !violations.is_empty() {
        if let Some(s) = &snapshot {
            log::warn!("step phases: {s:?}");
        }
    }

    Ok(StepReport { violations, impulse_energy_change, snapshot })
}

/// Gravity and the contact phase both need a direction between every pair.
///
/// Centers are compared coordinate by coordinate. Any other pair has a
/// non-zero [`Vec2::magnitude`], however close the two are.
fn check_distinct_centers(bodies: &[Disk]) -> Result<(), EngineError> {
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (bodies[i].center, bodies[j].center);
            if a.x == b.x && a.y == b.y {
                return Err(EngineError::CoincidentCenters { first: i, second: j });
            }
        }
    }
    Ok(())
}

fn detect_collisions(bodies: &mut [Disk], dt: f64) -> Result<(), EngineError> {
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if let Some((on_i, on_j)) = collision::detect_collision(&bodies[i], i, &bodies[j], j, dt)? {
                bodies[i].collisions.push(on_i);
                bodies[j].collisions.push(on_j);
            }
        }
    }
    Ok(())
}

/// Owns a set of disks and the constants used to step them.
pub struct PhysicsWorld {
    pub bodies: Vec<Disk>,
    pub config: WorldConfig,
}

impl PhysicsWorld {
    /// Creates a new, empty world with default settings.
    pub fn new() -> Self {
        Self::with_config(WorldConfig::default())
    }

    pub fn with_config(config: WorldConfig) -> Self {
        Self {
            bodies: Vec::new(),
            config,
        }
    }

    /// Adds a disk to the world and returns its index.
    pub fn add_body(&mut self, body: Disk) -> usize {
        let index = self.bodies.len();
        self.bodies.push(body);
        index
    }

    /// Advances the simulation by one time step `dt`.
    pub fn step(&mut self, dt: f64) -> Result<StepReport, EngineError> {
        update(&mut self.bodies, dt, &self.config)
    }

    pub fn total_momentum(&self) -> Vec2 {
        self.bodies.iter().fold(Vec2::ZERO, |acc, b| acc + b.momentum())
    }

    pub fn total_kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Disk::kinetic_energy).sum()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
