//! Force phases of a step.
//!
//! Both walk unordered pairs `(i, j)` with `i < j` in index order.

use crate::common::EngineError;
use crate::math::vec2::Vec2;
use crate::objects::Disk;

/// Adds the pairwise attraction `G·m1·m2/r²` to every body, equal and
/// opposite on each side of a pair.
pub fn apply_gravity(bodies: &mut [Disk], gravitational_constant: f64) -> Result<(), EngineError> {
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let r = bodies[j].center - bodies[i].center;
            let distance = r.magnitude();
            if distance == 0.0 {
                return Err(EngineError::CoincidentCenters { first: i, second: j });
            }

            // Divide twice: r² underflows long before r does.
            let magnitude =
                gravitational_constant * bodies[i].mass() * bodies[j].mass() / distance / distance;
            let force = r.unit()? * magnitude;
            bodies[i].apply_force(force);
            bodies[j].apply_force(-force);
        }
    }
    Ok(())
}

/// Normal reaction between touching disks.
///
/// For each pair in contact, the part of body i's non-contact force that
/// pushes it toward body j is moved onto body j. Projections are taken
/// from the forces as they were on entry, so the result does not depend
/// on pair order.
pub fn apply_contact_forces(bodies: &mut [Disk]) -> Result<(), EngineError> {
    let non_contact: Vec<Vec2> = bodies.iter().map(|b| b.force).collect();

    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if !bodies[i].is_in_contact(&bodies[j]) {
                continue;
            }

            let line_of_centers = bodies[j].center - bodies[i].center;
            let push = non_contact[i].project(line_of_centers)?;
            // Contact only pushes; a force pulling i away from j needs no reaction.
            if push.dot(line_of_centers) <= 0.0 {
                continue;
            }

            bodies[i].force -= push;
            bodies[j].force += push;
        }
    }
    Ok(())
}
