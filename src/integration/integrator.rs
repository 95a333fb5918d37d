use crate::objects::Disk;

/// Turns the accumulated force into acceleration and velocity (a = F/m, v += a*dt).
/// Position is left alone; it is advanced once impacts are known.
pub fn integrate_velocity(body: &mut Disk, dt: f64) {
    body.acceleration = body.force / body.mass();
    body.velocity += body.acceleration * dt;
}

/// Moves a body to the end of the step, honoring its surviving impacts.
///
/// Without impacts this is a plain Euler move over `dt`. With impacts the
/// body only travels to the time of impact, takes every impulse, and then
/// gets the acceleration for the remaining `dt - toi` added to its velocity
/// only. Position is not advanced for that remainder: re-deriving position
/// for the remainder risks producing visually overlapping disks on screen
/// even though they are physically separated.
pub fn advance(body: &mut Disk, dt: f64) {
    let Some(toi) = body.collisions.iter().map(|c| c.toi).min_by(f64::total_cmp) else {
        body.update_position(dt);
        return;
    };

    body.update_position(toi);
    for collision in &body.collisions {
        body.velocity += collision.dv;
    }
    body.velocity += body.acceleration * (dt - toi);
}
