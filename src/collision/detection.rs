use crate::common::EngineError;
use crate::math::vec2::Vec2;
use crate::objects::Disk;
use super::manifold::Collision;

/// Post-impact velocities of two disks in an ideal elastic collision.
///
/// The velocities are split along the line of centers and its tangent. The
/// tangential parts are untouched; the normal parts follow the 1-D elastic
/// formula for unequal masses. Centers are taken as they are now, not at
/// the time of impact.
pub fn velocities_after_collision(a: &Disk, b: &Disk) -> Result<(Vec2, Vec2), EngineError> {
    let m1 = a.mass();
    let m2 = b.mass();
    let v1 = a.velocity;
    let v2 = b.velocity;

    let un = (b.center - a.center).unit()?;
    let ut = un.perpendicular();

    let v1n = un.dot(v1);
    let v1t = ut.dot(v1);
    let v2n = un.dot(v2);
    let v2t = ut.dot(v2);

    let new_v1n = (v1n * (m1 - m2) + 2.0 * m2 * v2n) / (m1 + m2);
    let new_v2n = (v2n * (m2 - m1) + 2.0 * m1 * v1n) / (m1 + m2);

    let new_v1 = un * new_v1n + ut * v1t;
    let new_v2 = un * new_v2n + ut * v2t;
    Ok((new_v1, new_v2))
}

/// Earliest time in `[0, dt]` at which two approaching disks touch.
///
/// Returns `None` for pairs that are not closing, move in lockstep, or do
/// not reach each other within the step. Disks already in contact report 0.
pub fn time_of_impact(a: &Disk, b: &Disk, dt: f64) -> Option<f64> {
    let dr = b.center - a.center;
    let dv = b.velocity - a.velocity;

    let closing = dv.dot(dr);
    if closing >= 0.0 {
        return None;
    }

    let dv_sq = dv.magnitude_squared();
    if dv_sq == 0.0 {
        return None;
    }

    if a.is_in_contact(b) {
        return Some(0.0);
    }

    // |dr + dv·t| = R  =>  (dv·dv)t² + 2(dr·dv)t + (dr·dr - R²) = 0
    let radii_sum = a.radius() + b.radius();
    let half_b = closing;
    let c = dr.magnitude_squared() - radii_sum * radii_sum;
    let discriminant = half_b * half_b - dv_sq * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let t_near = (-half_b - root) / dv_sq;
    let t_far = (-half_b + root) / dv_sq;
    let toi = if t_near >= 0.0 { t_near } else { t_far };

    if toi < 0.0 || toi > dt {
        return None;
    }
    Some(toi)
}

/// Checks whether disks `a` and `b` collide during the next `dt`.
///
/// On impact, returns the record for `a` followed by the record for `b`.
pub fn detect_collision(
    a: &Disk,
    a_idx: usize,
    b: &Disk,
    b_idx: usize,
    dt: f64,
) -> Result<Option<(Collision, Collision)>, EngineError> {
    let Some(toi) = time_of_impact(a, b, dt) else {
        return Ok(None);
    };

    let (new_va, new_vb) = velocities_after_collision(a, b)?;
    log::debug!("impact between {a_idx} and {b_idx} at toi={toi:.6}");

    Ok(Some((
        Collision { toi, other: b_idx, dv: new_va - a.velocity },
        Collision { toi, other: a_idx, dv: new_vb - b.velocity },
    )))
}
