use crate::math::EPSILON;
use crate::objects::Disk;

/// Drops impacts that cannot happen because an earlier one comes first.
///
/// Bodies are visited in index order. A body with several impacts keeps
/// only those within [`EPSILON`] of its earliest toi; each dropped impact
/// is also removed from the partner's list so both records of a pair
/// always go together.
pub fn prune_collisions(bodies: &mut [Disk]) {
    for i in 0..bodies.len() {
        if bodies[i].collisions.len() <= 1 {
            continue;
        }

        let collisions = &mut bodies[i].collisions;
        collisions.sort_by(|a, b| a.toi.total_cmp(&b.toi).then(a.other.cmp(&b.other)));

        let first_toi = collisions[0].toi;
        let keep = collisions
            .iter()
            .take_while(|c| c.toi - first_toi < EPSILON)
            .count();
        let dropped = collisions.split_off(keep);

        for collision in dropped {
            log::trace!(
                "pruned impact {i}<->{} at toi={:.6} (earliest {first_toi:.6})",
                collision.other,
                collision.toi
            );
            bodies[collision.other].collisions.retain(|c| c.other != i);
        }
    }
}
