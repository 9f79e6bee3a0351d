//! Disc-disc collision detection and response
//!
//! One relaxation pass per step over every placed pair in ascending index
//! order. Several simultaneous overlaps are corrected independently, so a
//! little residual overlap can survive a step and is worked out over the
//! following frames.

use glam::Vec2;

use super::state::Disc;

/// Result of an overlap check between two discs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from the second disc toward the first
    pub normal: Vec2,
    /// How far the discs interpenetrate
    pub overlap: f32,
}

/// Check two discs for overlap.
///
/// Coincident centers are not a contact: there is no normal to push along.
pub fn disc_contact(pos_a: Vec2, radius_a: f32, pos_b: Vec2, radius_b: f32) -> Option<Contact> {
    let delta = pos_a - pos_b;
    let dist_sq = delta.length_squared();
    let radius_sum = radius_a + radius_b;

    if dist_sq >= radius_sum * radius_sum || dist_sq <= 0.0 {
        return None;
    }

    let dist = dist_sq.sqrt();
    Some(Contact {
        normal: delta / dist,
        overlap: radius_sum - dist,
    })
}

/// Elastic impulse along `normal` for masses `mass_a`, `mass_b`.
///
/// Returns `None` when the discs are already separating along the normal.
#[inline]
pub fn elastic_impulse(
    vel_a: Vec2,
    mass_a: f32,
    vel_b: Vec2,
    mass_b: f32,
    normal: Vec2,
) -> Option<f32> {
    let vn = (vel_a - vel_b).dot(normal);
    if vn > 0.0 {
        return None;
    }
    Some(-2.0 * vn / (1.0 / mass_a + 1.0 / mass_b))
}

/// Resolve one overlapping pair in place. Returns true if an impulse was applied.
pub fn resolve_pair(a: &mut Disc, b: &mut Disc) -> bool {
    let (Some(pos_a), Some(pos_b)) = (a.pos(), b.pos()) else {
        return false;
    };
    let Some(contact) = disc_contact(pos_a, a.radius(), pos_b, b.radius()) else {
        return false;
    };

    // Equal and opposite push, regardless of mass
    let push = contact.normal * (0.5 * contact.overlap);
    if let Some(pos) = a.pos_mut() {
        *pos += push;
    }
    if let Some(pos) = b.pos_mut() {
        *pos -= push;
    }

    let Some(impulse) = elastic_impulse(a.vel, a.mass(), b.vel, b.mass(), contact.normal) else {
        return false;
    };
    let j = contact.normal * impulse;
    a.vel += j / a.mass();
    b.vel -= j / b.mass();
    true
}

/// Resolve every placed pair (i < j) once. Returns the number of impulses applied.
pub fn resolve_collisions(discs: &mut [Disc]) -> usize {
    let mut impulses = 0;
    for i in 0..discs.len() {
        let (head, tail) = discs.split_at_mut(i + 1);
        let a = &mut head[i];
        if !a.is_placed() {
            continue;
        }
        for b in tail.iter_mut() {
            if resolve_pair(a, b) {
                impulses += 1;
            }
        }
    }
    impulses
}
