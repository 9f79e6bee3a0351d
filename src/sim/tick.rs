//! Fixed timestep simulation step
//!
//! Order per step: place new discs, integrate, reflect off walls, resolve
//! disc pairs, then optionally pull corrected discs back inside the walls.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::resolve_collisions;
use super::state::{Disc, Placement, Simulation};

impl Simulation {
    /// Advance every placed disc by `dt` inside a `width` x `height` viewport.
    ///
    /// Zero, negative or non-finite inputs make this a no-op; hosts report a
    /// zero-size viewport during layout measurement.
    pub fn step(&mut self, dt: f32, width: f32, height: f32) {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(dt) || !valid(width) || !valid(height) {
            return;
        }
        let bounds = Vec2::new(width, height);

        place_unplaced(&mut self.discs, &mut self.rng, bounds);

        for disc in &mut self.discs {
            integrate(disc, dt);
            reflect_walls(disc, bounds);
        }

        let impulses = resolve_collisions(&mut self.discs);
        if impulses > 0 {
            log::debug!("Step {}: {} collision impulses", self.steps, impulses);
        }

        if self.config.clamp_after_collisions {
            for disc in &mut self.discs {
                clamp_inside(disc, bounds);
            }
        }

        self.steps += 1;
    }
}

/// Give each unplaced disc a uniform random position inside the walls.
///
/// The upper bound never drops below `radius + 1`, so the range stays
/// non-empty in viewports smaller than the disc.
pub(crate) fn place_unplaced(discs: &mut [Disc], rng: &mut Pcg32, bounds: Vec2) {
    let mut placed = 0;
    for disc in discs.iter_mut().filter(|d| !d.is_placed()) {
        let r = disc.radius();
        let x = rng.random_range(r..=(bounds.x - r).max(r + 1.0));
        let y = rng.random_range(r..=(bounds.y - r).max(r + 1.0));
        disc.placement = Placement::Placed {
            pos: Vec2::new(x, y),
        };
        placed += 1;
    }
    if placed > 0 {
        log::debug!("Placed {} discs in {}x{} viewport", placed, bounds.x, bounds.y);
    }
}

/// pos += vel * dt
#[inline]
pub(crate) fn integrate(disc: &mut Disc, dt: f32) {
    let vel = disc.vel;
    if let Some(pos) = disc.pos_mut() {
        *pos += vel * dt;
    }
}

/// Reflect off the four walls, each axis independently.
///
/// A corner hit flips both components in the same step. The clamped
/// position is not re-tested against the opposite wall.
pub(crate) fn reflect_walls(disc: &mut Disc, bounds: Vec2) {
    let r = disc.radius();
    let mut vel = disc.vel;
    let Some(pos) = disc.pos_mut() else {
        return;
    };

    if pos.x - r < 0.0 {
        pos.x = r;
        vel.x = -vel.x;
    } else if pos.x + r > bounds.x {
        pos.x = bounds.x - r;
        vel.x = -vel.x;
    }

    if pos.y - r < 0.0 {
        pos.y = r;
        vel.y = -vel.y;
    } else if pos.y + r > bounds.y {
        pos.y = bounds.y - r;
        vel.y = -vel.y;
    }

    disc.vel = vel;
}

/// Position-only wall clamp used after collision correction
pub(crate) fn clamp_inside(disc: &mut Disc, bounds: Vec2) {
    let r = disc.radius();
    let Some(pos) = disc.pos_mut() else {
        return;
    };
    if pos.x < r {
        pos.x = r;
    } else if pos.x > bounds.x - r {
        pos.x = bounds.x - r;
    }
    if pos.y < r {
        pos.y = r;
    } else if pos.y > bounds.y - r {
        pos.y = bounds.y - r;
    }
}
