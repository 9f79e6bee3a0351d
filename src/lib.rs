//! Theme Balls - decorative bouncing-disc background simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, wall reflection, collisions)
//! - `settings`: Data-driven tuning presets
//! - `color`: Opaque ARGB color tokens carried through to the renderer
//! - `error`: Crate error type

pub mod color;
pub mod error;
pub mod settings;
pub mod sim;

pub use color::Color;
pub use error::{Error, Result};
pub use settings::{Preset, SimConfig};
pub use sim::{Disc, DiscView, FrameClock, Placement, Simulation};

/// Simulation configuration constants
pub mod consts {
    /// Host frames per second that velocities are expressed against
    pub const REFERENCE_FPS: f32 = 60.0;
    /// Fixed simulation timestep, in reference frames
    pub const SIM_DT: f32 = 1.0;
    /// Maximum substeps per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest host frame the clock will account for (seconds)
    pub const MAX_FRAME_SECONDS: f32 = 0.1;

    /// Ball count the default radii were tuned for
    pub const REFERENCE_BALL_COUNT: u32 = 15;
}

/// Scale factor that keeps the total ball "ink" roughly constant as the count changes.
///
/// `sqrt(REFERENCE_BALL_COUNT / count)`, or 1.0 for an empty simulation.
#[inline]
pub fn size_factor_for(count: u32) -> f32 {
    if count == 0 {
        return 1.0;
    }
    (consts::REFERENCE_BALL_COUNT as f32 / count as f32).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_factor_reference_count_is_one() {
        assert!((size_factor_for(15) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_size_factor_shrinks_with_more_balls() {
        assert!(size_factor_for(30) < 1.0);
        assert!(size_factor_for(5) > 1.0);
        assert!((size_factor_for(60) - 0.5).abs() < 1e-6);
        assert_eq!(size_factor_for(0), 1.0);
    }
}
