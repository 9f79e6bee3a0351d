//! Fixed timestep accumulator
//!
//! Converts variable host frame times into whole simulation steps so the
//! physics always advances by the same `dt`.

use super::state::Simulation;
use crate::consts::{MAX_FRAME_SECONDS, MAX_SUBSTEPS, REFERENCE_FPS, SIM_DT};

#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Step size in reference frames
    step_dt: f32,
    /// Unsimulated time in reference frames
    accumulator: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(SIM_DT)
    }
}

impl FrameClock {
    /// Non-positive step sizes fall back to `SIM_DT`.
    pub fn new(step_dt: f32) -> Self {
        let step_dt = if step_dt.is_finite() && step_dt > 0.0 {
            step_dt
        } else {
            SIM_DT
        };
        Self {
            step_dt,
            accumulator: 0.0,
        }
    }

    pub fn step_dt(&self) -> f32 {
        self.step_dt
    }

    /// Feed one host frame and run the steps it covers. Returns the number of steps run.
    pub fn advance(
        &mut self,
        sim: &mut Simulation,
        frame_seconds: f32,
        width: f32,
        height: f32,
    ) -> u32 {
        let seconds = if frame_seconds.is_finite() {
            frame_seconds.clamp(0.0, MAX_FRAME_SECONDS)
        } else {
            0.0
        };
        self.accumulator += seconds * REFERENCE_FPS;

        let mut substeps = 0;
        while self.accumulator >= self.step_dt && substeps < MAX_SUBSTEPS {
            sim.step(self.step_dt, width, height);
            self.accumulator -= self.step_dt;
            substeps += 1;
        }

        if self.accumulator >= self.step_dt {
            log::warn!(
                "Frame clock fell behind, dropping {:.2} reference frames",
                self.accumulator
            );
            self.accumulator = 0.0;
        }
        substeps
    }

    /// Fraction of a step left in the accumulator, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step_dt
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
