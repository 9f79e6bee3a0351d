//! Simulation state and construction
//!
//! A simulation owns a fixed set of discs. Discs start unplaced and get a
//! position on the first step that knows the viewport size.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{Error, Result};
use crate::settings::SimConfig;

/// Where a disc is, if anywhere yet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Placement {
    /// Waiting for the first viewport size
    Unplaced,
    /// Center in viewport coordinates
    Placed { pos: Vec2 },
}

/// A simulated disc. Mass equals radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    pub placement: Placement,
    /// Viewport units per reference frame
    pub vel: Vec2,
    radius: f32,
    color: Color,
}

impl Disc {
    pub fn new(radius: f32, vel: Vec2, color: Color) -> Self {
        Self {
            placement: Placement::Unplaced,
            vel,
            radius,
            color,
        }
    }

    /// A disc that already has a position
    pub fn placed(pos: Vec2, radius: f32, vel: Vec2, color: Color) -> Self {
        Self {
            placement: Placement::Placed { pos },
            vel,
            radius,
            color,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn pos(&self) -> Option<Vec2> {
        match self.placement {
            Placement::Placed { pos } => Some(pos),
            Placement::Unplaced => None,
        }
    }

    #[inline]
    pub fn is_placed(&self) -> bool {
        matches!(self.placement, Placement::Placed { .. })
    }

    /// Mutable center, `None` while unplaced
    #[inline]
    pub(crate) fn pos_mut(&mut self) -> Option<&mut Vec2> {
        match &mut self.placement {
            Placement::Placed { pos } => Some(pos),
            Placement::Unplaced => None,
        }
    }

    /// 1/2 m |v|^2
    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass() * self.vel.length_squared()
    }
}

/// Render snapshot of one placed disc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
}

/// The disc simulation
#[derive(Debug, Clone)]
pub struct Simulation {
    pub(crate) discs: Vec<Disc>,
    pub(crate) rng: Pcg32,
    pub(crate) config: SimConfig,
    seed: u64,
    pub(crate) steps: u64,
}

impl Simulation {
    /// Create `count` discs with default radius and velocity ranges and a random seed.
    ///
    /// Errors: `Error::InvalidArgument` for a negative count, an empty palette,
    /// or a non-positive size factor / speed divisor.
    pub fn create(
        count: i64,
        size_factor: f32,
        speed_divisor: f32,
        palette: &[Color],
    ) -> Result<Self> {
        let config = SimConfig {
            count,
            size_factor,
            speed_divisor,
            palette: palette.to_vec(),
            seed: None,
            ..SimConfig::default()
        };
        Self::with_config(&config)
    }

    /// Create a simulation from a full config. All validation happens here.
    pub fn with_config(config: &SimConfig) -> Result<Self> {
        validate(config)?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = Pcg32::seed_from_u64(seed);

        // validate() guarantees the count is non-negative
        let count = config.count as usize;
        let scale = config.size_factor / config.radius_divisor;
        let half = config.velocity_half_range;

        let mut discs = Vec::with_capacity(count);
        for _ in 0..count {
            let radius = rng.random_range(config.radius_min..config.radius_max) * scale;
            let vel = Vec2::new(
                rng.random_range(-half..=half),
                rng.random_range(-half..=half),
            ) / config.speed_divisor;
            let color = config.palette[rng.random_range(0..config.palette.len())];
            discs.push(Disc::new(radius, vel, color));
        }

        log::info!("Created simulation with {} discs (seed {})", count, seed);

        Ok(Self {
            discs,
            rng,
            config: config.clone(),
            seed,
            steps: 0,
        })
    }

    /// Build a simulation around explicit discs (restored layouts, tests).
    ///
    /// Only the seed and the clamp flag of `config` are used.
    pub fn from_discs(discs: Vec<Disc>, config: &SimConfig) -> Result<Self> {
        if let Some(bad) = discs
            .iter()
            .find(|d| !d.radius.is_finite() || d.radius <= 0.0)
        {
            return Err(Error::InvalidArgument(format!(
                "disc radius must be finite and > 0, got {}",
                bad.radius
            )));
        }
        if let Some(bad) = discs
            .iter()
            .find(|d| !d.vel.is_finite() || d.pos().is_some_and(|p| !p.is_finite()))
        {
            return Err(Error::InvalidArgument(format!(
                "disc position and velocity must be finite, got {:?} / {}",
                bad.placement, bad.vel
            )));
        }
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            rng: Pcg32::seed_from_u64(seed),
            config: SimConfig {
                count: discs.len() as i64,
                ..config.clone()
            },
            discs,
            seed,
            steps: 0,
        })
    }

    /// Render snapshot of every placed disc, in index order
    pub fn snapshot(&self) -> Vec<DiscView> {
        self.discs
            .iter()
            .filter_map(|d| {
                d.pos().map(|pos| DiscView {
                    x: pos.x,
                    y: pos.y,
                    radius: d.radius,
                    color: d.color,
                })
            })
            .collect()
    }

    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    pub fn len(&self) -> usize {
        self.discs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    pub fn placed_count(&self) -> usize {
        self.discs.iter().filter(|d| d.is_placed()).count()
    }

    /// Number of steps that actually advanced the simulation
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Sum of m·v over placed discs
    pub fn total_momentum(&self) -> Vec2 {
        self.discs
            .iter()
            .filter(|d| d.is_placed())
            .map(|d| d.vel * d.mass())
            .sum()
    }

    /// Sum of 1/2 m |v|^2 over placed discs
    pub fn total_kinetic_energy(&self) -> f32 {
        self.discs
            .iter()
            .filter(|d| d.is_placed())
            .map(Disc::kinetic_energy)
            .sum()
    }
}

fn validate(config: &SimConfig) -> Result<()> {
    if config.count < 0 {
        return Err(Error::InvalidArgument(format!(
            "count must be >= 0, got {}",
            config.count
        )));
    }
    if config.count == 0 {
        return Ok(());
    }
    if config.palette.is_empty() {
        return Err(Error::InvalidArgument("palette must not be empty".into()));
    }
    let positive = [
        ("size_factor", config.size_factor),
        ("speed_divisor", config.speed_divisor),
        ("radius_divisor", config.radius_divisor),
        ("radius_min", config.radius_min),
    ];
    for (name, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "{name} must be finite and > 0, got {value}"
            )));
        }
    }
    if !config.radius_max.is_finite() || config.radius_max <= config.radius_min {
        return Err(Error::InvalidArgument(format!(
            "radius_max must be finite and > radius_min, got {}..{}",
            config.radius_min, config.radius_max
        )));
    }
    if !config.velocity_half_range.is_finite() || config.velocity_half_range < 0.0 {
        return Err(Error::InvalidArgument(format!(
            "velocity_half_range must be finite and >= 0, got {}",
            config.velocity_half_range
        )));
    }

    // The sampled ranges must stay finite too, or rand rejects them mid-sampling
    let scale = config.size_factor / config.radius_divisor;
    let (radius_lo, radius_hi) = (config.radius_min * scale, config.radius_max * scale);
    if !radius_hi.is_finite() || radius_lo <= 0.0 {
        return Err(Error::InvalidArgument(format!(
            "scaled radius range must be finite and > 0, got {radius_lo}..{radius_hi}"
        )));
    }
    let half = config.velocity_half_range;
    if !(2.0 * half).is_finite() || !(half / config.speed_divisor).is_finite() {
        return Err(Error::InvalidArgument(format!(
            "velocity range overflows, half range {half} / divisor {}",
            config.speed_divisor
        )));
    }
    Ok(())
}
