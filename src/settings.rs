//! Simulation tuning and presets
//!
//! The app shows theme balls behind three screens. They run the same engine
//! and differ only in the numbers below.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Result;
use crate::size_factor_for;

/// Which screen the balls are tuned for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    #[default]
    Daily,
    Score,
    ScoreAi,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Daily, Preset::Score, Preset::ScoreAi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Daily => "daily",
            Preset::Score => "score",
            Preset::ScoreAi => "score_ai",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "daily" => Some(Preset::Daily),
            "score" => Some(Preset::Score),
            "score_ai" | "score-ai" | "ai" => Some(Preset::ScoreAi),
            _ => None,
        }
    }

    /// Ball count used by this screen
    pub fn ball_count(&self) -> u32 {
        match self {
            Preset::Daily => 15,
            Preset::Score => 15,
            Preset::ScoreAi => 10,
        }
    }

    /// Palette the balls sample their colors from
    pub fn palette(&self) -> Vec<Color> {
        match self {
            Preset::Daily => vec![
                Color::rgb(0xFF, 0xB7, 0x4D),
                Color::rgb(0xFF, 0x8A, 0x65),
                Color::rgb(0xF0, 0x62, 0x92),
                Color::rgb(0xFF, 0xD5, 0x4F),
                Color::rgb(0xAE, 0xD5, 0x81),
            ],
            Preset::Score => vec![
                Color::rgb(0x4F, 0xC3, 0xF7),
                Color::rgb(0x64, 0xB5, 0xF6),
                Color::rgb(0x95, 0x75, 0xCD),
                Color::rgb(0x4D, 0xD0, 0xE1),
            ],
            Preset::ScoreAi => vec![
                Color::rgb(0xBA, 0x68, 0xC8),
                Color::rgb(0x79, 0x86, 0xCB),
                Color::rgb(0x4D, 0xB6, 0xAC),
                Color::rgb(0xF0, 0x62, 0x92),
            ],
        }
    }

    /// Full simulation config for this screen
    pub fn config(&self) -> SimConfig {
        let count = self.ball_count();
        let (radius_divisor, speed_divisor) = match self {
            Preset::Daily => (1.0, 1.0),
            Preset::Score => (1.25, 1.5),
            Preset::ScoreAi => (1.5, 2.0),
        };
        SimConfig {
            count: count as i64,
            size_factor: size_factor_for(count),
            speed_divisor,
            radius_divisor,
            palette: self.palette(),
            ..SimConfig::base()
        }
    }
}

/// Every tunable number of a simulation
///
/// Missing JSON fields fall back to the daily preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of discs (negative is rejected at construction)
    pub count: i64,
    /// Radius multiplier, usually `size_factor_for(count)`
    pub size_factor: f32,
    /// Raw velocities are divided by this
    pub speed_divisor: f32,
    /// Lower bound of the raw radius range (inclusive)
    pub radius_min: f32,
    /// Upper bound of the raw radius range (exclusive)
    pub radius_max: f32,
    /// Raw radii are divided by this
    pub radius_divisor: f32,
    /// Raw velocity components are drawn from [-half_range, +half_range]
    pub velocity_half_range: f32,
    /// Colors sampled with replacement, one per disc
    pub palette: Vec<Color>,
    /// RNG seed; `None` picks one at construction
    pub seed: Option<u64>,
    /// Keep discs inside the walls after collision correction
    pub clamp_after_collisions: bool,
}

impl SimConfig {
    /// Tuning shared by every preset
    fn base() -> Self {
        Self {
            count: 0,
            size_factor: 1.0,
            speed_divisor: 1.0,
            radius_min: 60.0,
            radius_max: 140.0,
            radius_divisor: 1.0,
            velocity_half_range: 3.0,
            palette: Vec::new(),
            seed: None,
            clamp_after_collisions: true,
        }
    }

    /// Change the ball count and rescale radii to keep the same coverage
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count as i64;
        self.size_factor = size_factor_for(count);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Preset::Daily.config()
    }
}
