//! Data-driven game balance
//!
//! Every number the simulation reads lives here so a settings blob can
//! retune the game without a rebuild.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Simulation tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub jump_strength: f32,

    pub player_width: f32,
    pub player_height: f32,
    pub strike_half_band: f32,

    pub obstacle_interval: u64,
    pub particle_interval: u64,

    pub obstacle_width: f32,
    pub obstacle_speed: f32,
    pub gap_top_min: f32,
    pub gap_top_span_factor: f32,
    pub gap_size_min: f32,
    pub gap_size_span: f32,

    pub particle_radius: f32,
    pub particle_speed: f32,

    pub obstacle_score: u64,
    pub particle_score: u64,

    /// Zero upward velocity when the elf is clamped at the ceiling.
    /// Off by default: the elf keeps its upward velocity while pinned.
    pub ceiling_stops_velocity: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            strike_half_band: STRIKE_HALF_BAND,

            obstacle_interval: OBSTACLE_INTERVAL,
            particle_interval: PARTICLE_INTERVAL,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_speed: OBSTACLE_SPEED,
            gap_top_min: GAP_TOP_MIN,
            gap_top_span_factor: GAP_TOP_SPAN_FACTOR,
            gap_size_min: GAP_SIZE_MIN,
            gap_size_span: GAP_SIZE_SPAN,

            particle_radius: PARTICLE_RADIUS,
            particle_speed: PARTICLE_SPEED,

            obstacle_score: OBSTACLE_SCORE,
            particle_score: PARTICLE_SCORE,

            ceiling_stops_velocity: false,
        }
    }
}

impl Tuning {
    /// Replace values the simulation cannot work with by their defaults.
    ///
    /// Returns `true` if anything was changed.
    pub fn validate(&mut self) -> bool {
        let defaults = Self::default();
        let mut fixed = false;

        if self.obstacle_interval == 0 {
            log::warn!("obstacle_interval must be positive, using {}", defaults.obstacle_interval);
            self.obstacle_interval = defaults.obstacle_interval;
            fixed = true;
        }
        if self.particle_interval == 0 {
            log::warn!("particle_interval must be positive, using {}", defaults.particle_interval);
            self.particle_interval = defaults.particle_interval;
            fixed = true;
        }

        // Sizes and spans must be finite and non-negative
        let sizes: [(&str, &mut f32, f32); 9] = [
            ("player_width", &mut self.player_width, defaults.player_width),
            ("player_height", &mut self.player_height, defaults.player_height),
            ("strike_half_band", &mut self.strike_half_band, defaults.strike_half_band),
            ("obstacle_width", &mut self.obstacle_width, defaults.obstacle_width),
            ("gap_top_min", &mut self.gap_top_min, defaults.gap_top_min),
            ("gap_top_span_factor", &mut self.gap_top_span_factor, defaults.gap_top_span_factor),
            ("gap_size_span", &mut self.gap_size_span, defaults.gap_size_span),
            ("particle_radius", &mut self.particle_radius, defaults.particle_radius),
            ("particle_speed", &mut self.particle_speed, defaults.particle_speed),
        ];
        for (name, value, default) in sizes {
            if !value.is_finite() || *value < 0.0 {
                log::warn!("{} must be a non-negative number, using {}", name, default);
                *value = default;
                fixed = true;
            }
        }

        // A gap must exist
        if !self.gap_size_min.is_finite() || self.gap_size_min <= 0.0 {
            log::warn!("gap_size_min must be positive, using {}", defaults.gap_size_min);
            self.gap_size_min = defaults.gap_size_min;
            fixed = true;
        }

        for (name, value, default) in [
            ("gravity", &mut self.gravity, defaults.gravity),
            ("jump_strength", &mut self.jump_strength, defaults.jump_strength),
            ("obstacle_speed", &mut self.obstacle_speed, defaults.obstacle_speed),
        ] {
            if !value.is_finite() {
                log::warn!("{} must be finite, using {}", name, default);
                *value = default;
                fixed = true;
            }
        }

        fixed
    }
}
