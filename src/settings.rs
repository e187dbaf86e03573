//! Game settings and tuning
//!
//! Loaded from JSON (every field optional, defaults match the classic game)
//! and validated before a session is built from them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Runtime configuration for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Canvas ===
    /// Width of the toroidal play field
    pub width: f32,
    /// Height of the toroidal play field
    pub height: f32,

    // === Ship handling (per tick) ===
    /// Angular velocity change per rotate press (radians/tick)
    pub angular_step: f32,
    /// Thrust acceleration (units/tick²)
    pub acceleration: f32,
    /// Fraction of ship velocity lost every tick
    pub friction: f32,
    /// Missile speed relative to the ship
    pub missile_speed: f32,

    // === Sprites ===
    pub ship_radius: f32,
    pub rock_radius: f32,
    pub missile_radius: f32,
    pub explosion_radius: f32,
    /// Ticks a missile survives
    pub missile_lifespan: u32,
    /// Ticks an explosion animates
    pub explosion_lifespan: u32,

    // === Spawning ===
    /// Maximum live rocks
    pub rock_cap: usize,
    /// Minimum distance between a fresh rock and the ship
    pub safe_spawn_distance: f32,
    /// Rock velocity components are drawn from [-max, max]
    pub rock_max_speed: f32,
    /// Rock angular velocity is drawn from [0, max)
    pub rock_max_spin: f32,
    /// Rejection-sampling attempts before accepting an unsafe position
    pub spawn_max_attempts: u32,

    // === Session ===
    pub starting_lives: u32,
    /// Size of the clickable splash rectangle (centered on the canvas)
    pub splash_width: f32,
    pub splash_height: f32,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    pub soundtrack_volume: f32,
    pub thrust_volume: f32,
    pub missile_volume: f32,
    pub explosion_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,

            angular_step: ANGULAR_STEP,
            acceleration: ACCELERATION,
            friction: FRICTION,
            missile_speed: MISSILE_SPEED,

            ship_radius: SHIP_RADIUS,
            rock_radius: ROCK_RADIUS,
            missile_radius: MISSILE_RADIUS,
            explosion_radius: EXPLOSION_RADIUS,
            missile_lifespan: MISSILE_LIFESPAN,
            explosion_lifespan: EXPLOSION_LIFESPAN,

            rock_cap: ROCK_CAP,
            safe_spawn_distance: SAFE_SPAWN_DISTANCE,
            rock_max_speed: ROCK_MAX_SPEED,
            rock_max_spin: ROCK_MAX_SPIN,
            spawn_max_attempts: SPAWN_MAX_ATTEMPTS,

            starting_lives: STARTING_LIVES,
            splash_width: SPLASH_WIDTH,
            splash_height: SPLASH_HEIGHT,

            master_volume: 1.0,
            soundtrack_volume: 0.75,
            thrust_volume: 0.5,
            missile_volume: 0.3,
            explosion_volume: 1.0,
            muted: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ConfigError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }

        let non_negative = [
            ("angular_step", self.angular_step),
            ("acceleration", self.acceleration),
            ("friction", self.friction),
            ("missile_speed", self.missile_speed),
            ("ship_radius", self.ship_radius),
            ("rock_radius", self.rock_radius),
            ("missile_radius", self.missile_radius),
            ("explosion_radius", self.explosion_radius),
            ("safe_spawn_distance", self.safe_spawn_distance),
            ("rock_max_speed", self.rock_max_speed),
            ("rock_max_spin", self.rock_max_spin),
            ("splash_width", self.splash_width),
            ("splash_height", self.splash_height),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        if self.friction > 1.0 {
            return Err(ConfigError::OutOfUnitRange {
                name: "friction",
                value: self.friction,
            });
        }

        let counts = [
            ("missile_lifespan", self.missile_lifespan as usize),
            ("explosion_lifespan", self.explosion_lifespan as usize),
            ("rock_cap", self.rock_cap),
            ("spawn_max_attempts", self.spawn_max_attempts as usize),
            ("starting_lives", self.starting_lives as usize),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(ConfigError::ZeroCount { name });
            }
        }

        let volumes = [
            ("master_volume", self.master_volume),
            ("soundtrack_volume", self.soundtrack_volume),
            ("thrust_volume", self.thrust_volume),
            ("missile_volume", self.missile_volume),
            ("explosion_volume", self.explosion_volume),
        ];
        for (name, value) in volumes {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { name, value });
            }
        }

        Ok(())
    }

    /// Multiplier applied to ship velocity every tick
    pub fn velocity_retention(&self) -> f32 {
        (1.0 - self.friction).max(0.0)
    }
}
