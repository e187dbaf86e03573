//! Rice Rocks - a toroidal asteroid-field arcade core
//!
//! Core modules:
//! - `sim`: Simulation (entities, groups, spawning, collisions, session state)
//! - `audio`: Routes simulation events to fire-and-forget audio cues
//! - `renderer`: Draw-call generation against an opaque canvas
//! - `platform`: Key bindings and the fixed-step frame/spawn driver
//! - `settings`: Validated runtime configuration

pub mod audio;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second (one integration step per tick)
    pub const SIM_HZ: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / SIM_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Seconds between spawner firings
    pub const SPAWN_INTERVAL_SECS: f32 = 1.0;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Ship handling (per tick)
    pub const ANGULAR_STEP: f32 = 0.03;
    pub const ACCELERATION: f32 = 0.035;
    pub const FRICTION: f32 = 0.0085;
    /// Muzzle speed added to the ship's own velocity
    pub const MISSILE_SPEED: f32 = 6.0;

    /// Collision radii
    pub const SHIP_RADIUS: f32 = 35.0;
    pub const ROCK_RADIUS: f32 = 40.0;
    pub const MISSILE_RADIUS: f32 = 2.0;
    pub const EXPLOSION_RADIUS: f32 = 0.0;

    /// Lifespans in ticks
    pub const MISSILE_LIFESPAN: u32 = 50;
    pub const EXPLOSION_LIFESPAN: u32 = 24;

    /// Spawner policy
    pub const ROCK_CAP: usize = 12;
    pub const SAFE_SPAWN_DISTANCE: f32 = 150.0;
    pub const ROCK_MAX_SPEED: f32 = 0.3;
    pub const ROCK_MAX_SPIN: f32 = 0.03;
    pub const SPAWN_MAX_ATTEMPTS: u32 = 64;

    /// Session
    pub const STARTING_LIVES: u32 = 3;
    pub const SPLASH_WIDTH: f32 = 400.0;
    pub const SPLASH_HEIGHT: f32 = 300.0;
}

/// Unit vector pointing along `angle` (radians)
#[inline]
pub fn angle_to_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Reduce a coordinate into `[0, extent)`
#[inline]
pub fn wrap_coord(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid rounds up to `extent` for tiny negative inputs
    if wrapped >= extent { 0.0 } else { wrapped }
}
