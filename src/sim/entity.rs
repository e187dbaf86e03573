//! Shared motion primitive
//!
//! Every simulated object is an [`Entity`]: a circle that drifts, spins,
//! ages and wraps around the edges of a toroidal canvas.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::wrap_coord;

/// Entity category (one group per kind)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Ship,
    Rock,
    Missile,
    Explosion,
}

/// Maximum age in ticks before automatic removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifespan {
    Finite(u32),
    Infinite,
}

impl Lifespan {
    /// An entity expires once its age strictly exceeds the lifespan
    #[inline]
    pub fn is_exceeded_by(self, age: u32) -> bool {
        match self {
            Lifespan::Finite(max) => age > max,
            Lifespan::Infinite => false,
        }
    }
}

/// Toroidal canvas extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    width: f32,
    height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ConfigError::InvalidCanvas { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Wrap a point onto the torus
    #[inline]
    pub fn wrap(&self, p: Vec2) -> Vec2 {
        Vec2::new(wrap_coord(p.x, self.width), wrap_coord(p.y, self.height))
    }

    /// True if `p` lies in `[0,width) × [0,height)`
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..self.width).contains(&p.x) && (0.0..self.height).contains(&p.y)
    }
}

/// A simulated circle with position, velocity, spin and age
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading (radians)
    pub angle: f32,
    /// Radians per tick
    pub angular_vel: f32,
    /// Collision circle radius (never negative)
    pub radius: f32,
    /// Ticks since creation
    pub age: u32,
    pub lifespan: Lifespan,
}

impl Entity {
    /// Create a stationary entity at the origin
    pub fn new(id: u32, kind: EntityKind, radius: f32, lifespan: Lifespan) -> Self {
        debug_assert!(radius >= 0.0, "entity radius must be non-negative");
        Self {
            id,
            kind,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            angle: 0.0,
            angular_vel: 0.0,
            radius: radius.max(0.0),
            age: 0,
            lifespan,
        }
    }

    pub fn with_motion(mut self, pos: Vec2, vel: Vec2) -> Self {
        self.pos = pos;
        self.vel = vel;
        self
    }

    pub fn with_spin(mut self, angle: f32, angular_vel: f32) -> Self {
        self.angle = angle;
        self.angular_vel = angular_vel;
        self
    }

    /// Advance one tick. Returns true if the entity has expired.
    pub fn update(&mut self, bounds: &Bounds) -> bool {
        self.angle += self.angular_vel;
        self.pos = bounds.wrap(self.pos + self.vel);
        self.age = self.age.saturating_add(1);
        self.is_expired()
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.lifespan.is_exceeded_by(self.age)
    }
}

/// Circle overlap between two entities, symmetric in its arguments
#[inline]
pub fn collide(a: &Entity, b: &Entity) -> bool {
    a.radius + b.radius > a.pos.distance(b.pos)
}
