//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Bounds, Entity, EntityKind, Lifespan};
use super::groups::{Body, Motion};
use crate::angle_to_vector;

/// Missile parameters needed by [`Ship::shoot`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissileSpec {
    pub speed: f32,
    pub radius: f32,
    pub lifespan: u32,
}

/// Player ship: an entity with a thrust flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub body: Entity,
    pub thrust: bool,
}

impl Ship {
    /// Stationary ship at `pos`, facing along +x
    pub fn new(id: u32, pos: Vec2, radius: f32) -> Self {
        Self {
            body: Entity::new(id, EntityKind::Ship, radius, Lifespan::Infinite)
                .with_motion(pos, Vec2::ZERO),
            thrust: false,
        }
    }

    #[inline]
    pub fn forward(&self) -> Vec2 {
        angle_to_vector(self.body.angle)
    }

    /// Returns true if thrust was previously off
    pub fn thrusters_on(&mut self) -> bool {
        !std::mem::replace(&mut self.thrust, true)
    }

    /// Returns true if thrust was previously on
    pub fn thrusters_off(&mut self) -> bool {
        std::mem::replace(&mut self.thrust, false)
    }

    pub fn increment_angle_vel(&mut self, step: f32) {
        self.body.angular_vel += step;
    }

    pub fn decrement_angle_vel(&mut self, step: f32) {
        self.body.angular_vel -= step;
    }

    /// Build a missile leaving the nose of the ship
    pub fn shoot(&self, id: u32, spec: &MissileSpec, bounds: &Bounds) -> Entity {
        let forward = self.forward();
        let pos = bounds.wrap(self.body.pos + forward * self.body.radius);
        let vel = self.body.vel + forward * spec.speed;
        Entity::new(id, EntityKind::Missile, spec.radius, Lifespan::Finite(spec.lifespan))
            .with_motion(pos, vel)
            .with_spin(self.body.angle, 0.0)
    }
}

impl Body for Ship {
    #[inline]
    fn body(&self) -> &Entity {
        &self.body
    }

    /// Position moves with the old velocity; thrust uses the new heading
    fn advance(&mut self, bounds: &Bounds, motion: &Motion) -> bool {
        let expired = self.body.update(bounds);
        if self.thrust {
            self.body.vel += self.forward() * motion.acceleration;
        }
        self.body.vel *= motion.retention;
        expired
    }
}
