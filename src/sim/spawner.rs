//! Periodic asteroid spawning
//!
//! Runs on the external ~1 Hz timer. Rocks appear uniformly over the canvas,
//! but never on top of the ship: positions closer than the safe distance are
//! re-drawn, up to a fixed number of attempts.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Bounds, Entity, EntityKind, Lifespan};
use crate::settings::Settings;

/// Spawning rules derived from [`Settings`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPolicy {
    pub rock_cap: usize,
    pub safe_distance: f32,
    pub max_speed: f32,
    pub max_spin: f32,
    pub max_attempts: u32,
    pub rock_radius: f32,
}

impl From<&Settings> for SpawnPolicy {
    fn from(settings: &Settings) -> Self {
        Self {
            rock_cap: settings.rock_cap,
            safe_distance: settings.safe_spawn_distance,
            max_speed: settings.rock_max_speed,
            max_spin: settings.rock_max_spin,
            max_attempts: settings.spawn_max_attempts.max(1),
            rock_radius: settings.rock_radius,
        }
    }
}

/// Result of rejection-sampling a spawn position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub pos: Vec2,
    pub attempts: u32,
    /// True if the attempt cap was hit and the last (unsafe) sample was kept
    pub fallback: bool,
}

/// Random rock generator with a seeded RNG
#[derive(Debug, Clone)]
pub struct Spawner {
    policy: SpawnPolicy,
    rng: Pcg32,
}

impl Spawner {
    pub fn new(policy: SpawnPolicy, seed: u64) -> Self {
        Self {
            policy,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// True if another rock fits under the population cap
    #[inline]
    pub fn has_room(&self, rock_count: usize) -> bool {
        rock_count < self.policy.rock_cap
    }

    /// Uniform point on the canvas
    fn sample_point(&mut self, bounds: &Bounds) -> Vec2 {
        let x = self.rng.random::<f32>() * bounds.width();
        let y = self.rng.random::<f32>() * bounds.height();
        // Scaling a [0,1) sample can round up onto the far edge
        bounds.wrap(Vec2::new(x, y))
    }

    /// Draw positions until one is at least `safe_distance` from `avoid`
    pub fn place(&mut self, bounds: &Bounds, avoid: Option<Vec2>) -> Placement {
        let mut pos = self.sample_point(bounds);
        let Some(avoid) = avoid else {
            return Placement {
                pos,
                attempts: 1,
                fallback: false,
            };
        };

        let mut attempts = 1;
        while pos.distance(avoid) < self.policy.safe_distance {
            if attempts >= self.policy.max_attempts {
                log::warn!(
                    "No safe rock position after {} attempts, spawning {:.1} units from the ship",
                    attempts,
                    pos.distance(avoid)
                );
                return Placement {
                    pos,
                    attempts,
                    fallback: true,
                };
            }
            pos = self.sample_point(bounds);
            attempts += 1;
        }

        Placement {
            pos,
            attempts,
            fallback: false,
        }
    }

    /// Build a drifting, spinning rock at a safe position
    pub fn make_rock(
        &mut self,
        id: u32,
        bounds: &Bounds,
        avoid: Option<Vec2>,
    ) -> (Entity, Placement) {
        let placement = self.place(bounds, avoid);
        let max_speed = self.policy.max_speed;
        let vel = Vec2::new(
            self.rng.random::<f32>() * 2.0 * max_speed - max_speed,
            self.rng.random::<f32>() * 2.0 * max_speed - max_speed,
        );
        let spin = self.rng.random::<f32>() * self.policy.max_spin;

        let rock = Entity::new(id, EntityKind::Rock, self.policy.rock_radius, Lifespan::Infinite)
            .with_motion(placement.pos, vel)
            .with_spin(0.0, spin);
        (rock, placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds::new(800.0, 600.0).unwrap()
    }

    fn policy() -> SpawnPolicy {
        SpawnPolicy::from(&Settings::default())
    }

    #[test]
    fn test_rock_motion_ranges() {
        let mut spawner = Spawner::new(policy(), 7);
        for id in 0..500 {
            let (rock, _) = spawner.make_rock(id, &bounds(), None);
            assert_eq!(rock.kind, EntityKind::Rock);
            assert_eq!(rock.lifespan, Lifespan::Infinite);
            assert_eq!(rock.radius, 40.0);
            assert!(bounds().contains(rock.pos));
            assert!(rock.vel.x >= -0.3 && rock.vel.x <= 0.3);
            assert!(rock.vel.y >= -0.3 && rock.vel.y <= 0.3);
            assert!(rock.angular_vel >= 0.0 && rock.angular_vel < 0.03);
        }
    }

    #[test]
    fn test_placement_keeps_safe_distance() {
        let mut spawner = Spawner::new(policy(), 42);
        let ship = Vec2::new(400.0, 300.0);
        for _ in 0..500 {
            let placement = spawner.place(&bounds(), Some(ship));
            assert!(!placement.fallback);
            assert!(placement.pos.distance(ship) >= 150.0);
        }
    }

    #[test]
    fn test_placement_falls_back_after_cap() {
        // No point on an 800x600 canvas is 10_000 units from the center
        let policy = SpawnPolicy {
            safe_distance: 10_000.0,
            max_attempts: 5,
            ..policy()
        };
        let mut spawner = Spawner::new(policy, 3);
        let placement = spawner.place(&bounds(), Some(Vec2::new(400.0, 300.0)));
        assert!(placement.fallback);
        assert_eq!(placement.attempts, 5);
        assert!(bounds().contains(placement.pos));
    }

    #[test]
    fn test_same_seed_same_rocks() {
        let mut a = Spawner::new(policy(), 99);
        let mut b = Spawner::new(policy(), 99);
        for id in 0..10 {
            let (ra, _) = a.make_rock(id, &bounds(), Some(Vec2::new(400.0, 300.0)));
            let (rb, _) = b.make_rock(id, &bounds(), Some(Vec2::new(400.0, 300.0)));
            assert_eq!(ra, rb);
        }
    }

    #[test]
    fn test_has_room() {
        let spawner = Spawner::new(policy(), 1);
        assert!(spawner.has_room(11));
        assert!(!spawner.has_room(12));
        assert!(!spawner.has_room(13));
    }
}
