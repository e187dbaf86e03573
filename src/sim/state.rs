//! Session state
//!
//! One `Session` owns every entity group, the score/lives counters, the
//! spawner RNG and the pending event queue. Drivers thread it through
//! [`tick`](super::tick::tick) and [`spawn_tick`](super::tick::spawn_tick).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Bounds, Entity, EntityKind, Lifespan};
use super::groups::{GroupCounts, Groups, Motion};
use super::input::{Action, InputState};
use super::ship::{MissileSpec, Ship};
use super::spawner::{SpawnPolicy, Spawner};
use crate::error::ConfigError;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a click on the splash image; nothing moves
    Splash,
    /// Active gameplay
    Running,
}

/// Something the presentation layer may want to react to (audio, effects)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Entered Running with fresh lives and score
    SessionStarted,
    ThrustStarted,
    ThrustStopped,
    MissileFired { pos: Vec2 },
    RockSpawned { pos: Vec2, fallback: bool },
    Explosion { pos: Vec2 },
    LifeLost { lives: u32 },
    /// Lives ran out; every group was cleared
    SessionReset { final_score: u64 },
}

/// Axis-aligned rectangle with exclusive edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            max: center + size / 2.0,
        }
    }

    /// Points on the border are outside
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }
}

/// Serializable summary for logs and tests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub lives: u32,
    pub score: u64,
    pub time_ticks: u64,
    pub counts: GroupCounts,
}

/// Complete state of one play session
#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    bounds: Bounds,
    motion: Motion,
    missile: MissileSpec,
    /// Current phase
    pub phase: GamePhase,
    /// Player lives
    pub lives: u32,
    /// Rocks destroyed by missiles
    pub score: u64,
    /// Frames processed (drives background animation)
    pub time_ticks: u64,
    pub groups: Groups,
    spawner: Spawner,
    pub(crate) input: InputState,
    events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl Session {
    /// Build a session in the Splash phase with a single ship at the center
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;
        let bounds = Bounds::new(settings.width, settings.height)?;
        let motion = Motion {
            acceleration: settings.acceleration,
            retention: settings.velocity_retention(),
        };
        let missile = MissileSpec {
            speed: settings.missile_speed,
            radius: settings.missile_radius,
            lifespan: settings.missile_lifespan,
        };
        let spawner = Spawner::new(SpawnPolicy::from(&settings), seed);
        let ship = Ship::new(1, bounds.center(), settings.ship_radius);

        Ok(Self {
            lives: settings.starting_lives,
            settings,
            bounds,
            motion,
            missile,
            phase: GamePhase::Splash,
            score: 0,
            time_ticks: 0,
            groups: Groups::with_ship(ship),
            spawner,
            input: InputState::default(),
            events: Vec::new(),
            next_id: 2,
        })
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[inline]
    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn ship(&self) -> Option<&Ship> {
        self.groups.ships.first()
    }

    pub fn ship_mut(&mut self) -> Option<&mut Ship> {
        self.groups.ships.first_mut()
    }

    /// Clickable area that dismisses the splash screen
    pub fn splash_rect(&self) -> Rect {
        Rect::centered(
            self.bounds.center(),
            Vec2::new(self.settings.splash_width, self.settings.splash_height),
        )
    }

    /// Handle a pointer click. Returns true if it started the session.
    pub fn click(&mut self, point: Vec2) -> bool {
        if self.phase != GamePhase::Splash || !self.splash_rect().contains(point) {
            return false;
        }
        self.start();
        true
    }

    /// Enter Running with fresh counters
    pub fn start(&mut self) {
        self.phase = GamePhase::Running;
        self.lives = self.settings.starting_lives;
        self.score = 0;
        self.events.push(GameEvent::SessionStarted);
        log::info!("Session started with {} lives", self.lives);
    }

    /// Clear every group except a fresh ship and start over
    pub fn reset(&mut self) {
        let final_score = self.score;
        log::info!("Out of lives (score {}), resetting session", final_score);

        let id = self.next_entity_id();
        let ship = Ship::new(id, self.bounds.center(), self.settings.ship_radius);
        self.groups = Groups::with_ship(ship);
        self.input.clear();
        self.events.push(GameEvent::SessionReset { final_score });
        self.start();
    }

    /// Run a ship action from the binding table
    pub fn apply_action(&mut self, action: Action) {
        match action {
            Action::ThrustersOn => self.thrusters_on(),
            Action::ThrustersOff => self.thrusters_off(),
            Action::IncrementAngleVel => {
                let step = self.settings.angular_step;
                if let Some(ship) = self.ship_mut() {
                    ship.increment_angle_vel(step);
                }
            }
            Action::DecrementAngleVel => {
                let step = self.settings.angular_step;
                if let Some(ship) = self.ship_mut() {
                    ship.decrement_angle_vel(step);
                }
            }
            Action::Shoot => self.shoot(),
        }
    }

    pub fn thrusters_on(&mut self) {
        if self.ship_mut().is_some_and(Ship::thrusters_on) {
            self.events.push(GameEvent::ThrustStarted);
        }
    }

    pub fn thrusters_off(&mut self) {
        if self.ship_mut().is_some_and(Ship::thrusters_off) {
            self.events.push(GameEvent::ThrustStopped);
        }
    }

    /// Fire a missile from the ship's nose
    pub fn shoot(&mut self) {
        let id = self.next_entity_id();
        let Some(ship) = self.ship() else {
            return;
        };
        let missile = ship.shoot(id, &self.missile, &self.bounds);
        let pos = missile.pos;
        self.groups.missiles.insert(missile);
        self.events.push(GameEvent::MissileFired { pos });
    }

    /// Spawn one rock if Running and under the cap. Returns its ID.
    pub fn spawn_rock(&mut self) -> Option<u32> {
        if !self.is_running() || !self.spawner.has_room(self.groups.rocks.len()) {
            return None;
        }
        let id = self.next_entity_id();
        let avoid = self.ship().map(|s| s.body.pos);
        let (rock, placement) = self.spawner.make_rock(id, &self.bounds, avoid);
        log::debug!(
            "Rock {} spawned at ({:.1}, {:.1}) after {} attempt(s)",
            id,
            placement.pos.x,
            placement.pos.y,
            placement.attempts
        );
        self.groups.rocks.insert(rock);
        self.events.push(GameEvent::RockSpawned {
            pos: placement.pos,
            fallback: placement.fallback,
        });
        Some(id)
    }

    /// Cosmetic explosion at `pos`
    pub fn spawn_explosion(&mut self, pos: Vec2) {
        let id = self.next_entity_id();
        let explosion = Entity::new(
            id,
            EntityKind::Explosion,
            self.settings.explosion_radius,
            Lifespan::Finite(self.settings.explosion_lifespan),
        )
        .with_motion(pos, Vec2::ZERO);
        self.groups.explosions.insert(explosion);
        self.events.push(GameEvent::Explosion { pos });
    }

    /// Lose one life. Returns true if that triggered a reset.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::LifeLost { lives: self.lives });
        if self.lives == 0 {
            self.reset();
            return true;
        }
        false
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            lives: self.lives,
            score: self.score,
            time_ticks: self.time_ticks,
            counts: self.groups.counts(),
        }
    }
}
