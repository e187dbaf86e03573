//! Fixed-step frame and spawn timer
//!
//! Real frame times are accumulated and converted into whole simulation
//! ticks (capped per frame) plus whole spawner firings.

use crate::consts::{MAX_SUBSTEPS, SIM_DT, SPAWN_INTERVAL_SECS};
use crate::error::ConfigError;
use crate::sim::{GameEvent, InputEvent, Session, TickInput, spawn_tick, tick};

/// Longest frame time accepted before clamping (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Accumulator-based driver for a [`Session`]
#[derive(Debug, Clone)]
pub struct FrameDriver {
    sim_dt: f32,
    spawn_interval: f32,
    accumulator: f32,
    spawn_accumulator: f32,
    pending: Vec<InputEvent>,
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self {
            sim_dt: SIM_DT,
            spawn_interval: SPAWN_INTERVAL_SECS,
            accumulator: 0.0,
            spawn_accumulator: 0.0,
            pending: Vec::new(),
        }
    }
}

/// Work done during one [`FrameDriver::advance`] call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub ticks: u32,
    pub spawned: u32,
    /// Simulation time discarded after hitting the substep cap (seconds)
    pub dropped_secs: f32,
    pub events: Vec<GameEvent>,
}

impl FrameDriver {
    /// Both intervals must be positive and finite
    pub fn new(sim_dt: f32, spawn_interval: f32) -> Result<Self, ConfigError> {
        for (name, value) in [("sim_dt", sim_dt), ("spawn_interval", spawn_interval)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidInterval { name, value });
            }
        }
        Ok(Self {
            sim_dt,
            spawn_interval,
            ..Self::default()
        })
    }

    /// Queue input for the next simulation tick
    pub fn push_input(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Run as many ticks and spawner firings as `dt` seconds allow.
    /// Non-finite frame times count as zero.
    pub fn advance(&mut self, session: &mut Session, dt: f32) -> FrameReport {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            log::warn!("Ignoring non-finite frame time {}", dt);
            0.0
        };
        self.accumulator += dt;
        self.spawn_accumulator += dt;

        let mut report = FrameReport::default();

        while self.spawn_accumulator >= self.spawn_interval {
            self.spawn_accumulator -= self.spawn_interval;
            if spawn_tick(session).is_some() {
                report.spawned += 1;
            }
        }

        while self.accumulator >= self.sim_dt && report.ticks < MAX_SUBSTEPS {
            let input = TickInput {
                events: std::mem::take(&mut self.pending),
            };
            tick(session, &input);
            self.accumulator -= self.sim_dt;
            report.ticks += 1;
        }

        // Only reachable when sim_dt is short enough for a clamped frame
        // to hold more than MAX_SUBSTEPS ticks
        if report.ticks == MAX_SUBSTEPS && self.accumulator >= self.sim_dt {
            let remainder = self.accumulator % self.sim_dt;
            report.dropped_secs = self.accumulator - remainder;
            log::debug!("Dropping {:.3}s of simulation backlog", report.dropped_secs);
            self.accumulator = remainder;
        }

        report.events = session.drain_events();
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Command, GamePhase};
    use glam::Vec2;

    fn session() -> Session {
        Session::new(Settings::default(), 77).unwrap()
    }

    #[test]
    fn test_one_second_runs_sixty_ticks_and_one_spawn() {
        let mut s = session();
        let mut driver = FrameDriver::default();
        driver.push_input(InputEvent::Click(Vec2::new(400.0, 300.0)));

        let mut ticks = 0;
        let mut spawned = 0;
        // Slightly over a second so float accumulation cannot fall short
        for _ in 0..61 {
            let report = driver.advance(&mut s, 1.0 / 60.0);
            ticks += report.ticks;
            spawned += report.spawned;
        }
        assert_eq!(s.phase, GamePhase::Running);
        assert!((60..=61).contains(&ticks));
        assert_eq!(spawned, 1);
        assert_eq!(s.groups.rocks.len(), 1);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut s = session();
        let mut driver = FrameDriver::default();
        // 5 s clamps to 0.1 s, which is six 60 Hz ticks give or take rounding
        let report = driver.advance(&mut s, 5.0);
        assert!((5..=6).contains(&report.ticks));
        assert_eq!(report.dropped_secs, 0.0);
    }

    #[test]
    fn test_substep_cap_drops_backlog() {
        let mut s = session();
        s.start();
        let mut driver = FrameDriver::new(0.005, SPAWN_INTERVAL_SECS).unwrap();
        let report = driver.advance(&mut s, 0.1);
        assert_eq!(report.ticks, MAX_SUBSTEPS);
        assert!(report.dropped_secs > 0.05);
        assert_eq!(s.time_ticks, MAX_SUBSTEPS as u64);

        // Nothing left over to replay on the next frame
        let report = driver.advance(&mut s, 0.0);
        assert_eq!(report.ticks, 0);
    }

    #[test]
    fn test_rejects_bad_intervals() {
        for (sim_dt, spawn) in [
            (SIM_DT, 0.0),
            (0.0, SPAWN_INTERVAL_SECS),
            (-1.0, SPAWN_INTERVAL_SECS),
            (SIM_DT, f32::NAN),
            (f32::INFINITY, SPAWN_INTERVAL_SECS),
        ] {
            assert!(matches!(
                FrameDriver::new(sim_dt, spawn),
                Err(ConfigError::InvalidInterval { .. })
            ));
        }
        assert!(FrameDriver::new(SIM_DT, SPAWN_INTERVAL_SECS).is_ok());
    }

    #[test]
    fn test_non_finite_dt_is_ignored() {
        let mut s = session();
        s.start();
        let mut driver = FrameDriver::default();
        assert_eq!(driver.advance(&mut s, f32::NAN).ticks, 0);
        assert_eq!(driver.advance(&mut s, f32::INFINITY).ticks, 0);

        let mut ticks = 0;
        let mut spawned = 0;
        for _ in 0..120 {
            let report = driver.advance(&mut s, 1.0 / 60.0);
            ticks += report.ticks;
            spawned += report.spawned;
        }
        assert!(ticks >= 119);
        assert!(spawned >= 1);
    }

    #[test]
    fn test_pending_input_delivered_once() {
        let mut s = session();
        s.start();
        let mut driver = FrameDriver::default();
        driver.push_input(InputEvent::Press(Command::Fire));
        let report = driver.advance(&mut s, 3.0 / 60.0 + 0.001);
        assert_eq!(report.ticks, 3);
        assert_eq!(s.groups.missiles.len(), 1);
        let fired = report
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::MissileFired { .. }));
        assert!(fired);
    }

    #[test]
    fn test_opening_sequence() {
        use crate::platform::{Key, KeyMap};

        let mut s = session();
        let keys = KeyMap::default();
        let mut driver = FrameDriver::default();

        // Click outside the splash box is ignored
        driver.push_input(InputEvent::Click(Vec2::new(5.0, 5.0)));
        driver.advance(&mut s, 1.0 / 60.0);
        assert_eq!(s.phase, GamePhase::Splash);

        driver.push_input(InputEvent::Click(s.bounds().center()));
        driver.advance(&mut s, 1.0 / 60.0);
        assert_eq!((s.phase, s.lives, s.score), (GamePhase::Running, 3, 0));

        // Run until the spawner has fired once
        while s.groups.rocks.is_empty() {
            driver.advance(&mut s, 1.0 / 60.0);
        }
        let ship_pos = s.ship().unwrap().body.pos;
        let rock_pos = s.groups.rocks.first().unwrap().pos;
        // One tick of rock drift at most since placement
        assert!(ship_pos.distance(rock_pos) >= 150.0 - 0.5);

        // Keep the missile's path clear
        s.groups.rocks.clear();
        let mut driver = FrameDriver::new(SIM_DT, f32::MAX).unwrap();
        driver.push_input(keys.key_down(Key::Space).unwrap());
        driver.push_input(keys.key_up(Key::Space).unwrap());
        driver.advance(&mut s, 1.0 / 60.0 + 0.001);
        assert_eq!(s.groups.missiles.len(), 1);

        for _ in 0..60 {
            driver.advance(&mut s, 1.0 / 60.0 + 0.0001);
        }
        assert!(s.groups.missiles.is_empty());
    }

    #[test]
    fn test_spawner_idle_during_splash() {
        let mut s = session();
        let mut driver = FrameDriver::default();
        for _ in 0..40 {
            driver.advance(&mut s, 0.1);
        }
        assert_eq!(s.phase, GamePhase::Splash);
        assert!(s.groups.rocks.is_empty());
    }
}
