//! Per-frame and per-second simulation entry points
//!
//! The driver calls [`tick`] once per frame and [`spawn_tick`] on its ~1 Hz
//! timer. Each tick integrates every entity exactly once, then resolves
//! collisions: rocks against the ship first, then rocks against missiles.

use glam::Vec2;

use super::collision::group_collide;
use super::input::InputEvent;
use super::state::{GamePhase, Session};

/// Input delivered since the previous tick, applied in order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

/// What collision resolution did this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    pub ship_hit: bool,
    pub rocks_shot: usize,
    pub reset: bool,
}

/// Apply one input event. Keys are ignored until the splash is dismissed.
pub fn handle_input(session: &mut Session, event: InputEvent) {
    match event {
        InputEvent::Click(point) => {
            session.click(point);
        }
        InputEvent::Press(command) if session.phase == GamePhase::Running => {
            if let Some(action) = session.input.press(command) {
                session.apply_action(action);
            }
        }
        InputEvent::Release(command) if session.phase == GamePhase::Running => {
            if let Some(action) = session.input.release(command) {
                session.apply_action(action);
            }
        }
        InputEvent::Press(_) | InputEvent::Release(_) => {}
    }
}

/// Advance the session by one frame
pub fn tick(session: &mut Session, input: &TickInput) -> FrameOutcome {
    for event in &input.events {
        handle_input(session, *event);
    }

    session.time_ticks += 1;

    if session.phase != GamePhase::Running {
        return FrameOutcome::default();
    }

    let bounds = *session.bounds();
    let motion = *session.motion();
    session.groups.step_all(&bounds, &motion);

    resolve_collisions(session)
}

/// Rocks x ships (costs a life), then rocks x missiles (scores a point).
/// Rocks destroyed by the ship are already gone for the missile pass.
pub fn resolve_collisions(session: &mut Session) -> FrameOutcome {
    let mut outcome = FrameOutcome::default();

    let ship_hits = group_collide(&mut session.groups.rocks, &mut session.groups.ships);
    spawn_explosions(session, &ship_hits.impacts);

    let missile_hits = group_collide(&mut session.groups.rocks, &mut session.groups.missiles);
    spawn_explosions(session, &missile_hits.impacts);

    if missile_hits.any() {
        session.score += 1;
        outcome.rocks_shot = missile_hits.hits();
    }

    if ship_hits.any() {
        outcome.ship_hit = true;
        outcome.reset = session.lose_life();
    }

    outcome
}

fn spawn_explosions(session: &mut Session, impacts: &[Vec2]) {
    for &pos in impacts {
        session.spawn_explosion(pos);
    }
}

/// Timer callback: try to add one rock. Returns its ID if spawned.
pub fn spawn_tick(session: &mut Session) -> Option<u32> {
    session.spawn_rock()
}
