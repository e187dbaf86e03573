//! End-to-end session flow through the public API

use glam::Vec2;
use rice_rocks::Settings;
use rice_rocks::audio::{AudioManager, NullAudio};
use rice_rocks::sim::{
    Command, GameEvent, GamePhase, InputEvent, Session, TickInput, spawn_tick, tick,
};

fn frame(session: &mut Session, events: &[InputEvent]) {
    tick(session, &TickInput::new(events.iter().copied()));
}

#[test]
fn test_splash_to_first_shot() {
    let mut session = Session::new(Settings::default(), 2013).unwrap();
    assert_eq!(session.phase, GamePhase::Splash);

    frame(&mut session, &[InputEvent::Click(Vec2::new(10.0, 10.0))]);
    assert_eq!(session.phase, GamePhase::Splash);
    assert_eq!(spawn_tick(&mut session), None);

    let center = session.bounds().center();
    frame(&mut session, &[InputEvent::Click(center)]);
    assert_eq!(session.phase, GamePhase::Running);
    assert_eq!((session.lives, session.score), (3, 0));

    assert!(spawn_tick(&mut session).is_some());
    assert_eq!(session.groups.rocks.len(), 1);
    let rock = session.groups.rocks.first().unwrap().pos;
    assert!(rock.distance(center) >= 150.0);

    // Fire with no rocks on the board so the missile lives out its span
    session.groups.rocks.clear();
    frame(
        &mut session,
        &[InputEvent::Press(Command::Fire), InputEvent::Release(Command::Fire)],
    );
    assert_eq!(session.groups.missiles.len(), 1);

    for _ in 0..49 {
        frame(&mut session, &[]);
    }
    assert_eq!(session.groups.missiles.len(), 1);
    frame(&mut session, &[]);
    assert!(session.groups.missiles.is_empty());

    let mut audio = AudioManager::new(NullAudio, session.settings());
    let events = session.drain_events();
    assert!(matches!(events.first(), Some(GameEvent::SessionStarted)));
    audio.handle_all(&events);
}
