//! Audio cue routing
//!
//! The simulation never touches audio directly. Drivers feed drained
//! [`GameEvent`]s to an [`AudioManager`], which turns them into
//! fire-and-forget actions on named cues of an [`AudioBackend`].

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Named sound handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Looping background music
    Soundtrack,
    /// Engine rumble while thrusting
    Thrust,
    /// Missile launch
    Missile,
    /// Rock destroyed
    Explosion,
}

impl Cue {
    pub const ALL: [Cue; 4] = [Cue::Soundtrack, Cue::Thrust, Cue::Missile, Cue::Explosion];
}

/// Operation on a cue
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CueAction {
    Play,
    Pause,
    Rewind,
    SetVolume(f32),
}

/// Playback collaborator. Failures stay inside the implementation.
pub trait AudioBackend {
    fn apply(&mut self, cue: Cue, action: CueAction);
}

/// Backend that drops everything (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioBackend for NullAudio {
    fn apply(&mut self, _cue: Cue, _action: CueAction) {}
}

/// Backend that logs every cue action at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAudio;

impl AudioBackend for LogAudio {
    fn apply(&mut self, cue: Cue, action: CueAction) {
        log::debug!("audio: {:?} {:?}", cue, action);
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    master_volume: f32,
    soundtrack_volume: f32,
    thrust_volume: f32,
    missile_volume: f32,
    explosion_volume: f32,
    muted: bool,
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B, settings: &Settings) -> Self {
        let mut manager = Self {
            backend,
            master_volume: settings.master_volume,
            soundtrack_volume: settings.soundtrack_volume,
            thrust_volume: settings.thrust_volume,
            missile_volume: settings.missile_volume,
            explosion_volume: settings.explosion_volume,
            muted: settings.muted,
        };
        manager.push_volumes();
        manager
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
        self.push_volumes();
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.push_volumes();
    }

    /// Effective volume of a cue
    pub fn effective_volume(&self, cue: Cue) -> f32 {
        if self.muted {
            return 0.0;
        }
        let cue_volume = match cue {
            Cue::Soundtrack => self.soundtrack_volume,
            Cue::Thrust => self.thrust_volume,
            Cue::Missile => self.missile_volume,
            Cue::Explosion => self.explosion_volume,
        };
        self.master_volume * cue_volume
    }

    fn push_volumes(&mut self) {
        for cue in Cue::ALL {
            let vol = self.effective_volume(cue);
            self.backend.apply(cue, CueAction::SetVolume(vol));
        }
    }

    /// Restart a cue from the beginning
    fn restart(&mut self, cue: Cue) {
        self.backend.apply(cue, CueAction::Rewind);
        self.backend.apply(cue, CueAction::Play);
    }

    fn stop(&mut self, cue: Cue) {
        self.backend.apply(cue, CueAction::Pause);
        self.backend.apply(cue, CueAction::Rewind);
    }

    /// React to one simulation event
    pub fn handle(&mut self, event: &GameEvent) {
        match event {
            GameEvent::SessionStarted => self.restart(Cue::Soundtrack),
            GameEvent::ThrustStarted => self.restart(Cue::Thrust),
            GameEvent::ThrustStopped => self.backend.apply(Cue::Thrust, CueAction::Pause),
            GameEvent::MissileFired { .. } => self.restart(Cue::Missile),
            GameEvent::Explosion { .. } => self.restart(Cue::Explosion),
            GameEvent::SessionReset { .. } => {
                self.stop(Cue::Thrust);
                self.stop(Cue::Soundtrack);
            }
            GameEvent::RockSpawned { .. } | GameEvent::LifeLost { .. } => {}
        }
    }

    pub fn handle_all<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) {
        for event in events {
            self.handle(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(Cue, CueAction)>,
    }

    impl AudioBackend for Recorder {
        fn apply(&mut self, cue: Cue, action: CueAction) {
            self.calls.push((cue, action));
        }
    }

    fn manager() -> AudioManager<Recorder> {
        let mut m = AudioManager::new(Recorder::default(), &Settings::default());
        m.backend.calls.clear();
        m
    }

    #[test]
    fn test_initial_volumes_pushed() {
        let m = AudioManager::new(Recorder::default(), &Settings::default());
        assert_eq!(m.backend().calls.len(), 4);
        assert!(m
            .backend()
            .calls
            .contains(&(Cue::Soundtrack, CueAction::SetVolume(0.75))));
        assert!(m
            .backend()
            .calls
            .contains(&(Cue::Missile, CueAction::SetVolume(0.3))));
    }

    #[test]
    fn test_thrust_cycle() {
        let mut m = manager();
        m.handle(&GameEvent::ThrustStarted);
        m.handle(&GameEvent::ThrustStopped);
        assert_eq!(
            m.backend().calls,
            vec![
                (Cue::Thrust, CueAction::Rewind),
                (Cue::Thrust, CueAction::Play),
                (Cue::Thrust, CueAction::Pause),
            ]
        );
    }

    #[test]
    fn test_reset_stops_ambient_audio() {
        let mut m = manager();
        m.handle_all(&[
            GameEvent::SessionReset { final_score: 3 },
            GameEvent::SessionStarted,
        ]);
        assert_eq!(
            m.backend().calls,
            vec![
                (Cue::Thrust, CueAction::Pause),
                (Cue::Thrust, CueAction::Rewind),
                (Cue::Soundtrack, CueAction::Pause),
                (Cue::Soundtrack, CueAction::Rewind),
                (Cue::Soundtrack, CueAction::Rewind),
                (Cue::Soundtrack, CueAction::Play),
            ]
        );
    }

    #[test]
    fn test_silent_events() {
        let mut m = manager();
        m.handle(&GameEvent::RockSpawned {
            pos: Vec2::ZERO,
            fallback: false,
        });
        m.handle(&GameEvent::LifeLost { lives: 2 });
        assert!(m.backend().calls.is_empty());
    }

    #[test]
    fn test_mute_zeroes_every_cue() {
        let mut m = manager();
        m.set_muted(true);
        assert!(m
            .backend()
            .calls
            .iter()
            .all(|(_, action)| *action == CueAction::SetVolume(0.0)));
        assert_eq!(m.effective_volume(Cue::Explosion), 0.0);
    }

    #[test]
    fn test_master_volume_scales_and_clamps() {
        let mut m = manager();
        m.set_master_volume(0.5);
        assert!((m.effective_volume(Cue::Thrust) - 0.25).abs() < 1e-6);
        m.set_master_volume(3.0);
        assert!((m.effective_volume(Cue::Thrust) - 0.5).abs() < 1e-6);
    }
}
