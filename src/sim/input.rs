//! Logical input commands and the press/release binding table
//!
//! Each command maps to an (on-press, on-release) pair of ship actions.
//! `InputState` remembers which commands are held so that a release without a
//! matching press (or a repeated press) is ignored; rotation therefore can
//! never leave residual angular velocity behind.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Thrust,
    RotateLeft,
    RotateRight,
    Fire,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::Thrust,
        Command::RotateLeft,
        Command::RotateRight,
        Command::Fire,
    ];

    #[inline]
    fn index(self) -> usize {
        match self {
            Command::Thrust => 0,
            Command::RotateLeft => 1,
            Command::RotateRight => 2,
            Command::Fire => 3,
        }
    }

    /// Actions run when the command is pressed and released
    pub fn binding(self) -> Binding {
        use Action::*;
        match self {
            Command::Thrust => Binding::new(Some(ThrustersOn), Some(ThrustersOff)),
            Command::RotateLeft => Binding::new(Some(DecrementAngleVel), Some(IncrementAngleVel)),
            Command::RotateRight => Binding::new(Some(IncrementAngleVel), Some(DecrementAngleVel)),
            Command::Fire => Binding::new(Some(Shoot), None),
        }
    }
}

/// Ship operation triggered by a command edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    ThrustersOn,
    ThrustersOff,
    IncrementAngleVel,
    DecrementAngleVel,
    Shoot,
}

/// (on-press, on-release) pair; `None` halves are no-ops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub on_press: Option<Action>,
    pub on_release: Option<Action>,
}

impl Binding {
    const fn new(on_press: Option<Action>, on_release: Option<Action>) -> Self {
        Self {
            on_press,
            on_release,
        }
    }
}

/// Raw input delivered by the driver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    Press(Command),
    Release(Command),
    /// Pointer click in canvas coordinates (dismisses the splash screen)
    Click(Vec2),
}

/// Held state per command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    held: [bool; 4],
}

impl InputState {
    #[inline]
    pub fn is_held(&self, command: Command) -> bool {
        self.held[command.index()]
    }

    /// Record a press. Returns the action to run, or `None` if already held.
    pub fn press(&mut self, command: Command) -> Option<Action> {
        let held = &mut self.held[command.index()];
        if *held {
            return None;
        }
        *held = true;
        command.binding().on_press
    }

    /// Record a release. Returns the action to run, or `None` if not held.
    pub fn release(&mut self, command: Command) -> Option<Action> {
        let held = &mut self.held[command.index()];
        if !*held {
            return None;
        }
        *held = false;
        command.binding().on_release
    }

    /// Forget every held command without running release actions
    pub fn clear(&mut self) {
        self.held = [false; 4];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release_pairs() {
        let mut input = InputState::default();
        assert_eq!(input.press(Command::RotateLeft), Some(Action::DecrementAngleVel));
        assert!(input.is_held(Command::RotateLeft));
        assert_eq!(input.release(Command::RotateLeft), Some(Action::IncrementAngleVel));
        assert!(!input.is_held(Command::RotateLeft));
    }

    #[test]
    fn test_repeat_press_and_stray_release_ignored() {
        let mut input = InputState::default();
        assert_eq!(input.release(Command::RotateRight), None);
        assert_eq!(input.press(Command::RotateRight), Some(Action::IncrementAngleVel));
        assert_eq!(input.press(Command::RotateRight), None);
        assert_eq!(input.release(Command::RotateRight), Some(Action::DecrementAngleVel));
        assert_eq!(input.release(Command::RotateRight), None);
    }

    #[test]
    fn test_fire_release_is_unbound() {
        let mut input = InputState::default();
        assert_eq!(input.press(Command::Fire), Some(Action::Shoot));
        assert_eq!(input.release(Command::Fire), None);
        assert!(!input.is_held(Command::Fire));
    }

    #[test]
    fn test_clear() {
        let mut input = InputState::default();
        for command in Command::ALL {
            input.press(command);
        }
        input.clear();
        assert!(Command::ALL.iter().all(|c| !input.is_held(*c)));
        assert_eq!(input.release(Command::Thrust), None);
    }
}
