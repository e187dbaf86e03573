//! Physical key to logical command bindings

use crate::sim::{Command, InputEvent};

/// Keys the default layout cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Other(u32),
}

/// Player one key layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: Vec<(Key, Command)>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            bindings: vec![
                (Key::Up, Command::Thrust),
                (Key::Left, Command::RotateLeft),
                (Key::Right, Command::RotateRight),
                (Key::Space, Command::Fire),
            ],
        }
    }
}

impl KeyMap {
    /// Rebind `command` to `key`, replacing its previous key
    pub fn bind(&mut self, key: Key, command: Command) {
        self.bindings.retain(|(k, c)| *k != key && *c != command);
        self.bindings.push((key, command));
    }

    pub fn command_for(&self, key: Key) -> Option<Command> {
        self.bindings
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, c)| *c)
    }

    /// Translate a key-down; unbound keys produce nothing
    pub fn key_down(&self, key: Key) -> Option<InputEvent> {
        self.command_for(key).map(InputEvent::Press)
    }

    pub fn key_up(&self, key: Key) -> Option<InputEvent> {
        self.command_for(key).map(InputEvent::Release)
    }
}
