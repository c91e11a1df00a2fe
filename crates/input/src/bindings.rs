use crate::action::Action;
use mindpoint_common::Direction;
use std::collections::BTreeMap;

/// Default directional binding for a key name (DOM `KeyboardEvent.code` style).
pub fn key_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "KeyW" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "KeyS" | "s" | "S" => Some(Direction::Down),
        "ArrowLeft" | "KeyA" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "KeyD" | "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}

/// Key name to action table.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyBindings {
    map: BTreeMap<String, Action>,
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    pub fn bind(&mut self, key: impl Into<String>, action: Action) -> Option<Action> {
        self.map.insert(key.into(), action)
    }

    pub fn unbind(&mut self, key: &str) -> Option<Action> {
        self.map.remove(key)
    }

    pub fn action_for(&self, key: &str) -> Option<Action> {
        self.map.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for KeyBindings {
    /// Arrow keys and WASD for the four directions, `KeyR` for reset.
    fn default() -> Self {
        let mut b = Self::empty();
        for (arrow, letter, direction) in [
            ("ArrowUp", "KeyW", Direction::Up),
            ("ArrowDown", "KeyS", Direction::Down),
            ("ArrowLeft", "KeyA", Direction::Left),
            ("ArrowRight", "KeyD", Direction::Right),
        ] {
            b.bind(arrow, Action::Press(direction));
            b.bind(letter, Action::Press(direction));
        }
        b.bind("KeyR", Action::Reset);
        b
    }
}
