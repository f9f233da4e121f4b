//! Key-binding table mapping key names to player commands.
//!
//! The engine never reads the keyboard; the frame loop subscribes to
//! key-down/key-up events by name and routes them through this table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::commands::PlayerCommand;
use crate::enums::ShipControl;

/// Action bound to a key name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAction {
    /// Held control: down engages, up releases.
    Control(ShipControl),
    /// Fires once per key-down.
    Fire,
    FireBarrage,
    Quit,
}

/// Key name → action table.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<String, KeyAction>,
}

impl Default for KeyMap {
    /// Space thrusts forward, WASD turns, Q/E strafe, F fires,
    /// Shift+F fires a barrage, Escape quits.
    fn default() -> Self {
        let mut map = KeyMap {
            bindings: HashMap::new(),
        };
        map.bind("space", KeyAction::Control(ShipControl::ThrustForward));
        map.bind("a", KeyAction::Control(ShipControl::TurnLeft));
        map.bind("d", KeyAction::Control(ShipControl::TurnRight));
        map.bind("w", KeyAction::Control(ShipControl::PitchUp));
        map.bind("s", KeyAction::Control(ShipControl::PitchDown));
        map.bind("q", KeyAction::Control(ShipControl::ThrustLeft));
        map.bind("e", KeyAction::Control(ShipControl::ThrustRight));
        map.bind("f", KeyAction::Fire);
        map.bind("shift-f", KeyAction::FireBarrage);
        map.bind("escape", KeyAction::Quit);
        map
    }
}

impl KeyMap {
    pub fn bind(&mut self, key: &str, action: KeyAction) {
        self.bindings.insert(key.to_string(), action);
    }

    pub fn action_for(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }

    /// Translate a key edge into a command, if the key is bound.
    /// One-shot actions (fire, quit) only trigger on the down edge.
    pub fn command_for(&self, key: &str, pressed: bool) -> Option<PlayerCommand> {
        match self.action_for(key)? {
            KeyAction::Control(control) => Some(if pressed {
                PlayerCommand::ControlDown { control }
            } else {
                PlayerCommand::ControlUp { control }
            }),
            KeyAction::Fire if pressed => Some(PlayerCommand::Fire),
            KeyAction::FireBarrage if pressed => Some(PlayerCommand::FireBarrage),
            KeyAction::Quit if pressed => Some(PlayerCommand::Quit),
            _ => None,
        }
    }
}
