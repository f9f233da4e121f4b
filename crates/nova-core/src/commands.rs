//! Player commands fed to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::ShipControl;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// A movement control was engaged (key down).
    ControlDown { control: ShipControl },
    /// A movement control was released (key up).
    ControlUp { control: ShipControl },
    /// Fire a single missile, or schedule a reload if the bay is empty.
    Fire,
    /// Fire every remaining round as a jittered barrage.
    FireBarrage,
    /// Stop the simulation; the frame loop exits.
    Quit,
}
