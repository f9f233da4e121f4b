//! Events emitted by the simulation for the frontend and for tests.

use serde::{Deserialize, Serialize};

use crate::enums::Kind;
use crate::types::Position;

/// Per-tick event feed, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A missile left the bay.
    MissileFired { tag: String },
    /// A missile's collider overlapped another entity.
    MissileHit {
        missile: String,
        victim: String,
        victim_kind: Kind,
        contact: Position,
    },
    /// An entity was detached from the scene.
    EntityDestroyed { name: String, kind: Kind },
    /// A shrink task was scheduled for a hit planet or station.
    ShrinkStarted { name: String },
    /// A particle effect instance began at the contact point.
    EffectStarted { tag: String, position: Position },
    /// A particle effect instance finished its ramp.
    EffectEnded { tag: String },
    /// The missile bay was refilled.
    BayReloaded { rounds: u8 },
}
