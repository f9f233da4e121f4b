//! Scene snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, Kind};
use crate::events::SimEvent;
use crate::types::{Position, SimTime};

/// Complete scene state built after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Every live entity, sorted by name.
    pub entities: Vec<EntityView>,
    pub ship: ShipView,
    /// Tags of missiles currently tracked by the registry.
    pub missiles: Vec<String>,
    /// Tags of explosion effects currently running.
    pub explosions: Vec<String>,
    /// Events emitted since the previous snapshot.
    pub events: Vec<SimEvent>,
    pub diagnostics: Diagnostics,
}

/// One placed entity as the renderer would see it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityView {
    pub name: String,
    pub kind: Kind,
    pub position: Position,
    pub heading: f64,
    pub pitch: f64,
    pub scale: f64,
}

/// Player ship status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipView {
    pub position: Position,
    pub heading: f64,
    pub pitch: f64,
    pub missile_bay: u8,
    /// Whether a reload task is pending.
    pub reload_pending: bool,
}

/// Counters for conditions that are tolerated but must stay observable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Finishing a missile interval whose tag was already removed
    /// (multi-contact double-processing).
    pub interval_finish_misses: u64,
    /// Detaching an entity that was already removed from the scene.
    pub detach_misses: u64,
}
