//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Entity category, carried as an explicit component.
///
/// Collision dispatch matches on this tag; names are identity only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    /// The player's ship.
    Ship,
    /// A fired missile with a bounded flight interval.
    Missile,
    /// A static formation drone.
    Drone,
    /// A defender orbiting a central object along a path function.
    Orbiter,
    /// A defender looping a fixed multi-leg route.
    Wanderer,
    Planet,
    SpaceStation,
    /// The inward-facing world boundary.
    Universe,
}

/// Top-level engine state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    /// Quit requested; the frame loop exits after the current tick.
    ShuttingDown,
}

/// Trajectory style for orbiting defenders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbitStyle {
    /// Baseball-seam curve around the central object.
    Seam,
    /// Jump to a fresh random direction every few seconds.
    Cloud,
}

/// A boolean-gated ship movement control.
///
/// Key-down registers the matching per-tick task; key-up removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipControl {
    ThrustForward,
    ThrustLeft,
    ThrustRight,
    TurnLeft,
    TurnRight,
    PitchUp,
    PitchDown,
}
