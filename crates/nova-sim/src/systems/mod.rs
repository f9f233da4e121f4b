//! Simulation systems, called by the engine in a fixed order each tick.

pub mod cleanup;
pub mod collision;
pub mod combat;
pub mod explosion;
pub mod handle_into;
pub mod missile_flight;
pub mod orbit;
pub mod ship_control;
pub mod shrink;
pub mod snapshot;
pub mod wander;
